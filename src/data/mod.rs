//! Data layer: core types, reading, and aggregation.
//!
//! Architecture:
//! ```text
//!  <width>_… .txt
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  reader   │  parse lines → Vec<Sample>
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────┐
//!   │  aggregate   │  group by temperature → Vec<AggregatedPoint>
//!   └─────────────┘
//! ```

pub mod aggregate;
pub mod model;
pub mod reader;
