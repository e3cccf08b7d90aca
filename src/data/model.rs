use std::cmp::Ordering;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Sample – one parsed input line
// ---------------------------------------------------------------------------

/// A single (temperature, magnetization) pair read from a sweep file.
/// Deserialized positionally by the csv reader (sweep files have no header).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sample {
    pub temperature: f64,
    pub magnetization: f64,
}

// ---------------------------------------------------------------------------
// TempKey – f64 usable as a BTreeMap key
// ---------------------------------------------------------------------------

/// Temperature as a grouping key.  Grouping uses exact floating-point
/// equality, no binning; `total_cmp` supplies the `Ord` a `BTreeMap` needs
/// (NaN sorts after every number, -0.0 before 0.0).
#[derive(Debug, Clone, Copy)]
pub struct TempKey(pub f64);

// -- Manual Eq/Ord so TempKey can key a BTreeMap --

impl PartialEq for TempKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TempKey {}

impl PartialOrd for TempKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TempKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for TempKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

// ---------------------------------------------------------------------------
// AggregatedPoint – one plotted point per distinct temperature
// ---------------------------------------------------------------------------

/// Summary of all magnetizations observed at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregatedPoint {
    pub temperature: f64,
    /// Point estimate: median of the working subset plus the 1.0 sentinel
    /// (see [`crate::data::aggregate`]).  Can fall outside `[low, high]`.
    pub central: f64,
    /// Minimum of the working subset (sentinel excluded).
    pub low: f64,
    /// Maximum of the working subset (sentinel excluded).
    pub high: f64,
}
