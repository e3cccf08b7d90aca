use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::full_palette::GREY;

use crate::data::model::AggregatedPoint;

/// Critical temperature of the 2D Ising model, marked on every chart.
const CRITICAL_TEMP: f64 = 2.27;

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// Chart path for an input file: same location and stem, `.png` extension.
pub fn output_path(input: &Path) -> PathBuf {
    input.with_extension("png")
}

/// Legend label for a sweep file.  Sweeps are named
/// `<width>_<tmax>_<subtimes>_...txt`; the leading lattice width becomes
/// "`<width>` Magnetization".  Other file names fall back to the bare stem.
pub fn series_label(input: &Path) -> String {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("data");
    match stem.split('_').next().and_then(|w| w.parse::<u32>().ok()) {
        Some(width) => format!("{width} Magnetization"),
        None => stem.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Error-bar chart
// ---------------------------------------------------------------------------

/// Render an error-bar chart: a circle at each `(temperature, central)` with
/// a vertical bar spanning `low..high`, plus a dashed rule at the critical
/// temperature.  The aggregator does not guarantee any point order, so the
/// points are sorted by temperature here before drawing.
pub fn render(points: &[AggregatedPoint], label: &str, output: &Path) -> Result<()> {
    if points.is_empty() {
        bail!("no data to plot");
    }
    log::info!("Building {}", output.display());

    let mut points: Vec<AggregatedPoint> = points.to_vec();
    points.sort_by(|a, b| a.temperature.total_cmp(&b.temperature));

    let x_min = points[0].temperature;
    let x_max = points[points.len() - 1].temperature;
    let pad = ((x_max - x_min) * 0.05).max(0.05);

    let root = BitMapBackend::new(output, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean Absolute Magnetization vs Temperature", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Temperature")
        .y_desc("Magnetization")
        .draw()?;

    chart
        .draw_series(points.iter().map(|p| {
            ErrorBar::new_vertical(p.temperature, p.low, p.central, p.high, BLUE.filled(), 10)
        }))?
        .label(label)
        .legend(|(x, y)| Circle::new((x, y), 4, BLUE.filled()));

    chart.draw_series(
        points
            .iter()
            .map(|p| Circle::new((p.temperature, p.central), 4, BLUE.filled())),
    )?;

    chart
        .draw_series(DashedLineSeries::new(
            [(CRITICAL_TEMP, 0.0), (CRITICAL_TEMP, 1.0)],
            6,
            4,
            GREY.stroke_width(1),
        ))?
        .label(format!("Critical Temp {CRITICAL_TEMP}"))
        .legend(|(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], &GREY));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_swaps_extension_for_png() {
        assert_eq!(
            output_path(Path::new("runs/128_10000_10.txt")),
            PathBuf::from("runs/128_10000_10.png")
        );
    }

    #[test]
    fn series_label_uses_leading_lattice_width() {
        assert_eq!(
            series_label(Path::new("128_10000_10_2_2.6_20_5.txt")),
            "128 Magnetization"
        );
    }

    #[test]
    fn series_label_falls_back_to_stem() {
        assert_eq!(series_label(Path::new("sweep.txt")), "sweep");
    }

    #[test]
    fn rendering_nothing_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.png");
        assert!(render(&[], "empty", &out).is_err());
        assert!(!out.exists());
    }
}
