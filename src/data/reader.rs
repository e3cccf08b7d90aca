use std::path::Path;

use anyhow::{Context, Result};

use super::model::Sample;

// ---------------------------------------------------------------------------
// Sweep file reader
// ---------------------------------------------------------------------------

/// Read a magnetization sweep file into samples, in file order.
///
/// Layout: one sample per line, `temperature,magnetization`, no header row.
/// Fields may carry surrounding whitespace.  Blank lines are skipped; any
/// other line that does not parse as exactly two floats aborts the whole
/// file — partial results are never returned.
pub fn read_samples(path: &Path) -> Result<Vec<Sample>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut samples = Vec::new();
    for (row_no, result) in reader.deserialize::<Sample>().enumerate() {
        let sample =
            result.with_context(|| format!("{}: row {row_no}", path.display()))?;
        samples.push(sample);
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn sweep_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_samples_in_file_order() {
        let file = sweep_file("2.0,0.9\n1.0,0.5\n1.0,0.7\n");
        let samples = read_samples(file.path()).unwrap();
        assert_eq!(
            samples,
            vec![
                Sample { temperature: 2.0, magnetization: 0.9 },
                Sample { temperature: 1.0, magnetization: 0.5 },
                Sample { temperature: 1.0, magnetization: 0.7 },
            ]
        );
    }

    #[test]
    fn tolerates_whitespace_around_fields() {
        // The sweep writer emits "temp, mag" with a space after the comma.
        let file = sweep_file("2.2, 0.45\n");
        let samples = read_samples(file.path()).unwrap();
        assert_eq!(samples[0].temperature, 2.2);
        assert_eq!(samples[0].magnetization, 0.45);
    }

    #[test]
    fn skips_blank_lines() {
        let file = sweep_file("1.0,0.5\n\n2.0,0.6\n");
        let samples = read_samples(file.path()).unwrap();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let file = sweep_file("abc,def\n");
        assert!(read_samples(file.path()).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        let file = sweep_file("1.0\n");
        assert!(read_samples(file.path()).is_err());
    }

    #[test]
    fn fails_fast_on_a_bad_row_mid_file() {
        let file = sweep_file("1.0,0.5\n1.0,oops\n1.0,0.7\n");
        assert!(read_samples(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_samples(Path::new("no/such/sweep.txt")).is_err());
    }
}
