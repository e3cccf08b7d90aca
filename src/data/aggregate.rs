use std::collections::BTreeMap;

use super::model::{AggregatedPoint, Sample, TempKey};

// ---------------------------------------------------------------------------
// Per-temperature aggregation
// ---------------------------------------------------------------------------

/// Reduce a sample sequence to one point per distinct temperature.
///
/// Magnetizations are grouped by exact temperature and sorted ascending.
/// With `discard_bottom` only the upper half survives — `sorted[n/2..]`, so
/// the middle element is kept for odd n and a singleton keeps its one value.
/// Without it the whole group is used.
///
/// The central value is the median of the retained values with one extra
/// sentinel value `1.0` appended (even count averages the two middle values).
/// `low`/`high` are the retained minimum and maximum, sentinel excluded, so
/// `central` can land outside `[low, high]` for small groups far from 1.0.
/// That asymmetry is part of the contract; downstream must not "repair" it.
///
/// Points come out in ascending temperature order as a side effect of the
/// keying, but callers needing temperature order should sort themselves.
pub fn aggregate(samples: &[Sample], discard_bottom: bool) -> Vec<AggregatedPoint> {
    let mut groups: BTreeMap<TempKey, Vec<f64>> = BTreeMap::new();
    for sample in samples {
        groups
            .entry(TempKey(sample.temperature))
            .or_default()
            .push(sample.magnetization);
    }

    groups
        .into_iter()
        .map(|(TempKey(temperature), mut mags)| {
            mags.sort_by(f64::total_cmp);
            let subset = if discard_bottom {
                &mags[mags.len() / 2..]
            } else {
                &mags[..]
            };
            // Groups are built from existing samples, so this cannot trip.
            assert!(!subset.is_empty());

            AggregatedPoint {
                temperature,
                central: median_with_sentinel(subset),
                low: subset[0],
                high: subset[subset.len() - 1],
            }
        })
        .collect()
}

/// Standard median of `values` with one synthetic `1.0` appended.
fn median_with_sentinel(values: &[f64]) -> f64 {
    let mut padded = Vec::with_capacity(values.len() + 1);
    padded.extend_from_slice(values);
    padded.push(1.0);
    padded.sort_by(f64::total_cmp);

    let n = padded.len();
    if n % 2 == 1 {
        padded[n / 2]
    } else {
        (padded[n / 2 - 1] + padded[n / 2]) / 2.0
    }
}
