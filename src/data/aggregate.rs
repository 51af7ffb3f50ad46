use std::collections::BTreeMap;

use log::{debug, info};

use crate::error::{G25Error, Result};

use super::group::infer_group;
use super::model::{Aggregate, AverageMode, GroupCounts, Sample, DIMS};
use super::validate::ensure_dims;

// ---------------------------------------------------------------------------
// Mean
// ---------------------------------------------------------------------------

/// Component-wise arithmetic mean of equal-length vectors.
///
/// Components are summed in input order and divided once by the count, so the
/// result is reproducible for a fixed input order.
pub fn mean<V: AsRef<[f64]>>(vectors: &[V]) -> Result<Vec<f64>> {
    if vectors.is_empty() {
        return Err(G25Error::EmptyInput);
    }

    let mut sums = vec![0.0_f64; DIMS];
    for v in vectors {
        let v = v.as_ref();
        ensure_dims(v)?;
        for (sum, x) in sums.iter_mut().zip(v) {
            *sum += x;
        }
    }

    let n = vectors.len() as f64;
    Ok(sums.into_iter().map(|s| s / n).collect())
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Average every sample with equal weight, in the given (file) order.
pub fn average_simple(samples: &[Sample]) -> Result<Vec<f64>> {
    let vectors: Vec<&[f64]> = samples.iter().map(|s| s.vector.as_slice()).collect();
    mean(&vectors)
}

/// Average per group, then average the group means with equal weight.
///
/// Groups are visited in ascending label order (`BTreeMap`), which fixes the
/// summation order of the second level regardless of file order. Returns the
/// member count of every group alongside the vector.
pub fn average_grouped(samples: &[Sample]) -> Result<(Vec<f64>, GroupCounts)> {
    let mut buckets: BTreeMap<&str, Vec<&[f64]>> = BTreeMap::new();
    for sample in samples {
        buckets
            .entry(infer_group(&sample.name))
            .or_default()
            .push(sample.vector.as_slice());
    }

    let mut counts = GroupCounts::new();
    let mut group_means = Vec::with_capacity(buckets.len());
    for (label, members) in &buckets {
        debug!("group {label:?}: {} member(s)", members.len());
        counts.insert(label.to_string(), members.len());
        group_means.push(mean(members)?);
    }

    let vector = mean(&group_means)?;
    Ok((vector, counts))
}

/// Run the chosen averaging mode and package the result.
pub fn aggregate(samples: &[Sample], mode: AverageMode) -> Result<Aggregate> {
    let (vector, group_counts) = match mode {
        AverageMode::Simple => (average_simple(samples)?, None),
        AverageMode::Grouped => {
            let (vector, counts) = average_grouped(samples)?;
            info!("averaged {} group(s) with equal weight", counts.len());
            (vector, Some(counts))
        }
    };

    Ok(Aggregate {
        mode,
        sample_count: samples.len(),
        group_counts,
        vector,
    })
}
