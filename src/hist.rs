//! Shared-bin histogram support: linear bin edges and per-series counting.

/// `count` linearly spaced points from `start` to `stop`, both inclusive.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        // pin the endpoint so the span is inclusive despite
                        // accumulated floating-point error
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Midpoints of consecutive edges, used as x coordinates when plotting.
pub fn centers(edges: &[f64]) -> Vec<f64> {
    edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// Occupancy of the intervals between consecutive edges. Intervals are
/// half-open `[e[i], e[i+1])` except the last, which also includes its upper
/// edge. Values outside the edge span are dropped.
pub fn count_into_bins(samples: &[f64], edges: &[f64]) -> Vec<u64> {
    let bins = edges.len().saturating_sub(1);
    let mut counts = vec![0u64; bins];
    if bins == 0 {
        return counts;
    }
    let lo = edges[0];
    let hi = edges[bins];
    let span = hi - lo;
    for &v in samples {
        if v < lo || v > hi {
            continue;
        }
        // edges are uniform, so the bin index is a direct linear map
        let idx = if span == 0.0 {
            0
        } else {
            (((v - lo) / span) * bins as f64) as usize
        };
        counts[idx.min(bins - 1)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_span_the_union_of_both_series() {
        // mutex=[10,20,30], sem=[5,15,25]: edges run 5..=30
        let edges = linspace(5.0, 30.0, 100);
        assert_eq!(edges.len(), 100);
        assert_eq!(edges[0], 5.0);
        assert_eq!(edges[99], 30.0);
        for w in edges.windows(2) {
            assert!(w[1] > w[0], "edges must be strictly increasing");
        }
    }

    #[test]
    fn linspace_is_idempotent() {
        assert_eq!(linspace(5.0, 30.0, 100), linspace(5.0, 30.0, 100));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn centers_are_midpoints() {
        assert_eq!(centers(&[0.0, 2.0, 4.0]), vec![1.0, 3.0]);
    }

    #[test]
    fn every_in_range_sample_is_counted_once() {
        let edges = linspace(5.0, 30.0, 100);
        let mutex = [10.0, 20.0, 30.0];
        let sem = [5.0, 15.0, 25.0];
        let mutex_counts = count_into_bins(&mutex, &edges);
        let sem_counts = count_into_bins(&sem, &edges);
        assert_eq!(mutex_counts.len(), 99);
        assert_eq!(mutex_counts.iter().sum::<u64>(), 3);
        assert_eq!(sem_counts.iter().sum::<u64>(), 3);
    }

    #[test]
    fn upper_edge_lands_in_the_last_bin() {
        let edges = linspace(0.0, 10.0, 11);
        let counts = count_into_bins(&[10.0], &edges);
        assert_eq!(counts[9], 1);
    }

    #[test]
    fn out_of_span_samples_are_dropped() {
        let edges = linspace(0.0, 10.0, 11);
        let counts = count_into_bins(&[-1.0, 11.0], &edges);
        assert_eq!(counts.iter().sum::<u64>(), 0);
    }

    #[test]
    fn zero_width_span_collects_everything_in_one_bin() {
        let edges = vec![7.0, 7.0];
        let counts = count_into_bins(&[7.0, 7.0, 7.0], &edges);
        assert_eq!(counts, vec![3]);
    }
}
