//! Selectable question counts

/// Counts to offer for a pool of `total` questions
///
/// Every threshold strictly below `total`, ascending and deduplicated, followed
/// by `total` itself as the "all" choice. A pool no larger than the smallest
/// threshold offers only `total`; an empty pool offers nothing.
pub fn available_counts(total: usize, thresholds: &[usize]) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }

    let mut counts: Vec<usize> = thresholds
        .iter()
        .copied()
        .filter(|&t| t > 0 && t < total)
        .collect();
    counts.sort_unstable();
    counts.dedup();
    counts.push(total);
    counts
}
