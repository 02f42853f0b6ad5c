//! Score computation: found-skill count as a bounded percentage.

/// Converts a found-skill count into an integer percentage in [0, 100].
///
/// An empty catalog scores 0 by definition. The clamp at 100 is required by
/// the contract even though `found <= catalog_size` makes it unreachable in
/// normal use.
pub fn compute_score(found: usize, catalog_size: usize) -> u8 {
    if catalog_size == 0 {
        return 0;
    }
    let pct = found * 100 / catalog_size;
    pct.min(100) as u8
}
