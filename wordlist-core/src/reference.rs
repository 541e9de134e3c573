use crate::ScriptureReference;

/// Append `reference` to a word's location list and report which occurrence
/// within that verse it is (1-based).
///
/// The occurrence index is one more than the number of locations already in
/// the list that equal `reference`, so the K-th time a word shows up in a verse
/// pairs with the K-th match of that word in the verse text. `None` starts a
/// fresh list for a word seen for the first time.
pub fn record_occurrence(
    locations: Option<Vec<ScriptureReference>>,
    reference: ScriptureReference,
) -> (Vec<ScriptureReference>, usize) {
    let mut locations = locations.unwrap_or_default();
    let prior = locations.iter().filter(|r| **r == reference).count();
    locations.push(reference);
    (locations, prior + 1)
}
