use std::collections::BTreeSet;

/// Reserved facet value meaning "no filter applied".
pub const ALL_SENTINEL: &str = "All";

/// Distinct facet values observed in the (unfiltered) collection, sorted
/// case-sensitively, with the sentinel prepended. The sentinel is present
/// even for an empty collection.
pub fn facet_values<T>(items: &[T], field: impl Fn(&T) -> &str, sentinel: &str) -> Vec<String> {
    let distinct: BTreeSet<&str> = items.iter().map(field).collect();

    let mut facets = Vec::with_capacity(distinct.len() + 1);
    facets.push(sentinel.to_string());
    facets.extend(distinct.into_iter().map(str::to_string));
    facets
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    #[test]
    fn sentinel_is_first_and_values_are_sorted_distinct() {
        let items = [Item("Encoder"), Item("Predictor"), Item("Encoder"), Item("Filter")];
        let facets = facet_values(&items, |item| item.0, ALL_SENTINEL);
        assert_eq!(facets, vec!["All", "Encoder", "Filter", "Predictor"]);
    }

    #[test]
    fn sort_is_case_sensitive_on_the_raw_string() {
        let items = [Item("encoder"), Item("Encoder")];
        let facets = facet_values(&items, |item| item.0, ALL_SENTINEL);
        assert_eq!(facets, vec!["All", "Encoder", "encoder"]);
    }

    #[test]
    fn empty_collection_still_yields_the_sentinel() {
        let items: [Item; 0] = [];
        let facets = facet_values(&items, |item| item.0, "all");
        assert_eq!(facets, vec!["all"]);
    }
}
