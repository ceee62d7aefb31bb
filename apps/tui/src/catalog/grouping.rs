/// One display bucket of the grouped module view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    /// Indices into the source collection, in filtered order.
    pub indices: Vec<usize>,
}

impl CategoryGroup {
    pub fn count(&self) -> usize {
        self.indices.len()
    }
}

/// Partitions the filtered collection into category buckets. Bucket order is
/// first-occurrence order in the filtered sequence, not alphabetical, and
/// concatenating the buckets reproduces the filtered sequence exactly.
pub fn group_by_category<T>(
    items: &[T],
    filtered: &[usize],
    category: impl Fn(&T) -> &str,
) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for &index in filtered {
        let name = category(&items[index]);
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.indices.push(index),
            None => groups.push(CategoryGroup {
                name: name.to_string(),
                indices: vec![index],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str);

    #[test]
    fn buckets_follow_first_seen_order_with_counts() {
        let items = [Item("Encoder"), Item("Predictor"), Item("Encoder"), Item("Filter")];
        let filtered = [0, 1, 2, 3];
        let groups = group_by_category(&items, &filtered, |item| item.0);

        let names: Vec<&str> = groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["Encoder", "Predictor", "Filter"]);
        assert_eq!(groups[0].count(), 2);
        assert_eq!(groups[1].count(), 1);
    }

    #[test]
    fn concatenated_buckets_reproduce_the_filtered_sequence() {
        let items = [Item("B"), Item("A"), Item("B"), Item("C"), Item("A")];
        let filtered = [4, 0, 2, 3];
        let groups = group_by_category(&items, &filtered, |item| item.0);

        let mut flattened: Vec<usize> = Vec::new();
        for group in &groups {
            flattened.extend(&group.indices);
        }
        flattened.sort_unstable();
        let mut expected = filtered.to_vec();
        expected.sort_unstable();
        assert_eq!(flattened, expected);

        // Within a bucket the filtered relative order is preserved.
        assert_eq!(groups[1].indices, vec![0, 2]);
    }

    #[test]
    fn empty_filtered_sequence_yields_no_buckets() {
        let items = [Item("Encoder")];
        let groups = group_by_category(&items, &[], |item| item.0);
        assert!(groups.is_empty());
    }
}
