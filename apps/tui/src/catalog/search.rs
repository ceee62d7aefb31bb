use crate::assets::models::{CompositionRecord, DatasetRecord, ModuleRecord};

/// Searchable entities declare their category and the exact set of strings
/// the free-text query is matched against. Absent optional collections
/// simply contribute nothing, so matching never probes for field existence.
pub trait Searchable {
    fn category(&self) -> &str;
    fn haystacks(&self) -> Vec<&str>;
}

impl Searchable for ModuleRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields.extend(self.features.iter().map(String::as_str));
        fields
    }
}

impl Searchable for CompositionRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields.extend(self.used_in.iter().map(String::as_str));
        for capability in &self.capabilities {
            fields.push(capability.name.as_str());
            fields.push(capability.description.as_str());
        }
        fields
    }
}

impl Searchable for DatasetRecord {
    // Datasets carry no category facet.
    fn category(&self) -> &str {
        ""
    }

    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// Stable filter over the collection: category equality first (the sentinel
/// passes everything), then the case-insensitive substring query against the
/// entity's declared haystacks. Returns indices into `items` in input order.
pub fn filter_indices<T: Searchable>(
    items: &[T],
    query: &str,
    category: &str,
    sentinel: &str,
) -> Vec<usize> {
    let needle = query.trim().to_lowercase();

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| category == sentinel || item.category() == category)
        .filter(|(_, item)| {
            needle.is_empty()
                || item
                    .haystacks()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::facets::ALL_SENTINEL;

    fn module(id: &str, name: &str, category: &str, description: &str) -> ModuleRecord {
        serde_json::from_str(&format!(
            r#"{{"id": "{id}", "name": "{name}", "category": "{category}", "description": "{description}"}}"#
        ))
        .expect("valid module literal")
    }

    fn sample_modules() -> Vec<ModuleRecord> {
        let mut rle = module("m1", "RLE", "Encoder", "run length");
        rle.tags = vec!["lossless".to_string()];
        rle.features = vec!["fast".to_string()];
        vec![
            rle,
            module("m2", "Lorenzo", "Predictor", "neighborhood predictor"),
            module("m3", "Huffman", "Encoder", "entropy coder"),
        ]
    }

    #[test]
    fn query_matches_name_description_tags_and_features() {
        let modules = sample_modules();
        assert_eq!(filter_indices(&modules, "run", ALL_SENTINEL, ALL_SENTINEL), vec![0]);
        assert_eq!(filter_indices(&modules, "LOSSLESS", ALL_SENTINEL, ALL_SENTINEL), vec![0]);
        assert_eq!(filter_indices(&modules, "fast", ALL_SENTINEL, ALL_SENTINEL), vec![0]);
        assert_eq!(filter_indices(&modules, "zzz", ALL_SENTINEL, ALL_SENTINEL), Vec::<usize>::new());
    }

    #[test]
    fn category_filter_is_case_sensitive_equality() {
        let modules = sample_modules();
        assert_eq!(filter_indices(&modules, "", "Encoder", ALL_SENTINEL), vec![0, 2]);
        assert_eq!(filter_indices(&modules, "", "Filter", ALL_SENTINEL), Vec::<usize>::new());
        assert_eq!(filter_indices(&modules, "", "encoder", ALL_SENTINEL), Vec::<usize>::new());
    }

    #[test]
    fn both_filters_apply_conjunctively_in_input_order() {
        let modules = sample_modules();
        assert_eq!(filter_indices(&modules, "entropy", "Encoder", ALL_SENTINEL), vec![2]);
        assert_eq!(filter_indices(&modules, "entropy", "Predictor", ALL_SENTINEL), Vec::<usize>::new());
        // No active filter: identity, original order.
        assert_eq!(filter_indices(&modules, "", ALL_SENTINEL, ALL_SENTINEL), vec![0, 1, 2]);
    }

    #[test]
    fn every_hit_satisfies_the_substring_predicate() {
        let modules = sample_modules();
        let query = "e";
        for index in filter_indices(&modules, query, ALL_SENTINEL, ALL_SENTINEL) {
            assert!(modules[index]
                .haystacks()
                .iter()
                .any(|field| field.to_lowercase().contains(query)));
        }
    }

    #[test]
    fn composition_query_reaches_used_in_and_capabilities() {
        let json = r#"[{
            "id": "c1",
            "name": "Pipeline",
            "category": "GPU",
            "usedIn": ["ExaSky"],
            "capabilities": [{"name": "throughput", "description": "saturates NVLink"}]
        }]"#;
        let compositions: Vec<CompositionRecord> =
            serde_json::from_str(json).expect("valid composition list");
        assert_eq!(filter_indices(&compositions, "exasky", ALL_SENTINEL, ALL_SENTINEL), vec![0]);
        assert_eq!(filter_indices(&compositions, "nvlink", ALL_SENTINEL, ALL_SENTINEL), vec![0]);
        assert_eq!(filter_indices(&compositions, "absent", ALL_SENTINEL, ALL_SENTINEL), Vec::<usize>::new());
    }

    #[test]
    fn entities_without_optional_collections_are_matchable() {
        let datasets: Vec<DatasetRecord> =
            serde_json::from_str(r#"[{"name": "NYX"}]"#).expect("valid dataset list");
        assert_eq!(filter_indices(&datasets, "nyx", ALL_SENTINEL, ALL_SENTINEL), vec![0]);
        assert_eq!(filter_indices(&datasets, "climate", ALL_SENTINEL, ALL_SENTINEL), Vec::<usize>::new());
    }
}
