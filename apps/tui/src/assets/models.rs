use serde::Deserialize;

/// A reference paper attached to a module or composition. Pure display data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferencePaper {
    pub title: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub doi: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A compression module: one algorithmic building block in the catalog.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub papers: Vec<ReferencePaper>,
}

impl ModuleRecord {
    /// Identity key: the id when present, the name otherwise.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}

/// One stage of a composition pipeline, optionally backed by a module.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStage {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub module_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// A named capability of a composition (e.g. error-bounded modes).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capability {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A composition: an ordered pipeline of stages forming a full compressor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub compression_type: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stages: Vec<PipelineStage>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    #[serde(default)]
    pub used_in: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub papers: Vec<ReferencePaper>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CompositionRecord {
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}

/// A community-contributed benchmark dataset.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl DatasetRecord {
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.name
        } else {
            &self.id
        }
    }
}

/// A curated SDRBench benchmark dataset. Opaque display data: the embedded
/// list ships with the binary and may be replaced wholesale by a fetched
/// override.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDataset {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub links: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_deserializes_with_all_fields() {
        let json = r#"{
            "id": "m1",
            "name": "RLE",
            "category": "Encoder",
            "description": "run length",
            "tags": ["lossless"],
            "features": ["fast"],
            "papers": [{"title": "A paper", "year": 1999}]
        }"#;
        let module: ModuleRecord = serde_json::from_str(json).expect("valid module");
        assert_eq!(module.key(), "m1");
        assert_eq!(module.category, "Encoder");
        assert_eq!(module.features, vec!["fast"]);
        assert_eq!(module.papers[0].year, Some(1999));
        assert!(module.papers[0].doi.is_none());
    }

    #[test]
    fn missing_optional_collections_deserialize_empty() {
        let module: ModuleRecord =
            serde_json::from_str(r#"{"name": "Huffman"}"#).expect("minimal module");
        assert!(module.tags.is_empty());
        assert!(module.features.is_empty());
        assert!(module.papers.is_empty());
        // No id: the name becomes the key.
        assert_eq!(module.key(), "Huffman");
    }

    #[test]
    fn composition_uses_camel_case_field_names() {
        let json = r#"{
            "id": "c1",
            "name": "SZ3-style",
            "category": "CPU",
            "compressionType": "Lossy",
            "stages": [
                {"name": "Lorenzo", "moduleId": "lorenzo", "optional": false},
                {"name": "Huffman", "moduleId": "huffman", "optional": true, "note": "stage note"}
            ],
            "usedIn": ["HACC"],
            "capabilities": [{"name": "error bound", "description": "absolute"}]
        }"#;
        let composition: CompositionRecord = serde_json::from_str(json).expect("valid composition");
        assert_eq!(composition.compression_type.as_deref(), Some("Lossy"));
        assert_eq!(composition.stages[0].module_id.as_deref(), Some("lorenzo"));
        assert!(composition.stages[1].optional);
        assert_eq!(composition.used_in, vec!["HACC"]);
        assert_eq!(composition.capabilities[0].name, "error bound");
    }

    #[test]
    fn benchmark_dataset_renames_type_field() {
        let json = r#"{"name": "NYX", "type": "Cosmology", "format": "f32", "size": "3.1 GB"}"#;
        let dataset: BenchmarkDataset = serde_json::from_str(json).expect("valid dataset");
        assert_eq!(dataset.kind, "Cosmology");
        assert!(dataset.links.is_empty());
    }
}
