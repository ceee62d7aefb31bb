/// Closed set of module categories the catalog knows how to style.
/// Asset records keep their raw category string; these enums only back
/// display attributes, so an unknown category falls through to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleCategory {
    Predictor,
    Encoder,
    Quantizer,
    Transformer,
    Filter,
    Mutator,
    Shuffler,
    Verifier,
}

impl ModuleCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Predictor => "Predictor",
            Self::Encoder => "Encoder",
            Self::Quantizer => "Quantizer",
            Self::Transformer => "Transformer",
            Self::Filter => "Filter",
            Self::Mutator => "Mutator",
            Self::Shuffler => "Shuffler",
            Self::Verifier => "Verifier",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Predictor" => Some(Self::Predictor),
            "Encoder" => Some(Self::Encoder),
            "Quantizer" => Some(Self::Quantizer),
            "Transformer" => Some(Self::Transformer),
            "Filter" => Some(Self::Filter),
            "Mutator" => Some(Self::Mutator),
            "Shuffler" => Some(Self::Shuffler),
            "Verifier" => Some(Self::Verifier),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionCategory {
    Cpu,
    Gpu,
    Mixed,
    Other,
}

impl CompositionCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Mixed => "Mixed",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "CPU" => Some(Self::Cpu),
            "GPU" => Some(Self::Gpu),
            "Mixed" => Some(Self::Mixed),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionType {
    Lossless,
    Lossy,
    Hybrid,
}

impl CompressionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lossless => "Lossless",
            Self::Lossy => "Lossy",
            Self::Hybrid => "Hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "Lossless" => Some(Self::Lossless),
            "Lossy" => Some(Self::Lossy),
            "Hybrid" => Some(Self::Hybrid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_canonical_names() {
        for category in [
            ModuleCategory::Predictor,
            ModuleCategory::Encoder,
            ModuleCategory::Quantizer,
            ModuleCategory::Transformer,
            ModuleCategory::Filter,
            ModuleCategory::Mutator,
            ModuleCategory::Shuffler,
            ModuleCategory::Verifier,
        ] {
            assert_eq!(ModuleCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_differently_cased() {
        assert_eq!(ModuleCategory::parse("encoder"), None);
        assert_eq!(ModuleCategory::parse("Wavelet"), None);
        assert_eq!(CompositionCategory::parse("cpu"), None);
        assert_eq!(CompressionType::parse("lossy"), None);
    }
}
