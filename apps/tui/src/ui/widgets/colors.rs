use crate::domain::{CompositionCategory, CompressionType, ModuleCategory};
use ratatui::style::Color;

/// Display color for a raw module category string. The closed enum carries
/// the exhaustive mapping; anything outside it fails closed to gray.
pub fn module_category_color(raw: &str) -> Color {
    ModuleCategory::parse(raw).map_or(Color::Gray, |category| match category {
        ModuleCategory::Predictor => Color::Cyan,
        ModuleCategory::Encoder => Color::Yellow,
        ModuleCategory::Quantizer => Color::Magenta,
        ModuleCategory::Transformer => Color::Green,
        ModuleCategory::Filter => Color::Blue,
        ModuleCategory::Mutator => Color::LightRed,
        ModuleCategory::Shuffler => Color::LightBlue,
        ModuleCategory::Verifier => Color::LightGreen,
    })
}

pub fn composition_category_color(raw: &str) -> Color {
    CompositionCategory::parse(raw).map_or(Color::Gray, |category| match category {
        CompositionCategory::Cpu => Color::Cyan,
        CompositionCategory::Gpu => Color::Green,
        CompositionCategory::Mixed => Color::Yellow,
        CompositionCategory::Other => Color::Gray,
    })
}

pub fn compression_type_color(raw: &str) -> Color {
    CompressionType::parse(raw).map_or(Color::Gray, |kind| match kind {
        CompressionType::Lossless => Color::Green,
        CompressionType::Lossy => Color::Magenta,
        CompressionType::Hybrid => Color::Yellow,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_categories_fail_closed_to_gray() {
        assert_eq!(module_category_color("Wavelet"), Color::Gray);
        assert_eq!(module_category_color(""), Color::Gray);
        assert_eq!(composition_category_color("FPGA"), Color::Gray);
    }

    #[test]
    fn known_categories_have_distinct_styling() {
        assert_ne!(module_category_color("Encoder"), Color::Gray);
        assert_ne!(composition_category_color("GPU"), Color::Gray);
        assert_ne!(compression_type_color("Lossy"), Color::Gray);
        assert_eq!(compression_type_color("lossy"), Color::Gray);
    }
}
