//! Stylish text: ten fixed glyph transforms applied to one input string.
//!
//! The transforms are static data ([`registry::REGISTRY`]); this module only
//! runs them. Applying a transform is pure, so the same input always yields
//! the same output, but applying a transform twice does not undo it.

pub mod registry;
pub mod tables;

use serde::Serialize;

pub use registry::{find_style, registry, Mapping, Order, TransformDefinition, REGISTRY};

/// One styled rendition of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StylishResult {
    pub name: String,
    pub content: String,
}

/// Applies a single transform.
pub fn apply_style(definition: &TransformDefinition, input: &str) -> StylishResult {
    StylishResult {
        name: definition.name.to_string(),
        content: definition.apply(input),
    }
}

/// Applies every registered transform, in registry order.
///
/// Always returns exactly one result per transform. Empty input yields
/// results with empty content.
pub fn apply_all_styles(input: &str) -> Vec<StylishResult> {
    REGISTRY
        .iter()
        .map(|definition| apply_style(definition, input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style<'a>(results: &'a [StylishResult], name: &str) -> &'a str {
        &results
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("missing style {name}"))
            .content
    }

    #[test]
    fn test_returns_ten_results_in_registry_order() {
        let results = apply_all_styles("Hello World 123");
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Bubbles",
                "Square",
                "Double Struck",
                "Script Bold",
                "Fraktur",
                "Wide",
                "Small Caps",
                "Upside Down",
                "Greek Style",
                "Currency",
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_empty_contents() {
        let results = apply_all_styles("");
        assert_eq!(results.len(), 10);
        assert!(results.iter().all(|r| r.content.is_empty()));
    }

    #[test]
    fn test_bubbles() {
        assert_eq!(style(&apply_all_styles("a"), "Bubbles"), "\u{24D0}");
        assert_eq!(style(&apply_all_styles("0"), "Bubbles"), "⓪");
        assert_eq!(style(&apply_all_styles("Hi!"), "Bubbles"), "Ⓗⓘ!");
    }

    #[test]
    fn test_wide() {
        assert_eq!(style(&apply_all_styles("A"), "Wide"), "\u{FF21}");
        assert_eq!(style(&apply_all_styles("A B"), "Wide"), "Ａ Ｂ");
    }

    #[test]
    fn test_upside_down_reverses_order() {
        let results = apply_all_styles("ab");
        assert_eq!(style(&results, "Upside Down"), "qɐ");
    }

    #[test]
    fn test_upside_down_sentence() {
        let results = apply_all_styles("Hello!");
        assert_eq!(style(&results, "Upside Down"), "¡ollǝH");
    }

    #[test]
    fn test_small_caps_uses_lowercase_lookup() {
        let results = apply_all_styles("Box");
        assert_eq!(style(&results, "Small Caps"), "ʙᴏx");
    }

    #[test]
    fn test_greek_and_currency() {
        let results = apply_all_styles("rust");
        assert_eq!(style(&results, "Greek Style"), "яυѕт");
        assert_eq!(style(&results, "Currency"), "ⱤɄ₴₮");
    }

    #[test]
    fn test_square_collapses_case() {
        let results = apply_all_styles("aA");
        assert_eq!(style(&results, "Square"), "🄰🄰");
    }

    #[test]
    fn test_table_fallback_law() {
        let input = "1 + 2 = 3; ¿ümlaut? 日本";
        for definition in REGISTRY.iter() {
            let Mapping::Table(table) = definition.mapping else {
                continue;
            };
            let mut chars: Vec<char> = input.chars().collect();
            if definition.is_reversed() {
                chars.reverse();
            }
            let output = definition.apply(input);
            let mut expected = String::new();
            for c in chars {
                match registry::lookup(table, c) {
                    Some(replacement) => expected.push_str(replacement),
                    None => expected.push(c),
                }
            }
            assert_eq!(output, expected, "{}", definition.name);
        }
    }

    #[test]
    fn test_unmapped_characters_pass_through_tables() {
        for definition in REGISTRY.iter().filter(|d| d.mapping.is_table()) {
            for c in ['#', '@', '~', 'é', '日', ' '] {
                if let Mapping::Table(table) = definition.mapping {
                    if registry::lookup(table, c).is_none() {
                        assert_eq!(definition.apply(&c.to_string()), c.to_string());
                    }
                }
            }
        }
    }

    #[test]
    fn test_non_ascii_passes_through_functions() {
        for definition in REGISTRY.iter().filter(|d| !d.mapping.is_table()) {
            assert_eq!(definition.apply("é日"), "é日", "{}", definition.name);
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(apply_all_styles("Same input"), apply_all_styles("Same input"));
    }

    #[test]
    fn test_applying_twice_is_not_an_involution() {
        let bubbles = find_style("Bubbles").unwrap();
        let once = bubbles.apply("abc");
        assert_ne!(bubbles.apply(&once), "abc");
    }
}
