//! The fixed set of named glyph transforms.
//!
//! Every transform is plain data: a [`Mapping`] (lookup table or codepoint
//! shift function) plus the [`Order`] in which input characters are visited.
//! The registry order is the display order of the stylish text results.

use super::tables;

/// How a single input character is turned into replacement text.
#[derive(Debug, Clone, Copy)]
pub enum Mapping {
    /// Lookup table keyed by single characters.
    ///
    /// Lookup tries the exact character, then its lowercase form, and passes
    /// the character through unchanged when neither is present.
    Table(&'static [(char, &'static str)]),
    /// Pure codepoint function. Characters outside its range come back as-is.
    Function(fn(char) -> char),
}

/// Order in which the input characters are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Forward,
    Reversed,
}

/// One named style.
#[derive(Debug, Clone, Copy)]
pub struct TransformDefinition {
    /// Display label, unique within the registry.
    pub name: &'static str,
    pub mapping: Mapping,
    pub order: Order,
}

impl Mapping {
    /// Appends the replacement for `c` to `out`.
    pub fn push_mapped(&self, c: char, out: &mut String) {
        match self {
            Mapping::Table(table) => match lookup(table, c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            },
            Mapping::Function(f) => out.push(f(c)),
        }
    }

    /// Returns true when this mapping is table based.
    pub fn is_table(&self) -> bool {
        matches!(self, Mapping::Table(_))
    }
}

impl TransformDefinition {
    pub fn is_reversed(&self) -> bool {
        self.order == Order::Reversed
    }

    /// Applies this transform to `input`.
    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len() * 4);
        match self.order {
            Order::Forward => input.chars().for_each(|c| self.mapping.push_mapped(c, &mut out)),
            Order::Reversed => input
                .chars()
                .rev()
                .for_each(|c| self.mapping.push_mapped(c, &mut out)),
        }
        out
    }
}

/// Table lookup: exact character first, then its lowercase form.
///
/// Characters whose lowercase form is more than one character (e.g. `İ`)
/// only match exactly.
pub fn lookup(table: &'static [(char, &'static str)], c: char) -> Option<&'static str> {
    find(table, c).or_else(|| {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l != c => find(table, l),
            _ => None,
        }
    })
}

fn find(table: &'static [(char, &'static str)], c: char) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, replacement)| *replacement)
}

/// All transforms, in display order.
pub static REGISTRY: [TransformDefinition; 10] = [
    TransformDefinition {
        name: "Bubbles",
        mapping: Mapping::Function(tables::bubbles),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Square",
        mapping: Mapping::Function(tables::square),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Double Struck",
        mapping: Mapping::Function(tables::double_struck),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Script Bold",
        mapping: Mapping::Function(tables::script_bold),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Fraktur",
        mapping: Mapping::Function(tables::fraktur),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Wide",
        mapping: Mapping::Function(tables::wide),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Small Caps",
        mapping: Mapping::Table(tables::SMALL_CAPS),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Upside Down",
        mapping: Mapping::Table(tables::UPSIDE_DOWN),
        order: Order::Reversed,
    },
    TransformDefinition {
        name: "Greek Style",
        mapping: Mapping::Table(tables::GREEK_STYLE),
        order: Order::Forward,
    },
    TransformDefinition {
        name: "Currency",
        mapping: Mapping::Table(tables::CURRENCY),
        order: Order::Forward,
    },
];

/// The registry as a slice.
pub fn registry() -> &'static [TransformDefinition] {
    &REGISTRY
}

/// Finds a transform by name, ignoring ASCII case.
pub fn find_style(name: &str) -> Option<&'static TransformDefinition> {
    REGISTRY
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(name.trim()))
}
