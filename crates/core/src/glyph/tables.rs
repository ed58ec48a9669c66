//! Codepoint shift functions and lookup tables for the glyph transforms.
//!
//! The shift functions only touch ASCII letters and digits (or printable
//! ASCII for [`wide`]); everything else is returned unchanged.

const BUBBLE_UPPER: u32 = 0x24B6;
const BUBBLE_LOWER: u32 = 0x24D0;
const BUBBLE_DIGIT_ONE: u32 = 0x2460;
const BUBBLE_ZERO: char = '\u{24EA}';

const SQUARE_UPPER: u32 = 0x1F130;

const DOUBLE_STRUCK_UPPER: u32 = 0x1D538;
const DOUBLE_STRUCK_LOWER: u32 = 0x1D552;
const DOUBLE_STRUCK_DIGIT: u32 = 0x1D7D8;

const SCRIPT_BOLD_UPPER: u32 = 0x1D4D0;
const SCRIPT_BOLD_LOWER: u32 = 0x1D4EA;

const FRAKTUR_UPPER: u32 = 0x1D56C;
const FRAKTUR_LOWER: u32 = 0x1D586;

const WIDE_OFFSET: u32 = 0xFEE0;

/// Shifts `c` to `base + (c - origin)`.
fn shift(c: char, origin: char, base: u32) -> char {
    char::from_u32(base + (c as u32 - origin as u32)).unwrap_or(c)
}

/// Circled letters and digits.
pub fn bubbles(c: char) -> char {
    match c {
        'A'..='Z' => shift(c, 'A', BUBBLE_UPPER),
        'a'..='z' => shift(c, 'a', BUBBLE_LOWER),
        '1'..='9' => shift(c, '1', BUBBLE_DIGIT_ONE),
        '0' => BUBBLE_ZERO,
        _ => c,
    }
}

/// Squared letters. Lowercase letters land in the uppercase block too.
pub fn square(c: char) -> char {
    match c {
        'A'..='Z' => shift(c, 'A', SQUARE_UPPER),
        'a'..='z' => shift(c, 'a', SQUARE_UPPER),
        _ => c,
    }
}

/// Double-struck letters and digits.
///
/// Seven capitals live in the Letterlike Symbols block; the matching slots of
/// the mathematical block are reserved.
pub fn double_struck(c: char) -> char {
    match c {
        'C' => 'ℂ',
        'H' => 'ℍ',
        'N' => 'ℕ',
        'P' => 'ℙ',
        'Q' => 'ℚ',
        'R' => 'ℝ',
        'Z' => 'ℤ',
        'A'..='Z' => shift(c, 'A', DOUBLE_STRUCK_UPPER),
        'a'..='z' => shift(c, 'a', DOUBLE_STRUCK_LOWER),
        '0'..='9' => shift(c, '0', DOUBLE_STRUCK_DIGIT),
        _ => c,
    }
}

pub fn script_bold(c: char) -> char {
    match c {
        'A'..='Z' => shift(c, 'A', SCRIPT_BOLD_UPPER),
        'a'..='z' => shift(c, 'a', SCRIPT_BOLD_LOWER),
        _ => c,
    }
}

pub fn fraktur(c: char) -> char {
    match c {
        'A'..='Z' => shift(c, 'A', FRAKTUR_UPPER),
        'a'..='z' => shift(c, 'a', FRAKTUR_LOWER),
        _ => c,
    }
}

/// Fullwidth forms for printable ASCII (33..=126). Space stays a space.
pub fn wide(c: char) -> char {
    match c as u32 {
        33..=126 => char::from_u32(c as u32 + WIDE_OFFSET).unwrap_or(c),
        _ => c,
    }
}

pub const SMALL_CAPS: &[(char, &str)] = &[
    ('a', "ᴀ"),
    ('b', "ʙ"),
    ('c', "ᴄ"),
    ('d', "ᴅ"),
    ('e', "ᴇ"),
    ('f', "ꜰ"),
    ('g', "ɢ"),
    ('h', "ʜ"),
    ('i', "ɪ"),
    ('j', "ᴊ"),
    ('k', "ᴋ"),
    ('l', "ʟ"),
    ('m', "ᴍ"),
    ('n', "ɴ"),
    ('o', "ᴏ"),
    ('p', "ᴘ"),
    ('q', "ǫ"),
    ('r', "ʀ"),
    ('s', "ꜱ"),
    ('t', "ᴛ"),
    ('u', "ᴜ"),
    ('v', "ᴠ"),
    ('w', "ᴡ"),
    ('x', "x"),
    ('y', "ʏ"),
    ('z', "ᴢ"),
];

pub const UPSIDE_DOWN: &[(char, &str)] = &[
    ('a', "ɐ"),
    ('b', "q"),
    ('c', "ɔ"),
    ('d', "p"),
    ('e', "ǝ"),
    ('f', "ɟ"),
    ('g', "ƃ"),
    ('h', "ɥ"),
    ('i', "ᴉ"),
    ('j', "ɾ"),
    ('k', "ʞ"),
    ('l', "l"),
    ('m', "ɯ"),
    ('n', "u"),
    ('o', "o"),
    ('p', "d"),
    ('q', "b"),
    ('r', "ɹ"),
    ('s', "s"),
    ('t', "ʇ"),
    ('u', "n"),
    ('v', "ʌ"),
    ('w', "ʍ"),
    ('x', "x"),
    ('y', "ʎ"),
    ('z', "z"),
    ('A', "∀"),
    ('B', "ᗺ"),
    ('C', "Ɔ"),
    ('D', "ᗡ"),
    ('E', "Ǝ"),
    ('F', "Ⅎ"),
    ('G', "⅁"),
    ('H', "H"),
    ('I', "I"),
    ('J', "ſ"),
    ('K', "ʞ"),
    ('L', "˥"),
    ('M', "W"),
    ('N', "N"),
    ('O', "O"),
    ('P', "Ԁ"),
    ('Q', "Ό"),
    ('R', "ᴚ"),
    ('S', "S"),
    ('T', "⊥"),
    ('U', "∩"),
    ('V', "Λ"),
    ('W', "M"),
    ('X', "X"),
    ('Y', "⅄"),
    ('Z', "Z"),
    ('0', "0"),
    ('1', "Ɩ"),
    ('2', "ᄅ"),
    ('3', "Ɛ"),
    ('4', "ㄣ"),
    ('5', "ϛ"),
    ('6', "9"),
    ('7', "ㄥ"),
    ('8', "8"),
    ('9', "6"),
    ('.', "˙"),
    (',', "'"),
    ('\'', ","),
    ('"', "„"),
    ('?', "¿"),
    ('!', "¡"),
    ('(', ")"),
    (')', "("),
    ('[', "]"),
    (']', "["),
    ('{', "}"),
    ('}', "{"),
    ('<', ">"),
    ('>', "<"),
    ('_', "‾"),
    ('&', "⅋"),
];

pub const GREEK_STYLE: &[(char, &str)] = &[
    ('a', "α"),
    ('b', "в"),
    ('c', "¢"),
    ('d', "∂"),
    ('e', "є"),
    ('f', "ƒ"),
    ('g', "g"),
    ('h', "h"),
    ('i', "ι"),
    ('j', "נ"),
    ('k', "к"),
    ('l', "ℓ"),
    ('m', "м"),
    ('n', "η"),
    ('o', "σ"),
    ('p', "ρ"),
    ('q', "q"),
    ('r', "я"),
    ('s', "ѕ"),
    ('t', "т"),
    ('u', "υ"),
    ('v', "ν"),
    ('w', "ω"),
    ('x', "χ"),
    ('y', "у"),
    ('z', "z"),
];

pub const CURRENCY: &[(char, &str)] = &[
    ('a', "₳"),
    ('b', "฿"),
    ('c', "₵"),
    ('d', "Đ"),
    ('e', "Ɇ"),
    ('f', "₣"),
    ('g', "₲"),
    ('h', "Ⱨ"),
    ('i', "ł"),
    ('j', "J"),
    ('k', "₭"),
    ('l', "Ⱡ"),
    ('m', "₥"),
    ('n', "₦"),
    ('o', "Ø"),
    ('p', "₱"),
    ('q', "Q"),
    ('r', "Ɽ"),
    ('s', "₴"),
    ('t', "₮"),
    ('u', "Ʉ"),
    ('v', "V"),
    ('w', "₩"),
    ('x', "Ӿ"),
    ('y', "Ɏ"),
    ('z', "Ⱬ"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubbles_ranges() {
        assert_eq!(bubbles('a'), '\u{24D0}');
        assert_eq!(bubbles('z'), '\u{24E9}');
        assert_eq!(bubbles('A'), '\u{24B6}');
        assert_eq!(bubbles('1'), '\u{2460}');
        assert_eq!(bubbles('9'), '\u{2468}');
        assert_eq!(bubbles('0'), '\u{24EA}');
        assert_eq!(bubbles('-'), '-');
    }

    #[test]
    fn test_square_maps_both_cases_to_uppercase_block() {
        // Intentional: there is no lowercase squared block.
        assert_eq!(square('A'), '\u{1F130}');
        assert_eq!(square('a'), '\u{1F130}');
        assert_eq!(square('z'), square('Z'));
        assert_eq!(square('5'), '5');
    }

    #[test]
    fn test_double_struck() {
        assert_eq!(double_struck('A'), '\u{1D538}');
        assert_eq!(double_struck('C'), 'ℂ');
        assert_eq!(double_struck('a'), '\u{1D552}');
        assert_eq!(double_struck('0'), '\u{1D7D8}');
        assert_eq!(double_struck('9'), '\u{1D7E1}');
        assert_eq!(double_struck(' '), ' ');
    }

    #[test]
    fn test_script_bold_and_fraktur_leave_digits_alone() {
        assert_eq!(script_bold('A'), '\u{1D4D0}');
        assert_eq!(script_bold('a'), '\u{1D4EA}');
        assert_eq!(script_bold('7'), '7');
        assert_eq!(fraktur('A'), '\u{1D56C}');
        assert_eq!(fraktur('a'), '\u{1D586}');
        assert_eq!(fraktur('7'), '7');
    }

    #[test]
    fn test_wide_bounds() {
        assert_eq!(wide('!'), '\u{FF01}');
        assert_eq!(wide('A'), '\u{FF21}');
        assert_eq!(wide('~'), '\u{FF5E}');
        assert_eq!(wide(' '), ' ');
        assert_eq!(wide('\n'), '\n');
        assert_eq!(wide('\u{7F}'), '\u{7F}');
    }

    #[test]
    fn test_tables_have_unique_keys() {
        for table in [SMALL_CAPS, UPSIDE_DOWN, GREEK_STYLE, CURRENCY] {
            let mut keys: Vec<char> = table.iter().map(|(k, _)| *k).collect();
            let len = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), len);
        }
    }

    #[test]
    fn test_lowercase_only_tables_cover_the_alphabet() {
        for table in [SMALL_CAPS, GREEK_STYLE, CURRENCY] {
            assert_eq!(table.len(), 26);
            assert!(table.iter().all(|(k, _)| k.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_small_caps_x_is_identity() {
        assert!(SMALL_CAPS.contains(&('x', "x")));
    }
}
