//! Character classes shared by the lexer and the evaluator's fallback parse.

/// The zero of every run of Unicode decimal digits (general category `Nd`,
/// Unicode 15.0). Each run is ten consecutive code points, zero through nine.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script: `'7'` and `'٧'` both give 7.
///
/// Only `Nd` digits count; superscripts, fractions and numerals such as
/// `'²'`, `'½'` or `'Ⅷ'` are not decimal digits.
pub fn decimal_digit_value(ch: char) -> Option<u32> {
    let cp = u32::from(ch);
    // Sorted table: the candidate run is the last zero at or below `cp`.
    let idx = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let value = cp - DECIMAL_ZEROS[idx];
    (value < 10).then_some(value)
}

pub fn is_decimal_digit(ch: char) -> bool {
    decimal_digit_value(ch).is_some()
}

/// Whitespace between tokens: Unicode `White_Space` plus the ASCII
/// information separators U+001C–U+001F.
pub fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// Rewrite `digits[.digits]` in any script as ASCII, ready for `f64` parsing.
///
/// Returns `None` unless the text has exactly that shape.
pub fn ascii_decimal(text: &str) -> Option<String> {
    let (int, frac) = match text.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (text, None),
    };
    if int.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    push_digits(int, &mut out)?;
    if let Some(frac) = frac {
        out.push('.');
        push_digits(frac, &mut out)?;
    }
    Some(out)
}

fn push_digits(digits: &str, out: &mut String) -> Option<()> {
    for ch in digits.chars() {
        let value = decimal_digit_value(ch)?;
        out.push(char::from_digit(value, 10)?);
    }
    Some(())
}
