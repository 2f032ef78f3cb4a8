//! Unicode property tables the standard library does not expose
//!
//! `char` has no general-category queries, so the handful of properties
//! word motion depends on are spelled out here.

/// Space characters: general categories Zs, Zl and Zp
///
/// Control characters (TAB, LF) are not space characters.
pub fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// First code point (digit zero) of every run of general category Nd
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Decimal digits in any script (general category Nd)
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if c.is_ascii() {
        return false;
    }
    let cp = c as u32;
    // Every Nd run is exactly ten code points long.
    let idx = DECIMAL_DIGIT_ZEROS.partition_point(|&zero| zero <= cp);
    idx > 0 && cp - DECIMAL_DIGIT_ZEROS[idx - 1] < 10
}

/// Characters with the Unicode `Ideographic` property
pub fn is_ideographic(c: char) -> bool {
    matches!(
        c,
        '\u{3006}'
            | '\u{3007}'
            | '\u{3021}'..='\u{3029}'
            | '\u{3038}'..='\u{303A}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FA6D}'
            | '\u{FA70}'..='\u{FAD9}'
            | '\u{16FE4}'
            | '\u{17000}'..='\u{187F7}'
            | '\u{18800}'..='\u{18CD5}'
            | '\u{18D00}'..='\u{18D08}'
            | '\u{1B170}'..='\u{1B2FB}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2EBE0}'
            | '\u{2F800}'..='\u{2FA1D}'
            | '\u{30000}'..='\u{323AF}'
    )
}

/// Currency symbols
///
/// The set is fixed rather than derived from general category Sc so that
/// behaviour does not shift with the Unicode version.
pub fn is_currency_symbol(c: char) -> bool {
    matches!(
        c,
        '\u{0024}'
            | '\u{00A2}'..='\u{00A5}'
            | '\u{0192}'
            | '\u{058F}'
            | '\u{060B}'
            | '\u{09F2}'
            | '\u{09F3}'
            | '\u{0AF1}'
            | '\u{0BF9}'
            | '\u{0E3F}'
            | '\u{17DB}'
            | '\u{2133}'
            | '\u{5143}'
            | '\u{5186}'
            | '\u{5706}'
            | '\u{5713}'
            | '\u{FDFC}'
            // Currency Symbols block
            | '\u{20A0}'..='\u{20CF}'
    )
}

/// The only decimal separator is the period
pub fn is_decimal_separator(c: char) -> bool {
    c == '.'
}
