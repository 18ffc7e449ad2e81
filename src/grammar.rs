//! Lexical shape of a `${name}` reference and the rules for accepting its name.

use crate::unit::CodeUnit;

/// ASCII whitespace allowed around a name inside the braces.
pub fn is_space<U: CodeUnit>(unit: U) -> bool {
    matches!(unit.value(), 0x20 | 0x09..=0x0D)
}

/// Whether `unit` may appear in a reference name.
///
/// ASCII punctuation, whitespace and DEL are rejected; every other value,
/// including all non-ASCII ones, is accepted.
pub fn is_name_unit<U: CodeUnit>(unit: U) -> bool {
    !matches!(
        unit.value(),
        0x09..=0x0D | 0x20..=0x2F | 0x3A..=0x40 | 0x5B..=0x60 | 0x7B..=0x7F
    )
}

/// Trims whitespace from both ends of a reference body.
pub fn trim<U: CodeUnit>(body: &[U]) -> &[U] {
    let start = body.iter().position(|&u| !is_space(u)).unwrap_or(body.len());
    let end = body.iter().rposition(|&u| !is_space(u)).map_or(start, |i| i + 1);
    &body[start..end]
}

/// Extracts the name from the text between `{` and `}`.
///
/// Returns `None` when the trimmed body is empty or holds a rejected unit; such
/// references resolve to nothing.
pub fn parse_name<U: CodeUnit>(body: &[U]) -> Option<&[U]> {
    let name = trim(body);
    if !name.is_empty() && name.iter().all(|&u| is_name_unit(u)) {
        Some(name)
    } else {
        None
    }
}

/// True when the unit at `pos` is directly preceded by the escape unit.
pub(crate) fn is_escaped<U: CodeUnit>(text: &[U], pos: usize) -> bool {
    pos > 0 && text[pos - 1] == U::ESCAPE
}

/// Finds the first closing delimiter at or after `from` that isn't escaped.
pub(crate) fn find_close<U: CodeUnit>(text: &[U], mut from: usize) -> Option<usize> {
    while from < text.len() {
        let k = from + U::find(U::CLOSE, &text[from..])?;
        if !is_escaped(text, k) {
            return Some(k);
        }
        from = k + 1;
    }
    None
}
