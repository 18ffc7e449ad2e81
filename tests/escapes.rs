mod common;
use common::create_curly;

#[test]
fn test_escaped_reference_is_kept_verbatim() {
    let curly = create_curly();
    let result = curly.interpolate(r"\${color}");
    assert_eq!(result, r"\${color}");
}

#[test]
fn test_escape_only_applies_to_the_next_unit() {
    let curly = create_curly();
    assert_eq!(curly.interpolate(r"\ ${color}"), r"\ brown");
    assert_eq!(curly.interpolate(r"\n${color}"), r"\nbrown");
}

#[test]
fn test_double_backslash_still_escapes() {
    // Only the unit right before `$` is looked at.
    let curly = create_curly();
    assert_eq!(curly.interpolate(r"\\${color}"), r"\\${color}");
}

#[test]
fn test_escaped_close_does_not_end_reference() {
    let curly = create_curly();
    // The body becomes `co\}lor`, which is not a valid name.
    assert_eq!(curly.interpolate(r"[${co\}lor}]"), "[]");
    // Never closed at all.
    assert_eq!(curly.interpolate(r"[${color\}"), r"[${color\}");
}
