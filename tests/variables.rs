mod common;
use common::create_curly;

#[test]
fn test_simple_variable() {
    let curly = create_curly();
    let result = curly.interpolate("The quick ${color} fox.");
    assert_eq!(result, "The quick brown fox.");
}

#[test]
fn test_values_are_not_expanded_again() {
    let curly = create_curly();
    let result = curly.interpolate("Value is ${nested}");
    assert_eq!(result, "Value is ${color}");
}

#[test]
fn test_missing_variable_is_removed() {
    let curly = create_curly();
    let result = curly.interpolate("Value is [${missing}]");
    assert_eq!(result, "Value is []");
}

#[test]
fn test_empty_variable() {
    let curly = create_curly();
    let result = curly.interpolate("The quick ${empty} fox.");
    assert_eq!(result, "The quick  fox.");
}

#[test]
fn test_whitespace_in_braces() {
    let curly = create_curly();
    assert_eq!(curly.interpolate("The quick ${ color } fox."), "The quick brown fox.");
    assert_eq!(curly.interpolate("${\tcolor\n}"), "brown");
}

#[test]
fn test_variable_overwrite() {
    let mut curly = create_curly();
    curly.add_variable("color", "original");
    curly.add_variable("color", "overwritten");

    let result = curly.interpolate("Value is ${color}");
    assert_eq!(result, "Value is overwritten");
}

#[test]
fn test_interpolate_with_extra_vars() {
    let curly = create_curly();
    let mut extra = std::collections::HashMap::new();
    extra.insert("color".to_string(), "red".to_string());
    extra.insert("animal".to_string(), "fox".to_string());

    let result = curly.interpolate_with("${color} ${animal}", &extra);
    assert_eq!(result, "red fox");
    // The context itself is untouched.
    assert_eq!(curly.interpolate("${color} ${animal}"), "brown ");
}

#[test]
fn test_utf8_names_and_values() {
    let mut curly = create_curly();
    curly.add_variable("воасл", "brʘwn");
    let result = curly.interpolate("The quiĉk ${воасл} fox.");
    assert_eq!(result, "The quiĉk brʘwn fox.");
}
