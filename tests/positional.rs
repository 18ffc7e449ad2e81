use curly::interpolate;

#[test]
fn test_positional_lookup() {
    let vars = vec!["quick", "brown"];
    assert_eq!(interpolate("The ${0} ${1} fox.", &vars), "The quick brown fox.");
}

#[test]
fn test_positional_misses_are_removed() {
    let vars = vec!["quick".to_string(), "brown".to_string()];
    assert_eq!(interpolate("The ${123} ${456} ${abcd} fox.", &vars), "The    fox.");
}

#[test]
fn test_positional_overflow_is_a_miss() {
    let vars = ["quick"];
    let huge = format!("[${{{}}}]", "9".repeat(40));
    assert_eq!(interpolate(&huge, &vars), "[]");
}

#[test]
fn test_positional_partial_digits_are_a_miss() {
    let vars = ["quick", "brown"];
    assert_eq!(interpolate("[${1x}]", &vars), "[]");
    assert_eq!(interpolate("[${ 1 }]", &vars), "[brown]");
    assert_eq!(interpolate("[${01}]", &vars), "[brown]");
}

#[test]
fn test_positional_slice() {
    let owned = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let slice: &[String] = &owned[1..];
    assert_eq!(interpolate("${0}${1}${2}", slice), "bc");
}
