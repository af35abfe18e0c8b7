use maybe_rail::{present, Maybe};

#[derive(Debug, Clone, PartialEq)]
struct ConfigError(&'static str);

fn parse_pair(left: Maybe<i32, ConfigError>, right: Option<i32>) -> Maybe<(i32, i32), ConfigError> {
    let left = present!(left);
    let right = present!(right);
    Maybe::of((left, right))
}

fn checked_ratio(num: i32, den: i32) -> Maybe<i32, ConfigError> {
    let den = present!(if den == 0 { Err(ConfigError("division by zero")) } else { Ok(den) });
    Maybe::of(num / den)
}

#[test]
fn present_macro_unwraps_values() {
    assert_eq!(parse_pair(Maybe::of(1), Some(2)), Maybe::of((1, 2)));
}

#[test]
fn present_macro_returns_absent_early() {
    assert!(parse_pair(Maybe::empty(), Some(2)).is_absent());
    assert!(parse_pair(Maybe::of(1), None).is_absent());
}

#[test]
fn present_macro_returns_failure_early() {
    let result = parse_pair(Maybe::failure(ConfigError("bad left")), None);

    assert_eq!(result.into_error(), Ok(ConfigError("bad left")));
}

#[test]
fn present_macro_accepts_results() {
    assert_eq!(checked_ratio(10, 2), Maybe::of(5));
    assert_eq!(checked_ratio(10, 0).into_error(), Ok(ConfigError("division by zero")));
}
