use maybe_rail::{Maybe, MaybeError};

use super::LookupError;

#[test]
fn of_wraps_a_present_value() {
    let maybe = Maybe::<String, LookupError>::of("value".to_string());

    assert!(maybe.is_present());
    assert!(!maybe.is_error());
    assert!(!maybe.is_absent());
    assert_eq!(maybe.get(), Ok(&"value".to_string()));
}

#[test]
fn of_nullable_maps_none_to_absent() {
    let maybe = Maybe::<i32, LookupError>::of_nullable(None);

    assert!(!maybe.is_present());
    assert!(!maybe.is_error());
    assert!(maybe.is_absent());
}

#[test]
fn of_nullable_with_value_equals_of() {
    let nullable = Maybe::<i32, LookupError>::of_nullable(Some(8));

    assert_eq!(nullable, Maybe::of(8));
    assert_eq!(nullable.into_value(), Ok(8));
}

#[test]
fn of_keeps_an_inner_option_as_a_value() {
    let maybe = Maybe::<Option<i32>, LookupError>::of(None);

    assert!(maybe.is_present());
    assert_eq!(maybe.get(), Ok(&None));
}

#[test]
fn empty_is_always_the_shared_absent_state() {
    let first = Maybe::<i32, LookupError>::empty();
    let second = Maybe::<i32, LookupError>::empty();

    assert!(first.is_absent());
    assert!(matches!(first, Maybe::Absent));
    assert!(matches!(Maybe::<i32, LookupError>::EMPTY, Maybe::Absent));
    assert_eq!(first, second);
    assert_eq!(Maybe::<i32, LookupError>::default(), Maybe::EMPTY);
}

#[test]
fn empty_is_usable_in_const_context() {
    const NOTHING: Maybe<u8, LookupError> = Maybe::empty();
    const SEVEN: Maybe<u8, LookupError> = Maybe::of(7);

    assert!(NOTHING.is_absent());
    assert_eq!(SEVEN.get(), Ok(&7));
}

#[test]
fn failure_holds_the_given_error() {
    let error = LookupError { code: 404 };
    let maybe = Maybe::<i32, _>::failure(error.clone());

    assert!(!maybe.is_present());
    assert!(maybe.is_error());
    assert_eq!(maybe.get_error(), Ok(&error));
    assert_eq!(maybe.into_error(), Ok(error));
}

#[test]
fn get_reports_no_value_for_absent_and_failure() {
    let absent = Maybe::<i32, LookupError>::empty();
    let failed = Maybe::<i32, _>::failure(LookupError { code: 1 });

    assert_eq!(absent.get(), Err(MaybeError::NoValuePresent));
    assert_eq!(failed.get(), Err(MaybeError::NoValuePresent));
    assert_eq!(failed.get().unwrap_err().to_string(), "No value present");
    assert_eq!(failed.into_value(), Err(MaybeError::NoValuePresent));
}

#[test]
fn get_error_reports_no_error_for_present_and_absent() {
    let present = Maybe::<i32, LookupError>::of(1);
    let absent = Maybe::<i32, LookupError>::empty();

    assert_eq!(present.get_error(), Err(MaybeError::NoErrorPresent));
    assert_eq!(absent.get_error(), Err(MaybeError::NoErrorPresent));
    assert_eq!(absent.get_error().unwrap_err().to_string(), "No error present");
}

#[test]
fn option_views_split_value_and_error() {
    assert_eq!(Maybe::<i32, LookupError>::of(2).ok(), Some(2));
    assert_eq!(Maybe::<i32, LookupError>::empty().ok(), None);
    assert_eq!(Maybe::<i32, _>::failure(LookupError { code: 2 }).ok(), None);

    assert_eq!(Maybe::<i32, LookupError>::of(2).err(), None);
    assert_eq!(Maybe::<i32, _>::failure(LookupError { code: 2 }).err(), Some(LookupError { code: 2 }));
}

#[test]
fn as_ref_borrows_without_consuming() {
    let maybe = Maybe::<String, LookupError>::of("abc".to_string());
    let len = maybe.as_ref().map(|s| Ok(s.len())).unwrap_or(0);

    assert_eq!(len, 3);
    assert!(maybe.is_present());
}

#[test]
fn conversions_from_std_types() {
    let from_some: Maybe<i32, LookupError> = Some(1).into();
    let from_none: Maybe<i32, LookupError> = None.into();
    let from_err: Maybe<i32, LookupError> = Err(LookupError { code: 9 }).into();

    assert!(from_some.is_present());
    assert!(from_none.is_absent());
    assert_eq!(from_err.get_error(), Ok(&LookupError { code: 9 }));
}
