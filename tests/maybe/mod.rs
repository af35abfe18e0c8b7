use maybe_rail::Maybe;

pub mod construction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    pub code: u32,
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lookup failed with code {}", self.code)
    }
}

impl std::error::Error for LookupError {}

#[test]
fn map_then_flat_map_then_default_yields_transformed_value() {
    let value = Maybe::<i32, LookupError>::of(1)
        .map(|x| Ok(x + 1))
        .flat_map(|x| Ok(Maybe::of(x * 10)))
        .unwrap_or(-1);

    assert_eq!(value, 20);
}

#[test]
fn failing_map_is_recovered_by_on_error() {
    let value = Maybe::<i32, LookupError>::of(1)
        .map(|_| Err::<i32, _>(LookupError { code: 7 }))
        .on_error(|_| 99);

    assert_eq!(value, Ok(99));
}

#[test]
fn failure_travels_through_the_whole_chain_untouched() {
    let mut calls = 0;
    let result = Maybe::<i32, LookupError>::failure(LookupError { code: 3 })
        .map(|x| {
            calls += 1;
            Ok(x + 1)
        })
        .filter(|_| true)
        .flat_map(|x| Ok(Maybe::of(x * 2)))
        .map_nullable(|x| Ok(Some(x)));

    assert_eq!(calls, 0);
    assert_eq!(result.get_error(), Ok(&LookupError { code: 3 }));
}

#[test]
fn absent_then_fallback_recovers_a_value() {
    let value = Maybe::<i32, LookupError>::of(5)
        .filter(|x| *x > 10)
        .or_else(|| Maybe::of(10))
        .map(|x| Ok(x * 3))
        .unwrap_or_default();

    assert_eq!(value, 30);
}

#[test]
fn container_is_send_and_sync_when_its_parts_are() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Maybe<String, LookupError>>();
    assert_send_sync::<Maybe<i32, maybe_rail::BoxError>>();
}

#[test]
fn containers_can_be_shared_across_threads() {
    let shared = std::sync::Arc::new(Maybe::<i32, LookupError>::of(4));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || *shared.get().unwrap() + i)
        })
        .collect();

    let total: i32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, 4 * 4 + 6);
}
