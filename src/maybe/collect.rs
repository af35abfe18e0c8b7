use crate::maybe::core::Maybe;

/// Collects present values, stopping at the first item that has none.
///
/// The first `Absent` or `Failure` becomes the result and the remaining items
/// are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use maybe_rail::Maybe;
///
/// let all: Maybe<Vec<i32>, &str> = vec![Maybe::of(1), Maybe::of(2)].into_iter().collect();
/// assert_eq!(all, Maybe::of(vec![1, 2]));
///
/// let broken: Maybe<Vec<i32>, &str> =
///     vec![Maybe::of(1), Maybe::failure("bad"), Maybe::empty()].into_iter().collect();
/// assert_eq!(broken.get_error(), Ok(&"bad"));
/// ```
impl<A, E, V> FromIterator<Maybe<A, E>> for Maybe<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Maybe<A, E>>>(iter: I) -> Self {
        let mut stopped: Option<Maybe<V, E>> = None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item.into_present() {
                Ok(value) => Some(value),
                Err(rest) => {
                    stopped = Some(rest);
                    None
                },
            })
            .collect();

        match stopped {
            Some(rest) => rest,
            None => Maybe::Present(collected),
        }
    }
}
