/// A single-input function that is allowed to fail.
///
/// `Transform` is the failure boundary used by [`Maybe`](crate::Maybe)'s mapping
/// combinators: whatever the transform returns as `Err` is captured into a
/// `Failure` state instead of being propagated to the caller.
///
/// Every `FnOnce(T) -> Result<U, E>` closure is a `Transform`. Implement it by
/// hand when a transform deserves a name or carries configuration.
///
/// # Type Parameters
///
/// * `T` - The input the transform consumes
///
/// # Associated Types
///
/// * `Output` - The value produced on success
/// * `Error` - The error produced on failure
///
/// # Examples
///
/// ```
/// use maybe_rail::traits::Transform;
/// use maybe_rail::Maybe;
///
/// struct Halve;
///
/// impl Transform<u32> for Halve {
///     type Output = u32;
///     type Error = &'static str;
///
///     fn apply(self, input: u32) -> Result<u32, &'static str> {
///         if input % 2 == 0 {
///             Ok(input / 2)
///         } else {
///             Err("odd input")
///         }
///     }
/// }
///
/// assert_eq!(Maybe::of(8).apply(Halve), Maybe::of(4));
/// assert!(Maybe::of(7).apply(Halve).is_error());
/// ```
pub trait Transform<T> {
    type Output;

    type Error;

    /// Applies the transform, returning `Err` when it fails.
    fn apply(self, input: T) -> Result<Self::Output, Self::Error>;
}

impl<T, U, E, F> Transform<T> for F
where
    F: FnOnce(T) -> Result<U, E>,
{
    type Output = U;
    type Error = E;

    #[inline]
    fn apply(self, input: T) -> Result<U, E> {
        self(input)
    }
}
