use crate::traits::Transform;
use crate::types::MaybeError;

/// A value, the absence of a value, or a captured failure.
///
/// `Maybe<T, E>` sits between [`Option`] and [`Result`]: like `Option` it can
/// be empty, like `Result` it can carry an error. The combinators never make
/// the caller look at the state directly. They run caller-supplied functions
/// only on `Present` values and let `Absent` and `Failure` travel through the
/// chain untouched.
///
/// Transforms passed to [`map`](Maybe::map), [`flat_map`](Maybe::flat_map) and
/// [`fold`](Maybe::fold) return `Result`; an `Err` becomes a `Failure` state
/// instead of escaping the chain.
///
/// # Type Parameters
///
/// * `T` - The value type
/// * `E` - The captured error type
///
/// # Variants
///
/// * `Present(T)` - Holds a value
/// * `Absent` - Holds nothing
/// * `Failure(E)` - Holds a captured error
///
/// # Examples
///
/// ```
/// use maybe_rail::Maybe;
///
/// let total = Maybe::<i32, &str>::of(1)
///     .map(|x| Ok(x + 1))
///     .flat_map(|x| Ok(Maybe::of(x * 10)))
///     .unwrap_or(-1);
///
/// assert_eq!(total, 20);
/// ```
#[must_use]
#[derive(Clone, Copy)]
pub enum Maybe<T, E> {
    Present(T),
    Absent,
    Failure(E),
}

impl<T, E> Maybe<T, E> {
    /// The shared `Absent` value.
    pub const EMPTY: Self = Maybe::Absent;

    /// Wraps a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m = Maybe::<_, &str>::of("ready");
    /// assert_eq!(m.get(), Ok(&"ready"));
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self::Present(value)
    }

    /// Wraps a value that may be missing; `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// assert!(Maybe::<i32, &str>::of_nullable(None).is_absent());
    /// assert_eq!(Maybe::<i32, &str>::of_nullable(Some(3)), Maybe::of(3));
    /// ```
    #[inline]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::EMPTY,
        }
    }

    /// Returns the `Absent` state.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m: Maybe<i32, &str> = Maybe::empty();
    /// assert!(!m.is_present() && !m.is_error());
    /// ```
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Wraps a captured error.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m = Maybe::<i32, _>::failure("disk full");
    /// assert_eq!(m.get_error(), Ok(&"disk full"));
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if a value is held.
    #[must_use]
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if an error is held.
    #[must_use]
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if neither a value nor an error is held.
    #[must_use]
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the value.
    ///
    /// Fails with [`MaybeError::NoValuePresent`] for both `Absent` and
    /// `Failure`; a captured error is never reported through this path.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::{Maybe, MaybeError};
    ///
    /// assert_eq!(Maybe::<i32, &str>::of(1).get(), Ok(&1));
    /// assert_eq!(Maybe::<i32, &str>::failure("boom").get(), Err(MaybeError::NoValuePresent));
    /// ```
    #[inline]
    pub fn get(&self) -> Result<&T, MaybeError> {
        match self {
            Self::Present(value) => Ok(value),
            _ => Err(MaybeError::NoValuePresent),
        }
    }

    /// Borrows the captured error.
    ///
    /// Fails with [`MaybeError::NoErrorPresent`] for `Present` and `Absent`.
    #[inline]
    pub fn get_error(&self) -> Result<&E, MaybeError> {
        match self {
            Self::Failure(error) => Ok(error),
            _ => Err(MaybeError::NoErrorPresent),
        }
    }

    /// Consumes the container, returning the value.
    ///
    /// Same contract as [`get`](Maybe::get).
    #[inline]
    pub fn into_value(self) -> Result<T, MaybeError> {
        match self {
            Self::Present(value) => Ok(value),
            _ => Err(MaybeError::NoValuePresent),
        }
    }

    /// Consumes the container, returning the captured error.
    ///
    /// Same contract as [`get_error`](Maybe::get_error).
    #[inline]
    pub fn into_error(self) -> Result<E, MaybeError> {
        match self {
            Self::Failure(error) => Ok(error),
            _ => Err(MaybeError::NoErrorPresent),
        }
    }

    /// Converts into an `Option` of the value, discarding any error.
    #[must_use]
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }

    /// Converts into an `Option` of the error, discarding any value.
    #[must_use]
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }

    /// Borrows both sides, producing `Maybe<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T, &E> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
            Self::Failure(error) => Maybe::Failure(error),
        }
    }

    /// Splits off the value, or hands back the non-present state retyped to `U`.
    ///
    /// This is the short-circuit step of every combinator: `Absent` and
    /// `Failure` carry no `T`, so they can be reinterpreted at any value type
    /// without touching their payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let failed: Maybe<i32, &str> = Maybe::failure("boom");
    /// let rest: Maybe<String, &str> = failed.into_present().unwrap_err();
    /// assert_eq!(rest.get_error(), Ok(&"boom"));
    /// ```
    #[inline]
    pub fn into_present<U>(self) -> Result<T, Maybe<U, E>> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(Maybe::Absent),
            Self::Failure(error) => Err(Maybe::Failure(error)),
        }
    }

    /// Runs a [`Transform`] on the value, capturing its failure.
    ///
    /// `Absent` and `Failure` are passed through and the transform is not run.
    #[inline]
    pub fn apply<X>(self, transform: X) -> Maybe<X::Output, E>
    where
        X: Transform<T, Error = E>,
    {
        match self.into_present() {
            Ok(value) => match transform.apply(value) {
                Ok(output) => Maybe::Present(output),
                Err(error) => Maybe::Failure(error),
            },
            Err(rest) => rest,
        }
    }

    /// Transforms the value with a function that may fail.
    ///
    /// `Ok(u)` becomes `Present(u)` and `Err(e)` becomes `Failure(e)`, whatever
    /// the previous state was. `f` is never called on `Absent` or `Failure`;
    /// those states are returned as they are.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let parsed = Maybe::<&str, String>::of("42")
    ///     .map(|s| s.parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(parsed, Maybe::of(42));
    ///
    /// let broken = Maybe::<&str, String>::of("x")
    ///     .map(|s| s.parse::<i32>().map_err(|e| e.to_string()));
    /// assert!(broken.is_error());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.apply(f)
    }

    /// Like [`map`](Maybe::map), for transforms that may produce no value.
    ///
    /// `Ok(None)` degrades to `Absent`; a present container never ends up
    /// holding "nothing".
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m = Maybe::<i32, &str>::of(1).map_nullable(|_| Ok(None::<i32>));
    /// assert!(m.is_absent());
    /// ```
    #[inline]
    pub fn map_nullable<U, F>(self, f: F) -> Maybe<U, E>
    where
        F: FnOnce(T) -> Result<Option<U>, E>,
    {
        match self.apply(f) {
            Maybe::Present(output) => Maybe::of_nullable(output),
            Maybe::Absent => Maybe::Absent,
            Maybe::Failure(error) => Maybe::Failure(error),
        }
    }

    /// Chains a step that produces its own container.
    ///
    /// The container returned by `f` is handed back as is, not wrapped again.
    /// An `Err` from `f` becomes `Failure`. `f` is not called unless a value
    /// is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// fn positive(x: i32) -> Result<Maybe<i32, &'static str>, &'static str> {
    ///     Ok(if x > 0 { Maybe::of(x) } else { Maybe::empty() })
    /// }
    ///
    /// assert_eq!(Maybe::of(3).flat_map(positive), Maybe::of(3));
    /// assert!(Maybe::of(-3).flat_map(positive).is_absent());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Maybe<U, E>
    where
        F: FnOnce(T) -> Result<Maybe<U, E>, E>,
    {
        self.apply(f).flatten()
    }

    /// Like [`flat_map`](Maybe::flat_map), for steps that may return no
    /// container at all.
    ///
    /// A missing container is a broken chain, not an absent value: `Ok(None)`
    /// becomes `Failure(MaybeError::NullChainStep.into())`.
    #[inline]
    pub fn flat_map_nullable<U, F>(self, f: F) -> Maybe<U, E>
    where
        F: FnOnce(T) -> Result<Option<Maybe<U, E>>, E>,
        E: From<MaybeError>,
    {
        match self.apply(f) {
            Maybe::Present(Some(next)) => next,
            Maybe::Present(None) => Maybe::Failure(E::from(MaybeError::NullChainStep)),
            Maybe::Absent => Maybe::Absent,
            Maybe::Failure(error) => Maybe::Failure(error),
        }
    }

    /// Transforms the captured error; other states are retyped and kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let m = Maybe::<i32, &str>::failure("timeout").map_error(|e| format!("db: {e}"));
    /// assert_eq!(m.get_error().map(String::as_str), Ok("db: timeout"));
    /// ```
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Maybe<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
            Self::Failure(error) => Maybe::Failure(f(error)),
        }
    }

    /// Keeps the value only if `predicate` accepts it, otherwise `Absent`.
    ///
    /// `Absent` and `Failure` are returned unchanged without calling the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// assert_eq!(Maybe::<i32, &str>::of(1).filter(|x| *x > 0), Maybe::of(1));
    /// assert!(Maybe::<i32, &str>::of(1).filter(|x| *x < 0).is_absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::EMPTY
                }
            },
            other => other,
        }
    }

    /// Calls `f` with the value, if any, and returns `self`.
    #[inline]
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the captured error, if any, and returns `self`.
    #[inline]
    pub fn peek_error<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            f(error);
        }
        self
    }

    /// Returns `self` if a value is present, otherwise `other`.
    ///
    /// A `Failure` is discarded in favour of `other` just like `Absent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let fallback = Maybe::<i32, &str>::of(7);
    /// assert_eq!(Maybe::failure("boom").or(fallback), Maybe::of(7));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            _ => other,
        }
    }

    /// Returns `self` if a value is present, otherwise the result of `f`.
    ///
    /// `f` is not called when a value is present.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            _ => f(),
        }
    }

    /// Returns the value, or `default` for `Absent` and `Failure`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Present(value) => value,
            _ => default,
        }
    }

    /// Returns the value, or the result of `f` for `Absent` and `Failure`.
    ///
    /// `f` is not called when a value is present.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            _ => f(),
        }
    }

    /// Returns the value, or `T::default()` for `Absent` and `Failure`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Recovers from a captured failure.
    ///
    /// Returns the value when present, or `handler(error)` for a `Failure`.
    /// Recovery is only defined for real failures: `Absent` is reported as
    /// [`MaybeError::NoValuePresent`].
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::{Maybe, MaybeError};
    ///
    /// let recovered = Maybe::<i32, &str>::of(1).map(|_| Err("boom")).on_error(|_| 99);
    /// assert_eq!(recovered, Ok(99));
    ///
    /// let absent = Maybe::<i32, &str>::empty().on_error(|_| 99);
    /// assert_eq!(absent, Err(MaybeError::NoValuePresent));
    /// ```
    #[inline]
    pub fn on_error<F>(self, handler: F) -> Result<T, MaybeError>
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Present(value) => Ok(value),
            Self::Failure(error) => Ok(handler(error)),
            Self::Absent => Err(MaybeError::NoValuePresent),
        }
    }

    /// Picks one of two chaining steps based on `condition`.
    ///
    /// Unless a value is present nothing is evaluated, not even `condition`.
    /// Otherwise exactly one branch runs, with the same failure capture as
    /// [`flat_map`](Maybe::flat_map).
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let verbose = true;
    /// let m = Maybe::<i32, &str>::of(5).fold(
    ///     || verbose,
    ///     |x| Ok(Maybe::of(x.to_string())),
    ///     |x| Ok(Maybe::of(format!("value={x}"))),
    /// );
    /// assert_eq!(m.get().map(String::as_str), Ok("value=5"));
    /// ```
    #[inline]
    pub fn fold<U, C, FF, TF>(self, condition: C, false_branch: FF, true_branch: TF) -> Maybe<U, E>
    where
        C: FnOnce() -> bool,
        FF: FnOnce(T) -> Result<Maybe<U, E>, E>,
        TF: FnOnce(T) -> Result<Maybe<U, E>, E>,
    {
        let value = match self.into_present() {
            Ok(value) => value,
            Err(rest) => return rest,
        };
        if condition() {
            Maybe::of(value).flat_map(true_branch)
        } else {
            Maybe::of(value).flat_map(false_branch)
        }
    }
}

impl<T, E> Maybe<Maybe<T, E>, E> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use maybe_rail::Maybe;
    ///
    /// let nested = Maybe::<_, &str>::of(Maybe::of(1));
    /// assert_eq!(nested.flatten(), Maybe::of(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T, E> {
        match self.into_present() {
            Ok(inner) => inner,
            Err(rest) => rest,
        }
    }
}
