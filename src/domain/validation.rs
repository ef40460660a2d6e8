// src/domain/validation.rs
//! Two-variant outcome type used instead of `Result` wherever a failure may
//! carry more than one reason.
//!
//! Two composition modes are offered and kept apart:
//!
//! * [`Validation::and_then`] / [`Validation::and_then_async`] chain steps
//!   sequentially and stop at the first failure, returning it unchanged.
//! * [`Validation::zip`] / [`Validation::zip_with`] evaluate independent
//!   values and concatenate their errors when more than one fails.

use std::future::Future;

/// Ordered, non-empty collection of errors. Order is discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors<E> {
    head: E,
    tail: Vec<E>,
}

#[allow(clippy::len_without_is_empty)]
impl<E> Errors<E> {
    pub fn one(error: E) -> Self {
        Self {
            head: error,
            tail: Vec::new(),
        }
    }

    /// Returns `None` for an empty vector; a failure can never be empty.
    pub fn from_vec(errors: Vec<E>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let head = iter.next()?;
        Some(Self {
            head,
            tail: iter.collect(),
        })
    }

    pub fn head(&self) -> &E {
        &self.head
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn push(&mut self, error: E) {
        self.tail.push(error);
    }

    pub fn append(mut self, other: Errors<E>) -> Self {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
        self
    }

    pub fn map<U>(self, mut f: impl FnMut(E) -> U) -> Errors<U> {
        Errors {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    pub fn into_vec(self) -> Vec<E> {
        self.into_iter().collect()
    }
}

impl<E> From<E> for Errors<E> {
    fn from(error: E) -> Self {
        Self::one(error)
    }
}

impl<E> IntoIterator for Errors<E> {
    type Item = E;
    type IntoIter = std::iter::Chain<std::iter::Once<E>, std::vec::IntoIter<E>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<E, T> {
    Success(T),
    Failure(Errors<E>),
}

impl<E, T> Validation<E, T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    pub fn fail(error: E) -> Self {
        Self::Failure(Errors::one(error))
    }

    pub fn failure(errors: Errors<E>) -> Self {
        Self::Failure(errors)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn errors(&self) -> Option<&Errors<E>> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Runs exactly one of the two branches.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Errors<E>) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Picks the branch first, then awaits only that branch's future.
    pub async fn match_async<R, S, SFut, F, FFut>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> SFut,
        SFut: Future<Output = R>,
        F: FnOnce(Errors<E>) -> FFut,
        FFut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(errors) => on_failure(errors).await,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Validation<E, U> {
        match self {
            Self::Success(value) => Validation::Success(f(value)),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    pub fn map_errors<F>(self, f: impl FnMut(E) -> F) -> Validation<F, T> {
        match self {
            Self::Success(value) => Validation::Success(value),
            Self::Failure(errors) => Validation::Failure(errors.map(f)),
        }
    }

    /// Sequential bind: `f` only runs on success, a failure propagates as-is.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Validation<E, U>) -> Validation<E, U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Asynchronous form of [`Validation::and_then`].
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Validation<E, U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Validation<E, U>>,
    {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(errors) => Validation::Failure(errors),
        }
    }

    /// Applicative combination: both sides are already evaluated, and when
    /// both failed the errors are concatenated left to right.
    pub fn zip<U>(self, other: Validation<E, U>) -> Validation<E, (T, U)> {
        match (self, other) {
            (Self::Success(left), Validation::Success(right)) => Validation::Success((left, right)),
            (Self::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.append(right))
            }
            (Self::Failure(errors), Validation::Success(_))
            | (Self::Success(_), Validation::Failure(errors)) => Validation::Failure(errors),
        }
    }

    pub fn zip_with<U, R>(
        self,
        other: Validation<E, U>,
        f: impl FnOnce(T, U) -> R,
    ) -> Validation<E, R> {
        self.zip(other).map(|(left, right)| f(left, right))
    }

    pub fn into_result(self) -> Result<T, Errors<E>> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl<E, T> From<Errors<E>> for Validation<E, T> {
    fn from(errors: Errors<E>) -> Self {
        Self::Failure(errors)
    }
}

impl<E, T> From<Result<T, E>> for Validation<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::fail(error),
        }
    }
}

/// Collects every item, accumulating all failures.
impl<E, T> FromIterator<Validation<E, T>> for Validation<E, Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Validation<E, T>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut failed: Option<Errors<E>> = None;
        for item in iter {
            match item {
                Validation::Success(value) => values.push(value),
                Validation::Failure(errors) => {
                    failed = Some(match failed.take() {
                        Some(acc) => acc.append(errors),
                        None => errors,
                    });
                }
            }
        }
        match failed {
            Some(errors) => Self::Failure(errors),
            None => Self::Success(values),
        }
    }
}
