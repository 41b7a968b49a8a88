use futures::future::Either;
use futures::future::LocalBoxFuture;
use futures::future::Ready;
use futures::FutureExt;
use std::future::Future;
use std::future::IntoFuture;

/// A value that is either available now or will be produced by a future.
///
/// Resolvers, type resolvers and the executor itself return `MaybeAsync`
/// so that a request whose resolvers are all synchronous never allocates
/// or polls a future. [`map`](Self::map) and [`and_then`](Self::and_then)
/// stay synchronous while both sides are.
pub enum MaybeAsync<'a, T> {
    Ready(T),
    Pending(LocalBoxFuture<'a, T>),
}

impl<'a, T: 'a> MaybeAsync<'a, T> {
    pub fn pending(future: impl Future<Output = T> + 'a) -> Self {
        Self::Pending(future.boxed_local())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    /// The value, if it is already available.
    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending(_) => None,
        }
    }

    pub fn map<U: 'a>(self, f: impl FnOnce(T) -> U + 'a) -> MaybeAsync<'a, U> {
        match self {
            Self::Ready(value) => MaybeAsync::Ready(f(value)),
            Self::Pending(future) => MaybeAsync::Pending(future.map(f).boxed_local()),
        }
    }

    pub fn and_then<U: 'a>(
        self,
        f: impl FnOnce(T) -> MaybeAsync<'a, U> + 'a,
    ) -> MaybeAsync<'a, U> {
        match self {
            Self::Ready(value) => f(value),
            Self::Pending(future) => {
                MaybeAsync::Pending(async move { f(future.await).await }.boxed_local())
            },
        }
    }

    /// Waits for every item, preserving order. Stays synchronous when no
    /// item is pending.
    pub fn all(items: Vec<MaybeAsync<'a, T>>) -> MaybeAsync<'a, Vec<T>> {
        if items.iter().all(|item| !item.is_pending()) {
            return MaybeAsync::Ready(items.into_iter().filter_map(MaybeAsync::ready).collect());
        }
        MaybeAsync::Pending(
            futures::future::join_all(items.into_iter().map(IntoFuture::into_future))
                .boxed_local(),
        )
    }
}

impl<'a, T, E> MaybeAsync<'a, Result<T, E>>
where
    T: 'a,
    E: 'a,
{
    pub fn map_ok<U: 'a>(self, f: impl FnOnce(T) -> U + 'a) -> MaybeAsync<'a, Result<U, E>> {
        self.map(|result| result.map(f))
    }

    pub fn map_err<F: 'a>(self, f: impl FnOnce(E) -> F + 'a) -> MaybeAsync<'a, Result<T, F>> {
        self.map(|result| result.map_err(f))
    }
}

impl<T> From<T> for MaybeAsync<'_, T> {
    fn from(value: T) -> Self {
        Self::Ready(value)
    }
}

impl<'a, T: 'a> IntoFuture for MaybeAsync<'a, T> {
    type Output = T;
    type IntoFuture = Either<Ready<T>, LocalBoxFuture<'a, T>>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Ready(value) => Either::Left(futures::future::ready(value)),
            Self::Pending(future) => Either::Right(future),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for MaybeAsync<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}
