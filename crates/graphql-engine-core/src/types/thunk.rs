use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

/// A value supplied either directly or by a producer that runs on first
/// access.
///
/// Field maps, interface lists and union member lists are `Thunk`s so that
/// types which refer to each other can be declared in any order. The
/// producer runs at most once; its result is memoized.
pub struct Thunk<T> {
    cell: OnceLock<T>,
    init: Option<Arc<dyn Fn() -> T + Send + Sync>>,
}

impl<T: Default> Thunk<T> {
    pub fn ready(value: T) -> Self {
        Self {
            cell: OnceLock::from(value),
            init: None,
        }
    }

    pub fn lazy(init: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            cell: OnceLock::new(),
            init: Some(Arc::new(init)),
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| match &self.init {
            Some(init) => init(),
            None => T::default(),
        })
    }

    /// Mutable access, forcing the producer first.
    pub(crate) fn get_mut(&mut self) -> &mut T {
        self.get();
        self.init = None;
        match self.cell.get_mut() {
            Some(value) => value,
            None => unreachable!("thunk was forced above"),
        }
    }
}

impl<T: Default> Default for Thunk<T> {
    fn default() -> Self {
        Self::ready(T::default())
    }
}

impl<T: Clone + Default> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        match self.cell.get() {
            Some(value) => Self::ready(value.clone()),
            None => Self {
                cell: OnceLock::new(),
                init: self.init.clone(),
            },
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => value.fmt(f),
            None => f.write_str("Thunk(<unresolved>)"),
        }
    }
}
