use crate::execution::FieldValue;
use crate::execution::ResolveInfo;
use crate::types::ArgumentValues;
use crate::types::FieldResolver;
use crate::types::Resolved;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Wraps field resolution. Receives the next resolver in the chain, which
/// it may call, skip, or call with altered inputs.
pub type Middleware = Arc<
    dyn Fn(&FieldResolver, &FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
        + Send
        + Sync,
>;

/// Builds middleware chains around resolvers, once per resolver.
///
/// The first middleware is the outermost: it runs first and sees the final
/// result last.
#[derive(Default)]
pub(crate) struct MiddlewareManager {
    middleware: Vec<Middleware>,
    chains: RefCell<HashMap<usize, FieldResolver>>,
}

impl MiddlewareManager {
    pub(crate) fn new(middleware: Vec<Middleware>) -> Self {
        Self {
            middleware,
            chains: RefCell::default(),
        }
    }

    /// The resolver to call in place of `resolver`.
    pub(crate) fn get_field_resolver(&self, resolver: &FieldResolver) -> FieldResolver {
        if self.middleware.is_empty() {
            return resolver.clone();
        }
        let key = Arc::as_ptr(resolver) as *const () as usize;
        self.chains
            .borrow_mut()
            .entry(key)
            .or_insert_with(|| {
                self.middleware
                    .iter()
                    .rev()
                    .fold(resolver.clone(), |next, middleware| {
                        let middleware = middleware.clone();
                        chained(move |source, info, args| middleware(&next, source, info, args))
                    })
            })
            .clone()
    }
}

fn chained(
    resolve: impl Fn(&FieldValue, &ResolveInfo<'_>, &ArgumentValues) -> Resolved
        + Send
        + Sync
        + 'static,
) -> FieldResolver {
    Arc::new(resolve)
}
