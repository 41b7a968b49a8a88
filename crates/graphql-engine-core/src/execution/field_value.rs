use crate::execution::ResolveInfo;
use crate::types::ArgumentValues;
use crate::types::FieldFn;
use crate::types::Resolved;
use crate::Value;
use futures::stream::LocalBoxStream;
use futures::Stream;
use futures::StreamExt;
use indexmap::IndexMap;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// The values resolvers produce and receive as their `source`.
///
/// Plain JSON data covers most needs. `Map` and `List` let resolvers mix
/// plain data with the richer variants below; `Object` carries an opaque
/// host value that only custom resolvers understand; `Function` is a lazy
/// attribute the default resolver calls; `Stream` is an async sequence
/// (list items, or subscription events); `Typed` names the concrete object
/// type of a value returned for an abstract type.
#[derive(Clone, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Value(Value),
    List(Vec<FieldValue>),
    Map(IndexMap<String, FieldValue>),
    Object(Arc<dyn Any + Send + Sync>),
    Function(FieldFn),
    Stream(ValueStream),
    Typed {
        type_name: String,
        value: Box<FieldValue>,
    },
}

impl FieldValue {
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    pub fn function(
        f: impl Fn(&ResolveInfo<'_>, &ArgumentValues) -> Resolved + Send + Sync + 'static,
    ) -> Self {
        Self::Function(Arc::new(f))
    }

    pub fn stream(stream: impl Stream<Item = FieldValue> + 'static) -> Self {
        Self::Stream(ValueStream::new(stream))
    }

    pub fn typed(type_name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::Typed {
            type_name: type_name.into(),
            value: Box::new(value.into()),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Null | Self::Value(Value::Null) => true,
            Self::Typed { value, .. } => value.is_null(),
            _ => false,
        }
    }

    /// Strips any `Typed` wrappers.
    pub fn into_untyped(self) -> FieldValue {
        match self {
            Self::Typed { value, .. } => value.into_untyped(),
            other => other,
        }
    }

    /// The opaque host value, if it has type `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Object(object) => object.downcast_ref::<T>(),
            Self::Typed { value, .. } => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The explicit `__typename` of this value: from a `Typed` wrapper, or
    /// a `__typename` string key of a map.
    pub fn typename(&self) -> Option<&str> {
        match self {
            Self::Typed { type_name, .. } => Some(type_name),
            Self::Map(map) => match map.get("__typename") {
                Some(Self::Value(Value::String(name))) => Some(name),
                _ => None,
            },
            Self::Value(Value::Object(obj)) => obj.get("__typename").and_then(Value::as_str),
            _ => None,
        }
    }

    /// Converts to plain JSON. Opaque objects, functions and streams have
    /// no JSON form.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Self::Null => Some(Value::Null),
            Self::Value(value) => Some(value.clone()),
            Self::List(items) => items
                .iter()
                .map(FieldValue::to_value)
                .collect::<Option<Vec<_>>>()
                .map(Value::Array),
            Self::Map(map) => map
                .iter()
                .map(|(key, value)| value.to_value().map(|value| (key.clone(), value)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(Value::Object),
            Self::Typed { value, .. } => value.to_value(),
            Self::Object(_) | Self::Function(_) | Self::Stream(_) => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Value(Value::String(value.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Value(Value::String(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Value(Value::Bool(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Stream(_) => f.write_str("Stream(..)"),
            Self::Typed { type_name, value } => f
                .debug_struct("Typed")
                .field("type_name", type_name)
                .field("value", value)
                .finish(),
        }
    }
}

/// A shareable handle on a stream of field values.
///
/// Clones share the same underlying stream, which can be taken exactly
/// once.
#[derive(Clone)]
pub struct ValueStream(Rc<RefCell<Option<LocalBoxStream<'static, FieldValue>>>>);

impl ValueStream {
    pub fn new(stream: impl Stream<Item = FieldValue> + 'static) -> Self {
        Self(Rc::new(RefCell::new(Some(stream.boxed_local()))))
    }

    /// Takes the stream out of the handle. Later calls return `None`.
    pub fn take(&self) -> Option<LocalBoxStream<'static, FieldValue>> {
        self.0.borrow_mut().take()
    }
}
