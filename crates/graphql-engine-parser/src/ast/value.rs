use crate::ast::Loc;
use crate::ast::Name;
use crate::ast::Variable;

/// An input value literal.
///
/// Int and Float literals keep their source text; interpreting them is the
/// job of the scalar that receives them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

/// A value literal that the parser guaranteed contains no variables.
pub type ConstValue = Value;

impl Value {
    pub fn loc(&self) -> Option<&Loc> {
        match self {
            Self::Variable(v) => v.loc.as_ref(),
            Self::Int(v) => v.loc.as_ref(),
            Self::Float(v) => v.loc.as_ref(),
            Self::String(v) => v.loc.as_ref(),
            Self::Boolean(v) => v.loc.as_ref(),
            Self::Null(v) => v.loc.as_ref(),
            Self::Enum(v) => v.loc.as_ref(),
            Self::List(v) => v.loc.as_ref(),
            Self::Object(v) => v.loc.as_ref(),
        }
    }

    /// Whether the literal (recursively) contains no variable references.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List(list) => list.values.iter().all(Value::is_const),
            Self::Object(obj) => obj.fields.iter().all(|f| f.value.is_const()),
            _ => true,
        }
    }

    pub fn int(raw: impl Into<String>) -> Self {
        Self::Int(IntValue {
            value: raw.into(),
            loc: None,
        })
    }

    pub fn float(raw: impl Into<String>) -> Self {
        Self::Float(FloatValue {
            value: raw.into(),
            loc: None,
        })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(StringValue {
            value: value.into(),
            block: false,
            loc: None,
        })
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean(BooleanValue { value, loc: None })
    }

    pub fn null() -> Self {
        Self::Null(NullValue { loc: None })
    }

    pub fn enum_value(value: impl Into<String>) -> Self {
        Self::Enum(EnumValue {
            value: value.into(),
            loc: None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub loc: Option<Loc>,
}

/// A string literal. `value` is the cooked value (escapes resolved, block
/// strings dedented); `block` records whether it was written as `"""`.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub block: bool,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub value: String,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub loc: Option<Loc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub loc: Option<Loc>,
}
