//! Dynamic value model shared by the pure helpers.
//!
//! `Value` is a closed set of runtime kinds: primitives, ordered lists (plain
//! arrays and host collections), key-value objects, boxed primitive wrappers,
//! and opaque host values that only know how to coerce themselves to a
//! primitive.

use crate::number::format_number;
use std::fmt;
use std::sync::Arc;

/// A primitive scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Primitive {
    /// Standard truthiness: `""`, `0`, `-0`, `NaN`, `false`, `null` and
    /// `undefined` are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Primitive::Undefined | Primitive::Null => false,
            Primitive::Bool(b) => *b,
            Primitive::Number(n) => !(*n == 0.0 || n.is_nan()),
            Primitive::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Undefined => f.write_str("undefined"),
            Primitive::Null => f.write_str("null"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => f.write_str(&format_number(*n)),
            Primitive::String(s) => f.write_str(s),
        }
    }
}

/// Object wrapper around a primitive (`new String("x")` and friends).
#[derive(Clone, Debug, PartialEq)]
pub enum BoxedPrimitive {
    String(String),
    Bool(bool),
    Number(f64),
}

impl BoxedPrimitive {
    pub fn unwrap_primitive(&self) -> Primitive {
        match self {
            BoxedPrimitive::String(s) => Primitive::String(s.clone()),
            BoxedPrimitive::Bool(b) => Primitive::Bool(*b),
            BoxedPrimitive::Number(n) => Primitive::Number(*n),
        }
    }
}

/// Ordered, index-addressable containers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Array,
    NodeList,
    RadioNodeList,
    HtmlCollection,
    DomTokenList,
    NamedNodeMap,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Array => "[object Array]",
            ListKind::NodeList => "[object NodeList]",
            ListKind::RadioNodeList => "[object RadioNodeList]",
            ListKind::HtmlCollection => "[object HTMLCollection]",
            ListKind::DomTokenList => "[object DOMTokenList]",
            ListKind::NamedNodeMap => "[object NamedNodeMap]",
        }
    }
}

/// Coercion hook for host values the model has no dedicated variant for.
pub trait ToPrimitive: fmt::Debug + Send + Sync {
    /// Returns `None` when the value coerces to itself rather than to a
    /// primitive (the plain-object `valueOf` behavior).
    fn to_primitive(&self) -> Option<Primitive>;
}

#[derive(Clone, Debug)]
pub enum Value {
    Primitive(Primitive),
    List(ListKind, Vec<Value>),
    Object(Vec<(String, Value)>),
    Boxed(BoxedPrimitive),
    Opaque(Arc<dyn ToPrimitive>),
}

/// Runtime kind tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    List(ListKind),
    Object,
    BoxedBoolean,
    BoxedNumber,
    BoxedString,
    Opaque,
}

impl ValueKind {
    /// `Object.prototype.toString` style tag, used in logs.
    pub fn tag(self) -> &'static str {
        match self {
            ValueKind::Undefined => "[object Undefined]",
            ValueKind::Null => "[object Null]",
            ValueKind::Boolean | ValueKind::BoxedBoolean => "[object Boolean]",
            ValueKind::Number | ValueKind::BoxedNumber => "[object Number]",
            ValueKind::String | ValueKind::BoxedString => "[object String]",
            ValueKind::List(kind) => kind.tag(),
            ValueKind::Object | ValueKind::Opaque => "[object Object]",
        }
    }
}

impl Value {
    pub const fn undefined() -> Self {
        Value::Primitive(Primitive::Undefined)
    }

    pub const fn null() -> Self {
        Value::Primitive(Primitive::Null)
    }

    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(ListKind::Array, items.into_iter().map(Into::into).collect())
    }

    pub fn collection<I, T>(kind: ListKind, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(kind, items.into_iter().map(Into::into).collect())
    }

    pub fn object<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        let mut out: Vec<(String, Value)> = Vec::new();
        for (k, v) in entries {
            let k = k.into();
            let v = v.into();
            // Keys are unique; a repeated key overwrites in place and keeps its first position.
            match out.iter_mut().find(|(existing, _)| *existing == k) {
                Some(slot) => slot.1 = v,
                None => out.push((k, v)),
            }
        }
        Value::Object(out)
    }

    pub fn boxed_string(s: impl Into<String>) -> Self {
        Value::Boxed(BoxedPrimitive::String(s.into()))
    }

    pub fn boxed_bool(b: bool) -> Self {
        Value::Boxed(BoxedPrimitive::Bool(b))
    }

    pub fn boxed_number(n: f64) -> Self {
        Value::Boxed(BoxedPrimitive::Number(n))
    }

    pub fn opaque<T: ToPrimitive + 'static>(value: T) -> Self {
        Value::Opaque(Arc::new(value))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Primitive(Primitive::Undefined) => ValueKind::Undefined,
            Value::Primitive(Primitive::Null) => ValueKind::Null,
            Value::Primitive(Primitive::Bool(_)) => ValueKind::Boolean,
            Value::Primitive(Primitive::Number(_)) => ValueKind::Number,
            Value::Primitive(Primitive::String(_)) => ValueKind::String,
            Value::List(kind, _) => ValueKind::List(*kind),
            Value::Object(_) => ValueKind::Object,
            Value::Boxed(BoxedPrimitive::Bool(_)) => ValueKind::BoxedBoolean,
            Value::Boxed(BoxedPrimitive::Number(_)) => ValueKind::BoxedNumber,
            Value::Boxed(BoxedPrimitive::String(_)) => ValueKind::BoxedString,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Numeric view used by argument parsing: number primitives and boxed numbers only.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Primitive(Primitive::Number(n)) | Value::Boxed(BoxedPrimitive::Number(n)) => {
                Some(*n)
            }
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Primitive(a), Value::Primitive(b)) => a == b,
            (Value::List(ka, a), Value::List(kb, b)) => ka == kb && a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Boxed(a), Value::Boxed(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Primitive(p) => fmt::Display::fmt(p, f),
            Value::List(ListKind::Array, items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    match item {
                        Value::Primitive(Primitive::Undefined | Primitive::Null) => {}
                        other => fmt::Display::fmt(other, f)?,
                    }
                }
                Ok(())
            }
            Value::List(kind, _) => f.write_str(kind.tag()),
            Value::Object(_) => f.write_str("[object Object]"),
            Value::Boxed(b) => fmt::Display::fmt(&b.unwrap_primitive(), f),
            Value::Opaque(o) => match o.to_primitive() {
                Some(p) => fmt::Display::fmt(&p, f),
                None => f.write_str("[object Object]"),
            },
        }
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        Value::Primitive(p)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(Primitive::Bool(b))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Primitive(Primitive::Number(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Primitive(Primitive::Number(n as f64))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Primitive(Primitive::Number(n as f64))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Primitive(Primitive::Number(n as f64))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(Primitive::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(Primitive::String(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(ListKind::Array, items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::null())
    }
}
