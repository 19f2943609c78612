mod number;
mod value;

#[cfg(feature = "json")]
mod json;

pub use number::format_number;
pub use value::{BoxedPrimitive, ListKind, Primitive, ToPrimitive, Value, ValueKind};
