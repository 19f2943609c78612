use core_types::Value;

/// Returns `true` if `value` is "empty".
///
/// Lists and host collections are empty when they hold no items, objects when
/// they have no keys. Boxed primitives are unwrapped and opaque values are
/// coerced to a primitive; primitives are empty when falsy. An opaque value
/// that does not coerce to a primitive is never empty.
pub fn empty(value: &Value) -> bool {
    let is_empty = match value {
        Value::List(_, items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Boxed(boxed) => !boxed.unwrap_primitive().is_truthy(),
        // A value that coerces to itself stays an object, and objects are truthy.
        Value::Opaque(host) => host.to_primitive().is_some_and(|p| !p.is_truthy()),
        Value::Primitive(p) => !p.is_truthy(),
    };

    log::trace!(target: "tools.empty", "{} -> empty={is_empty}", value.kind().tag());
    is_empty
}
