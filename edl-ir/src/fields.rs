//! The fixed set of derived field names.
//!
//! These six names are computed by the generated runtime rather than
//! declared by the spec author. The set is threaded explicitly through the
//! parser, the validator, and the generator; it triples as the reserved
//! param-name set, the default `coreValues()` ordering, and the allowed
//! response-field keys.

/// Derived field names, in the default `coreValues()` order.
pub const DERIVED_FIELDS: [&str; 6] = [
    "source",
    "code",
    "description",
    "detail",
    "details",
    "recoverable",
];

/// The subset of derived fields available to message templates as
/// placeholders.
pub const RENDERABLE_FIELDS: [&str; 3] = ["source", "code", "recoverable"];

/// Returns true when `name` collides with a derived field and therefore may
/// not be declared as a category or error param.
pub fn is_derived_field(name: &str) -> bool {
    DERIVED_FIELDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_names() {
        assert!(is_derived_field("code"));
        assert!(is_derived_field("details"));
        assert!(!is_derived_field("tenant"));
    }

    #[test]
    fn test_renderable_is_subset() {
        for name in RENDERABLE_FIELDS {
            assert!(is_derived_field(name));
        }
    }
}
