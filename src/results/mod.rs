//! Typed response objects populated from JSON documents.
//!
//! Decoding runs in two passes: a structural pass driven by each type's static
//! `(wire_name, setter)` table, then an extension pass (`ApiResult::absorb`) that sees the raw
//! document for fields the table cannot express.

/// Build an `ApiResult::FIELDS` table of `wire name => struct field` entries.
macro_rules! wire_fields {
    ($ty:ty { $($wire:literal => $field:ident),* $(,)? }) => {
        &[$(
            $crate::results::mapper::Field {
                wire: $wire,
                set: |target: &mut $ty, value: &serde_json::Value| {
                    target.$field = $crate::results::mapper::FromWire::from_wire(value, $wire)?;
                    Ok(())
                },
            }
        ),*]
    };
}

/// Implement `FromWire` for nested result types decoded from JSON objects.
macro_rules! wire_objects {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::results::mapper::FromWire for $ty {
                fn from_wire(
                    value: &serde_json::Value,
                    field: &str,
                ) -> $crate::foundation::error::CloudinaryResult<Self> {
                    $crate::results::mapper::decode_object(value, field)
                }
            }
        )*
    };
}

pub(crate) mod mapper;

pub(crate) mod base;
pub(crate) mod explicit;
pub(crate) mod transform;
