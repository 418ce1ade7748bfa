use std::collections::BTreeMap;

use crate::foundation::error::{CloudinaryError, CloudinaryResult};

/// A parsed JSON object as handed to the extension pass.
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Field name used for failures on the document itself.
const ROOT: &str = "<root>";

/// Strict conversion from a JSON value to a typed attribute.
///
/// Implementations never coerce across JSON kinds: a string is not a number, a float is not an
/// integer. Failures name `field`.
pub trait FromWire: Sized {
    /// Convert `value`, read from the wire field `field`.
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self>;
}

/// One entry of a structural mapping table.
pub struct Field<T> {
    pub(crate) wire: &'static str,
    pub(crate) set: fn(&mut T, &serde_json::Value) -> CloudinaryResult<()>,
}

impl<T> Field<T> {
    /// Table entry that hands the value of `wire` to `set`.
    ///
    /// `set` is only called for fields that are present and not `null`.
    pub const fn new(
        wire: &'static str,
        set: fn(&mut T, &serde_json::Value) -> CloudinaryResult<()>,
    ) -> Self {
        Self { wire, set }
    }

    /// Wire name this entry reads.
    pub fn wire_name(&self) -> &'static str {
        self.wire
    }
}

/// A typed description of one API response.
pub trait ApiResult: Default + 'static {
    /// Static `(wire_name, setter)` table applied by the structural pass.
    const FIELDS: &'static [Field<Self>];

    /// Populate an embedded base layer from the same document. Runs before [`ApiResult::FIELDS`].
    fn map_base(&mut self, _doc: &JsonObject) -> CloudinaryResult<()> {
        Ok(())
    }

    /// Extension pass: absorb fields the static table cannot express.
    fn absorb(&mut self, _doc: &JsonObject) -> CloudinaryResult<()> {
        Ok(())
    }

    /// Decode a parsed JSON document.
    fn from_document(doc: &serde_json::Value) -> CloudinaryResult<Self> {
        let obj = doc.as_object().ok_or_else(|| {
            CloudinaryError::deserialization(
                ROOT,
                format!("expected object, found {}", json_kind(doc)),
            )
        })?;
        let mut result = Self::default();
        populate(&mut result, obj)?;
        tracing::debug!(
            result = std::any::type_name::<Self>(),
            fields = obj.len(),
            "decoded result document"
        );
        Ok(result)
    }

    /// Parse and decode a JSON string.
    fn from_json_str(s: &str) -> CloudinaryResult<Self> {
        let doc: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| CloudinaryError::serde(format!("parse result JSON: {e}")))?;
        Self::from_document(&doc)
    }

    /// Parse and decode JSON from a reader.
    fn from_reader<R: std::io::Read>(r: R) -> CloudinaryResult<Self> {
        let doc: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| CloudinaryError::serde(format!("parse result JSON: {e}")))?;
        Self::from_document(&doc)
    }
}

/// Run both passes of `T` over `doc`.
///
/// [`ApiResult::map_base`] implementations call this to fill an embedded layer. Fields that are absent or `null` keep their defaults; fields not in the table are ignored.
pub fn populate<T: ApiResult>(target: &mut T, doc: &JsonObject) -> CloudinaryResult<()> {
    target.map_base(doc)?;
    for field in T::FIELDS {
        match doc.get(field.wire) {
            None | Some(serde_json::Value::Null) => {}
            Some(value) => (field.set)(target, value)?,
        }
    }
    target.absorb(doc)
}

/// Decode a nested result object stored under `field`.
pub(crate) fn decode_object<T: ApiResult>(
    value: &serde_json::Value,
    field: &str,
) -> CloudinaryResult<T> {
    let obj = value.as_object().ok_or_else(|| mismatch(field, "object", value))?;
    let mut result = T::default();
    populate(&mut result, obj).map_err(|e| e.nested_in(field))?;
    Ok(result)
}

/// Read an optional field outside the static table, e.g. from an extension pass.
///
/// Absent and `null` fields read as `None`.
pub fn read_field<T: FromWire>(
    doc: &JsonObject,
    field: &str,
) -> CloudinaryResult<Option<T>> {
    match doc.get(field) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => T::from_wire(value, field).map(Some),
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(field: &str, expected: &str, found: &serde_json::Value) -> CloudinaryError {
    CloudinaryError::deserialization(
        field,
        format!("expected {expected}, found {}", json_kind(found)),
    )
}

impl FromWire for String {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(field, "string", value))
    }
}

impl FromWire for bool {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        value.as_bool().ok_or_else(|| mismatch(field, "boolean", value))
    }
}

impl FromWire for i64 {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        value.as_i64().ok_or_else(|| mismatch(field, "integer", value))
    }
}

impl FromWire for u64 {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        value
            .as_u64()
            .ok_or_else(|| mismatch(field, "non-negative integer", value))
    }
}

impl FromWire for i32 {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        let n = i64::from_wire(value, field)?;
        i32::try_from(n).map_err(|_| {
            CloudinaryError::deserialization(field, format!("integer {n} is out of range"))
        })
    }
}

impl FromWire for f64 {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        value.as_f64().ok_or_else(|| mismatch(field, "number", value))
    }
}

impl FromWire for f32 {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        f64::from_wire(value, field).map(|v| v as f32)
    }
}

impl FromWire for serde_json::Value {
    fn from_wire(value: &serde_json::Value, _field: &str) -> CloudinaryResult<Self> {
        Ok(value.clone())
    }
}

impl<T: FromWire> FromWire for Option<T> {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        if value.is_null() {
            return Ok(None);
        }
        T::from_wire(value, field).map(Some)
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        let items = value.as_array().ok_or_else(|| mismatch(field, "array", value))?;
        items
            .iter()
            .enumerate()
            .map(|(i, item)| T::from_wire(item, &format!("{field}[{i}]")))
            .collect()
    }
}

impl<T: FromWire> FromWire for BTreeMap<String, T> {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        let obj = value.as_object().ok_or_else(|| mismatch(field, "object", value))?;
        obj.iter()
            .map(|(k, v)| Ok((k.clone(), T::from_wire(v, &format!("{field}.{k}"))?)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/results/mapper.rs"]
mod tests;
