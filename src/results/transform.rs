use std::collections::BTreeMap;

use crate::foundation::error::CloudinaryResult;
use crate::results::base::{BaseResult, ResourceType};
use crate::results::mapper::{ApiResult, Field, JsonObject, populate};

/// An asset derived with a named transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformDerived {
    /// Identifier of the source asset.
    pub public_id: String,
    /// Kind of asset.
    pub resource_type: Option<ResourceType>,
    /// Delivery type.
    pub kind: String,
    /// File format.
    pub format: String,
    /// Delivery URL.
    pub url: String,
    /// HTTPS delivery URL.
    pub secure_url: String,
    /// Size in bytes.
    pub bytes: i64,
    /// Identifier of the derived asset.
    pub id: String,
}

impl ApiResult for TransformDerived {
    const FIELDS: &'static [Field<Self>] = wire_fields!(TransformDerived {
        "public_id" => public_id,
        "resource_type" => resource_type,
        "type" => kind,
        "format" => format,
        "url" => url,
        "secure_url" => secure_url,
        "bytes" => bytes,
        "id" => id,
    });
}

wire_objects!(TransformDerived);

/// Details of a named transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetTransformResult {
    /// Common response fields.
    pub base: BaseResult,
    /// Transformation name.
    pub name: String,
    /// Whether the transformation is allowed when strict transformations are enabled.
    pub allowed_for_strict: bool,
    /// Whether any asset was derived with it.
    pub used: bool,
    /// Whether this is a named transformation.
    pub named: bool,
    /// Parameters of each chained step.
    pub info: Vec<BTreeMap<String, serde_json::Value>>,
    /// Assets derived with it.
    pub derived: Vec<TransformDerived>,
}

impl GetTransformResult {
    /// Former name of [`GetTransformResult::allowed_for_strict`].
    #[deprecated(note = "use `allowed_for_strict` instead")]
    pub fn strict(&self) -> bool {
        self.allowed_for_strict
    }

    /// Former name of [`GetTransformResult::allowed_for_strict`].
    #[deprecated(note = "use `allowed_for_strict` instead")]
    pub fn set_strict(&mut self, value: bool) {
        self.allowed_for_strict = value;
    }
}

impl ApiResult for GetTransformResult {
    const FIELDS: &'static [Field<Self>] = wire_fields!(GetTransformResult {
        "name" => name,
        "allowed_for_strict" => allowed_for_strict,
        "used" => used,
        "named" => named,
        "info" => info,
        "derived" => derived,
    });

    fn map_base(&mut self, doc: &JsonObject) -> CloudinaryResult<()> {
        populate(&mut self.base, doc)
    }
}

/// Response of updating a named transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateTransformResult {
    /// Transformation details, when the server echoes them.
    pub transform: GetTransformResult,
    /// Outcome message, e.g. `updated`.
    pub message: String,
}

impl ApiResult for UpdateTransformResult {
    const FIELDS: &'static [Field<Self>] =
        wire_fields!(UpdateTransformResult { "message" => message });

    fn map_base(&mut self, doc: &JsonObject) -> CloudinaryResult<()> {
        populate(&mut self.transform, doc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/results/transform.rs"]
mod tests;
