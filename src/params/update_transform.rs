use serde::Deserialize;

use crate::foundation::error::{CloudinaryError, CloudinaryResult};
use crate::params::contract::{BaseParams, Params};
use crate::params::map::ParamMap;
use crate::transform::transformation::{Transformation, join_format};

/// Parameters for updating a named transformation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UpdateTransformParams {
    /// Transformation being updated, in its string form. Mandatory.
    pub transformation: String,
    /// Extension appended to [`UpdateTransformParams::unsafe_transform`].
    pub format: Option<String>,
    /// Replacement definition for the transformation.
    pub unsafe_transform: Option<Transformation>,
    /// Whether the transformation is allowed when strict transformations are enabled.
    pub strict: bool,
    /// Shared request parameters.
    #[serde(skip)]
    pub base: BaseParams,
}

impl UpdateTransformParams {
    /// Create parameters for updating `transformation`.
    pub fn new(transformation: impl Into<String>) -> Self {
        Self {
            transformation: transformation.into(),
            ..Self::default()
        }
    }
}

impl Params for UpdateTransformParams {
    fn check(&self) -> CloudinaryResult<()> {
        if self.transformation.is_empty() {
            return Err(CloudinaryError::validation("transformation", "must be set"));
        }
        Ok(())
    }

    fn base(&self) -> &BaseParams {
        &self.base
    }

    fn write_params(&self, map: &mut ParamMap) -> CloudinaryResult<()> {
        map.put("transformation", self.transformation.as_str());
        map.put("allowed_for_strict", self.strict);

        if let Some(unsafe_transform) = &self.unsafe_transform {
            map.add(
                "unsafe_update",
                join_format(&unsafe_transform.generate(), self.format.as_deref()),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/update_transform.rs"]
mod tests;
