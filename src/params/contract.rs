use std::collections::BTreeMap;

use crate::foundation::error::CloudinaryResult;
use crate::params::map::{ParamMap, ParamValue};

/// Parameters shared by every request type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseParams {
    custom: BTreeMap<String, ParamValue>,
}

impl BaseParams {
    /// Add a parameter the typed API does not expose.
    ///
    /// A typed field rendering the same key takes precedence.
    pub fn add_custom_param(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.custom.insert(key.into(), value.into());
    }

    /// Custom parameters in key order.
    pub fn custom_params(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.custom.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn write_params(&self, map: &mut ParamMap) {
        for (key, value) in &self.custom {
            map.add(key.clone(), value.clone());
        }
    }
}

/// A validated, renderable description of one API request.
///
/// Implementors provide [`Params::check`] and [`Params::write_params`]. Callers only ever use
/// [`Params::to_param_map`], which validates before rendering, renders the shared
/// [`BaseParams`] first and the type's own fields second.
pub trait Params {
    /// Validate the populated fields, naming the first missing or invalid one.
    fn check(&self) -> CloudinaryResult<()>;

    /// Shared parameters of this request.
    fn base(&self) -> &BaseParams;

    /// Render this type's own fields. Only called after a successful [`Params::check`].
    fn write_params(&self, map: &mut ParamMap) -> CloudinaryResult<()>;

    /// Validate and render the canonical parameter map.
    fn to_param_map(&self) -> CloudinaryResult<ParamMap> {
        self.check()?;
        let mut map = ParamMap::new();
        self.base().write_params(&mut map);
        self.write_params(&mut map)?;
        tracing::debug!(
            params = std::any::type_name::<Self>(),
            keys = map.len(),
            "rendered parameter map"
        );
        Ok(map)
    }
}
