use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CloudinaryError, CloudinaryResult};
use crate::params::contract::{BaseParams, Params};
use crate::params::map::ParamMap;
use crate::transform::transformation::Transformation;

/// Request for generating responsive breakpoints of an asset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveBreakpoint {
    /// Keep the derived images generated for each breakpoint.
    pub create_derived: bool,
    /// Transformation applied before computing breakpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformation: Option<Transformation>,
    /// Format of the derived images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Largest breakpoint width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    /// Smallest breakpoint width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    /// Minimum size difference in bytes between two breakpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes_step: Option<u64>,
    /// Upper bound on the number of breakpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_images: Option<u32>,
}

impl ResponsiveBreakpoint {
    fn check(&self, index: usize) -> CloudinaryResult<()> {
        if let (Some(min), Some(max)) = (self.min_width, self.max_width)
            && min > max
        {
            return Err(CloudinaryError::validation(
                format!("responsive_breakpoints[{index}].min_width"),
                format!("must not exceed max_width ({min} > {max})"),
            ));
        }
        if self.max_images == Some(0) {
            return Err(CloudinaryError::validation(
                format!("responsive_breakpoints[{index}].max_images"),
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Parameters for applying actions to an already uploaded asset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplicitParams {
    /// Identifier of the asset. Mandatory.
    pub public_id: String,
    /// Delivery type of the asset, e.g. `upload` or `private`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Derived images to generate eagerly.
    pub eager: Vec<Transformation>,
    /// Generate eager transformations asynchronously.
    pub eager_async: Option<bool>,
    /// Webhook notified when eager transformations complete.
    pub eager_notification_url: Option<String>,
    /// Webhook notified when the request completes.
    pub notification_url: Option<String>,
    /// Tags assigned to the asset.
    pub tags: Vec<String>,
    /// Contextual key/value metadata.
    pub context: BTreeMap<String, String>,
    /// Invalidate cached copies on the CDN.
    pub invalidate: Option<bool>,
    /// Overwrite existing derived assets.
    pub overwrite: Option<bool>,
    /// Return IPTC, XMP and Exif metadata.
    pub image_metadata: Option<bool>,
    /// Return predominant colors and color histogram.
    pub colors: Option<bool>,
    /// Return coordinates of detected faces.
    pub faces: Option<bool>,
    /// Return a quality analysis.
    pub quality_analysis: Option<bool>,
    /// Return an accessibility analysis.
    pub accessibility_analysis: Option<bool>,
    /// Return a cinemagraph analysis.
    pub cinemagraph_analysis: Option<bool>,
    /// Return a perceptual hash.
    pub phash: Option<bool>,
    /// Moderation add-on to run.
    pub moderation: Option<String>,
    /// Raw-convert add-on to run.
    pub raw_convert: Option<String>,
    /// OCR add-on to run.
    pub ocr: Option<String>,
    /// Categorization add-on to run.
    pub categorization: Option<String>,
    /// Object detection add-on to run.
    pub detection: Option<String>,
    /// Responsive breakpoints to compute.
    pub responsive_breakpoints: Vec<ResponsiveBreakpoint>,
    /// Shared request parameters.
    #[serde(skip)]
    pub base: BaseParams,
}

impl ExplicitParams {
    /// Create parameters for the asset `public_id`.
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            ..Self::default()
        }
    }

    /// Former name of [`ExplicitParams::image_metadata`].
    #[deprecated(note = "use `image_metadata` instead")]
    pub fn metadata(&self) -> Option<bool> {
        self.image_metadata
    }

    /// Former name of [`ExplicitParams::image_metadata`].
    #[deprecated(note = "use `image_metadata` instead")]
    pub fn set_metadata(&mut self, value: Option<bool>) {
        self.image_metadata = value;
    }
}

impl Params for ExplicitParams {
    fn check(&self) -> CloudinaryResult<()> {
        if self.public_id.is_empty() {
            return Err(CloudinaryError::validation("public_id", "must be set"));
        }
        for (i, bp) in self.responsive_breakpoints.iter().enumerate() {
            bp.check(i)?;
        }
        Ok(())
    }

    fn base(&self) -> &BaseParams {
        &self.base
    }

    fn write_params(&self, map: &mut ParamMap) -> CloudinaryResult<()> {
        map.add("public_id", self.public_id.as_str());
        map.add_opt("type", self.kind.as_deref());

        let eager: Vec<String> = self
            .eager
            .iter()
            .map(Transformation::generate)
            .filter(|t| !t.is_empty())
            .collect();
        map.add("eager", eager.join("|"));
        map.add_opt("eager_async", self.eager_async);
        map.add_opt("eager_notification_url", self.eager_notification_url.as_deref());
        map.add_opt("notification_url", self.notification_url.as_deref());

        map.add("tags", self.tags.clone());
        map.add("context", &self.context);

        for (key, flag) in [
            ("invalidate", self.invalidate),
            ("overwrite", self.overwrite),
            ("image_metadata", self.image_metadata),
            ("colors", self.colors),
            ("faces", self.faces),
            ("quality_analysis", self.quality_analysis),
            ("accessibility_analysis", self.accessibility_analysis),
            ("cinemagraph_analysis", self.cinemagraph_analysis),
            ("phash", self.phash),
        ] {
            map.add_opt(key, flag);
        }

        for (key, addon) in [
            ("moderation", &self.moderation),
            ("raw_convert", &self.raw_convert),
            ("ocr", &self.ocr),
            ("categorization", &self.categorization),
            ("detection", &self.detection),
        ] {
            map.add_opt(key, addon.as_deref());
        }

        if !self.responsive_breakpoints.is_empty() {
            let encoded = serde_json::to_string(&self.responsive_breakpoints).map_err(|e| {
                CloudinaryError::serde(format!("encode responsive_breakpoints: {e}"))
            })?;
            map.add("responsive_breakpoints", encoded);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/explicit.rs"]
mod tests;
