use std::collections::BTreeMap;

use crate::foundation::error::{CloudinaryError, CloudinaryResult};
use crate::results::base::RawUploadResult;
use crate::results::mapper::{
    ApiResult, Field, FromWire, JsonObject, mismatch, populate, read_field,
};

/// Derived image generated by an eager transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Eager {
    /// Delivery URL of the derived image.
    pub url: String,
    /// HTTPS delivery URL of the derived image.
    pub secure_url: String,
    /// Transformation applied.
    pub transformation: String,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Size in bytes.
    pub bytes: i64,
    /// File format.
    pub format: String,
}

impl Eager {
    /// Former name of [`Eager::url`].
    #[deprecated(note = "use `url` instead")]
    pub fn uri(&self) -> &str {
        &self.url
    }

    /// Former name of [`Eager::url`].
    #[deprecated(note = "use `url` instead")]
    pub fn set_uri(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    /// Former name of [`Eager::secure_url`].
    #[deprecated(note = "use `secure_url` instead")]
    pub fn secure_uri(&self) -> &str {
        &self.secure_url
    }

    /// Former name of [`Eager::secure_url`].
    #[deprecated(note = "use `secure_url` instead")]
    pub fn set_secure_uri(&mut self, value: impl Into<String>) {
        self.secure_url = value.into();
    }
}

impl ApiResult for Eager {
    const FIELDS: &'static [Field<Self>] = wire_fields!(Eager {
        "url" => url,
        "secure_url" => secure_url,
        "transformation" => transformation,
        "width" => width,
        "height" => height,
        "bytes" => bytes,
        "format" => format,
    });
}

/// One computed responsive breakpoint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakpoint {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Size in bytes.
    pub bytes: i64,
    /// Delivery URL.
    pub url: String,
    /// HTTPS delivery URL.
    pub secure_url: String,
}

impl ApiResult for Breakpoint {
    const FIELDS: &'static [Field<Self>] = wire_fields!(Breakpoint {
        "width" => width,
        "height" => height,
        "bytes" => bytes,
        "url" => url,
        "secure_url" => secure_url,
    });
}

/// Breakpoints computed for one requested transformation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponsiveBreakpointList {
    /// Transformation the breakpoints were computed for.
    pub transformation: String,
    /// Breakpoints, widest first as sent by the server.
    pub breakpoints: Vec<Breakpoint>,
}

impl ApiResult for ResponsiveBreakpointList {
    const FIELDS: &'static [Field<Self>] = wire_fields!(ResponsiveBreakpointList {
        "transformation" => transformation,
        "breakpoints" => breakpoints,
    });
}

/// Output of add-ons run on the asset, one opaque section per add-on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Info {
    /// Categorization add-on output.
    pub categorization: Option<serde_json::Value>,
    /// Object detection add-on output.
    pub detection: Option<serde_json::Value>,
    /// OCR add-on output.
    pub ocr: Option<serde_json::Value>,
    /// Raw-convert add-on output.
    pub raw_convert: Option<serde_json::Value>,
}

impl ApiResult for Info {
    const FIELDS: &'static [Field<Self>] = wire_fields!(Info {
        "categorization" => categorization,
        "detection" => detection,
        "ocr" => ocr,
        "raw_convert" => raw_convert,
    });
}

/// Quality analysis scores, each between 0 and 1.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QualityAnalysis {
    /// Estimated JPEG quality.
    pub jpeg_quality: f64,
    /// Estimated JPEG chroma quality.
    pub jpeg_chroma: f64,
    /// Focus.
    pub focus: f64,
    /// Noise.
    pub noise: f64,
    /// Contrast.
    pub contrast: f64,
    /// Exposure.
    pub exposure: f64,
    /// Saturation.
    pub saturation: f64,
    /// Lighting.
    pub lighting: f64,
    /// Pixel-level quality.
    pub pixel_score: f64,
    /// Color quality.
    pub color_score: f64,
    /// DCT artifact score.
    pub dct: f64,
    /// Blockiness.
    pub blockiness: f64,
    /// Chroma subsampling.
    pub chroma_subsampling: f64,
    /// Resolution.
    pub resolution: f64,
}

impl ApiResult for QualityAnalysis {
    const FIELDS: &'static [Field<Self>] = wire_fields!(QualityAnalysis {
        "jpeg_quality" => jpeg_quality,
        "jpeg_chroma" => jpeg_chroma,
        "focus" => focus,
        "noise" => noise,
        "contrast" => contrast,
        "exposure" => exposure,
        "saturation" => saturation,
        "lighting" => lighting,
        "pixel_score" => pixel_score,
        "color_score" => color_score,
        "dct" => dct,
        "blockiness" => blockiness,
        "chroma_subsampling" => chroma_subsampling,
        "resolution" => resolution,
    });
}

/// Cinemagraph analysis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CinemagraphAnalysis {
    /// Likelihood that the asset is a cinemagraph.
    pub cinemagraph_score: f64,
}

impl ApiResult for CinemagraphAnalysis {
    const FIELDS: &'static [Field<Self>] = wire_fields!(CinemagraphAnalysis {
        "cinemagraph_score" => cinemagraph_score,
    });
}

/// A color and its share of the image, sent as a `[color, percent]` pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorShare {
    /// Color name or hex code.
    pub color: String,
    /// Share of the image in percent.
    pub percent: f64,
}

impl FromWire for ColorShare {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        match value.as_array().map(Vec::as_slice) {
            Some([color, percent]) => Ok(Self {
                color: String::from_wire(color, &format!("{field}[0]"))?,
                percent: f64::from_wire(percent, &format!("{field}[1]"))?,
            }),
            Some(items) => Err(CloudinaryError::deserialization(
                field,
                format!("expected [color, percent] pair, found {} items", items.len()),
            )),
            None => Err(mismatch(field, "array", value)),
        }
    }
}

/// Predominant colors according to two palettes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Predominant {
    /// Google palette.
    pub google: Vec<ColorShare>,
    /// Cloudinary palette.
    pub cloudinary: Vec<ColorShare>,
}

impl ApiResult for Predominant {
    const FIELDS: &'static [Field<Self>] = wire_fields!(Predominant {
        "google" => google,
        "cloudinary" => cloudinary,
    });
}

/// Processing statistics of one action.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilingDataAction {
    /// Action name.
    pub action: String,
    /// Action parameter.
    pub parameter: String,
    /// Size before the action.
    pub presize: Vec<i64>,
    /// Size after the action.
    pub postsize: Vec<i64>,
}

impl ApiResult for ProfilingDataAction {
    const FIELDS: &'static [Field<Self>] = wire_fields!(ProfilingDataAction {
        "action" => action,
        "parameter" => parameter,
        "presize" => presize,
        "postsize" => postsize,
    });
}

/// Processing statistics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfilingData {
    /// CPU time.
    pub cpu: i64,
    /// Wall time.
    pub real: i64,
    /// Action these statistics describe.
    pub action: Option<ProfilingDataAction>,
}

impl ApiResult for ProfilingData {
    const FIELDS: &'static [Field<Self>] = wire_fields!(ProfilingData {
        "cpu" => cpu,
        "real" => real,
        "action" => action,
    });
}

/// Details of the colorblind accessibility analysis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorblindAccessibilityAnalysis {
    /// Distinctness of edges.
    pub distinct_edges: f64,
    /// Distinctness of colors.
    pub distinct_colors: f64,
    /// The two colors hardest to tell apart.
    pub most_indistinct_pair: Vec<String>,
}

impl ApiResult for ColorblindAccessibilityAnalysis {
    const FIELDS: &'static [Field<Self>] = wire_fields!(ColorblindAccessibilityAnalysis {
        "distinct_edges" => distinct_edges,
        "distinct_colors" => distinct_colors,
        "most_indistinct_pair" => most_indistinct_pair,
    });
}

/// How well the image works for colorblind viewers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccessibilityAnalysis {
    /// Overall score.
    pub colorblind_accessibility_score: f64,
    /// Score details.
    pub colorblind_accessibility_analysis: Option<ColorblindAccessibilityAnalysis>,
}

impl ApiResult for AccessibilityAnalysis {
    const FIELDS: &'static [Field<Self>] = wire_fields!(AccessibilityAnalysis {
        "colorblind_accessibility_score" => colorblind_accessibility_score,
        "colorblind_accessibility_analysis" => colorblind_accessibility_analysis,
    });
}

wire_objects!(
    Eager,
    Breakpoint,
    ResponsiveBreakpointList,
    Info,
    QualityAnalysis,
    CinemagraphAnalysis,
    Predominant,
    ProfilingDataAction,
    ProfilingData,
    ColorblindAccessibilityAnalysis,
    AccessibilityAnalysis,
);

/// Response of the explicit call, which applies actions to an uploaded asset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplicitResult {
    /// Asset fields shared with upload responses.
    pub upload: RawUploadResult,
    /// Derived images generated by eager transformations.
    pub eager: Vec<Eager>,
    /// Computed responsive breakpoints, one list per requested transformation.
    pub responsive_breakpoints: Vec<ResponsiveBreakpointList>,
    /// Processing status, e.g. `pending` for asynchronous calls.
    pub status: String,
    /// Add-on output.
    pub info: Option<Info>,
    /// Quality analysis.
    pub quality_analysis: Option<QualityAnalysis>,
    /// Overall quality score.
    pub quality_score: f64,
    /// Color histogram.
    pub colors: Vec<ColorShare>,
    /// Cinemagraph analysis.
    pub cinemagraph_analysis: Option<CinemagraphAnalysis>,
    /// IPTC, XMP and Exif metadata.
    pub image_metadata: BTreeMap<String, String>,
    /// Perceptual hash.
    pub phash: String,
    /// Coordinates of detected faces as `[x, y, width, height]`.
    pub faces: Vec<Vec<i32>>,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Slot token.
    pub slot_token: String,
    /// Number of pages of multi-page assets.
    pub pages: i32,
    /// Likelihood that the image is an illustration rather than a photo, between 0 and 1.
    pub illustration_score: f32,
    /// Predominant colors.
    pub predominant: Option<Predominant>,
    /// Processing statistics.
    pub profiling_data: Vec<ProfilingData>,
    /// Accessibility analysis.
    pub accessibility_analysis: Option<AccessibilityAnalysis>,
}

impl ExplicitResult {
    /// Former name of [`ExplicitResult::image_metadata`].
    #[deprecated(note = "use `image_metadata` instead")]
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.image_metadata
    }

    /// Former name of [`ExplicitResult::image_metadata`].
    #[deprecated(note = "use `image_metadata` instead")]
    pub fn set_metadata(&mut self, value: BTreeMap<String, String>) {
        self.image_metadata = value;
    }
}

impl ApiResult for ExplicitResult {
    const FIELDS: &'static [Field<Self>] = wire_fields!(ExplicitResult {
        "eager" => eager,
        "status" => status,
        "info" => info,
        "quality_analysis" => quality_analysis,
        "quality_score" => quality_score,
        "colors" => colors,
        "cinemagraph_analysis" => cinemagraph_analysis,
        "image_metadata" => image_metadata,
        "phash" => phash,
        "faces" => faces,
        "width" => width,
        "height" => height,
        "slot_token" => slot_token,
        "pages" => pages,
        "illustration_score" => illustration_score,
        "predominant" => predominant,
        "profiling_data" => profiling_data,
        "accessibility_analysis" => accessibility_analysis,
    });

    fn map_base(&mut self, doc: &JsonObject) -> CloudinaryResult<()> {
        populate(&mut self.upload, doc)
    }

    fn absorb(&mut self, doc: &JsonObject) -> CloudinaryResult<()> {
        if let Some(lists) = read_field(doc, "responsive_breakpoints")? {
            self.responsive_breakpoints = lists;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/results/explicit.rs"]
mod tests;
