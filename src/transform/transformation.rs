use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CloudinaryError, CloudinaryResult};

/// A single transformation parameter value, already in wire text form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformValue(String);

impl TransformValue {
    /// Wire text of this value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TransformValue {
    fn from(v: &str) -> Self {
        Self(v.to_string())
    }
}

impl From<String> for TransformValue {
    fn from(v: String) -> Self {
        Self(v)
    }
}

macro_rules! numeric_transform_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TransformValue {
                fn from(v: $t) -> Self {
                    Self(v.to_string())
                }
            }
        )*
    };
}

numeric_transform_value!(i32, i64, u32, u64, f32, f64);

#[derive(Clone, Debug, Default, PartialEq)]
struct TransformStep {
    params: BTreeMap<&'static str, String>, // keyed by short code
    raw: Option<String>,
}

impl TransformStep {
    fn is_empty(&self) -> bool {
        self.params.is_empty() && self.raw.as_deref().is_none_or(str::is_empty)
    }

    fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .params
            .iter()
            .map(|(code, value)| format!("{code}_{value}"))
            .collect();
        if let Some(raw) = self.raw.as_deref().filter(|r| !r.is_empty()) {
            parts.push(raw.to_string());
        }
        parts.join(",")
    }
}

/// Structured description of a media manipulation.
///
/// A transformation is a chain of steps. Within a step, parameters render sorted by their short
/// wire code, so the compiled form never depends on the order setters were called in.
///
/// ```
/// use cloudinary::Transformation;
///
/// let t = Transformation::new().height(200).crop("fill").chain().angle(90);
/// assert_eq!(t.generate(), "c_fill,h_200/a_90");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Transformation {
    steps: Vec<TransformStep>,
}

// Empty steps never render, so they take no part in equality.
impl PartialEq for Transformation {
    fn eq(&self, other: &Self) -> bool {
        self.rendered_steps().eq(other.rendered_steps())
    }
}

macro_rules! transform_params {
    ($($(#[$doc:meta])* $method:ident => $code:literal),* $(,)?) => {
        const SCALAR_PARAMS: &[(&str, &str)] = &[$((stringify!($method), $code)),*];

        impl Transformation {
            $(
                $(#[$doc])*
                pub fn $method(self, value: impl Into<TransformValue>) -> Self {
                    self.with_code($code, value.into().0)
                }
            )*
        }
    };
}

transform_params! {
    /// Target width (`w`).
    width => "w",
    /// Target height (`h`).
    height => "h",
    /// Crop mode (`c`), e.g. `fill`, `scale`, `thumb`.
    crop => "c",
    /// Gravity (`g`), e.g. `face`, `north_east`.
    gravity => "g",
    /// Quality (`q`).
    quality => "q",
    /// Delivery format conversion (`f`).
    fetch_format => "f",
    /// Rotation angle (`a`).
    angle => "a",
    /// Named effect with optional argument (`e`), e.g. `sepia:50`.
    effect => "e",
    /// Corner radius (`r`).
    radius => "r",
    /// Opacity (`o`).
    opacity => "o",
    /// Border (`bo`).
    border => "bo",
    /// Background color (`b`).
    background => "b",
    /// Horizontal offset.
    x => "x",
    /// Vertical offset.
    y => "y",
    /// Zoom factor (`z`).
    zoom => "z",
    /// Device pixel ratio.
    dpr => "dpr",
    /// Overlay layer (`l`).
    overlay => "l",
    /// Underlay layer (`u`).
    underlay => "u",
    /// Color used by effects and overlays (`co`).
    color => "co",
    /// Aspect ratio (`ar`).
    aspect_ratio => "ar",
    /// Video start offset (`so`).
    start_offset => "so",
    /// Video end offset (`eo`).
    end_offset => "eo",
    /// Video duration (`du`).
    duration => "du",
    /// Video codec (`vc`).
    video_codec => "vc",
    /// Audio codec (`ac`).
    audio_codec => "ac",
    /// Bit rate (`br`).
    bit_rate => "br",
    /// Page or layer of a multi-page asset (`pg`).
    page => "pg",
    /// Density for vector rasterization (`dn`).
    density => "dn",
    /// Placeholder image used when the asset is missing (`d`).
    default_image => "d",
}

const LIST_PARAMS: &[(&str, &str)] = &[("flags", "fl"), ("named", "t")];

const RAW_PARAM: &str = "raw_transformation";

fn code_for(name: &str) -> Option<&'static str> {
    SCALAR_PARAMS
        .iter()
        .chain(LIST_PARAMS)
        .find(|(long, _)| *long == name)
        .map(|(_, code)| *code)
}

impl Transformation {
    /// Create an empty transformation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new chained step; subsequent setters apply to it.
    pub fn chain(mut self) -> Self {
        if self.steps.last().is_some_and(|s| !s.is_empty()) {
            self.steps.push(TransformStep::default());
        }
        self
    }

    /// Flags (`fl`), joined with `.`.
    pub fn flags<I, S>(self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_code("fl", join_list(flags))
    }

    /// Named transformations (`t`), joined with `.`.
    pub fn named<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_code("t", join_list(names))
    }

    /// Literal text appended after the structured parameters of the current step.
    pub fn raw_transformation(mut self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        self.current_step().raw = (!raw.is_empty()).then_some(raw);
        self
    }

    /// Set a parameter of the current step by its long name.
    pub fn set(self, name: &str, value: impl Into<TransformValue>) -> CloudinaryResult<Self> {
        let value = value.into().0;
        if name == RAW_PARAM {
            return Ok(self.raw_transformation(value));
        }
        let code = code_for(name).ok_or_else(|| {
            CloudinaryError::validation(name, "unknown transformation parameter")
        })?;
        Ok(self.with_code(code, value))
    }

    /// Whether the compiled form would be empty.
    pub fn is_empty(&self) -> bool {
        self.steps.iter().all(TransformStep::is_empty)
    }

    /// Compile to the canonical `/`-joined wire string.
    ///
    /// Pure and idempotent: the description is not modified.
    pub fn generate(&self) -> String {
        self.rendered_steps()
            .map(TransformStep::render)
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Compile and append a literal format extension, see [`join_format`].
    pub fn generate_with_format(&self, format: Option<&str>) -> String {
        join_format(&self.generate(), format)
    }

    /// Build from a JSON description.
    ///
    /// Accepts an object (one step keyed by long parameter names), an array of objects or raw
    /// strings (a chain), or a raw string.
    pub fn from_json(value: &serde_json::Value) -> CloudinaryResult<Self> {
        match value {
            serde_json::Value::String(raw) => Ok(Self::new().raw_transformation(raw.as_str())),
            serde_json::Value::Object(map) => Self::new().apply_object(map),
            serde_json::Value::Array(items) => {
                let mut t = Self::new();
                for item in items {
                    t = match item {
                        serde_json::Value::String(raw) => t.raw_transformation(raw.as_str()),
                        serde_json::Value::Object(map) => t.apply_object(map)?,
                        _ => {
                            return Err(CloudinaryError::validation(
                                "transformation",
                                "chain items must be objects or strings",
                            ));
                        }
                    }
                    .chain();
                }
                Ok(t)
            }
            _ => Err(CloudinaryError::validation(
                "transformation",
                "expected an object, an array or a string",
            )),
        }
    }

    fn apply_object(
        mut self,
        map: &serde_json::Map<String, serde_json::Value>,
    ) -> CloudinaryResult<Self> {
        for (name, value) in map {
            self = self.set(name, json_value_text(name, value)?)?;
        }
        Ok(self)
    }

    fn rendered_steps(&self) -> impl Iterator<Item = &TransformStep> {
        self.steps.iter().filter(|s| !s.is_empty())
    }

    fn current_step(&mut self) -> &mut TransformStep {
        if self.steps.is_empty() {
            self.steps.push(TransformStep::default());
        }
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }

    fn with_code(mut self, code: &'static str, value: String) -> Self {
        let step = self.current_step();
        if value.is_empty() {
            step.params.remove(code);
        } else {
            step.params.insert(code, value);
        }
        self
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.generate())
    }
}

impl Serialize for Transformation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.generate())
    }
}

impl<'de> Deserialize<'de> for Transformation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}

/// Join a compiled transformation and an optional format extension with a single `/`.
///
/// An absent or empty format leaves the compiled string untouched (no trailing slash).
pub fn join_format(compiled: &str, format: Option<&str>) -> String {
    match format.filter(|f| !f.is_empty()) {
        Some(format) => format!("{compiled}/{format}"),
        None => compiled.to_string(),
    }
}

fn join_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(Into::into)
        .filter(|s: &String| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

// Same text the numeric builder setters produce, so `2.0` renders as `2`.
fn json_number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        TransformValue::from(i).0
    } else if let Some(u) = n.as_u64() {
        TransformValue::from(u).0
    } else {
        n.as_f64()
            .map_or_else(|| n.to_string(), |f| TransformValue::from(f).0)
    }
}

fn json_value_text(name: &str, value: &serde_json::Value) -> CloudinaryResult<String> {
    match value {
        serde_json::Value::String(s) => Ok(s.clone()),
        serde_json::Value::Number(n) => Ok(json_number_text(n)),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        serde_json::Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    serde_json::Value::String(s) => parts.push(s.clone()),
                    serde_json::Value::Number(n) => parts.push(json_number_text(n)),
                    _ => {
                        return Err(CloudinaryError::validation(
                            name,
                            "list items must be strings or numbers",
                        ));
                    }
                }
            }
            Ok(join_list(parts))
        }
        _ => Err(CloudinaryError::validation(
            name,
            "expected a string, number, boolean or list",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/transformation.rs"]
mod tests;
