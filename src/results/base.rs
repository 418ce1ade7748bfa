use crate::foundation::error::{CloudinaryError, CloudinaryResult};
use crate::results::mapper::{ApiResult, Field, FromWire, JsonObject, mismatch, populate};

const LIMIT_HEADER: &str = "x-featureratelimit-limit";
const REMAINING_HEADER: &str = "x-featureratelimit-remaining";
const RESET_HEADER: &str = "x-featureratelimit-reset";

/// Error block returned by the API in place of a successful payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiErrorBody {
    /// Human-readable error message.
    pub message: String,
}

impl ApiResult for ApiErrorBody {
    const FIELDS: &'static [Field<Self>] = wire_fields!(ApiErrorBody { "message" => message });
}

wire_objects!(ApiErrorBody);

/// Fields common to every response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseResult {
    /// HTTP status code, set by the transport.
    pub status_code: u16,
    /// Error block, when the API reported a failure.
    pub error: Option<ApiErrorBody>,
    /// Rate limit for the called feature.
    pub limit: Option<i64>,
    /// Remaining calls within the rate limit window.
    pub remaining: Option<i64>,
    /// When the rate limit window resets, as sent by the server.
    pub reset: Option<String>,
    /// The raw response document.
    pub raw: serde_json::Value,
}

impl BaseResult {
    /// Whether the API reported an error.
    pub fn is_error(&self) -> bool {
        self.error.is_some() || self.status_code >= 400
    }

    /// Apply rate limit values from response headers. Header names match case-insensitively.
    pub fn apply_headers<'a, I>(&mut self, headers: I) -> CloudinaryResult<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, value) in headers {
            match name.to_ascii_lowercase().as_str() {
                LIMIT_HEADER => self.limit = Some(parse_header_int(LIMIT_HEADER, value)?),
                REMAINING_HEADER => {
                    self.remaining = Some(parse_header_int(REMAINING_HEADER, value)?)
                }
                RESET_HEADER => self.reset = Some(value.to_string()),
                _ => {}
            }
        }
        Ok(())
    }
}

impl ApiResult for BaseResult {
    const FIELDS: &'static [Field<Self>] = wire_fields!(BaseResult { "error" => error });

    fn absorb(&mut self, doc: &JsonObject) -> CloudinaryResult<()> {
        self.raw = serde_json::Value::Object(doc.clone());
        Ok(())
    }
}

fn parse_header_int(name: &str, value: &str) -> CloudinaryResult<i64> {
    value.trim().parse().map_err(|_| {
        CloudinaryError::deserialization(name, format!("expected integer header, found '{value}'"))
    })
}

/// Kind of stored asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceType {
    /// Images, including PDFs and animated GIFs.
    Image,
    /// Video and audio.
    Video,
    /// Any other file.
    Raw,
    /// A kind this client does not know yet.
    Other(String),
}

impl ResourceType {
    /// Wire name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Raw => "raw",
            Self::Other(s) => s,
        }
    }
}

impl FromWire for ResourceType {
    fn from_wire(value: &serde_json::Value, field: &str) -> CloudinaryResult<Self> {
        let s = value.as_str().ok_or_else(|| mismatch(field, "string", value))?;
        Ok(match s {
            "image" => Self::Image,
            "video" => Self::Video,
            "raw" => Self::Raw,
            other => Self::Other(other.to_string()),
        })
    }
}

/// Fields describing a stored asset, shared by upload-like responses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawUploadResult {
    /// Common response fields.
    pub base: BaseResult,
    /// Identifier of the asset.
    pub public_id: String,
    /// Immutable asset id.
    pub asset_id: String,
    /// Version of the asset.
    pub version: i64,
    /// Signature for verifying the response.
    pub signature: String,
    /// Kind of asset.
    pub resource_type: Option<ResourceType>,
    /// Delivery type, e.g. `upload`.
    pub kind: String,
    /// Creation timestamp as sent by the server.
    pub created_at: String,
    /// Tags assigned to the asset.
    pub tags: Vec<String>,
    /// Size in bytes.
    pub bytes: i64,
    /// Entity tag of the stored file.
    pub etag: String,
    /// Delivery URL.
    pub url: String,
    /// HTTPS delivery URL.
    pub secure_url: String,
    /// Name of the uploaded file.
    pub original_filename: String,
    /// Whether the asset is a placeholder.
    pub placeholder: bool,
    /// Access mode, `public` or `authenticated`.
    pub access_mode: String,
    /// File format.
    pub format: String,
}

impl RawUploadResult {
    /// Former name of [`RawUploadResult::url`].
    #[deprecated(note = "use `url` instead")]
    pub fn uri(&self) -> &str {
        &self.url
    }

    /// Former name of [`RawUploadResult::url`].
    #[deprecated(note = "use `url` instead")]
    pub fn set_uri(&mut self, value: impl Into<String>) {
        self.url = value.into();
    }

    /// Former name of [`RawUploadResult::secure_url`].
    #[deprecated(note = "use `secure_url` instead")]
    pub fn secure_uri(&self) -> &str {
        &self.secure_url
    }

    /// Former name of [`RawUploadResult::secure_url`].
    #[deprecated(note = "use `secure_url` instead")]
    pub fn set_secure_uri(&mut self, value: impl Into<String>) {
        self.secure_url = value.into();
    }

    /// Former name of [`RawUploadResult::bytes`].
    #[deprecated(note = "use `bytes` instead")]
    pub fn length(&self) -> i64 {
        self.bytes
    }

    /// Former name of [`RawUploadResult::bytes`].
    #[deprecated(note = "use `bytes` instead")]
    pub fn set_length(&mut self, value: i64) {
        self.bytes = value;
    }
}

impl ApiResult for RawUploadResult {
    const FIELDS: &'static [Field<Self>] = wire_fields!(RawUploadResult {
        "public_id" => public_id,
        "asset_id" => asset_id,
        "version" => version,
        "signature" => signature,
        "resource_type" => resource_type,
        "type" => kind,
        "created_at" => created_at,
        "tags" => tags,
        "bytes" => bytes,
        "etag" => etag,
        "url" => url,
        "secure_url" => secure_url,
        "original_filename" => original_filename,
        "placeholder" => placeholder,
        "access_mode" => access_mode,
        "format" => format,
    });

    fn map_base(&mut self, doc: &JsonObject) -> CloudinaryResult<()> {
        populate(&mut self.base, doc)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/results/base.rs"]
mod tests;
