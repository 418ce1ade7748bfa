//! Request-parameter and result serialization core of a Cloudinary media API client.
//!
//! The crate covers the two data transformations around an API call:
//!
//! 1. **Render**: a typed request ([`Params`]) is validated and rendered into a [`ParamMap`],
//!    the deterministic, key-ordered input of the external signer and transport.
//!    Structured [`Transformation`]s are compiled into their compact wire string on the way.
//! 2. **Decode**: a JSON response is mapped onto a typed result ([`ApiResult`]) in two passes,
//!    a table-driven structural pass followed by a per-type extension pass.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: rendering never depends on the order fields were set.
//! - **No IO**: HTTP, signing and retries belong to the caller's transport.
//! - **Strict kinds**: a response field of the wrong JSON kind is an error, never a silent default.
//!
//! ```
//! use cloudinary::{Params, Transformation, UpdateTransformParams};
//!
//! let params = UpdateTransformParams {
//!     strict: true,
//!     format: Some("jpg".to_string()),
//!     unsafe_transform: Some(Transformation::new().crop("fill").height(200)),
//!     ..UpdateTransformParams::new("w_100")
//! };
//! let map = params.to_param_map()?;
//! assert_eq!(map.get_text("unsafe_update"), Some("c_fill,h_200/jpg"));
//! # Ok::<(), cloudinary::CloudinaryError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod params;
mod results;
mod transform;

pub use foundation::config::{AuthToken, CLOUDINARY_URL_ENV, Configuration};
pub use foundation::error::{CloudinaryError, CloudinaryResult};
pub use params::contract::{BaseParams, Params};
pub use params::explicit::{ExplicitParams, ResponsiveBreakpoint};
pub use params::map::{ParamMap, ParamValue};
pub use params::update_transform::UpdateTransformParams;
pub use results::base::{ApiErrorBody, BaseResult, RawUploadResult, ResourceType};
pub use results::explicit::{
    AccessibilityAnalysis, Breakpoint, CinemagraphAnalysis, ColorShare,
    ColorblindAccessibilityAnalysis, Eager, ExplicitResult, Info, Predominant, ProfilingData,
    ProfilingDataAction, QualityAnalysis, ResponsiveBreakpointList,
};
pub use results::mapper::{ApiResult, Field, FromWire, JsonObject, populate, read_field};
pub use results::transform::{GetTransformResult, TransformDerived, UpdateTransformResult};
pub use transform::transformation::{TransformValue, Transformation, join_format};
