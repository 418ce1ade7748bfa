use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::foundation::error::{CloudinaryError, CloudinaryResult};

/// Environment variable read by [`Configuration::from_env`].
pub const CLOUDINARY_URL_ENV: &str = "CLOUDINARY_URL";

const URL_SCHEME: &str = "cloudinary://";

static GLOBAL: OnceLock<Configuration> = OnceLock::new();

/// Opaque token used by token-based authentication.
///
/// The token is produced and validated elsewhere; this crate only carries it to the transport.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct AuthToken(String);

impl AuthToken {
    /// Wrap a pre-validated token string. Empty tokens are rejected.
    pub fn new(token: impl Into<String>) -> CloudinaryResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(CloudinaryError::validation("auth_token", "must be non-empty"));
        }
        Ok(Self(token))
    }

    /// Token text as handed to the transport.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AuthToken {
    type Error = CloudinaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Account-level settings consumed by the transport and signing collaborators.
///
/// A configuration is an immutable value. It is either passed explicitly to the collaborator
/// that needs it, or installed once at process start with [`Configuration::install_global`].
#[derive(Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Name of the cloud (account) all requests are addressed to.
    pub cloud_name: String,
    /// API key.
    pub api_key: String,
    /// API secret used by the external signer.
    pub api_secret: String,
    /// Token for token-based authentication.
    pub auth_token: Option<AuthToken>,
    /// Generate 32 character URL signatures instead of 20.
    pub long_url_signature: bool,
    /// Address of the proxy server used for API calls.
    pub api_proxy: Option<String>,
}

impl Configuration {
    /// Create a configuration for one account.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            ..Self::default()
        }
    }

    /// Attach a token for token-based authentication.
    pub fn with_auth_token(mut self, token: AuthToken) -> Self {
        self.auth_token = Some(token);
        self
    }

    /// Toggle 32 character URL signatures.
    pub fn with_long_url_signature(mut self, enabled: bool) -> Self {
        self.long_url_signature = enabled;
        self
    }

    /// Route API calls through a proxy. An empty address clears it.
    pub fn with_api_proxy(mut self, proxy: impl Into<String>) -> Self {
        let proxy = proxy.into();
        self.api_proxy = (!proxy.is_empty()).then_some(proxy);
        self
    }

    /// Parse `cloudinary://<api_key>:<api_secret>@<cloud_name>[?option=value&...]`.
    ///
    /// Recognized options: `api_proxy`, `long_url_signature`, `auth_token`.
    pub fn from_url(url: &str) -> CloudinaryResult<Self> {
        let rest = url.trim().strip_prefix(URL_SCHEME).ok_or_else(|| {
            CloudinaryError::config(format!("configuration url must start with '{URL_SCHEME}'"))
        })?;

        let (authority, query) = match rest.split_once('?') {
            Some((a, q)) => (a, Some(q)),
            None => (rest, None),
        };
        let (credentials, cloud_name) = authority.rsplit_once('@').ok_or_else(|| {
            CloudinaryError::config("configuration url is missing '@<cloud_name>'")
        })?;
        let (api_key, api_secret) = credentials.split_once(':').ok_or_else(|| {
            CloudinaryError::config("configuration url is missing '<api_key>:<api_secret>'")
        })?;

        let mut cfg = Self::new(cloud_name.trim_end_matches('/'), api_key, api_secret);
        for pair in query.unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "api_proxy" => cfg = cfg.with_api_proxy(value),
                "long_url_signature" => cfg.long_url_signature = parse_flag(key, value)?,
                "auth_token" => cfg.auth_token = Some(AuthToken::new(value)?),
                other => tracing::debug!(option = other, "ignoring unknown configuration option"),
            }
        }

        cfg.validate()?;
        Ok(cfg)
    }

    /// Read the configuration url from the `CLOUDINARY_URL` environment variable.
    pub fn from_env() -> CloudinaryResult<Self> {
        let url = std::env::var(CLOUDINARY_URL_ENV)
            .map_err(|e| CloudinaryError::config(format!("read {CLOUDINARY_URL_ENV}: {e}")))?;
        Self::from_url(&url)
    }

    /// Check that the configuration can address an account.
    pub fn validate(&self) -> CloudinaryResult<()> {
        if self.cloud_name.trim().is_empty() {
            return Err(CloudinaryError::config("cloud_name must be set"));
        }
        if self.api_secret.is_empty() && !self.api_key.is_empty() {
            return Err(CloudinaryError::config("api_secret must be set when api_key is set"));
        }
        Ok(())
    }

    /// Signature length the external signer should emit for delivery URLs.
    pub fn url_signature_length(&self) -> usize {
        if self.long_url_signature { 32 } else { 20 }
    }

    /// Install this configuration as the process-wide default.
    ///
    /// Succeeds exactly once per process; the installed value is never mutated afterwards.
    pub fn install_global(self) -> CloudinaryResult<&'static Configuration> {
        self.validate()?;
        let cloud_name = self.cloud_name.clone();
        GLOBAL
            .set(self)
            .map_err(|_| CloudinaryError::config("global configuration is already installed"))?;
        tracing::info!(cloud_name = %cloud_name, "installed global configuration");
        GLOBAL
            .get()
            .ok_or_else(|| CloudinaryError::config("global configuration is not installed"))
    }

    /// Process-wide configuration, if one was installed.
    pub fn global() -> Option<&'static Configuration> {
        GLOBAL.get()
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("auth_token", &self.auth_token)
            .field("long_url_signature", &self.long_url_signature)
            .field("api_proxy", &self.api_proxy)
            .finish()
    }
}

fn parse_flag(key: &str, value: &str) -> CloudinaryResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(CloudinaryError::config(format!(
            "option '{key}' expects true/false, got '{other}'"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
