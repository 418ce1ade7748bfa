/// Convenience result type used across the crate.
pub type CloudinaryResult<T> = Result<T, CloudinaryError>;

/// Top-level error taxonomy used by parameter, transformation and result APIs.
#[derive(thiserror::Error, Debug)]
pub enum CloudinaryError {
    /// A request field is missing or malformed; raised before any network activity.
    #[error("validation error: {field}: {message}")]
    Validation {
        /// Name of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A response field has a JSON kind that does not match its typed attribute.
    #[error("deserialization error: field '{field}': {message}")]
    Deserialization {
        /// Wire path of the offending field, e.g. `eager[0].width`.
        field: String,
        /// What was expected and what was found.
        message: String,
    },

    /// Invalid or conflicting client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Errors when serializing or parsing raw documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CloudinaryError {
    /// Build a [`CloudinaryError::Validation`] value.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a [`CloudinaryError::Deserialization`] value.
    pub fn deserialization(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Deserialization {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Build a [`CloudinaryError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`CloudinaryError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Field named by a validation or deserialization failure.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::Deserialization { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Prefix the field path of a deserialization failure with its enclosing field.
    pub(crate) fn nested_in(self, parent: &str) -> Self {
        match self {
            Self::Deserialization { field, message } => Self::Deserialization {
                field: format!("{parent}.{field}"),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
