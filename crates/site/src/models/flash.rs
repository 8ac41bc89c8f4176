//! One-time notices shown on the page after a redirect.

use serde::{Deserialize, Serialize};

/// Notice severity, also used as the CSS modifier in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// Lowercase name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A notice stored in the session until the next page renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    /// A success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_serializes_kind_lowercase() {
        let json = serde_json::to_value(Flash::error("nope")).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["message"], "nope");
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(FlashKind::Success.as_str(), "success");
        assert_eq!(FlashKind::Error.as_str(), "error");
    }
}
