use std::fmt;

use qrcodes_core::FetchStatus;
use serde::Deserialize;
use thiserror::Error;

/// Product a code points at, as embedded by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRef {
    #[serde(default)]
    pub title: Option<String>,
}

/// One entry of the `/api/qrcodes` response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeRecord {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub product_title: Option<String>,
    #[serde(default)]
    pub product: Option<ProductRef>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub discount_code: Option<String>,
    #[serde(default)]
    pub scans: u64,
    #[serde(default)]
    pub created_at: String,
}

impl QrCodeRecord {
    /// Product title, preferring the flat field over the embedded product.
    pub fn resolved_product_title(&self) -> Option<&str> {
        self.product_title
            .as_deref()
            .or_else(|| self.product.as_ref().and_then(|p| p.title.as_deref()))
            .filter(|title| !title.is_empty())
    }

    /// Discount code, treating an empty string as none.
    pub fn resolved_discount_code(&self) -> Option<&str> {
        self.discount_code.as_deref().filter(|code| !code.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A new snapshot of the collection fetch, emitted on every transition.
    Status(FetchStatus<QrCodeRecord>),
    /// A fetch gave up after `attempts` tries. Always follows the status
    /// snapshot that rolled the phase back.
    FetchFailed { error: FetchError, attempts: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    Network,
}

impl FailureKind {
    /// Failures worth retrying: the same request may succeed a moment later.
    pub fn is_transient(&self) -> bool {
        match self {
            FailureKind::Timeout | FailureKind::Network => true,
            FailureKind::HttpStatus(code) => *code == 429 || (500..600).contains(code),
            FailureKind::InvalidUrl
            | FailureKind::RedirectLimitExceeded
            | FailureKind::TooLarge { .. }
            | FailureKind::UnsupportedContentType { .. }
            | FailureKind::Decode => false,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "malformed response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
