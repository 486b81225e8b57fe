use crate::response::ErrorResponse;
use thiserror::Error;

/// HTTP-shaped status carried by every validation failure.
pub const VALIDATION_STATUS: u16 = 400;

/// Status reported when a call failed without any HTTP response.
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "voiceId", "base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "generation_validator", "client_builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Unified error type for every client operation.
///
/// There are exactly two kinds: input rejected before any request was sent,
/// and a remote call that did not succeed. Both map onto the same
/// [`ErrorResponse`] envelope via [`Error::to_response`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Transport error: HTTP {status}: {message}")]
    Transport { status: u16, message: String },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new transport error for the given HTTP status.
    pub fn transport(status: u16, msg: impl Into<String>) -> Self {
        Error::Transport {
            status,
            message: msg.into(),
        }
    }

    /// HTTP-shaped status of this error (400 for validation failures).
    pub fn status(&self) -> u16 {
        match self {
            Error::Validation { .. } => VALIDATION_STATUS,
            Error::Transport { status, .. } => *status,
        }
    }

    /// The bare error message, without kind prefix or context.
    pub fn message(&self) -> &str {
        match self {
            Error::Validation { message, .. } | Error::Transport { message, .. } => message,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Validation { context, .. } => Some(context),
            Error::Transport { .. } => None,
        }
    }

    /// Render this error as the uniform `{error, status, success: false}` envelope.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.message(), self.status())
    }
}

impl From<Error> for ErrorResponse {
    fn from(err: Error) -> Self {
        err.to_response()
    }
}
