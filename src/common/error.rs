// src/common/error.rs
// Error taxonomy and classification for failed API calls.

use thiserror::Error;
use tracing::error;

/// Closed set of failure categories. Every classified error gets
/// exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Validation,
    Authentication,
    Authorization,
    NotFound,
    Server,
    Unknown,
}

/// The normalized, display-ready form of any caught failure.
///
/// Built once at the call site that caught the failure, handed straight
/// to the presentation callback and then dropped; never persisted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub status_code: Option<u16>,
    pub field: Option<String>,
}

impl AppError {
    fn new(kind: ErrorKind, message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
            field: None,
        }
    }

    pub fn network() -> Self {
        Self::new(ErrorKind::Network, "Erro de conexão. Verifique sua internet.", None)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message, None)
    }

    pub fn authentication() -> Self {
        Self::new(ErrorKind::Authentication, "Credenciais inválidas.", Some(401))
    }

    pub fn authorization() -> Self {
        Self::new(
            ErrorKind::Authorization,
            "Você não tem permissão para esta ação.",
            Some(403),
        )
    }

    pub fn not_found() -> Self {
        Self::new(ErrorKind::NotFound, "Recurso não encontrado.", Some(404))
    }

    pub fn server() -> Self {
        Self::new(ErrorKind::Server, "Erro interno do servidor.", Some(500))
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            "Erro desconhecido".to_string()
        } else {
            message
        };
        Self::new(ErrorKind::Unknown, message, None)
    }

    /// Ties a validation error to the offending field for inline display.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// What actually came back from a failed API call, tagged at the network
/// boundary instead of duck-typed at the classifier.
#[derive(Debug, Clone)]
pub enum ApiFailure {
    /// Request went out, nothing came back.
    Network,
    /// Server answered with an error status; `message` is the body's
    /// message field when the server sent one.
    Http { status: u16, message: Option<String> },
    /// Raised by our own code, already carries its kind.
    App(AppError),
    /// Anything else the call site caught.
    Other(String),
}

impl From<AppError> for ApiFailure {
    fn from(error: AppError) -> Self {
        ApiFailure::App(error)
    }
}

impl From<reqwest::Error> for ApiFailure {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            ApiFailure::Http {
                status: status.as_u16(),
                message: None,
            }
        } else if error.is_timeout() || error.is_connect() || error.is_request() {
            ApiFailure::Network
        } else {
            ApiFailure::Other(error.to_string())
        }
    }
}

/// Maps a failure onto the `AppError` taxonomy. Pure; no logging.
pub fn classify(failure: &ApiFailure) -> AppError {
    match failure {
        ApiFailure::App(error) => error.clone(),
        ApiFailure::Http { status, message } => classify_http(*status, message.as_deref()),
        ApiFailure::Network => AppError::network(),
        ApiFailure::Other(text) => AppError::unknown(text.clone()),
    }
}

fn classify_http(status: u16, message: Option<&str>) -> AppError {
    let base = match status {
        400 => AppError::validation("Dados inválidos."),
        401 => AppError::authentication(),
        403 => AppError::authorization(),
        404 => AppError::not_found(),
        500 => AppError::server(),
        _ => AppError::unknown(""),
    };

    let base = match message {
        Some(text) if !text.is_empty() => base.with_message(text),
        _ => base,
    };

    AppError {
        status_code: Some(status),
        ..base
    }
}

/// Central entry point for failed API calls.
pub struct ErrorHandler;

impl ErrorHandler {
    /// Classifies `failure` and logs it under `context` before returning.
    ///
    /// The log call is fire-and-forget; callers decide whether to surface
    /// the returned error, abort, or both.
    pub fn handle(failure: &ApiFailure, context: &str) -> AppError {
        let app_error = classify(failure);

        error!(
            context,
            kind = ?app_error.kind,
            status = ?app_error.status_code,
            field = ?app_error.field,
            "{}",
            app_error.message
        );

        app_error
    }
}
