// src/common/notify.rs
// Seam between classified errors and whatever shows them to the user.

use std::sync::Arc;
use std::time::Duration;

use super::error::{ApiFailure, AppError, ErrorHandler, ErrorKind};

const ERROR_DISPLAY: Duration = Duration::from_millis(4000);
const NOTICE_DISPLAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

/// The toast/snackbar system, seen from here as a fire-and-forget sink.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NoticeKind, title: &str, message: Option<&str>, duration: Duration);
}

/// Title shown above the error message, per kind.
pub fn error_title(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => "Erro de Conexão",
        ErrorKind::Validation => "Dados Inválidos",
        ErrorKind::Authentication => "Erro de Autenticação",
        ErrorKind::Authorization => "Acesso Negado",
        ErrorKind::NotFound => "Não Encontrado",
        ErrorKind::Server => "Erro do Servidor",
        ErrorKind::Unknown => "Erro",
    }
}

/// Pushes classified errors and one-off notices into the sink.
///
/// Handed to screens as an explicit collaborator; there is no global
/// notifier instance.
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    pub fn show_error(&self, error: &AppError) {
        self.sink.notify(
            NoticeKind::Error,
            error_title(error.kind),
            Some(&error.message),
            ERROR_DISPLAY,
        );
    }

    pub fn show_success(&self, message: &str) {
        self.sink
            .notify(NoticeKind::Success, "Sucesso", Some(message), NOTICE_DISPLAY);
    }

    pub fn show_info(&self, message: &str) {
        self.sink
            .notify(NoticeKind::Info, "Informação", Some(message), NOTICE_DISPLAY);
    }

    /// Classify + log + toast in one call, for the common failure path.
    ///
    /// Returns the classified error so the caller can still abort the
    /// operation it was running.
    pub fn report(&self, failure: &ApiFailure, context: &str) -> AppError {
        let error = ErrorHandler::handle(failure, context);
        self.show_error(&error);
        error
    }
}
