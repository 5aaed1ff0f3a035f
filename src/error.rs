use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Argument,
    Connection,
    Provisioning,
    Query,
    Execution,
    Unsupported,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "Config",
            ErrorKind::Argument => "Argument",
            ErrorKind::Connection => "Connection",
            ErrorKind::Provisioning => "Provisioning",
            ErrorKind::Query => "Query",
            ErrorKind::Execution => "Execution",
            ErrorKind::Unsupported => "Unsupported",
            ErrorKind::Internal => "Internal",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

pub fn classify_error(err: &anyhow::Error) -> ErrorKind {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return app.kind;
    }
    ErrorKind::Internal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_app_errors_by_kind() {
        let err: anyhow::Error = AppError::new(ErrorKind::Provisioning, "gone").into();
        assert_eq!(classify_error(&err), ErrorKind::Provisioning);
    }

    #[test]
    fn foreign_errors_are_internal() {
        let err = anyhow::anyhow!("plain");
        assert_eq!(classify_error(&err), ErrorKind::Internal);
    }
}
