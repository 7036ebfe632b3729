//! Unified application error types for CPF Auth.
//!
//! Every failure in the authentication flow is mapped into an [`AppError`]
//! whose [`ErrorKind`] fixes both the wire code and the HTTP status of the
//! error envelope returned to the caller.

use std::fmt;
use thiserror::Error;

/// Error categories, one per envelope code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The request body is not valid JSON for the expected shape.
    InvalidBody,
    /// The `cpf` field is empty or absent.
    MissingCpf,
    /// A required server setting (user pool id) is missing.
    ServerConfig,
    /// The ambient AWS configuration could not be resolved.
    AwsConfig,
    /// The identity directory query failed.
    DirectoryLookup,
    /// No directory user matched the submitted CPF.
    UserNotFound,
    /// The token could not be signed.
    TokenSign,
    /// A presented token failed verification.
    InvalidToken,
    /// Process-level configuration could not be loaded.
    Configuration,
    /// An unexpected internal failure.
    Internal,
}

impl ErrorKind {
    /// Machine-readable code carried in the `code` field of the envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBody => "INVALID_BODY",
            Self::MissingCpf => "MISSING_CPF",
            Self::ServerConfig => "SERVER_CONFIG_ERROR",
            Self::AwsConfig => "AWS_CONFIG_ERROR",
            Self::DirectoryLookup => "COGNITO_LIST_USERS_FAILED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TokenSign => "JWT_SIGN_ERROR",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::Configuration => "CONFIGURATION_ERROR",
            Self::Internal => "INTERNAL_SERVER_ERROR",
        }
    }

    /// HTTP status code for this category.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidBody | Self::MissingCpf => 400,
            Self::InvalidToken => 401,
            Self::UserNotFound => 404,
            Self::ServerConfig
            | Self::AwsConfig
            | Self::DirectoryLookup
            | Self::TokenSign
            | Self::Configuration
            | Self::Internal => 500,
        }
    }

    /// Whether this is a server-side (5xx) failure.
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The unified application error used throughout CPF Auth.
///
/// `message` is the human-facing text of the envelope's `error` field and
/// `details` the optional diagnostic text of its `details` field.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional diagnostic details exposed to the caller.
    pub details: Option<String>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            source: Some(Box::new(source)),
        }
    }

    /// Attach diagnostic details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Malformed request body.
    pub fn invalid_body(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBody, "Invalid request body").with_details(details)
    }

    /// Empty or absent CPF.
    pub fn missing_cpf() -> Self {
        Self::new(ErrorKind::MissingCpf, "CPF é obrigatório.")
    }

    /// Missing required server setting.
    pub fn server_config(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::ServerConfig, "Configuração do servidor inválida.")
            .with_details(details)
    }

    /// Ambient AWS configuration could not be resolved.
    pub fn aws_config(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::AwsConfig, "Erro ao carregar configuração AWS.")
            .with_details(details)
    }

    /// Directory query failure.
    pub fn directory_lookup(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::DirectoryLookup, "Falha ao buscar usuário.").with_details(details)
    }

    /// No user matched the submitted CPF.
    pub fn user_not_found() -> Self {
        Self::new(ErrorKind::UserNotFound, "CPF não encontrado no sistema.")
    }

    /// Token signing failure.
    pub fn token_sign(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::TokenSign, "Erro ao gerar token.").with_details(details)
    }

    /// Token verification failure.
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidToken, message)
    }

    /// Process-level configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Unexpected internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// HTTP status code of this error.
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            details: self.details.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let details = err.to_string();
        Self::with_source(ErrorKind::InvalidBody, "Invalid request body", err)
            .with_details(details)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
