use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Returned by strict zone parsing; `validate_time_zone` logs it and falls back.
    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Access denied: {role} cannot open {module}")]
    AccessDenied { role: String, module: String },

    #[error("Invalid transition: cannot {action} {entity} in state {from}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        action: &'static str,
    },

    #[error("Malformed import: {0}")]
    MalformedImport(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    /// Whether the caller should treat this as a rejected no-op rather than a failure.
    pub fn is_rejected_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition { .. })
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Infra(InfraError::Io(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Infra(InfraError::Serialization(err))
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for operations that may touch storage or configuration
pub type AppResult<T> = Result<T, AppError>;

// ── Tests ──────────────────────────────────────────────────────
