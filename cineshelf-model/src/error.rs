use thiserror::Error;

/// Errors produced while coercing location query parameters into typed
/// criteria fields.
///
/// The query parser itself never surfaces these to callers: a field that
/// fails coercion falls back to its default. They exist so the coercion
/// helpers stay individually testable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryParseError {
    #[error("invalid integer value {value:?} for `{key}`")]
    InvalidInteger { key: &'static str, value: String },
    #[error("invalid boolean value {value:?} for `{key}`")]
    InvalidBoolean { key: &'static str, value: String },
    #[error("`{key}` must be at least 1")]
    OutOfRange { key: &'static str },
}

pub type Result<T> = std::result::Result<T, QueryParseError>;
