//! Error types for enum extension registration and resolution

use thiserror::Error;

/// Errors raised while registering or resolving enum extensions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnumExtError {
    #[error("host type '{0}' is not registered")]
    UnknownHost(String),

    #[error("enum '{enum_name}' is not defined on '{host}'")]
    UnknownEnum { host: String, enum_name: String },

    #[error("'{key}' is not a value of enum '{enum_name}'")]
    UnknownEnumKey { enum_name: String, key: String },

    #[error("unknown sets or values for enum '{enum_name}': {}", .tokens.join(", "))]
    UnknownSetOrKey { enum_name: String, tokens: Vec<String> },

    #[error("cyclic set reference in enum '{enum_name}': {}", .path.join(" -> "))]
    CyclicSetReference { enum_name: String, path: Vec<String> },

    #[error("set '{set_name}' shadows a value of enum '{enum_name}'")]
    SetShadowsKey { enum_name: String, set_name: String },

    #[error("duplicate key '{0}' in enum definition")]
    DuplicateKey(String),

    #[error("code {code} is assigned to both '{first}' and '{second}'")]
    DuplicateCode { code: i64, first: String, second: String },

    #[error("display value for '{key}' failed to evaluate: {message}")]
    EvaluationFailure { key: String, message: String },

    #[error("translation missing: {locale}.{key}")]
    MissingTranslation { locale: String, key: String },

    #[error("enum registry is already installed")]
    AlreadyInstalled,
}

pub type Result<T> = std::result::Result<T, EnumExtError>;
