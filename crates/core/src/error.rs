//! 生成器错误类型

use thiserror::Error;

/// 颜色解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// 生成 CSS / HTML 时可能出现的错误
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("CSS emit error: {0}")]
    Emit(#[from] std::fmt::Error),

    #[error("missing required identifier: {0}")]
    MissingIdentifier(&'static str),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
