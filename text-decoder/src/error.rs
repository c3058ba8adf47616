//! # Error 模块
//!
//! 动作行解析与参数读取的错误类型。所有错误都可恢复，由调用方决定如何上报。

use thiserror::Error;

/// 动作行错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionLineError {
    /// 无效的动作行语法（多个分隔符 `:`，或分隔符之间没有内容）
    #[error("无效的动作行语法: {line}")]
    InvalidSyntax { line: String },

    /// 参数不足
    #[error("参数不足，缺少: {name}")]
    NotEnoughParameters { name: String },

    /// 参数无法解析为期望的类型
    #[error("解析 {name} 失败：无法将 `{token}` 解析为 {type_name}")]
    UnableToParse {
        type_name: String,
        name: String,
        token: String,
    },
}

impl ActionLineError {
    pub(crate) fn invalid_syntax(line: impl Into<String>) -> Self {
        Self::InvalidSyntax { line: line.into() }
    }

    pub(crate) fn not_enough_parameters(name: impl Into<String>) -> Self {
        Self::NotEnoughParameters { name: name.into() }
    }

    pub(crate) fn unable_to_parse(
        type_name: impl Into<String>,
        name: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::UnableToParse {
            type_name: type_name.into(),
            name: name.into(),
            token: token.into(),
        }
    }

    /// 是否为"参数不足"错误（可选参数读取据此判断）
    pub fn is_not_enough_parameters(&self) -> bool {
        matches!(self, Self::NotEnoughParameters { .. })
    }
}

/// Result 类型别名
pub type ActionLineResult<T> = Result<T, ActionLineError>;
