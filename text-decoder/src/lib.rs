//! # Text Decoder
//!
//! 对话脚本中动作行的切分与类型化参数读取。
//!
//! ## 概述
//!
//! 脚本中的动作行形如 `<ACTION>` 或 `<ACTION:PARAM,PARAM,...>`。
//! [`ActionLine`] 把一行拆成动作名与参数列表，动作处理方再通过
//! `next_*` 系列方法从左到右取出带类型校验的参数：
//!
//! ```ignore
//! use text_decoder::ActionLine;
//!
//! let mut line = ActionLine::new("<shake:3,0.25>")?;
//! assert_eq!(line.action(), "shake");
//!
//! let times = line.next_one_based_int("times")?;
//! let duration = line.next_float("duration")?;
//! let label = line.next_optional_string("label")?; // None
//! ```
//!
//! 本 crate 不负责动作分发与执行，只提供切分与读取契约。
//!
//! ## 模块结构
//!
//! - [`action_line`]：动作行切分与参数读取
//! - [`asset_name`]：素材名规范化
//! - [`scanner`]：脚本文本按行分类
//! - [`diagnostic`]：整份脚本的静态检查
//! - [`error`]：错误类型定义

pub mod action_line;
pub mod asset_name;
pub mod diagnostic;
pub mod error;
pub mod scanner;

// 重导出核心类型
pub use action_line::{ACTION_PARAMETER_SEPARATOR, ACTION_SIDE_SEPARATOR, ActionLine};
pub use asset_name::AssetName;
pub use diagnostic::{
    Diagnostic, DiagnosticLevel, DiagnosticResult, analyze_script, collect_action_usage,
};
pub use error::{ActionLineError, ActionLineResult};
pub use scanner::{ScriptLine, is_action_line, recognize_lines};
