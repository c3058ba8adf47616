//! # AssetName 模块
//!
//! 脚本中的素材名可以写成 snake_case 或带空格的形式，统一规范化为 PascalCase。
//!
//! ```text
//! thing_with_snake_case      -> ThingWithSnakeCase
//! thing with spaces          -> ThingWithSpaces
//! and Some Capitals          -> AndSomeCapitals
//! ```

use std::fmt;

/// 规范化后的素材名
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetName(String);

impl AssetName {
    /// 按 `_` 与空格切词，每个词首字母大写后拼接
    ///
    /// 词内其余字符保持原样。
    pub fn new(raw: &str) -> Self {
        let name = raw
            .split(['_', ' '])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect();
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
