//! # ActionLine 模块
//!
//! 单个动作行的切分与类型化参数读取。
//!
//! ## 语法
//!
//! ```text
//! <ACTION>
//! <ACTION:PARAM,PARAM,...>
//! ```
//!
//! 构造时无条件去掉首尾各一个字符（外层的 `<` `>`），
//! 先按 [`ACTION_SIDE_SEPARATOR`] 切出动作名，再按 [`ACTION_PARAMETER_SEPARATOR`] 切分参数。
//! 两个分隔符都不可转义。
//!
//! ## 读取模型
//!
//! 参数通过内部游标从左到右依次读取：读取成功游标前进 1，失败（包括类型解析失败）游标不动。
//! 同一实例只应由一个调用方顺序驱动，类型本身不做同步。

use std::fmt;
use std::str::FromStr;

use crate::asset_name::AssetName;
use crate::error::{ActionLineError, ActionLineResult};

/// 动作名与参数区之间的分隔符
pub const ACTION_SIDE_SEPARATOR: char = ':';

/// 参数之间的分隔符
pub const ACTION_PARAMETER_SEPARATOR: char = ',';

/// 已切分的动作行
///
/// `action` 与 `parameters` 在构造后不再变化，只有游标会前进。
///
/// 没有参数区的行（`<wait>`）得到单个空字符串参数 `[""]`，而不是空列表。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLine {
    action: String,
    parameters: Vec<String>,
    cursor: usize,
}

impl ActionLine {
    /// 解析一行动作文本
    ///
    /// `line` 为包含外层定界符的完整行，例如 `"<show:1,2.5>"`，
    /// 而不是定界符之间的内容：首尾各一个字符总会被去掉，
    /// 传入 `"wait"` 得到的动作名是 `"ai"`。
    ///
    /// # 错误
    ///
    /// - 少于 2 个字符（定界符之间没有位置）：[`ActionLineError::InvalidSyntax`]
    /// - 出现多于一个 `:`：[`ActionLineError::InvalidSyntax`]
    pub fn new(line: &str) -> ActionLineResult<Self> {
        let interior =
            strip_delimiters(line).ok_or_else(|| ActionLineError::invalid_syntax(line))?;

        let (action, parameters_part) = match interior.split_once(ACTION_SIDE_SEPARATOR) {
            Some((_, rest)) if rest.contains(ACTION_SIDE_SEPARATOR) => {
                return Err(ActionLineError::invalid_syntax(line));
            }
            Some((action, rest)) => (action, rest),
            None => (interior, ""),
        };

        Ok(Self {
            action: action.to_string(),
            parameters: split_parameters(parameters_part),
            cursor: 0,
        })
    }

    /// 动作名（原样保留，不裁剪、不改大小写）
    pub fn action(&self) -> &str {
        &self.action
    }

    /// 全部参数（按出现顺序）
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// 当前游标位置
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 尚未读取的参数数量
    pub fn remaining(&self) -> usize {
        self.parameters.len() - self.cursor
    }

    /// 是否已读完所有参数
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.parameters.len()
    }

    /// 读取字符串参数（原样返回）
    pub fn next_string(&mut self, name: &str) -> ActionLineResult<String> {
        self.next_with(name, |token| Ok(token.to_string()))
    }

    /// 读取可选的尾部字符串参数
    ///
    /// 参数已读完时返回 `Ok(None)`；其他错误原样向上传递。
    pub fn next_optional_string(&mut self, name: &str) -> ActionLineResult<Option<String>> {
        match self.next_string(name) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_enough_parameters() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// 读取十进制有符号整数
    pub fn next_int(&mut self, name: &str) -> ActionLineResult<i32> {
        self.next_with(name, |token| parse_int(token, name))
    }

    /// 读取浮点数（小数点固定为 `.`，支持指数记法）
    pub fn next_float(&mut self, name: &str) -> ActionLineResult<f32> {
        self.next_with(name, |token| parse_float(token, name))
    }

    /// 读取从 1 开始计数的整数（必须 > 0）
    pub fn next_one_based_int(&mut self, name: &str) -> ActionLineResult<i32> {
        self.next_with(name, |token| {
            let value = parse_int(token, name)?;
            if value > 0 {
                Ok(value)
            } else {
                Err(ActionLineError::unable_to_parse(
                    "one-based integer",
                    name,
                    value.to_string(),
                ))
            }
        })
    }

    /// 读取素材名并规范化为 PascalCase
    pub fn next_asset_name(&mut self, name: &str) -> ActionLineResult<AssetName> {
        self.next_with(name, |token| Ok(AssetName::new(token)))
    }

    /// 对当前参数应用转换，成功后才推进游标
    fn next_with<T>(
        &mut self,
        name: &str,
        convert: impl FnOnce(&str) -> ActionLineResult<T>,
    ) -> ActionLineResult<T> {
        let token = self
            .parameters
            .get(self.cursor)
            .ok_or_else(|| ActionLineError::not_enough_parameters(name))?;
        let value = convert(token.as_str())?;
        self.cursor += 1;
        Ok(value)
    }
}

impl FromStr for ActionLine {
    type Err = ActionLineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ActionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.action)?;
        // `[""]` 即无参数区
        if self.parameters.len() > 1 || self.parameters.iter().any(|p| !p.is_empty()) {
            write!(f, "{}", ACTION_SIDE_SEPARATOR)?;
            for (index, parameter) in self.parameters.iter().enumerate() {
                if index > 0 {
                    write!(f, "{}", ACTION_PARAMETER_SEPARATOR)?;
                }
                f.write_str(parameter)?;
            }
        }
        write!(f, ">")
    }
}

/// 去掉首尾各一个字符；不足 2 个字符时返回 `None`
fn strip_delimiters(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    chars.next()?;
    chars.next_back()?;
    Some(chars.as_str())
}

/// 切分参数区
///
/// 空参数区固定得到 `[""]`，不依赖 `split` 对空串的行为。
fn split_parameters(parameters_part: &str) -> Vec<String> {
    if parameters_part.is_empty() {
        return vec![String::new()];
    }
    parameters_part
        .split(ACTION_PARAMETER_SEPARATOR)
        .map(str::to_string)
        .collect()
}

fn parse_int(token: &str, name: &str) -> ActionLineResult<i32> {
    token
        .parse::<i32>()
        .map_err(|_| ActionLineError::unable_to_parse("integer", name, token))
}

fn parse_float(token: &str, name: &str) -> ActionLineResult<f32> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ActionLineError::unable_to_parse(
            "decimal value",
            name,
            token,
        )),
    }
}
