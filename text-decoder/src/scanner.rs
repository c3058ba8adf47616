//! # 行识别
//!
//! 将脚本文本按行分类为动作行与对话行，供 [`ActionLine`] 与静态检查使用。

use crate::action_line::ActionLine;
use crate::error::ActionLineResult;

/// 动作行的起始定界符
pub const ACTION_LINE_START: char = '<';

/// 动作行的结束定界符
pub const ACTION_LINE_END: char = '>';

/// 脚本中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    /// 动作行，保留定界符
    Action { line: String, line_number: usize },
    /// 普通对话文本
    Dialogue { text: String, line_number: usize },
}

impl ScriptLine {
    /// 行号（从 1 开始）
    pub fn line_number(&self) -> usize {
        match self {
            ScriptLine::Action { line_number, .. } => *line_number,
            ScriptLine::Dialogue { line_number, .. } => *line_number,
        }
    }

    /// 原始文本（已去除首尾空白）
    pub fn text(&self) -> &str {
        match self {
            ScriptLine::Action { line, .. } => line,
            ScriptLine::Dialogue { text, .. } => text,
        }
    }

    pub fn is_action(&self) -> bool {
        matches!(self, ScriptLine::Action { .. })
    }

    /// 解析动作行；对话行返回 `None`
    pub fn parse_action(&self) -> Option<ActionLineResult<ActionLine>> {
        match self {
            ScriptLine::Action { line, .. } => Some(ActionLine::new(line)),
            ScriptLine::Dialogue { .. } => None,
        }
    }
}

/// 判断一行（已裁剪）是否为动作行
pub fn is_action_line(trimmed: &str) -> bool {
    trimmed.len() >= 2
        && trimmed.starts_with(ACTION_LINE_START)
        && trimmed.ends_with(ACTION_LINE_END)
}

/// 识别文本中的所有非空行
pub fn recognize_lines(text: &str) -> Vec<ScriptLine> {
    text.lines()
        .enumerate()
        .filter_map(|(line_idx, line)| {
            let line_number = line_idx + 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                None
            } else if is_action_line(trimmed) {
                Some(ScriptLine::Action {
                    line: trimmed.to_string(),
                    line_number,
                })
            } else {
                Some(ScriptLine::Dialogue {
                    text: trimmed.to_string(),
                    line_number,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_lines() {
        let text = "<bgm:trial>\n\nPhoenix: Hold it!\n  <wait:1.5>  \n";
        let lines = recognize_lines(text);

        assert_eq!(
            lines,
            vec![
                ScriptLine::Action {
                    line: "<bgm:trial>".to_string(),
                    line_number: 1
                },
                ScriptLine::Dialogue {
                    text: "Phoenix: Hold it!".to_string(),
                    line_number: 3
                },
                ScriptLine::Action {
                    line: "<wait:1.5>".to_string(),
                    line_number: 4
                },
            ]
        );
    }

    #[test]
    fn test_is_action_line() {
        assert!(is_action_line("<wait>"));
        assert!(is_action_line("<>"));
        assert!(!is_action_line("<"));
        assert!(!is_action_line(">"));
        assert!(!is_action_line("<wait"));
        assert!(!is_action_line("text <wait>"));
    }

    #[test]
    fn test_parse_action() {
        let lines = recognize_lines("<show:1>\nhello");
        let action = lines[0].parse_action().unwrap().unwrap();
        assert_eq!(action.action(), "show");
        assert!(lines[1].parse_action().is_none());
        assert!(lines[0].is_action());
        assert_eq!(lines[1].text(), "hello");
        assert_eq!(lines[1].line_number(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let lines = recognize_lines("<a>\r\n<b:1>\r\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text(), "<b:1>");
    }
}
