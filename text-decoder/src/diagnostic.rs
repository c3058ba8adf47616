//! # 诊断模块
//!
//! 对整份脚本做静态检查，不依赖 IO。
//!
//! ## 设计原则
//!
//! - 纯函数 API，可在无 IO 环境下运行
//! - 诊断分级：Error（必须修复）、Warn（建议修复）、Info（信息提示）
//! - 复用 [`ActionLine`] 的切分逻辑，不重复解析

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::action_line::ActionLine;
use crate::scanner::{ScriptLine, recognize_lines};

/// 诊断级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// 信息提示
    Info,
    /// 警告（建议修复）
    Warn,
    /// 错误（必须修复）
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// 诊断条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 脚本 ID / 文件路径
    pub script_id: String,
    /// 行号（如果可定位，从 1 开始）
    pub line: Option<usize>,
    /// 诊断消息
    pub message: String,
    /// 诊断详情（可选，如原始行内容）
    pub detail: Option<String>,
}

impl Diagnostic {
    fn new(
        level: DiagnosticLevel,
        script_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            script_id: script_id.into(),
            line: None,
            message: message.into(),
            detail: None,
        }
    }

    /// 创建错误诊断
    pub fn error(script_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, script_id, message)
    }

    /// 创建警告诊断
    pub fn warn(script_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warn, script_id, message)
    }

    /// 创建信息诊断
    pub fn info(script_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, script_id, message)
    }

    /// 设置行号
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// 设置详情
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.level, self.script_id)?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  | {}", detail)?;
        }
        Ok(())
    }
}

/// 诊断结果
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticResult {
    /// 诊断条目列表
    pub diagnostics: Vec<Diagnostic>,
}

impl DiagnosticResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 合并另一个结果
    pub fn merge(&mut self, other: DiagnosticResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn error_count(&self) -> usize {
        self.count(DiagnosticLevel::Error)
    }

    pub fn warn_count(&self) -> usize {
        self.count(DiagnosticLevel::Warn)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// 按级别过滤（包含更高级别）
    pub fn filter_by_level(&self, min_level: DiagnosticLevel) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.level >= min_level)
            .collect()
    }
}

//=============================================================================
// 脚本分析 API
//=============================================================================

/// 分析脚本，返回诊断结果
///
/// 执行以下检查：
/// - 无法切分的动作行（Error）
/// - 动作名为空（Warn）
/// - 参数区中出现空参数，如 `<show:a,,b>`（Warn）
/// - 不在 `known_actions` 中的动作（Warn，仅当列表非空时检查）
///
/// 最后附加一条 Info，记录检查过的动作行数量。
pub fn analyze_script(script_id: &str, text: &str, known_actions: &[String]) -> DiagnosticResult {
    let mut result = DiagnosticResult::new();
    let known: HashSet<&str> = known_actions.iter().map(String::as_str).collect();

    let mut action_lines = 0usize;
    for script_line in recognize_lines(text) {
        let ScriptLine::Action { line, line_number } = &script_line else {
            continue;
        };
        action_lines += 1;

        let action = match ActionLine::new(line) {
            Ok(action) => action,
            Err(e) => {
                let diag = Diagnostic::error(script_id, e.to_string());
                result.push(diag.with_line(*line_number));
                continue;
            }
        };
        check_action(script_id, *line_number, line, &action, &known, &mut result);
    }

    result.push(Diagnostic::info(
        script_id,
        format!("共检查 {} 个动作行", action_lines),
    ));

    debug!(
        script_id,
        action_lines,
        errors = result.error_count(),
        warnings = result.warn_count(),
        "脚本分析完成"
    );

    result
}

fn check_action(
    script_id: &str,
    line_number: usize,
    raw: &str,
    action: &ActionLine,
    known: &HashSet<&str>,
    result: &mut DiagnosticResult,
) {
    if action.action().is_empty() {
        result.push(
            Diagnostic::warn(script_id, "动作名为空")
                .with_line(line_number)
                .with_detail(raw),
        );
    } else if !known.is_empty() && !known.contains(action.action()) {
        result.push(
            Diagnostic::warn(script_id, format!("未知动作 '{}'", action.action()))
                .with_line(line_number),
        );
    }

    // 无参数区的行本身就是 [""]，不报告
    let parameters = action.parameters();
    if parameters.len() > 1 {
        for (index, _) in parameters.iter().enumerate().filter(|(_, p)| p.is_empty()) {
            result.push(
                Diagnostic::warn(script_id, format!("第 {} 个参数为空", index + 1))
                    .with_line(line_number)
                    .with_detail(raw),
            );
        }
    }
}

/// 统计脚本中各动作的出现次数（忽略无法切分的行）
pub fn collect_action_usage(text: &str) -> BTreeMap<String, usize> {
    let mut usage = BTreeMap::new();
    for script_line in recognize_lines(text) {
        if let Some(Ok(action)) = script_line.parse_action() {
            *usage.entry(action.action().to_string()).or_insert(0) += 1;
        }
    }
    usage
}
