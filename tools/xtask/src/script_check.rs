//=============================================================================
// script-check 命令实现
//=============================================================================

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use text_decoder::{
    Diagnostic, DiagnosticLevel, DiagnosticResult, analyze_script, collect_action_usage,
};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::ScriptCheckConfig;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// 脚本检查结果
#[derive(Debug, Default, Serialize)]
pub struct ScriptCheckReport {
    /// 检查的脚本数量
    pub scripts_checked: usize,
    /// 诊断结果
    pub diagnostics: DiagnosticResult,
    /// 各动作的出现次数（全部脚本合计）
    pub action_usage: BTreeMap<String, usize>,
}

impl ScriptCheckReport {
    /// 是否应判定为失败
    pub fn failed(&self, warnings_as_errors: bool) -> bool {
        let warned = warnings_as_errors && self.diagnostics.warn_count() > 0;
        self.diagnostics.has_errors() || warned
    }
}

/// 执行脚本检查
///
/// `path` 为空时检查配置中的 `scripts_dir`。
pub fn script_check(
    path: Option<&Path>,
    config: &ScriptCheckConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let root = path.unwrap_or(config.scripts_dir.as_path());
    if !root.exists() {
        anyhow::bail!(
            "路径不存在: {}\n请在 workspace 根目录运行，或指定脚本路径",
            root.display()
        );
    }

    let files = collect_script_files(root, config);
    if files.is_empty() {
        warn!(root = %root.display(), extensions = ?config.extensions, "未找到脚本文件");
        return Ok(());
    }

    info!(count = files.len(), "检查脚本文件");
    let report = check_files(&files, config);
    print_report(&report, format)?;

    if report.failed(config.warnings_as_errors) {
        anyhow::bail!("脚本检查发现错误");
    }

    Ok(())
}

/// 收集脚本文件
///
/// 显式指定的单个文件不做扩展名过滤。
pub fn collect_script_files(root: &Path, config: &ScriptCheckConfig) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(error = %e, "无法访问路径，已跳过");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| config.matches_extension(path))
        .collect()
}

/// 检查一组脚本文件
///
/// 无法读取的文件记为错误诊断，不中断其余文件的检查。
pub fn check_files(files: &[PathBuf], config: &ScriptCheckConfig) -> ScriptCheckReport {
    let mut report = ScriptCheckReport::default();

    for file in files {
        let script_id = file.display().to_string();
        report.scripts_checked += 1;

        let content = match std::fs::read_to_string(file) {
            Ok(c) => c,
            Err(e) => {
                let diag = Diagnostic::error(&script_id, format!("无法读取文件 - {}", e));
                report.diagnostics.push(diag);
                continue;
            }
        };

        let diag = analyze_script(&script_id, &content, &config.known_actions);
        debug!(
            script_id = %script_id,
            errors = diag.error_count(),
            warnings = diag.warn_count(),
            "脚本检查完成"
        );
        report.diagnostics.merge(diag);

        for (action, count) in collect_action_usage(&content) {
            *report.action_usage.entry(action).or_insert(0) += count;
        }
    }

    report
}

/// 输出检查结果
fn print_report(report: &ScriptCheckReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => print_text_report(report),
    }
    Ok(())
}

fn print_text_report(report: &ScriptCheckReport) {
    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个脚本", report.scripts_checked);
    eprintln!();

    for diag in report.diagnostics.filter_by_level(DiagnosticLevel::Warn) {
        eprintln!("{}", diag);
    }

    let error_count = report.diagnostics.error_count();
    let warn_count = report.diagnostics.warn_count();

    eprintln!();
    if error_count > 0 {
        eprintln!("❌ {} 个错误, {} 个警告", error_count, warn_count);
    } else if warn_count > 0 {
        eprintln!("⚠️  0 个错误, {} 个警告", warn_count);
    } else {
        eprintln!("✅ 检查通过，无错误");
    }
}
