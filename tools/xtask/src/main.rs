//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与脚本检查命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `script-check`: 检查脚本文件中的动作行
//!
//! ## 用法
//!
//! ```bash
//! cargo xtask check-all
//! cargo xtask script-check
//! cargo xtask script-check assets/scripts/case1 --format json
//! cargo xtask script-check --config tools/script-check.json -v
//! ```

mod config;
mod script_check;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{Level, debug, info};
use xshell::{Shell, cmd};

use config::{DEFAULT_CONFIG_PATH, ScriptCheckConfig};
use script_check::{OutputFormat, script_check};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "开发辅助工具 - 质量门禁与脚本检查")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行 fmt、clippy、test 门禁检查
    CheckAll,

    /// 检查脚本文件（动作行语法、空参数、未知动作）
    ///
    /// 不带路径时检查配置中的 scripts_dir；
    /// 路径为目录时递归检查其中匹配扩展名的文件。
    ScriptCheck {
        /// 脚本文件或目录
        path: Option<PathBuf>,

        /// 配置文件（默认：script-check.json）
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// 输出格式
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// 把警告当作错误（覆盖配置文件）
        #[arg(long)]
        deny_warnings: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = real_main(cli.command) {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn real_main(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::CheckAll => check_all(),
        Commands::ScriptCheck {
            path,
            config,
            format,
            deny_warnings,
        } => {
            let mut config = ScriptCheckConfig::load(&config)?;
            if deny_warnings {
                config.warnings_as_errors = true;
            }
            config.validate()?;
            debug!(config = ?config, "生效配置");

            script_check(path.as_deref(), &config, format)
        }
    }
}

fn check_all() -> anyhow::Result<()> {
    let sh = Shell::new()?;

    info!("==> cargo fmt --all -- --check");
    cmd!(sh, "cargo fmt --all -- --check").run()?;

    info!("==> cargo clippy --workspace --all-targets");
    cmd!(sh, "cargo clippy --workspace --all-targets").run()?;

    info!("==> cargo test --workspace");
    cmd!(sh, "cargo test --workspace").run()?;

    Ok(())
}
