//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数分组
//! - 输入: `--path`（日志文件或目录）
//! - 分析: 电荷方案、加权方式、伴随日志、氢原子过滤
//! - 输出: 精度、终端表格行数、柱状图
//! - 批量: 匹配模式、递归、并行数、覆盖
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `commands/`

use crate::models::ChargeScheme;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// electro - Gaussian 日志的全局与局域亲电性指数
#[derive(Parser, Debug)]
#[command(name = "electro")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Write global and local electrophilicity properties from Gaussian log files",
    long_about = None
)]
pub struct Cli {
    /// Path to a .log file, or a directory of .log files (batch mode)
    #[arg(short, long)]
    pub path: PathBuf,

    /// Atomic charge scheme to read from the log
    #[arg(long, value_enum, default_value = "mulliken")]
    pub charges: ChargeScheme,

    /// How local indices are weighted
    #[arg(long, value_enum, default_value = "auto")]
    pub weight: WeightMode,

    /// Anion (N+1 electrons) log, default: <stem>-1.<ext> next to the input
    #[arg(long)]
    pub anion: Option<PathBuf>,

    /// Cation (N-1 electrons) log, default: <stem>+1.<ext> next to the input
    #[arg(long)]
    pub cation: Option<PathBuf>,

    /// Drop hydrogen atoms from the local table
    #[arg(long, default_value_t = false)]
    pub skip_hydrogens: bool,

    /// Fixed number of decimals in output files (default: full precision)
    #[arg(long)]
    pub precision: Option<usize>,

    /// Number of atoms shown in the terminal table, ranked by local electrophilicity
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Also write <stem>_local_electro.png
    #[arg(long, default_value_t = false)]
    pub plot: bool,

    // ─────────────────────────────────────────────────────────────
    // 批量处理参数
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input files (batch mode, e.g., "*.log,*.out")
    #[arg(long, default_value = "*.log")]
    pub pattern: String,

    /// Recurse into subdirectories (batch mode)
    #[arg(long, default_value_t = false)]
    pub recursive: bool,

    /// Number of parallel jobs (0 = auto, batch mode only)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Overwrite existing output files (batch mode)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    // ─────────────────────────────────────────────────────────────
    // 日志
    // ─────────────────────────────────────────────────────────────
    /// Increase diagnostic output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Silence diagnostic logging except errors
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// 局域指数加权方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum WeightMode {
    /// Condensed Fukui when both companion logs exist, partial charge otherwise
    #[default]
    Auto,
    /// Condensed Fukui function (requires anion and cation logs)
    Fukui,
    /// Partial charge of the neutral molecule
    Charge,
}

impl std::fmt::Display for WeightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightMode::Auto => write!(f, "auto"),
            WeightMode::Fukui => write!(f, "fukui"),
            WeightMode::Charge => write!(f, "charge"),
        }
    }
}
