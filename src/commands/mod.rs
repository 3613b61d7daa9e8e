//! # 命令执行模块
//!
//! 根据输入路径类型选择单文件或批量模式。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `electro/`, `batch/`, `utils/`
//! - 子模块: single, batch

pub mod batch;
pub mod single;

use crate::cli::Cli;
use crate::electro::AnalysisOptions;
use crate::error::{ElectroError, Result};

/// 执行命令
pub fn run(cli: Cli) -> Result<()> {
    let options = AnalysisOptions {
        scheme: cli.charges,
        weight: cli.weight,
        skip_hydrogens: cli.skip_hydrogens,
        anion: cli.anion.clone(),
        cation: cli.cation.clone(),
        precision: cli.precision,
        plot: cli.plot,
    };

    if cli.path.is_file() {
        single::execute(&cli.path, &options, cli.top_n)
    } else if cli.path.is_dir() {
        if options.anion.is_some() || options.cation.is_some() {
            return Err(ElectroError::InvalidArgument(
                "--anion/--cation can only be used with a single log file".to_string(),
            ));
        }
        batch::execute(&cli, options)
    } else {
        Err(ElectroError::FileNotFound {
            path: cli.path.display().to_string(),
        })
    }
}
