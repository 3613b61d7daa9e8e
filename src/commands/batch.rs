//! # 批量模式
//!
//! 目录输入时分析所有匹配的日志文件（伴随的 -1/+1 日志除外）。
//!
//! ## 依赖关系
//! - 使用 `batch/` 收集与并行执行
//! - 使用 `electro/` 完成计算和导出

use crate::batch::{BatchRunner, FileCollector, ProcessResult};
use crate::cli::Cli;
use crate::electro::{self, AnalysisOptions, OutputPaths};
use crate::error::Result;
use crate::utils::output;

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// 执行批量分析
pub fn execute(cli: &Cli, options: AnalysisOptions) -> Result<()> {
    output::print_header("Electrophilicity Analysis (batch)");
    output::print_info(&format!("Batch mode: directory '{}'", cli.path.display()));

    let files: Vec<PathBuf> = FileCollector::new(cli.path.clone())
        .with_pattern(&cli.pattern)?
        .recursive(cli.recursive)
        .collect()
        .into_iter()
        .filter(|f| !electro::is_companion(f))
        .collect();

    if files.is_empty() {
        output::print_warning(&format!(
            "No matching log files found with pattern '{}'",
            cli.pattern
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} log files", files.len()));

    let options = Arc::new(options);
    let overwrite = cli.overwrite;

    let runner = BatchRunner::new(cli.jobs);
    let result = runner.run(files, |file| process_file(file, &options, overwrite))?;

    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} files, {} success, {} skipped, {} failed",
        result.total(),
        result.success, result.skipped, result.failed
    ));

    if !result.failures.is_empty() {
        output::print_warning("Failed files:");
        for (path, err) in result.failures.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, err));
        }
        if result.failures.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.failures.len() - 10));
        }
    }

    Ok(())
}

/// 处理批量模式中的单个文件
fn process_file(input: &Path, options: &AnalysisOptions, overwrite: bool) -> ProcessResult {
    let paths = OutputPaths::for_input(input);

    if paths.exist(options.plot) && !overwrite {
        return ProcessResult::Skipped(format!(
            "Output exists, skipping: {}",
            paths.local_csv.display()
        ));
    }

    let result = electro::analyze(input, options)
        .and_then(|report| electro::write_outputs(&report, &paths, options));

    match result {
        Ok(()) => ProcessResult::Success(format!(
            "{} -> {}",
            input.display(),
            paths.local_csv.display()
        )),
        Err(e) => ProcessResult::Failed(input.display().to_string(), e.to_string()),
    }
}
