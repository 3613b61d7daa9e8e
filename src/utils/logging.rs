//! # 日志初始化
//!
//! 通过 `env_logger` 初始化 `log` 门面。`RUST_LOG` 优先于命令行级别。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use log::LevelFilter;

/// 由 `-v` 次数和 `-q` 得到日志级别
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 初始化全局日志
pub fn init(verbosity: u8, quiet: bool) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity, quiet))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}
