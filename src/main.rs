//! # electro - Gaussian 日志的亲电性指数
//!
//! 读取 Gaussian .log 文件，提取前线轨道能量和原子电荷，计算全局与局域
//! 亲电性 / 亲核性指数，写出 `<stem>_local_electro.csv` 和
//! `<stem>_global_electro.txt`。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (单文件 / 批量执行)
//!   │     ├── electro/   (计算与导出)
//!   │     ├── parsers/   (日志解析器)
//!   │     ├── batch/     (批量收集与并行)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、日志)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod electro;
mod error;
mod models;
mod parsers;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    utils::logging::init(cli.verbose, cli.quiet);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
