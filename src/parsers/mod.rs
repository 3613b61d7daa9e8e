//! # 解析器模块
//!
//! 提供 Gaussian .log 文件中前线轨道和原子电荷表的解析器。
//!
//! ## 依赖关系
//! - 被 `electro/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: orbitals, mulliken, nbo

pub mod mulliken;
pub mod nbo;
pub mod orbitals;

use crate::error::{ElectroError, Result};
use crate::models::{ChargeScheme, ChargeTable};
use std::fs;
use std::path::Path;

/// 读取日志文件全文
pub fn read_log(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ElectroError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    fs::read_to_string(path).map_err(|e| ElectroError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 按布居方案解析电荷表
pub fn parse_charge_table(content: &str, scheme: ChargeScheme, source: &str) -> Result<ChargeTable> {
    match scheme {
        ChargeScheme::Mulliken => mulliken::parse_mulliken_charges(content, source),
        ChargeScheme::Nbo => nbo::parse_nbo_charges(content, source),
    }
}
