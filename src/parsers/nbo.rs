//! # NBO 自然布居分析解析器
//!
//! 从 Gaussian .log 文件的 NBO 输出段中提取自然电荷。
//!
//! ## 表格格式
//! ```text
//!  Summary of Natural Population Analysis:
//!
//!                                        Natural Population
//!                 Natural  -----------------------------------------------
//!     Atom  No    Charge         Core      Valence    Rydberg      Total
//!  -----------------------------------------------------------------------
//!       C    1   -0.22870      1.99904     4.20689    0.02277     6.22870
//!  =======================================================================
//! ```
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/charges.rs`

use crate::error::{ElectroError, Result};
use crate::models::{AtomCharge, ChargeScheme, ChargeTable};

use regex::Regex;
use std::sync::OnceLock;

const SECTION_BANNER: &str = "Gaussian NBO Version";
const TABLE_HEADER: &str = "Summary of Natural Population Analysis:";

static ROW: OnceLock<Regex> = OnceLock::new();

/// 解析 NBO 自然电荷表
pub fn parse_nbo_charges(content: &str, source: &str) -> Result<ChargeTable> {
    let row = ROW.get_or_init(|| Regex::new(r"^\s*([A-Z][a-z]?)\s+(\d+)\s+(-?\d+\.\d+)").unwrap());

    let lines: Vec<&str> = content.lines().collect();

    // 最后一个 NBO 段（没有横幅时使用全文）
    let section = lines
        .iter()
        .rposition(|l| l.contains(SECTION_BANNER))
        .unwrap_or(0);

    let header = lines[section..]
        .iter()
        .position(|l| l.contains(TABLE_HEADER))
        .map(|i| section + i)
        .ok_or_else(|| ElectroError::parse("nbo", source, "No natural population summary found"))?;
    log::debug!("{source}: NBO summary header at line {}", header + 1);

    let rule = lines[header..]
        .iter()
        .position(|l| l.trim_start().starts_with("----"))
        .map(|i| header + i)
        .ok_or_else(|| ElectroError::parse("nbo", source, "Natural population table has no header rule"))?;

    let mut atoms = Vec::new();
    let mut terminated = false;

    for (offset, line) in lines.iter().enumerate().skip(rule + 1) {
        if line.trim_start().starts_with("====") {
            terminated = true;
            break;
        }

        let caps = row.captures(line).ok_or_else(|| {
            ElectroError::parse(
                "nbo",
                source,
                format!("Unexpected line {} in charge table: '{}'", offset + 1, line.trim()),
            )
        })?;

        let element = caps[1].to_string();
        let index: usize = caps[2]
            .parse()
            .map_err(|_| ElectroError::parse("nbo", source, format!("Bad atom number '{}'", &caps[2])))?;
        let charge: f64 = caps[3]
            .parse()
            .map_err(|_| ElectroError::parse("nbo", source, format!("Bad charge '{}'", &caps[3])))?;

        let label = format!("{}{}", element, index);
        atoms.push(AtomCharge::new(index, element, label, charge));
    }

    if !terminated {
        return Err(ElectroError::parse(
            "nbo",
            source,
            "Natural population table is not terminated by '===='",
        ));
    }
    if atoms.is_empty() {
        return Err(ElectroError::parse("nbo", source, "Natural population table is empty"));
    }

    log::debug!("{source}: {} natural charges", atoms.len());
    Ok(ChargeTable::new(source, ChargeScheme::Nbo, atoms))
}
