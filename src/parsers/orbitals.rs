//! # 前线轨道能量解析器
//!
//! 从最后一次 SCF 布居分析中提取 HOMO 和 LUMO 能量 (Hartree)。
//!
//! ```text
//!  Population analysis using the SCF density.
//!  ...
//!  Alpha  occ. eigenvalues --   -0.93190  -0.80104  -0.28562
//!  Alpha virt. eigenvalues --   -0.03981   0.03544   0.11002
//! ```
//!
//! ## 依赖关系
//! - 被 `electro/mod.rs` 使用
//! - 使用 `models/electro.rs`

use crate::error::{ElectroError, Result};
use crate::models::FrontierOrbitals;

use regex::Regex;
use std::sync::OnceLock;

const POPULATION_MARKER: &str = "Population analysis using the SCF density.";

static OCCUPIED: OnceLock<Regex> = OnceLock::new();
static VIRTUAL: OnceLock<Regex> = OnceLock::new();
static NUMBER: OnceLock<Regex> = OnceLock::new();

/// 解析 HOMO/LUMO
pub fn parse_frontier_orbitals(content: &str, source: &str) -> Result<FrontierOrbitals> {
    let occupied = OCCUPIED.get_or_init(|| Regex::new(r"Alpha\s+occ\.\s+eigenvalues\s+--").unwrap());
    let virt = VIRTUAL.get_or_init(|| Regex::new(r"Alpha\s+virt\.\s+eigenvalues\s+--").unwrap());

    let lines: Vec<&str> = content.lines().collect();

    let start = lines
        .iter()
        .rposition(|l| l.contains(POPULATION_MARKER))
        .ok_or_else(|| {
            ElectroError::parse("orbital", source, format!("Missing '{}'", POPULATION_MARKER))
        })?;
    let section = &lines[start..];
    log::debug!("{source}: SCF population analysis at line {}", start + 1);

    let homo_line = section
        .iter()
        .rev()
        .find(|l| occupied.is_match(l))
        .ok_or_else(|| ElectroError::parse("orbital", source, "No alpha occupied eigenvalues found"))?;
    let homo = eigenvalues(homo_line)
        .last()
        .copied()
        .ok_or_else(|| ElectroError::parse("orbital", source, "Empty alpha occupied eigenvalue line"))?;

    let lumo_line = section
        .iter()
        .find(|l| virt.is_match(l))
        .ok_or_else(|| ElectroError::parse("orbital", source, "No alpha virtual eigenvalues found"))?;
    let lumo = eigenvalues(lumo_line)
        .first()
        .copied()
        .ok_or_else(|| ElectroError::parse("orbital", source, "Empty alpha virtual eigenvalue line"))?;

    log::debug!("{source}: HOMO = {homo} Eh, LUMO = {lumo} Eh");
    Ok(FrontierOrbitals { homo, lumo })
}

/// 提取 "--" 之后的本征值；定宽字段可能连在一起 (e.g. "-10.12345-10.02345")
fn eigenvalues(line: &str) -> Vec<f64> {
    let number = NUMBER.get_or_init(|| Regex::new(r"-?\d+\.\d+").unwrap());
    let values = match line.find("--") {
        Some(pos) => &line[pos + 2..],
        None => line,
    };
    number
        .find_iter(values)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_last_population_analysis() {
        let content = r#"
 Population analysis using the SCF density.
 Alpha  occ. eigenvalues --   -0.50000  -0.40000
 Alpha virt. eigenvalues --    0.10000   0.20000
 Population analysis using the SCF density.
 Alpha  occ. eigenvalues --  -10.21000  -0.93190  -0.80104
 Alpha  occ. eigenvalues --   -0.35000  -0.28562
 Alpha virt. eigenvalues --   -0.03981   0.03544   0.11002
 Alpha virt. eigenvalues --    0.25000
"#;
        let orbitals = parse_frontier_orbitals(content, "mol.log").unwrap();
        assert_eq!(orbitals.homo, -0.28562);
        assert_eq!(orbitals.lumo, -0.03981);
    }

    #[test]
    fn test_joined_fields() {
        let values = eigenvalues(" Alpha  occ. eigenvalues -- -88.90197-10.22411 -0.87650");
        assert_eq!(values, vec![-88.90197, -10.22411, -0.87650]);
    }

    #[test]
    fn test_missing_virtorbitals() {
        let content = " Population analysis using the SCF density.\n Alpha  occ. eigenvalues --   -0.3\n";
        let err = parse_frontier_orbitals(content, "mol.log").unwrap_err();
        assert!(err.to_string().contains("virtual"));
    }

    #[test]
    fn test_missing_population_marker() {
        assert!(parse_frontier_orbitals(" Alpha  occ. eigenvalues --   -0.3\n", "mol.log").is_err());
    }
}
