//! # Mulliken 电荷表解析器
//!
//! 从 Gaussian .log 文件中提取最后一次 Mulliken 布居分析的原子电荷。
//!
//! ## 表格格式
//! ```text
//!  Mulliken charges:
//!                1
//!      1  C   -0.045937
//!      2  N   -0.383245
//!  Sum of Mulliken charges =   0.00000
//! ```
//! 开壳层体系的表头为 `Mulliken charges and spin densities:`，每行多一列自旋密度。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/charges.rs`

use crate::error::{ElectroError, Result};
use crate::models::{AtomCharge, ChargeScheme, ChargeTable};

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

static HEADER: OnceLock<Regex> = OnceLock::new();
static ROW: OnceLock<Regex> = OnceLock::new();

/// 解析 Mulliken 电荷表
pub fn parse_mulliken_charges(content: &str, source: &str) -> Result<ChargeTable> {
    let header = HEADER.get_or_init(|| {
        Regex::new(r"^\s*Mulliken (?:atomic )?charges(?: and spin densities)?:\s*$").unwrap()
    });
    let row = ROW.get_or_init(|| Regex::new(r"^\s*(\d+)\s+([A-Z][a-z]?)\s+(-?\d+\.\d+)").unwrap());

    let lines: Vec<&str> = content.lines().collect();

    // "hydrogens summed into heavy atoms" 表头不会匹配
    let start = lines
        .iter()
        .rposition(|l| header.is_match(l))
        .ok_or_else(|| ElectroError::parse("mulliken", source, "No Mulliken charge table found"))?;
    log::debug!("{source}: Mulliken table header at line {}", start + 1);

    let mut atoms = Vec::new();
    let mut ordinals: HashMap<String, usize> = HashMap::new();
    let mut terminated = false;

    // 跳过表头下方的列编号行
    for (offset, line) in lines.iter().enumerate().skip(start + 2) {
        if line.trim_start().starts_with("Sum of Mulliken") {
            terminated = true;
            break;
        }

        let caps = row.captures(line).ok_or_else(|| {
            ElectroError::parse(
                "mulliken",
                source,
                format!("Unexpected line {} in charge table: '{}'", offset + 1, line.trim()),
            )
        })?;

        let index: usize = caps[1].parse().map_err(|_| {
            ElectroError::parse("mulliken", source, format!("Bad atom index '{}'", &caps[1]))
        })?;
        let element = caps[2].to_string();
        let charge: f64 = caps[3].parse().map_err(|_| {
            ElectroError::parse("mulliken", source, format!("Bad charge '{}'", &caps[3]))
        })?;

        let ordinal = ordinals.entry(element.clone()).or_insert(0);
        *ordinal += 1;
        let label = format!("{}{}", element, ordinal);

        atoms.push(AtomCharge::new(index, element, label, charge));
    }

    if !terminated {
        return Err(ElectroError::parse(
            "mulliken",
            source,
            "Charge table is not terminated by 'Sum of Mulliken charges'",
        ));
    }
    if atoms.is_empty() {
        return Err(ElectroError::parse("mulliken", source, "Charge table is empty"));
    }

    log::debug!("{source}: {} Mulliken charges", atoms.len());
    Ok(ChargeTable::new(source, ChargeScheme::Mulliken, atoms))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSED_SHELL: &str = r#"
 Mulliken charges:
               1
     1  C   -0.100000
     2  N   -0.300000
     3  C    0.250000
     4  H    0.150000
 Sum of Mulliken charges =   0.00000
 Mulliken charges with hydrogens summed into heavy atoms:
               1
     1  C    0.050000
     2  N   -0.300000
     3  C    0.250000
 Sum of Mulliken charges =   0.00000
"#;

    #[test]
    fn test_parse_closed_shell() {
        let table = parse_mulliken_charges(CLOSED_SHELL, "mol.log").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.scheme, ChargeScheme::Mulliken);

        let labels: Vec<&str> = table.atoms.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, ["C1", "N1", "C2", "H1"]);

        // 不应读到 "hydrogens summed" 表
        assert!((table.atoms[0].charge - -0.1).abs() < 1e-12);
        assert_eq!(table.atoms[3].index, 4);
    }

    #[test]
    fn test_parse_uses_last_table() {
        let content = r#"
 Mulliken atomic charges:
              1
    1  S    0.900000
 Sum of Mulliken charges=   0.90000
 Mulliken atomic charges:
              1
    1  S    0.123400
 Sum of Mulliken charges=   0.12340
"#;
        let table = parse_mulliken_charges(content, "s.log").unwrap();
        assert_eq!(table.len(), 1);
        assert!((table.atoms[0].charge - 0.1234).abs() < 1e-12);
    }

    #[test]
    fn test_parse_spin_densities() {
        let content = r#"
 Mulliken charges and spin densities:
               1          2
     1  C    0.412000   0.600000
     2  Cl  -0.412000   0.400000
 Sum of Mulliken charges =   0.00000   1.00000
"#;
        let table = parse_mulliken_charges(content, "radical.log").unwrap();
        assert_eq!(table.atoms[1].element, "Cl");
        assert_eq!(table.atoms[1].label, "Cl1");
        assert!((table.atoms[1].charge - -0.412).abs() < 1e-12);
    }

    #[test]
    fn test_missing_table() {
        let err = parse_mulliken_charges(" SCF Done:  E(RB3LYP) =  -1.0\n", "x.log").unwrap_err();
        assert!(err.to_string().contains("No Mulliken charge table"));
    }

    #[test]
    fn test_unterminated_table() {
        let content = " Mulliken charges:\n               1\n     1  C   -0.1\n";
        assert!(parse_mulliken_charges(content, "x.log").is_err());
    }
}
