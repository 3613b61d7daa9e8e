//! # 原子电荷数据模型
//!
//! 存储从 Gaussian 日志中提取的原子电荷表（Mulliken 或 NBO）。
//!
//! ## 依赖关系
//! - 被 `parsers/mulliken.rs`, `parsers/nbo.rs` 使用
//! - 被 `electro/local.rs` 使用

use clap::ValueEnum;

/// 原子电荷布居方案
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ChargeScheme {
    /// Mulliken population analysis
    #[default]
    Mulliken,
    /// NBO natural population analysis
    Nbo,
}

impl std::fmt::Display for ChargeScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChargeScheme::Mulliken => write!(f, "Mulliken"),
            ChargeScheme::Nbo => write!(f, "NBO"),
        }
    }
}

/// 单个原子的电荷
#[derive(Debug, Clone, PartialEq)]
pub struct AtomCharge {
    /// 日志中的原子序号（从 1 开始）
    pub index: usize,
    /// 元素符号
    pub element: String,
    /// 原子标签 (e.g. "C1", "N2")
    pub label: String,
    /// 部分电荷 (e)
    pub charge: f64,
}

impl AtomCharge {
    pub fn new(index: usize, element: impl Into<String>, label: impl Into<String>, charge: f64) -> Self {
        AtomCharge {
            index,
            element: element.into(),
            label: label.into(),
            charge,
        }
    }

    pub fn is_hydrogen(&self) -> bool {
        self.element == "H"
    }
}

/// 原子电荷表，保持日志中出现的顺序
#[derive(Debug, Clone)]
pub struct ChargeTable {
    /// 来源文件
    pub source: String,
    /// 布居方案
    pub scheme: ChargeScheme,
    /// 原子电荷
    pub atoms: Vec<AtomCharge>,
}

impl ChargeTable {
    pub fn new(source: impl Into<String>, scheme: ChargeScheme, atoms: Vec<AtomCharge>) -> Self {
        ChargeTable {
            source: source.into(),
            scheme,
            atoms,
        }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// 去除氢原子（标签不重新编号）
    pub fn without_hydrogens(mut self) -> Self {
        self.atoms.retain(|a| !a.is_hydrogen());
        self
    }

    /// 电荷总和
    pub fn total_charge(&self) -> f64 {
        self.atoms.iter().map(|a| a.charge).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> ChargeTable {
        ChargeTable::new(
            "water.log",
            ChargeScheme::Mulliken,
            vec![
                AtomCharge::new(1, "O", "O1", -0.8),
                AtomCharge::new(2, "H", "H1", 0.4),
                AtomCharge::new(3, "H", "H2", 0.4),
            ],
        )
    }

    #[test]
    fn test_without_hydrogens_keeps_labels() {
        let table = water().without_hydrogens();
        assert_eq!(table.len(), 1);
        assert_eq!(table.atoms[0].label, "O1");
        assert_eq!(table.atoms[0].index, 1);
    }

    #[test]
    fn test_total_charge() {
        assert!(water().total_charge().abs() < 1e-12);
    }
}
