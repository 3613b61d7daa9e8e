//! # 局域亲电性 / 亲核性
//!
//! 将全局指数按原子分解：
//! - Fukui 加权: ωₖ = ω·f⁺ₖ, Nₖ = N·f⁻ₖ
//!   - f⁺ₖ = qₖ(N) - qₖ(N+1), f⁻ₖ = qₖ(N-1) - qₖ(N)
//! - 电荷加权: ωₖ = ω·qₖ, Nₖ = N·(-qₖ)
//!
//! ## 依赖关系
//! - 被 `electro/mod.rs` 调用
//! - 使用 `models/`

use crate::error::{ElectroError, Result};
use crate::models::{ChargeTable, CondensedFukui, GlobalElectroValues, LocalElectroRow};

/// 由中性、阳离子 (N-1) 和阴离子 (N+1) 电荷表计算 Fukui 加权局域指数
pub fn fukui_rows(
    neutral: &ChargeTable,
    cation: &ChargeTable,
    anion: &ChargeTable,
    global: &GlobalElectroValues,
) -> Result<Vec<LocalElectroRow>> {
    for other in [cation, anion] {
        if other.len() != neutral.len() {
            return Err(ElectroError::TableMismatch(format!(
                "{} has {} atoms but {} has {}",
                neutral.source,
                neutral.len(),
                other.source,
                other.len()
            )));
        }
    }

    neutral
        .atoms
        .iter()
        .zip(cation.atoms.iter().zip(anion.atoms.iter()))
        .map(|(n, (c, a))| {
            if n.label != c.label || n.label != a.label {
                return Err(ElectroError::TableMismatch(format!(
                    "atom {} is '{}' in {}, '{}' in {} and '{}' in {}",
                    n.index, n.label, neutral.source, c.label, cation.source, a.label, anion.source
                )));
            }

            let f_minus = c.charge - n.charge;
            let f_plus = n.charge - a.charge;

            Ok(LocalElectroRow {
                index: n.index,
                label: n.label.clone(),
                neutral: n.charge,
                fukui: Some(CondensedFukui {
                    cation: c.charge,
                    anion: a.charge,
                    f_minus,
                    f_plus,
                }),
                local_nucleophilicity: global.global_nucleophilicity * f_minus,
                local_electrophilicity: global.global_electrophilicity * f_plus,
            })
        })
        .collect()
}

/// 仅由中性电荷表计算电荷加权局域指数
pub fn charge_rows(neutral: &ChargeTable, global: &GlobalElectroValues) -> Vec<LocalElectroRow> {
    neutral
        .atoms
        .iter()
        .map(|n| LocalElectroRow {
            index: n.index,
            label: n.label.clone(),
            neutral: n.charge,
            fukui: None,
            local_nucleophilicity: -global.global_nucleophilicity * n.charge,
            local_electrophilicity: global.global_electrophilicity * n.charge,
        })
        .collect()
}
