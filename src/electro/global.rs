//! # 全局反应性指数
//!
//! 由前线轨道能量计算电负性、硬度、软度、全局亲电性和亲核性。
//!
//! ## 依赖关系
//! - 被 `electro/mod.rs` 调用
//! - 使用 `models/electro.rs`

use crate::error::{ElectroError, Result};
use crate::models::{FrontierOrbitals, GlobalElectroValues};

/// Hartree -> eV
pub const HARTREE_TO_EV: f64 = 27.212;

/// 计算全局指数
pub fn compute_global(orbitals: FrontierOrbitals) -> Result<GlobalElectroValues> {
    let homo = HARTREE_TO_EV * orbitals.homo;
    let lumo = HARTREE_TO_EV * orbitals.lumo;

    let electronegativity = -(homo + lumo) / 2.0;
    let hardness = lumo - homo;

    if hardness.is_nan() || hardness <= 0.0 {
        return Err(ElectroError::InvalidOrbitals(format!(
            "LUMO ({} Eh) must lie above HOMO ({} Eh)",
            orbitals.lumo, orbitals.homo
        )));
    }

    let softness = 1.0 / (2.0 * hardness);
    let global_electrophilicity = electronegativity.powi(2) / (2.0 * hardness);

    if global_electrophilicity == 0.0 {
        return Err(ElectroError::InvalidOrbitals(
            "zero electronegativity, nucleophilicity is undefined".to_string(),
        ));
    }

    let global_nucleophilicity = 1.0 / global_electrophilicity;

    Ok(GlobalElectroValues {
        orbitals,
        electronegativity,
        hardness,
        softness,
        global_electrophilicity,
        global_nucleophilicity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_global_values() {
        let orbitals = FrontierOrbitals {
            homo: -0.25,
            lumo: -0.05,
        };
        let global = compute_global(orbitals).unwrap();

        let h = -0.25 * HARTREE_TO_EV;
        let l = -0.05 * HARTREE_TO_EV;
        let chi = -(h + l) / 2.0;
        let eta = l - h;

        assert_relative_eq!(global.electronegativity, chi);
        assert_relative_eq!(global.hardness, eta);
        assert_relative_eq!(global.softness, 1.0 / (2.0 * eta));
        assert_relative_eq!(global.global_electrophilicity, chi * chi / (2.0 * eta));
        assert_relative_eq!(
            global.global_nucleophilicity * global.global_electrophilicity,
            1.0,
            epsilon = 1e-12
        );
        // 数值检查: χ = 4.0818 eV, η = 5.4424 eV
        assert_relative_eq!(global.electronegativity, 4.0818, epsilon = 1e-9);
        assert_relative_eq!(global.hardness, 5.4424, epsilon = 1e-9);
    }

    #[test]
    fn test_inverted_orbitals() {
        let orbitals = FrontierOrbitals {
            homo: -0.05,
            lumo: -0.25,
        };
        assert!(matches!(
            compute_global(orbitals),
            Err(ElectroError::InvalidOrbitals(_))
        ));
    }

    #[test]
    fn test_zero_electronegativity() {
        let orbitals = FrontierOrbitals {
            homo: -0.1,
            lumo: 0.1,
        };
        assert!(compute_global(orbitals).is_err());
    }
}
