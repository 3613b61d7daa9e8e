//! # 亲电性指数数据模型
//!
//! 前线轨道能量、全局指数和逐原子的局域指数。
//!
//! ## 依赖关系
//! - 被 `parsers/orbitals.rs` 使用
//! - 被 `electro/` 和 `commands/` 使用

/// 前线轨道能量 (Hartree)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierOrbitals {
    pub homo: f64,
    pub lumo: f64,
}

/// 全局反应性指数 (eV)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalElectroValues {
    /// 来源轨道 (Hartree)
    pub orbitals: FrontierOrbitals,
    /// 电负性 χ = -(H + L) / 2
    pub electronegativity: f64,
    /// 硬度 η = L - H
    pub hardness: f64,
    /// 软度 S = 1 / (2η)
    pub softness: f64,
    /// 全局亲电性 ω = χ² / (2η)
    pub global_electrophilicity: f64,
    /// 全局亲核性 N = 1 / ω
    pub global_nucleophilicity: f64,
}

impl GlobalElectroValues {
    /// 文本输出中的 (名称, 数值) 对，顺序固定
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            ("electronegativity", self.electronegativity),
            ("hardness", self.hardness),
            ("softness", self.softness),
            ("global_electrophilicity", self.global_electrophilicity),
            ("global_nucleophilicity", self.global_nucleophilicity),
        ]
    }
}

/// 局域指数的加权方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalWeight {
    /// 凝聚 Fukui 函数（需要阴离子和阳离子日志）
    Fukui,
    /// 中性分子的部分电荷
    Charge,
}

impl std::fmt::Display for LocalWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalWeight::Fukui => write!(f, "condensed Fukui"),
            LocalWeight::Charge => write!(f, "partial charge"),
        }
    }
}

/// 凝聚 Fukui 函数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CondensedFukui {
    /// N-1 电子体系（阳离子）电荷
    pub cation: f64,
    /// N+1 电子体系（阴离子）电荷
    pub anion: f64,
    /// f⁻ = q(N-1) - q(N)
    pub f_minus: f64,
    /// f⁺ = q(N) - q(N+1)
    pub f_plus: f64,
}

/// 单个原子的局域指数
#[derive(Debug, Clone, PartialEq)]
pub struct LocalElectroRow {
    pub index: usize,
    pub label: String,
    /// 中性分子电荷
    pub neutral: f64,
    /// Fukui 加权时存在
    pub fukui: Option<CondensedFukui>,
    pub local_nucleophilicity: f64,
    pub local_electrophilicity: f64,
}
