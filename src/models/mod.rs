//! # 数据模型模块
//!
//! 定义原子电荷表、前线轨道和亲电性指数的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`electro/` 和 `commands/` 使用
//! - 子模块: charges, electro

pub mod charges;
pub mod electro;

pub use self::charges::{AtomCharge, ChargeScheme, ChargeTable};
pub use self::electro::{
    CondensedFukui, FrontierOrbitals, GlobalElectroValues, LocalElectroRow, LocalWeight,
};
