//! # 局域亲电性柱状图
//!
//! 使用 `plotters` 绘制每个原子的局域亲电性 (PNG)。
//!
//! ## 依赖关系
//! - 被 `electro/mod.rs` 调用
//! - 使用 `models/electro.rs` 的 LocalElectroRow

use crate::error::{ElectroError, Result};
use crate::models::LocalElectroRow;

use plotters::prelude::*;
use std::path::Path;

fn plot_err<E: std::fmt::Display>(e: E) -> ElectroError {
    ElectroError::PlotError(e.to_string())
}

/// 生成局域亲电性柱状图
pub fn plot_local_electrophilicity(rows: &[LocalElectroRow], title: &str, output_path: &Path) -> Result<()> {
    if rows.is_empty() {
        return Err(ElectroError::PlotError("No atoms to plot".to_string()));
    }

    let y_min = rows
        .iter()
        .map(|r| r.local_electrophilicity)
        .fold(0.0, f64::min);
    let y_max = rows
        .iter()
        .map(|r| r.local_electrophilicity)
        .fold(0.0, f64::max);
    let y_margin = ((y_max - y_min).abs() * 0.1).max(1e-3);

    let n = rows.len() as u32;
    let width = (n * 60).clamp(600, 2400);

    let root = BitMapBackend::new(output_path, (width, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d((0u32..n).into_segmented(), (y_min - y_margin)..(y_max + y_margin))
        .map_err(plot_err)?;

    let atom_label = |v: &SegmentValue<u32>| match v {
        SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => rows
            .get(*i as usize)
            .map(|r| r.label.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&atom_label)
        .x_desc("Atom")
        .y_desc("Local electrophilicity (eV)")
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, r)| {
            let i = i as u32;
            let style = if r.local_electrophilicity >= 0.0 {
                RED.mix(0.8).filled()
            } else {
                BLUE.mix(0.8).filled()
            };
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), r.local_electrophilicity),
                ],
                style,
            );
            bar.set_margin(0, 0, 6, 6);
            bar
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;

    Ok(())
}
