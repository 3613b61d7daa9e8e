//! # 单文件模式
//!
//! 分析一个 Gaussian .log 文件，写出两个结果文件并在终端显示摘要。
//!
//! ## 依赖关系
//! - 使用 `electro/` 完成计算和导出
//! - 使用 `utils/output.rs`

use crate::electro::{self, export::format_value, AnalysisOptions, ElectroReport, OutputPaths};
use crate::error::Result;
use crate::models::LocalWeight;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 全局指数表格行
#[derive(Debug, Clone, Tabled)]
struct GlobalRow {
    #[tabled(rename = "Property")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// 局域指数表格行
#[derive(Debug, Clone, Tabled)]
struct AtomRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Atom")]
    label: String,
    #[tabled(rename = "Charge")]
    charge: String,
    #[tabled(rename = "f+")]
    f_plus: String,
    #[tabled(rename = "ω_k (eV)")]
    electrophilicity: String,
    #[tabled(rename = "N_k")]
    nucleophilicity: String,
}

/// 执行单文件分析
pub fn execute(input: &Path, options: &AnalysisOptions, top_n: usize) -> Result<()> {
    output::print_header("Electrophilicity Analysis");
    output::print_info(&format!(
        "Reading '{}' ({} charges, weight: {})",
        input.display(),
        options.scheme,
        options.weight
    ));

    let report = electro::analyze(input, options)?;

    output::print_success(&format!(
        "HOMO = {:.5} Eh, LUMO = {:.5} Eh",
        report.global.orbitals.homo, report.global.orbitals.lumo
    ));
    output::print_success(&format!(
        "{} atoms with {} charges",
        report.rows.len(),
        report.scheme
    ));
    if report.weight == LocalWeight::Charge {
        output::print_warning("Local indices weighted by partial charge (no Fukui data)");
    }

    let paths = OutputPaths::for_input(input);
    electro::write_outputs(&report, &paths, options)?;

    print_global_table(&report);
    print_atom_table(&report, top_n);

    output::print_separator();
    output::print_written(&paths.local_csv.display().to_string());
    output::print_written(&paths.global_txt.display().to_string());
    if options.plot {
        output::print_written(&paths.plot.display().to_string());
    }

    Ok(())
}

fn print_global_table(report: &ElectroReport) {
    let rows: Vec<GlobalRow> = report
        .global
        .labelled()
        .into_iter()
        .map(|(name, value)| GlobalRow {
            name,
            value: format_value(value, Some(4)),
        })
        .collect();

    output::print_header("Global Indices");
    println!("{}", Table::new(&rows));
}

fn print_atom_table(report: &ElectroReport, top_n: usize) {
    if top_n == 0 {
        return;
    }

    let mut ranked: Vec<_> = report.rows.iter().collect();
    ranked.sort_by(|a, b| {
        b.local_electrophilicity
            .partial_cmp(&a.local_electrophilicity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let rows: Vec<AtomRow> = ranked
        .iter()
        .take(top_n)
        .enumerate()
        .map(|(i, r)| AtomRow {
            rank: i + 1,
            label: r.label.clone(),
            charge: format_value(r.neutral, Some(4)),
            f_plus: r
                .fukui
                .map(|f| format_value(f.f_plus, Some(4)))
                .unwrap_or_else(|| "-".to_string()),
            electrophilicity: format_value(r.local_electrophilicity, Some(4)),
            nucleophilicity: format_value(r.local_nucleophilicity, Some(4)),
        })
        .collect();

    output::print_header(&format!(
        "Top {} Atoms by Local Electrophilicity",
        top_n.min(report.rows.len())
    ));
    println!("{}", Table::new(&rows));
}
