//! # 亲电性计算模块
//!
//! 从 Gaussian .log 文件计算全局与局域亲电性指数。
//!
//! ## 流程
//! 1. 读取日志，提取 HOMO/LUMO
//! 2. 计算全局指数
//! 3. 提取原子电荷表（中性，及可选的阴/阳离子伴随日志）
//! 4. 计算局域指数
//! 5. 写出 CSV / 文本（以及可选的柱状图）
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `parsers/`、`models/`
//! - 子模块: global, local, export, plot

pub mod export;
pub mod global;
pub mod local;
pub mod plot;

use crate::cli::WeightMode;
use crate::error::{ElectroError, Result};
use crate::models::{ChargeScheme, ChargeTable, GlobalElectroValues, LocalElectroRow, LocalWeight};
use crate::parsers::{self, orbitals};

use std::path::{Path, PathBuf};

/// 阴离子 (N+1 电子) 伴随日志后缀
pub const ANION_SUFFIX: &str = "-1";
/// 阳离子 (N-1 电子) 伴随日志后缀
pub const CATION_SUFFIX: &str = "+1";

/// 分析配置
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    pub scheme: ChargeScheme,
    pub weight: WeightMode,
    pub skip_hydrogens: bool,
    /// 显式指定的阴离子日志
    pub anion: Option<PathBuf>,
    /// 显式指定的阳离子日志
    pub cation: Option<PathBuf>,
    pub precision: Option<usize>,
    pub plot: bool,
}

/// 单个日志的分析结果
#[derive(Debug, Clone)]
pub struct ElectroReport {
    pub input: PathBuf,
    pub scheme: ChargeScheme,
    pub weight: LocalWeight,
    pub global: GlobalElectroValues,
    pub rows: Vec<LocalElectroRow>,
}

/// 输出文件路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub local_csv: PathBuf,
    pub global_txt: PathBuf,
    pub plot: PathBuf,
}

impl OutputPaths {
    /// 与输入文件同目录，以去掉扩展名的文件名为前缀
    pub fn for_input(input: &Path) -> Self {
        let stem = file_stem(input);
        OutputPaths {
            local_csv: input.with_file_name(format!("{}_local_electro.csv", stem)),
            global_txt: input.with_file_name(format!("{}_global_electro.txt", stem)),
            plot: input.with_file_name(format!("{}_local_electro.png", stem)),
        }
    }

    /// 本次运行需要的输出是否都已存在（`plot` 为真时包括柱状图）
    pub fn exist(&self, plot: bool) -> bool {
        self.local_csv.exists() && self.global_txt.exists() && (!plot || self.plot.is_file())
    }

    /// 删除已写出的部分输出
    fn remove_partial(&self) {
        for path in [&self.local_csv, &self.global_txt, &self.plot] {
            if path.is_file() {
                if let Err(e) = std::fs::remove_file(path) {
                    log::warn!("failed to remove partial output '{}': {e}", path.display());
                }
            }
        }
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "output".to_string())
}

/// 伴随日志路径: `<stem><suffix>.<ext>`
pub fn companion_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = file_stem(input);
    let name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };
    input.with_file_name(name)
}

/// 是否为伴随日志（文件名以 -1 或 +1 结尾）
pub fn is_companion(path: &Path) -> bool {
    let stem = file_stem(path);
    stem.ends_with(ANION_SUFFIX) || stem.ends_with(CATION_SUFFIX)
}

/// 分析单个日志
pub fn analyze(input: &Path, options: &AnalysisOptions) -> Result<ElectroReport> {
    let source = input.display().to_string();
    let content = parsers::read_log(input)?;

    let frontier = orbitals::parse_frontier_orbitals(&content, &source)?;
    let global = global::compute_global(frontier)?;
    let neutral = load_table(&content, &source, options)?;

    let anion_path = options
        .anion
        .clone()
        .unwrap_or_else(|| companion_path(input, ANION_SUFFIX));
    let cation_path = options
        .cation
        .clone()
        .unwrap_or_else(|| companion_path(input, CATION_SUFFIX));

    let weight = resolve_weight(options.weight, &anion_path, &cation_path);
    log::info!("{source}: local indices weighted by {weight}");

    let rows = match weight {
        LocalWeight::Fukui => {
            let cation = read_table(&cation_path, options)?;
            let anion = read_table(&anion_path, options)?;
            local::fukui_rows(&neutral, &cation, &anion, &global)?
        }
        LocalWeight::Charge => local::charge_rows(&neutral, &global),
    };

    Ok(ElectroReport {
        input: input.to_path_buf(),
        scheme: options.scheme,
        weight,
        global,
        rows,
    })
}

/// 确定局域指数的加权方式
fn resolve_weight(mode: WeightMode, anion: &Path, cation: &Path) -> LocalWeight {
    match mode {
        WeightMode::Fukui => LocalWeight::Fukui,
        WeightMode::Charge => LocalWeight::Charge,
        WeightMode::Auto => {
            if anion.is_file() && cation.is_file() {
                LocalWeight::Fukui
            } else {
                log::warn!(
                    "companion logs '{}' / '{}' not found, weighting local indices by partial charge",
                    anion.display(),
                    cation.display()
                );
                LocalWeight::Charge
            }
        }
    }
}

fn load_table(content: &str, source: &str, options: &AnalysisOptions) -> Result<ChargeTable> {
    let table = parsers::parse_charge_table(content, options.scheme, source)?;
    let table = if options.skip_hydrogens {
        table.without_hydrogens()
    } else {
        table
    };
    log::debug!(
        "{source}: {} {} atoms, total charge {:.5}",
        table.len(),
        table.scheme,
        table.total_charge()
    );

    if table.is_empty() {
        return Err(ElectroError::parse(
            &options.scheme.to_string(),
            source,
            "No atoms left after removing hydrogens",
        ));
    }
    Ok(table)
}

fn read_table(path: &Path, options: &AnalysisOptions) -> Result<ChargeTable> {
    let content = parsers::read_log(path)?;
    load_table(&content, &path.display().to_string(), options)
}

/// 写出分析结果
///
/// 任一输出失败时删除本次已写出的文件，不留下不完整的结果。
pub fn write_outputs(report: &ElectroReport, paths: &OutputPaths, options: &AnalysisOptions) -> Result<()> {
    let result = write_all(report, paths, options);
    if result.is_err() {
        paths.remove_partial();
    }
    result
}

fn write_all(report: &ElectroReport, paths: &OutputPaths, options: &AnalysisOptions) -> Result<()> {
    if options.plot {
        let title = format!("{} ({})", file_stem(&report.input), report.weight);
        plot::plot_local_electrophilicity(&report.rows, &title, &paths.plot)?;
    }

    export::write_local_csv(&report.rows, report.weight, &paths.local_csv, options.precision)?;
    export::write_global_txt(&report.global, &paths.global_txt, options.precision)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::for_input(Path::new("data/thiazole.log"));
        assert_eq!(paths.local_csv, Path::new("data/thiazole_local_electro.csv"));
        assert_eq!(paths.global_txt, Path::new("data/thiazole_global_electro.txt"));
        assert_eq!(paths.plot, Path::new("data/thiazole_local_electro.png"));
    }

    #[test]
    fn test_companion_path() {
        let input = Path::new("runs/thiazole.log");
        assert_eq!(
            companion_path(input, ANION_SUFFIX),
            Path::new("runs/thiazole-1.log")
        );
        assert_eq!(
            companion_path(input, CATION_SUFFIX),
            Path::new("runs/thiazole+1.log")
        );
        assert_eq!(companion_path(Path::new("mol"), "+1"), Path::new("mol+1"));
    }

    #[test]
    fn test_is_companion() {
        assert!(is_companion(Path::new("thiazole-1.log")));
        assert!(is_companion(Path::new("thiazole+1.log")));
        assert!(!is_companion(Path::new("thiazole.log")));
        assert!(!is_companion(Path::new("thiazole-11.log")));
    }

    #[test]
    fn test_analyze_fixture_without_hydrogens() {
        let options = AnalysisOptions {
            skip_hydrogens: true,
            ..Default::default()
        };
        let report = analyze(Path::new("tests/data/thiazole.log"), &options).unwrap();

        assert_eq!(report.weight, LocalWeight::Fukui);
        assert_eq!(report.rows.len(), 5);
        assert_eq!(report.global.orbitals.homo, -0.25);
        assert_eq!(report.global.orbitals.lumo, -0.05);
        assert!(report.rows.iter().all(|r| !r.label.starts_with('H')));
    }

    #[test]
    fn test_outputs_exist_requires_plot_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_input(&dir.path().join("mol.log"));
        std::fs::write(&paths.local_csv, "").unwrap();
        std::fs::write(&paths.global_txt, "").unwrap();

        assert!(paths.exist(false));
        assert!(!paths.exist(true));

        std::fs::write(&paths.plot, "").unwrap();
        assert!(paths.exist(true));
    }

    #[test]
    fn test_failed_plot_leaves_no_outputs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::copy("tests/data/thiazole.log", dir.path().join("thiazole.log")).unwrap();
        let input = dir.path().join("thiazole.log");
        let paths = OutputPaths::for_input(&input);
        // a directory in place of the PNG makes the plot fail
        std::fs::create_dir(&paths.plot).unwrap();

        let options = AnalysisOptions {
            plot: true,
            ..Default::default()
        };
        let report = analyze(&input, &options).unwrap();

        assert!(write_outputs(&report, &paths, &options).is_err());
        assert!(!paths.local_csv.exists());
        assert!(!paths.global_txt.exists());
        assert!(paths.plot.is_dir());
    }

    #[test]
    fn test_resolve_weight_without_companions() {
        let missing = Path::new("/nonexistent/mol-1.log");
        assert_eq!(resolve_weight(WeightMode::Auto, missing, missing), LocalWeight::Charge);
        assert_eq!(resolve_weight(WeightMode::Fukui, missing, missing), LocalWeight::Fukui);
    }
}
