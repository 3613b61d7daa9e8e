//! # 亲电性数据导出
//!
//! - `<stem>_local_electro.csv`: 每个原子一行
//! - `<stem>_global_electro.txt`: `name; value` 形式的全局指数
//!
//! ## 依赖关系
//! - 被 `electro/mod.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{ElectroError, Result};
use crate::models::{GlobalElectroValues, LocalElectroRow, LocalWeight};

use std::fs::File;
use std::io::Write;
use std::path::Path;

const FUKUI_HEADER: [&str; 9] = [
    "index",
    "label",
    "neutral",
    "cation",
    "anion",
    "f_minus",
    "f_plus",
    "local_nucleophilicity",
    "local_electrophilicity",
];

const CHARGE_HEADER: [&str; 5] = [
    "index",
    "label",
    "neutral",
    "local_nucleophilicity",
    "local_electrophilicity",
];

/// 格式化数值：指定小数位，或最短往返精度
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, value),
        None => format!("{}", value),
    }
}

/// 导出局域指数为 CSV
pub fn write_local_csv(
    rows: &[LocalElectroRow],
    weight: LocalWeight,
    output_path: &Path,
    precision: Option<usize>,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    match weight {
        LocalWeight::Fukui => wtr.write_record(FUKUI_HEADER)?,
        LocalWeight::Charge => wtr.write_record(CHARGE_HEADER)?,
    }

    let fmt = |v: f64| format_value(v, precision);

    for row in rows {
        let mut record = vec![row.index.to_string(), row.label.clone(), fmt(row.neutral)];

        if weight == LocalWeight::Fukui {
            let fukui = row.fukui.ok_or_else(|| {
                ElectroError::Other(format!("atom {} has no Fukui data", row.label))
            })?;
            record.extend([
                fmt(fukui.cation),
                fmt(fukui.anion),
                fmt(fukui.f_minus),
                fmt(fukui.f_plus),
            ]);
        }

        record.push(fmt(row.local_nucleophilicity));
        record.push(fmt(row.local_electrophilicity));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| ElectroError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出全局指数为文本
pub fn write_global_txt(
    global: &GlobalElectroValues,
    output_path: &Path,
    precision: Option<usize>,
) -> Result<()> {
    let write_err = |e: std::io::Error| ElectroError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    };

    let mut file = File::create(output_path).map_err(write_err)?;

    for (name, value) in global.labelled() {
        writeln!(file, "{}; {}", name, format_value(value, precision)).map_err(write_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CondensedFukui, FrontierOrbitals};
    use std::fs;
    use tempfile::tempdir;

    fn row(label: &str, fukui: Option<CondensedFukui>) -> LocalElectroRow {
        LocalElectroRow {
            index: 1,
            label: label.to_string(),
            neutral: -0.1,
            fukui,
            local_nucleophilicity: 0.5,
            local_electrophilicity: 0.25,
        }
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(0.1, None), "0.1");
        assert_eq!(format_value(1.23456, Some(4)), "1.2346");
        assert_eq!(format_value(-2.0, Some(2)), "-2.00");
    }

    #[test]
    fn test_write_charge_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mol_local_electro.csv");
        write_local_csv(&[row("C1", None)], LocalWeight::Charge, &path, None).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "index,label,neutral,local_nucleophilicity,local_electrophilicity\n1,C1,-0.1,0.5,0.25\n"
        );
    }

    #[test]
    fn test_write_fukui_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mol_local_electro.csv");
        let fukui = CondensedFukui {
            cation: 0.2,
            anion: -0.5,
            f_minus: 0.3,
            f_plus: 0.4,
        };
        write_local_csv(&[row("C1", Some(fukui))], LocalWeight::Fukui, &path, Some(2)).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], FUKUI_HEADER.join(","));
        assert_eq!(lines[1], "1,C1,-0.10,0.20,-0.50,0.30,0.40,0.50,0.25");
    }

    #[test]
    fn test_fukui_csv_requires_fukui_data() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mol_local_electro.csv");
        assert!(write_local_csv(&[row("C1", None)], LocalWeight::Fukui, &path, None).is_err());
    }

    #[test]
    fn test_write_global_txt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mol_global_electro.txt");
        let global = GlobalElectroValues {
            orbitals: FrontierOrbitals {
                homo: -0.25,
                lumo: -0.05,
            },
            electronegativity: 4.0,
            hardness: 5.0,
            softness: 0.1,
            global_electrophilicity: 1.6,
            global_nucleophilicity: 0.625,
        };
        write_global_txt(&global, &path, None).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "electronegativity; 4\nhardness; 5\nsoftness; 0.1\nglobal_electrophilicity; 1.6\nglobal_nucleophilicity; 0.625\n"
        );
    }
}
