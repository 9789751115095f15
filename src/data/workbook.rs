//! data/workbook.rs — one-shot workbook load.
//!
//! Reads the two named sheets of the results workbook into the data model.
//! Any missing file, missing sheet, missing column, malformed statistic, or
//! unmapped category code is fatal: there is nothing to render without the
//! data, so the caller aborts before a window opens.

use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use thiserror::Error;
use tracing::info;

use super::record::{Category, DemoTable, FeatureRecord, Group, GroupPair, GroupStat};

/// Statistics sheet name.
pub const STATS_SHEET: &str = "org_edit";
/// Demographics sheet name.
pub const DEMO_SHEET: &str = "demo";

/// Feature-name column of the statistics sheet.
pub const FEATURE_COLUMN: &str = "변수명";
pub const CATEGORY_COLUMN: &str = "Category";
pub const ANOVA_COLUMN: &str = "P-Value";
pub const KRUSKAL_COLUMN: &str = "Kruskal P";
pub const ETA_COLUMN: &str = "Eta-Squared";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open workbook {path}: {source}")]
    Open {
        path: String,
        source: calamine::XlsxError,
    },
    #[error("failed to read sheet {sheet:?}: {source}")]
    Sheet {
        sheet: &'static str,
        source: calamine::XlsxError,
    },
    #[error("workbook has no sheet named {0:?}")]
    MissingSheet(&'static str),
    #[error("sheet {sheet:?} has no header row")]
    EmptySheet { sheet: &'static str },
    #[error("sheet {sheet:?} has no column named {column:?}")]
    MissingColumn {
        sheet: &'static str,
        column: String,
    },
    #[error("{sheet}!{column}, row {row}: expected a number, found {found:?}")]
    MalformedCell {
        sheet: &'static str,
        column: &'static str,
        row: usize,
        found: String,
    },
    #[error("{sheet} row {row}: unmapped category code {code}")]
    UnknownCategory {
        sheet: &'static str,
        row: usize,
        code: i64,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Load both sheets. The statistics sheet is decoded into records; the
/// demographics sheet is passed through as display text.
pub fn load(path: &Path) -> Result<(Vec<FeatureRecord>, DemoTable)> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let stats_range = sheet_range(&mut workbook, STATS_SHEET)?;
    let demo_range = sheet_range(&mut workbook, DEMO_SHEET)?;

    let features = decode_features(&stats_range)?;
    let demo = decode_demo(&demo_range);
    info!(
        features = features.len(),
        demo_rows = demo.rows.len(),
        "workbook loaded from {}",
        path.display()
    );
    Ok((features, demo))
}

fn sheet_range(workbook: &mut Xlsx<std::io::BufReader<std::fs::File>>, sheet: &'static str) -> Result<Range<Data>> {
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(LoadError::MissingSheet(sheet));
    }
    workbook
        .worksheet_range(sheet)
        .map_err(|source| LoadError::Sheet { sheet, source })
}

/// Decode the statistics sheet. Column positions are resolved from the
/// header row by exact name; every statistic must be numeric.
pub fn decode_features(range: &Range<Data>) -> Result<Vec<FeatureRecord>> {
    let mut rows = range.rows();
    let header = rows.next().ok_or(LoadError::EmptySheet { sheet: STATS_SHEET })?;

    let feature_col = column_index(header, FEATURE_COLUMN)?;
    let category_col = column_index(header, CATEGORY_COLUMN)?;
    let anova_col = column_index(header, ANOVA_COLUMN)?;
    let kruskal_col = column_index(header, KRUSKAL_COLUMN)?;
    let eta_col = column_index(header, ETA_COLUMN)?;

    let mut stat_cols = [(0usize, 0usize); 4];
    for group in Group::ALL {
        stat_cols[group.index()] = (
            column_index(header, group.mean_column())?,
            column_index(header, group.std_column())?,
        );
    }
    let mut flag_cols = [0usize; 6];
    for pair in GroupPair::ALL {
        flag_cols[pair.index()] = column_index(header, pair.column())?;
    }

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        // Worksheet row number, counting the header as row 1.
        let row_no = i + 2;
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let code = cell_f64(cell_at(row, category_col)).ok_or_else(|| {
            malformed(CATEGORY_COLUMN, row_no, cell_at(row, category_col))
        })? as i64;
        let category = Category::from_code(code).ok_or(LoadError::UnknownCategory {
            sheet: STATS_SHEET,
            row: row_no,
            code,
        })?;

        let mut stats = [GroupStat::default(); 4];
        for group in Group::ALL {
            let (mean_col, std_col) = stat_cols[group.index()];
            stats[group.index()] = GroupStat {
                mean: numeric(row, mean_col, group.mean_column(), row_no)?,
                std: numeric(row, std_col, group.std_column(), row_no)?,
            };
        }

        // Flags are binary in well-formed data; anything other than a
        // numeric 1 reads as "not significant", matching the upstream app.
        let mut significant = [false; 6];
        for pair in GroupPair::ALL {
            significant[pair.index()] =
                cell_f64(cell_at(row, flag_cols[pair.index()])) == Some(1.0);
        }

        records.push(FeatureRecord {
            name: cell_string(cell_at(row, feature_col)),
            category,
            anova_p: numeric(row, anova_col, ANOVA_COLUMN, row_no)?,
            kruskal_p: numeric(row, kruskal_col, KRUSKAL_COLUMN, row_no)?,
            eta_squared: numeric(row, eta_col, ETA_COLUMN, row_no)?,
            stats,
            significant,
        });
    }
    Ok(records)
}

/// Decode the demographics sheet as display text, columns untouched.
pub fn decode_demo(range: &Range<Data>) -> DemoTable {
    let mut rows = range.rows();
    let header = match rows.next() {
        Some(row) => row.iter().map(cell_string).collect(),
        None => return DemoTable::default(),
    };
    let rows = rows
        .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(cell_string).collect())
        .collect();
    DemoTable { header, rows }
}

fn column_index(header: &[Data], column: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| match cell {
            Data::String(s) => s.trim() == column,
            _ => false,
        })
        .ok_or_else(|| LoadError::MissingColumn {
            sheet: STATS_SHEET,
            column: column.to_string(),
        })
}

fn cell_at(row: &[Data], col: usize) -> &Data {
    row.get(col).unwrap_or(&Data::Empty)
}

fn cell_f64(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn cell_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn numeric(row: &[Data], col: usize, column: &'static str, row_no: usize) -> Result<f64> {
    let cell = cell_at(row, col);
    cell_f64(cell).ok_or_else(|| malformed(column, row_no, cell))
}

fn malformed(column: &'static str, row_no: usize, cell: &Data) -> LoadError {
    LoadError::MalformedCell {
        sheet: STATS_SHEET,
        column,
        row: row_no,
        found: cell_string(cell),
    }
}
