use calamine::{Data, Range};

use gaitscope::data::record::{Category, Group, GroupPair};
use gaitscope::data::workbook::{decode_demo, decode_features, LoadError};

fn s(text: &str) -> Data {
    Data::String(text.to_string())
}

fn range_from(rows: Vec<Vec<Data>>) -> Range<Data> {
    let cols = rows.iter().map(|r| r.len()).max().unwrap_or(1);
    let mut range = Range::new((0, 0), (rows.len() as u32 - 1, cols as u32 - 1));
    for (r, row) in rows.into_iter().enumerate() {
        for (c, cell) in row.into_iter().enumerate() {
            range.set_value((r as u32, c as u32), cell);
        }
    }
    range
}

fn stats_header() -> Vec<Data> {
    let mut header = vec![
        s("변수명"),
        s("Category"),
        s("P-Value"),
        s("Kruskal P"),
        s("Eta-Squared"),
    ];
    for group in Group::ALL {
        header.push(s(group.mean_column()));
        header.push(s(group.std_column()));
    }
    for pair in GroupPair::ALL {
        header.push(s(pair.column()));
    }
    header
}

fn stats_row(name: &str, code: i64, flags: [i64; 6]) -> Vec<Data> {
    let mut row = vec![
        s(name),
        Data::Int(code),
        Data::Float(0.01),
        Data::Float(0.02),
        Data::Float(0.25),
    ];
    for i in 0..4 {
        row.push(Data::Float(10.0 + i as f64));
        row.push(Data::Float(1.0 + i as f64 * 0.1));
    }
    for flag in flags {
        row.push(Data::Int(flag));
    }
    row
}

#[test]
fn decodes_a_well_formed_row() {
    let range = range_from(vec![
        stats_header(),
        stats_row("stride_time_cv", 2, [1, 0, 1, 0, 0, 1]),
    ]);
    let records = decode_features(&range).expect("decode");
    assert_eq!(records.len(), 1);

    let r = &records[0];
    assert_eq!(r.name, "stride_time_cv");
    assert_eq!(r.category, Category::SpatioTemporal);
    assert_eq!(r.anova_p, 0.01);
    assert_eq!(r.kruskal_p, 0.02);
    assert_eq!(r.eta_squared, 0.25);
    assert_eq!(r.stat(Group::Hc).mean, 10.0);
    assert_eq!(r.stat(Group::ModPd).mean, 13.0);
    assert!(r.is_significant(GroupPair::HcRbd));
    assert!(!r.is_significant(GroupPair::HcMildPd));
    assert!(r.is_significant(GroupPair::HcModPd));
    assert!(r.is_significant(GroupPair::MildPdModPd));
}

#[test]
fn blank_rows_are_skipped() {
    let blank = vec![Data::Empty; stats_header().len()];
    let range = range_from(vec![
        stats_header(),
        blank,
        stats_row("step_length", 3, [0; 6]),
    ]);
    let records = decode_features(&range).expect("decode");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "step_length");
}

#[test]
fn missing_column_is_fatal() {
    let mut header = stats_header();
    header.retain(|cell| !matches!(cell, Data::String(s) if s == "Eta-Squared"));
    let range = range_from(vec![header]);

    match decode_features(&range) {
        Err(LoadError::MissingColumn { column, .. }) => assert_eq!(column, "Eta-Squared"),
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn malformed_statistic_is_fatal() {
    let mut row = stats_row("gait_speed", 2, [0; 6]);
    row[5] = s("n/a"); // HC_mean
    let range = range_from(vec![stats_header(), row]);

    match decode_features(&range) {
        Err(LoadError::MalformedCell { column, row, .. }) => {
            assert_eq!(column, "HC_mean");
            assert_eq!(row, 2);
        }
        other => panic!("expected MalformedCell, got {other:?}"),
    }
}

#[test]
fn unmapped_category_code_is_fatal() {
    let range = range_from(vec![stats_header(), stats_row("mystery", 9, [0; 6])]);
    match decode_features(&range) {
        Err(LoadError::UnknownCategory { code, .. }) => assert_eq!(code, 9),
        other => panic!("expected UnknownCategory, got {other:?}"),
    }
}

#[test]
fn numeric_text_cells_still_parse() {
    let mut row = stats_row("asymmetry", 4, [0; 6]);
    row[2] = s("0.03"); // P-Value as text
    let range = range_from(vec![stats_header(), row]);
    let records = decode_features(&range).expect("decode");
    assert_eq!(records[0].anova_p, 0.03);
}

#[test]
fn demo_sheet_passes_through_unmodified() {
    let range = range_from(vec![
        vec![s("Group"), s("N"), s("Age")],
        vec![s("HC"), Data::Int(31), Data::Float(66.4)],
        vec![s("RBD"), Data::Int(28), Data::Float(68.1)],
    ]);
    let demo = decode_demo(&range);
    assert_eq!(demo.header, ["Group", "N", "Age"]);
    assert_eq!(demo.rows.len(), 2);
    assert_eq!(demo.rows[0][0], "HC");
    assert_eq!(demo.rows[1][1], "28");
}

#[test]
fn missing_workbook_file_is_fatal() {
    let err = gaitscope::data::workbook::load(std::path::Path::new("/nonexistent/missing.xlsx"))
        .unwrap_err();
    assert!(matches!(err, LoadError::Open { .. }));
}

#[test]
fn empty_demo_sheet_yields_empty_table() {
    let range: Range<Data> = Range::empty();
    let demo = decode_demo(&range);
    assert!(demo.header.is_empty());
    assert!(demo.rows.is_empty());
}
