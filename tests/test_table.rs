use beast_comments::model::{AnnotationValue, CellValue, ROW_LABEL_HEADER, Table};
use std::collections::HashMap;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn test_add_creates_row_and_column() {
    let mut table = Table::new();
    table.add("0.95", "Apteryx haastii", "posterior");

    assert!(table.contains_row("Apteryx haastii"));
    assert!(table.contains_column("posterior"));
    assert_eq!(table.get("Apteryx haastii", "posterior"), Some(&text("0.95")));
    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.num_columns(), 1);
}

#[test]
fn test_add_overwrites() {
    let mut table = Table::new();
    table.add("1", "Apteryx owenii", "rate");
    table.add("2", "Apteryx owenii", "rate");
    assert_eq!(table.get("Apteryx owenii", "rate"), Some(&text("2")));
    assert_eq!(table.num_columns(), 1);
}

#[test]
fn test_header_contains_shared_column_once() {
    let mut table = Table::new();
    table.add("1", "Apteryx owenii", "rate");
    table.add("2", "Apteryx mantelli", "rate");
    table.add("3", "Apteryx rowi", "rate");

    let rows: Vec<Vec<String>> = table.output("").collect();
    assert_eq!(rows[0], vec![ROW_LABEL_HEADER, "rate"]);
    assert_eq!(rows.len(), 4);
}

#[test]
fn test_absent_and_empty_cells_differ() {
    let mut table = Table::new();
    table.add("", "Strigops habroptilus", "location");
    table.add("0.1", "Nestor notabilis", "rate");

    assert_eq!(table.get("Strigops habroptilus", "location"), Some(&text("")));
    assert_eq!(table.get("Strigops habroptilus", "rate"), None);

    let rows: Vec<Vec<String>> = table.output("NA").collect();
    assert_eq!(rows[1], vec!["Nestor notabilis", "NA", "0.1"]);
    assert_eq!(rows[2], vec!["Strigops habroptilus", "", "NA"]);
}

#[test]
fn test_output_is_sorted() {
    let mut table = Table::new();
    table.add("c", "Tui", "zeta");
    table.add("a", "Bellbird", "alpha");
    table.add("b", "Kokako", "mu");
    table.add(12.5, "Bellbird", "age");

    let rows: Vec<Vec<String>> = table.output("-").collect();
    assert_eq!(rows[0], vec!["Row label", "age", "alpha", "mu", "zeta"]);
    assert_eq!(rows[1], vec!["Bellbird", "12.5", "a", "-", "-"]);
    assert_eq!(rows[2], vec!["Kokako", "-", "-", "b", "-"]);
    assert_eq!(rows[3], vec!["Tui", "-", "-", "-", "c"]);
}

#[test]
fn test_output_recomputed_after_mutation() {
    let mut table = Table::new();
    table.add("1", "Weka", "rate");
    assert_eq!(table.output("").count(), 2);

    table.add("2", "Pukeko", "height");
    let rows: Vec<Vec<String>> = table.output("").collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], vec!["Row label", "height", "rate"]);
    assert_eq!(rows[1][0], "Pukeko");
}

#[test]
fn test_output_len() {
    let mut table = Table::new();
    table.add("1", "Weka", "rate");
    table.add("1", "Takahe", "rate");
    let output = table.output("");
    assert_eq!(output.len(), 3);
    assert_eq!(output.columns(), ["rate"]);
}

#[test]
fn test_empty_table_output_is_header_only() {
    let table = Table::new();
    let rows: Vec<Vec<String>> = table.output("").collect();
    assert_eq!(rows, vec![vec![ROW_LABEL_HEADER.to_string()]]);
}

#[test]
fn test_add_row_keeps_existing_cells() {
    let mut table = Table::new();
    table.add("0.3", "Kaka", "rate");
    table.add("5.0", "Kaka", "height");

    let mut cells = HashMap::new();
    cells.insert("rate".to_string(), "0.4");
    cells.insert("posterior".to_string(), "1.0");
    table.add_row(cells, "Kaka");

    assert_eq!(table.get("Kaka", "rate"), Some(&text("0.4")));
    assert_eq!(table.get("Kaka", "height"), Some(&text("5.0")));
    assert_eq!(table.get("Kaka", "posterior"), Some(&text("1.0")));
    assert_eq!(table.columns(), vec!["height", "posterior", "rate"]);
}

#[test]
fn test_add_empty_row_creates_row() {
    let mut table = Table::new();
    table.add_row(Vec::<(String, CellValue)>::new(), "Kea");
    assert!(table.contains_row("Kea"));
    assert_eq!(table.num_columns(), 0);
}

#[test]
fn test_merge_is_right_biased() {
    let mut first = Table::new();
    first.add("x", "r", "c");
    first.add("kept", "r", "only_first");
    let mut second = Table::new();
    second.add("y", "r", "c");
    second.add("new", "s", "only_second");

    first.merge(second);

    assert_eq!(first.get("r", "c"), Some(&text("y")));
    assert_eq!(first.get("r", "only_first"), Some(&text("kept")));
    assert_eq!(first.get("s", "only_second"), Some(&text("new")));
    assert_eq!(first.columns(), vec!["c", "only_first", "only_second"]);
    assert_eq!(first.row_labels(), vec!["r", "s"]);
}

#[test]
fn test_merge_commutes_on_disjoint_columns() {
    let build = |col: &str, value: &str| {
        let mut table = Table::new();
        table.add(value, "Hihi", col);
        table
    };

    let mut ab = build("a", "1");
    ab.merge(build("b", "2"));
    let mut ba = build("b", "2");
    ba.merge(build("a", "1"));

    assert_eq!(ab, ba);
}

#[test]
fn test_add_annotation_expands_lists() {
    let mut table = Table::new();
    table.add_annotation("height_median", &AnnotationValue::scalar("47.5"), "Moa");
    table.add_annotation(
        "height_95%_HPD",
        &AnnotationValue::list(["40.1", "70.6"]),
        "Moa",
    );

    assert_eq!(table.get("Moa", "height_median"), Some(&text("47.5")));
    assert_eq!(table.get("Moa", "height_95%_HPD[0]"), Some(&text("40.1")));
    assert_eq!(table.get("Moa", "height_95%_HPD[1]"), Some(&text("70.6")));
    assert!(!table.contains_column("height_95%_HPD"));
}

#[test]
fn test_rows_view() {
    let mut table = Table::new();
    table.add("1", "Tieke", "b");
    table.add(2_i64, "Hihi", "a");

    let rows = table.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "Hihi");
    assert_eq!(rows[0].cells, vec![Some(&CellValue::Int(2)), None]);
    assert_eq!(rows[1].label, "Tieke");
    assert_eq!(rows[1].cells, vec![None, Some(&text("1"))]);
}

#[test]
fn test_add_annotations_of_comment() {
    let annotations = beast_comments::parse_annotation("&rate=0.5,range={1,2}").unwrap();
    let mut table = Table::new();
    table.add_annotations(&annotations, "Kea");
    table.add_annotations(&beast_comments::parse_annotation("&").unwrap(), "Kaka");

    assert_eq!(table.columns(), vec!["range[0]", "range[1]", "rate"]);
    assert!(table.contains_row("Kaka"));
}
