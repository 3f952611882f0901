use tamiz_core::models::styles::{Alignment, DocumentStyles, PageSize};
use tamiz_export::block::{Block, Cell, CellRole, Table, TableKind};
use tamiz_export::error::ExportError;
use tamiz_export::layout::{align, paginate, table_lines, wrap, TextGeometry};

#[test]
fn wrap_breaks_on_words_and_splits_long_ones() {
    assert_eq!(wrap("uno dos tres", 7), ["uno dos", "tres"]);
    assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
    assert_eq!(wrap("", 10), [""]);
}

#[test]
fn align_pads_by_characters_not_bytes() {
    assert_eq!(align("sí", 4, Alignment::Right), "  sí");
    assert_eq!(align("ñ", 3, Alignment::Center), " ñ ");
}

#[test]
fn letter_geometry_is_reasonable() {
    let geometry = TextGeometry::for_page(PageSize::Letter, 2.5);
    assert!((80..=95).contains(&geometry.columns));
    assert!((50..=56).contains(&geometry.rows));
}

#[test]
fn columns_table_sits_side_by_side() {
    let table = Table {
        kind: TableKind::Columns,
        rows: vec![
            vec![Cell::new(CellRole::Header, "A"), Cell::new(CellRole::Header, "B")],
            vec![
                Cell::with_lines(CellRole::Text, vec!["uno".into(), "dos".into()]),
                Cell::new(CellRole::Text, "tres"),
            ],
        ],
        column_widths: vec![1.0, 1.0],
    };
    let lines = table_lines(&table, 22).unwrap();
    assert_eq!(lines[0].trim_end(), "A           B");
    assert_eq!(lines[1], "----------  ----------");
    assert_eq!(lines[2], "uno         tres");
    assert_eq!(lines[3], "dos");
}

#[test]
fn grid_table_draws_borders() {
    let table = Table {
        kind: TableKind::Grid,
        rows: vec![vec![Cell::new(CellRole::Label, "Edad"), Cell::new(CellRole::Text, "19")]],
        column_widths: vec![1.0, 1.0],
    };
    let lines = table_lines(&table, 23).unwrap();
    assert_eq!(
        lines,
        [
            "+----------+----------+",
            "| Edad     | 19       |",
            "+----------+----------+",
        ]
    );
}

#[test]
fn ragged_rows_are_rejected() {
    let table = Table {
        kind: TableKind::Grid,
        rows: vec![vec![Cell::new(CellRole::Text, "solo")]],
        column_widths: vec![1.0, 1.0],
    };
    assert!(matches!(
        table_lines(&table, 40),
        Err(ExportError::TableShape { cells: 1, columns: 2 })
    ));
}

#[test]
fn gaps_are_dropped_at_page_top() {
    let geometry = TextGeometry {
        columns: 40,
        rows: 10,
        chars_per_cm: 2.5,
    };
    let pages = paginate(
        &[Block::section_header("Sección"), Block::answer("texto")],
        &DocumentStyles::default(),
        &geometry,
    )
    .unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].lines[0], "Sección");
    assert_eq!(pages[0].lines[1], "-".repeat(40));
}

#[test]
fn tiny_pages_are_a_layout_error() {
    let geometry = TextGeometry {
        columns: 5,
        rows: 2,
        chars_per_cm: 1.0,
    };
    let err = paginate(&[Block::answer("x")], &DocumentStyles::default(), &geometry).unwrap_err();
    assert!(matches!(err, ExportError::Layout(_)));
}
