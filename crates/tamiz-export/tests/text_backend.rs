use std::cell::RefCell;

use tamiz_core::config::parse_schema;
use tamiz_core::models::styles::{DocumentStyles, PageSize};
use tamiz_core::SubjectRecord;
use tamiz_export::backend::{RenderBackend, RenderRequest};
use tamiz_export::block::Block;
use tamiz_export::decoration::{PageDecoration, PageDecorator, PageNumber, SubjectBanner};
use tamiz_export::layout::TextGeometry;
use tamiz_export::text::{TextBackend, PAGE_SEPARATOR};
use tamiz_export::render_subject;

/// Records every page it is asked to decorate.
#[derive(Default)]
struct RecordingDecorator {
    seen: RefCell<Vec<PageNumber>>,
}

impl PageDecorator for RecordingDecorator {
    fn decorate(&self, page: PageNumber) -> PageDecoration {
        self.seen.borrow_mut().push(page);
        PageDecoration {
            header_left: "Encabezado".to_string(),
            header_right: "Ana (1)".to_string(),
            footer_right: format!("Página {page}"),
        }
    }
}

fn render(blocks: &[Block], decorator: &dyn PageDecorator) -> String {
    let styles = DocumentStyles::default();
    let request = RenderRequest {
        blocks,
        page_size: PageSize::Letter,
        styles: &styles,
        decorator,
    };
    let bytes = TextBackend::default().render(&request).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn decorator_runs_once_per_page_with_increasing_numbers() {
    let mut blocks = vec![Block::title("Reporte")];
    for i in 0..120 {
        blocks.push(Block::question(format!("Pregunta {i}")));
        blocks.push(Block::answer("Respuesta"));
    }
    blocks.push(Block::PageBreak);
    blocks.push(Block::title("Resultados"));

    let decorator = RecordingDecorator::default();
    let output = render(&blocks, &decorator);
    let pages: Vec<_> = output.split(PAGE_SEPARATOR).collect();

    let seen = decorator.seen.borrow();
    assert!(seen.len() > 2);
    assert_eq!(seen.len(), pages.len());
    for (i, page) in seen.iter().enumerate() {
        assert_eq!(*page, PageNumber::Page(i + 1));
    }
    assert!(pages.last().unwrap().contains("Resultados"));
    assert!(pages.last().unwrap().trim_end().ends_with(&format!("Página {}", pages.len())));
}

#[test]
fn page_break_always_opens_a_new_page() {
    let decorator = RecordingDecorator::default();
    let output = render(
        &[Block::answer("uno"), Block::PageBreak, Block::answer("dos")],
        &decorator,
    );
    let pages: Vec<_> = output.split(PAGE_SEPARATOR).collect();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].contains("uno") && !pages[0].contains("dos"));
    assert!(pages[1].contains("dos"));
}

#[test]
fn header_puts_subject_on_the_right() {
    let banner = SubjectBanner::new("Programa de Tamizaje", "Ana López", "184523");
    let output = render(&[Block::answer("texto")], &banner);
    let header = output.lines().next().unwrap();
    assert!(header.starts_with("Programa de Tamizaje"));
    assert!(header.ends_with("Ana López (184523)"));
    assert_eq!(output.lines().last().unwrap().trim(), "Página 1");
}

#[test]
fn every_page_has_the_same_height() {
    let geometry = TextGeometry {
        columns: 40,
        rows: 6,
        chars_per_cm: 2.5,
    };
    let blocks: Vec<_> = (0..10).map(|i| Block::answer(format!("línea {i}"))).collect();
    let styles = DocumentStyles::default();
    let banner = SubjectBanner::new("H", "N", "1");
    let request = RenderRequest {
        blocks: &blocks,
        page_size: PageSize::Letter,
        styles: &styles,
        decorator: &banner,
    };
    let output = String::from_utf8(TextBackend::with_geometry(geometry).render(&request).unwrap()).unwrap();
    let pages: Vec<_> = output.split(PAGE_SEPARATOR).collect();
    assert_eq!(pages.len(), 2);
    for page in pages {
        // header, blank, rows, blank, footer
        assert_eq!(page.lines().count(), geometry.rows + 4);
    }
}

#[test]
fn full_report_renders_results_on_its_own_page() {
    let schema = parse_schema(include_str!("../../../demos/config.json")).unwrap();
    let record: SubjectRecord = [("nombre_completo", "Ana López"), ("asrs_1", "A menudo")]
        .into_iter()
        .collect();
    let banner = SubjectBanner::new(&schema.styles.header_text, "Ana López", "184523");

    let rendered = render_subject(&schema, &record, &banner, &TextBackend::default()).unwrap();
    let output = String::from_utf8(rendered.bytes).unwrap();
    let pages: Vec<_> = output.split(PAGE_SEPARATOR).collect();
    let last = pages.last().unwrap();
    assert!(last.contains("Resultados de Tamizajes"));
    assert!(last.contains("Puntaje obtenido: 1 de 6"));
    assert!(!pages[0].contains("Resultados de Tamizajes"));
    assert!(pages[0].contains("No se reportaron hallazgos."));
    assert_eq!(rendered.scores.len(), 3);
}
