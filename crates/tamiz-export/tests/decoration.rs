use tamiz_export::decoration::{PageDecorator, PageNumber, SubjectBanner, PAGE_FIELD};

#[test]
fn banner_shows_name_and_id_on_every_page() {
    let banner = SubjectBanner::new("Reporte", "Ana López", "184523");
    let page = banner.decorate(PageNumber::Page(3));
    assert_eq!(page.header_left, "Reporte");
    assert_eq!(page.header_right, "Ana López (184523)");
    assert_eq!(page.footer_right, "Página 3");
}

#[test]
fn running_page_number_is_a_placeholder() {
    let banner = SubjectBanner::new("Reporte", "N/A", "registro_2");
    let page = banner.decorate(PageNumber::Running);
    assert_eq!(page.footer_right, format!("Página {PAGE_FIELD}"));
}
