use tamiz_core::models::record::is_no_answer;
use tamiz_core::SubjectRecord;

#[test]
fn absent_key_reads_as_empty_answer() {
    let record = SubjectRecord::new();
    assert_eq!(record.answer("aq10_1"), "");
    assert_eq!(record.answered("aq10_1"), None);
}

#[test]
fn sentinel_and_blank_values_are_not_answers() {
    let record: SubjectRecord = [("a", "NaN"), ("b", "   "), ("c", "Sí")].into_iter().collect();
    assert_eq!(record.answered("a"), None);
    assert_eq!(record.answered("b"), None);
    assert_eq!(record.answered("c"), Some("Sí"));
    assert_eq!(record.len(), 3);
}

#[test]
fn sentinel_check_is_case_insensitive() {
    assert!(is_no_answer("nan"));
    assert!(is_no_answer("NAN"));
    assert!(!is_no_answer("nana"));
}
