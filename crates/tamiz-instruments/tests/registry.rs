use tamiz_core::{CoreError, InstrumentId, SubjectRecord};
use tamiz_instruments::{all_instruments, find_instrument};

#[test]
fn registry_lists_instruments_in_report_order() {
    let ids: Vec<_> = all_instruments().iter().map(|i| i.id()).collect();
    assert_eq!(ids, InstrumentId::ALL);
}

#[test]
fn empty_record_scores_zero_everywhere() {
    let questions: Vec<String> = (1..=20).map(|i| format!("q{i}")).collect();
    for instrument in all_instruments() {
        let result = instrument.score(&SubjectRecord::new(), &questions);
        assert_eq!(result.score, 0, "{}", instrument.name());
        assert!(!result.flagged);
        assert!(result.score <= result.max_score);
    }
}

#[test]
fn max_scores_match_item_counts() {
    let maxima: Vec<_> = all_instruments().iter().map(|i| i.max_score()).collect();
    assert_eq!(maxima, [10, 6, 20]);
}

#[test]
fn find_instrument_by_schema_key() {
    assert_eq!(find_instrument("vinegrad").unwrap().name(), "Vinegrad");
    assert!(matches!(
        find_instrument("phq9"),
        Err(CoreError::UnknownInstrument(id)) if id == "phq9"
    ));
    let err = find_instrument("phq9").err().unwrap();
    assert_eq!(err.to_string(), "unknown instrument: phq9");
}

#[test]
fn default_score_line_reads_score_of_max() {
    let aq10 = find_instrument("aq10").unwrap();
    let result = aq10.score(&SubjectRecord::new(), &[]);
    assert_eq!(aq10.score_line(&result), "Puntaje obtenido: 0 de 10");
}
