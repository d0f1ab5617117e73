use chrono::NaiveDate;
use suchar_core::schedule::{PAST_DATE_MESSAGE, publish_date_error, starts_scheduled};
use suchar_core::tags::{
    DEFAULT_MIN_LOOKUP_CHARS, badge_terms, insert_suggestion, lookup_term,
};

#[test]
fn compose_session_from_typing_to_schedule() {
    let now = NaiveDate::from_ymd_opt(2026, 8, 22)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid now");

    let typed = "suchar, pro";
    let caret = typed.encode_utf16().count() as u32;

    let badges = badge_terms(typed);
    assert_eq!(badges, vec!["suchar".to_string(), "pro".to_string()]);

    let term = lookup_term(typed, caret, DEFAULT_MIN_LOOKUP_CHARS).expect("lookup term");
    assert_eq!(term, "pro");

    let spliced = insert_suggestion(typed, caret, "programowanie");
    assert_eq!(spliced, "suchar, programowanie, ");
    assert_eq!(
        badge_terms(&spliced),
        vec!["suchar".to_string(), "programowanie".to_string()]
    );

    assert_eq!(
        publish_date_error(true, "2026-08-20T10:00", now),
        Some(PAST_DATE_MESSAGE)
    );
    assert_eq!(publish_date_error(true, "2026-08-23T09:00", now), None);
    assert!(starts_scheduled("2026-08-23T09:00", now));
}
