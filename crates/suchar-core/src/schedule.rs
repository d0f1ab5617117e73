use chrono::{
  Duration,
  NaiveDateTime
};
use thiserror::Error;

pub const PAST_DATE_MESSAGE: &str =
  "Data publikacji nie może być w \
   przeszłości.";

const PUBLISH_DATETIME_FORMATS:
  [&str; 4] = [
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S",
  "%Y-%m-%d %H:%M",
];

const SCHEDULE_LEAD_MINUTES: i64 = 5;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ScheduleError {
  #[error("empty publish datetime")]
  Empty,
  #[error(
    "unrecognized publish datetime: \
     {0}"
  )]
  Unrecognized(String)
}

pub fn parse_publish_input(
  raw: &str
) -> Result<NaiveDateTime, ScheduleError>
{
  let token = raw.trim();
  if token.is_empty() {
    return Err(ScheduleError::Empty);
  }

  for fmt in PUBLISH_DATETIME_FORMATS {
    if let Ok(parsed) =
      NaiveDateTime::parse_from_str(
        token, fmt
      )
    {
      return Ok(parsed);
    }
  }

  Err(ScheduleError::Unrecognized(
    token.to_string()
  ))
}

#[must_use]
pub fn publish_date_error(
  schedule_on: bool,
  raw: &str,
  now: NaiveDateTime
) -> Option<&'static str> {
  if !schedule_on
    || raw.trim().is_empty()
  {
    return None;
  }

  match parse_publish_input(raw) {
    | Ok(publish_at) => {
      if publish_at <= now {
        Some(PAST_DATE_MESSAGE)
      } else {
        None
      }
    }
    | Err(error) => {
      tracing::warn!(
        %error,
        "treating unparseable publish \
         datetime as immediate"
      );
      None
    }
  }
}

#[must_use]
pub fn starts_scheduled(
  raw: &str,
  now: NaiveDateTime
) -> bool {
  let Ok(publish_at) =
    parse_publish_input(raw)
  else {
    return false;
  };

  publish_at
    > now
      + Duration::minutes(
        SCHEDULE_LEAD_MINUTES
      )
}

#[cfg(test)]
mod tests {
  use chrono::{
    NaiveDate,
    NaiveDateTime
  };

  use super::{
    PAST_DATE_MESSAGE,
    ScheduleError,
    parse_publish_input,
    publish_date_error,
    starts_scheduled
  };

  fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(
      2026, 8, 22
    )
    .and_then(|date| {
      date.and_hms_opt(12, 0, 0)
    })
    .expect("valid now")
  }

  #[test]
  fn accepts_datetime_local_format() {
    let parsed = parse_publish_input(
      "2026-08-30T12:30"
    )
    .expect("parse datetime-local");
    assert_eq!(
      parsed
        .format("%Y-%m-%d %H:%M")
        .to_string(),
      "2026-08-30 12:30"
    );
  }

  #[test]
  fn accepts_picker_format() {
    let parsed = parse_publish_input(
      "2026-08-30 12:30"
    )
    .expect("parse picker format");
    assert_eq!(
      parsed
        .format("%Y-%m-%dT%H:%M")
        .to_string(),
      "2026-08-30T12:30"
    );
  }

  #[test]
  fn accepts_seconds_suffix() {
    assert!(
      parse_publish_input(
        "2026-08-30 12:30:45"
      )
      .is_ok()
    );
    assert!(
      parse_publish_input(
        "2026-08-30T12:30:45"
      )
      .is_ok()
    );
  }

  #[test]
  fn rejects_empty_input() {
    assert_eq!(
      parse_publish_input("  "),
      Err(ScheduleError::Empty)
    );
  }

  #[test]
  fn rejects_unrecognized_input() {
    assert_eq!(
      parse_publish_input("sobota"),
      Err(ScheduleError::Unrecognized(
        "sobota".to_string()
      ))
    );
  }

  #[test]
  fn blocks_past_publish_date() {
    assert_eq!(
      publish_date_error(
        true,
        "2026-08-20T10:00",
        fixed_now()
      ),
      Some(PAST_DATE_MESSAGE)
    );
  }

  #[test]
  fn blocks_publish_date_equal_to_now()
  {
    assert_eq!(
      publish_date_error(
        true,
        "2026-08-22T12:00",
        fixed_now()
      ),
      Some(PAST_DATE_MESSAGE)
    );
  }

  #[test]
  fn allows_future_publish_date() {
    assert_eq!(
      publish_date_error(
        true,
        "2026-08-23T09:00",
        fixed_now()
      ),
      None
    );
  }

  #[test]
  fn skips_check_when_toggle_off() {
    assert_eq!(
      publish_date_error(
        false,
        "2026-08-20T10:00",
        fixed_now()
      ),
      None
    );
  }

  #[test]
  fn skips_check_without_value() {
    assert_eq!(
      publish_date_error(
        true,
        "  ",
        fixed_now()
      ),
      None
    );
  }

  #[test]
  fn treats_unparseable_as_immediate()
  {
    assert_eq!(
      publish_date_error(
        true,
        "sobota",
        fixed_now()
      ),
      None
    );
  }

  #[test]
  fn prefill_checks_box_beyond_lead() {
    assert!(starts_scheduled(
      "2026-08-22T12:10",
      fixed_now()
    ));
  }

  #[test]
  fn prefill_ignores_near_dates() {
    assert!(!starts_scheduled(
      "2026-08-22T12:04",
      fixed_now()
    ));
    assert!(!starts_scheduled(
      "2026-08-20T10:00",
      fixed_now()
    ));
    assert!(!starts_scheduled(
      "",
      fixed_now()
    ));
  }
}
