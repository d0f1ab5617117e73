pub const DEFAULT_MIN_LOOKUP_CHARS:
  usize = 2;

#[must_use]
pub fn badge_terms(
  text: &str
) -> Vec<String> {
  text
    .split(|c: char| {
      c == ',' || c.is_whitespace()
    })
    .map(str::trim)
    .filter(|term| !term.is_empty())
    .map(ToString::to_string)
    .collect()
}

#[must_use]
pub fn caret_byte_offset(
  text: &str,
  caret_utf16: u32
) -> usize {
  let mut units: u32 = 0;
  for (offset, ch) in text.char_indices()
  {
    if units >= caret_utf16 {
      return offset;
    }
    units += ch.len_utf16() as u32;
  }
  text.len()
}

#[must_use]
pub fn current_term(
  text: &str,
  caret_utf16: u32
) -> String {
  let cut = caret_byte_offset(
    text,
    caret_utf16
  );
  let before = &text[..cut];
  let after_comma = before
    .rfind(',')
    .map_or(before, |idx| {
      &before[idx + 1..]
    });
  after_comma.trim().to_string()
}

#[must_use]
pub fn lookup_term(
  text: &str,
  caret_utf16: u32,
  min_chars: usize
) -> Option<String> {
  let term =
    current_term(text, caret_utf16);
  if term.chars().count() < min_chars {
    return None;
  }
  Some(term)
}

#[must_use]
pub fn insert_suggestion(
  text: &str,
  caret_utf16: u32,
  tag_name: &str
) -> String {
  let cut = caret_byte_offset(
    text,
    caret_utf16
  );
  let before = &text[..cut];
  let suffix = &text[cut..];
  let prefix = before
    .rfind(',')
    .map_or("", |idx| &before[..=idx]);

  if prefix.is_empty() {
    format!("{tag_name}, {suffix}")
  } else {
    format!(
      "{prefix} {tag_name}, {suffix}"
    )
  }
}

#[cfg(test)]
mod tests {
  use super::{
    DEFAULT_MIN_LOOKUP_CHARS,
    badge_terms,
    caret_byte_offset,
    current_term,
    insert_suggestion,
    lookup_term
  };

  #[test]
  fn splits_badges_on_commas_and_spaces()
  {
    assert_eq!(
      badge_terms("foo, b"),
      vec![
        "foo".to_string(),
        "b".to_string(),
      ]
    );
    assert_eq!(
      badge_terms(
        "suchar it,programowanie"
      ),
      vec![
        "suchar".to_string(),
        "it".to_string(),
        "programowanie".to_string(),
      ]
    );
  }

  #[test]
  fn drops_empty_badge_segments() {
    assert!(badge_terms("").is_empty());
    assert!(
      badge_terms(" , ,").is_empty()
    );
    assert_eq!(
      badge_terms(",it,").len(),
      1
    );
  }

  #[test]
  fn finds_term_after_last_comma() {
    let text = "foo, b";
    let caret =
      text.encode_utf16().count() as u32;
    assert_eq!(
      current_term(text, caret),
      "b"
    );
  }

  #[test]
  fn term_stops_at_caret() {
    assert_eq!(
      current_term("foo, bar", 6),
      "b"
    );
  }

  #[test]
  fn whole_text_is_term_without_comma()
  {
    assert_eq!(
      current_term("pro", 3),
      "pro"
    );
  }

  #[test]
  fn clamps_caret_beyond_text_end() {
    assert_eq!(
      caret_byte_offset("it", 99),
      2
    );
    assert_eq!(
      current_term("it", 99),
      "it"
    );
  }

  #[test]
  fn maps_utf16_caret_for_polish_text()
  {
    let text = "żart, ś";
    let caret =
      text.encode_utf16().count() as u32;
    assert_eq!(
      caret_byte_offset(text, caret),
      text.len()
    );
    assert_eq!(
      current_term(text, caret),
      "ś"
    );
  }

  #[test]
  fn maps_utf16_caret_past_surrogate_pair()
  {
    let text = "😂, it";
    let caret =
      text.encode_utf16().count() as u32;
    assert_eq!(caret, 6);
    assert_eq!(
      current_term(text, caret),
      "it"
    );
  }

  #[test]
  fn skips_lookup_below_min_chars() {
    assert_eq!(
      lookup_term(
        "foo, b",
        6,
        DEFAULT_MIN_LOOKUP_CHARS
      ),
      None
    );
    assert_eq!(
      lookup_term(
        "foo, by",
        7,
        DEFAULT_MIN_LOOKUP_CHARS
      ),
      Some("by".to_string())
    );
  }

  #[test]
  fn counts_chars_not_bytes_for_lookup()
  {
    assert_eq!(
      lookup_term(
        "żó",
        2,
        DEFAULT_MIN_LOOKUP_CHARS
      ),
      Some("żó".to_string())
    );
  }

  #[test]
  fn splices_tag_over_current_term() {
    let text = "ha, it";
    let caret =
      text.encode_utf16().count() as u32;
    assert_eq!(
      insert_suggestion(
        text,
        caret,
        "informatyka"
      ),
      "ha, informatyka, "
    );
  }

  #[test]
  fn splices_without_prior_comma() {
    assert_eq!(
      insert_suggestion(
        "prog",
        4,
        "programowanie"
      ),
      "programowanie, "
    );
  }

  #[test]
  fn keeps_text_after_caret() {
    assert_eq!(
      insert_suggestion(
        "it, pr, linux",
        6,
        "programowanie"
      ),
      "it, programowanie, , linux"
    );
  }
}
