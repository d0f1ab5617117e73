use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
  Funny,
  Dry
}

impl VoteKind {
  #[must_use]
  pub fn as_str(self) -> &'static str {
    match self {
      | VoteKind::Funny => "funny",
      | VoteKind::Dry => "dry"
    }
  }
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct VoteRequest {
  pub vote_type: VoteKind
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct VoteResponse {
  pub funny_count:   i64,
  pub dry_count:     i64,
  pub user_is_funny: bool,
  pub user_is_dry:   bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TagSuggestion {
  pub name: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct SucharDto {
  pub id:            i64,
  #[serde(default)]
  pub text:          String,
  #[serde(default)]
  pub author:        String,
  #[serde(default)]
  pub tags:          Vec<String>,
  pub published_at:  Option<String>,
  #[serde(default)]
  pub funny_count:   i64,
  #[serde(default)]
  pub dry_count:     i64,
  #[serde(default)]
  pub user_is_funny: bool,
  #[serde(default)]
  pub user_is_dry:   bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct ComposePrefill {
  #[serde(default)]
  pub text:         String,
  #[serde(default)]
  pub tags_input:   String,
  #[serde(default)]
  pub published_at: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct FlashMessage {
  #[serde(default)]
  pub level: String,
  #[serde(default)]
  pub text:  String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
pub struct UiBootstrap {
  #[serde(default)]
  pub suchary:  Vec<SucharDto>,
  pub compose:  Option<ComposePrefill>,
  #[serde(default)]
  pub messages: Vec<FlashMessage>
}

pub fn rank_top(
  suchary: &mut [SucharDto]
) {
  suchary.sort_by(|a, b| {
    b.funny_count
      .cmp(&a.funny_count)
      .then(
        b.dry_count.cmp(&a.dry_count)
      )
  });
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::{
    SucharDto,
    UiBootstrap,
    VoteKind,
    VoteRequest,
    VoteResponse,
    rank_top
  };

  #[test]
  fn vote_request_uses_wire_names() {
    let body = serde_json::to_value(
      VoteRequest {
        vote_type: VoteKind::Funny
      }
    )
    .expect("serialize vote request");
    assert_eq!(
      body,
      json!({ "vote_type": "funny" })
    );
  }

  #[test]
  fn vote_kind_round_trips_lowercase()
  {
    let kind: VoteKind =
      serde_json::from_str("\"dry\"")
        .expect("parse vote kind");
    assert_eq!(kind, VoteKind::Dry);
    assert_eq!(kind.as_str(), "dry");
  }

  #[test]
  fn vote_response_parses_wire_shape()
  {
    let parsed: VoteResponse =
      serde_json::from_value(json!({
        "funny_count": 4,
        "dry_count": 1,
        "user_is_funny": true,
        "user_is_dry": false
      }))
      .expect("parse vote response");
    assert_eq!(parsed.funny_count, 4);
    assert!(parsed.user_is_funny);
    assert!(!parsed.user_is_dry);
  }

  fn dto(
    id: i64,
    funny: i64,
    dry: i64
  ) -> SucharDto {
    SucharDto {
      id,
      text: String::new(),
      author: String::new(),
      tags: Vec::new(),
      published_at: None,
      funny_count: funny,
      dry_count: dry,
      user_is_funny: false,
      user_is_dry: false
    }
  }

  #[test]
  fn top_rank_mirrors_server_order() {
    let mut suchary = vec![
      dto(1, 2, 9),
      dto(2, 5, 0),
      dto(3, 2, 9),
      dto(4, 5, 3),
    ];
    rank_top(&mut suchary);
    let ids: Vec<i64> = suchary
      .iter()
      .map(|suchar| suchar.id)
      .collect();
    assert_eq!(ids, vec![4, 2, 1, 3]);
  }

  #[test]
  fn bootstrap_defaults_optional_parts()
  {
    let parsed: UiBootstrap =
      serde_json::from_value(json!({
        "suchary": [{ "id": 7 }]
      }))
      .expect("parse bootstrap");
    assert_eq!(
      parsed.suchary.len(),
      1
    );
    assert_eq!(
      parsed.suchary[0].id,
      7
    );
    assert!(
      parsed.suchary[0]
        .published_at
        .is_none()
    );
    assert!(parsed.compose.is_none());
    assert!(
      parsed.messages.is_empty()
    );
  }
}
