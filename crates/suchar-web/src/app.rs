use std::collections::BTreeSet;

use chrono::Local;
use gloo::console::log;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use serde::Deserialize;
use suchar_api::{
  SucharDto,
  UiBootstrap,
  VoteKind,
  rank_top
};
use suchar_core::schedule::{
  publish_date_error,
  starts_scheduled
};
use suchar_core::tags::{
  DEFAULT_MIN_LOOKUP_CHARS,
  badge_terms,
  insert_suggestion,
  lookup_term
};
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_node_ref,
  use_state
};

use crate::api::{
  csrf_token,
  search_tags,
  vote
};
use crate::components::{
  Dropdown,
  Modal,
  NavBar,
  SucharCard,
  SuggestionList,
  TagBadges,
  ToastNote,
  ToastStack
};

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum PageView {
  Feed,
  Compose
}

impl PageView {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Feed => "feed",
      | Self::Compose => "compose"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "feed" => Some(Self::Feed),
      | "compose" => {
        Some(Self::Compose)
      }
      | _ => None
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub view: PageView
}

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum ThemeMode {
  Light,
  Dark
}

impl ThemeMode {
  fn as_attr(self) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Ciemny motyw",
      | Self::Dark => "Jasny motyw"
    }
  }
}

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
enum SortMode {
  Newest,
  Top
}

impl SortMode {
  fn all() -> [Self; 2] {
    [Self::Newest, Self::Top]
  }

  fn as_key(self) -> &'static str {
    match self {
      | Self::Newest => "newest",
      | Self::Top => "top"
    }
  }

  fn label(self) -> &'static str {
    match self {
      | Self::Newest => "Najnowsze",
      | Self::Top => "Najlepsze"
    }
  }

  fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "newest" => Some(Self::Newest),
      | "top" => Some(Self::Top),
      | _ => None
    }
  }
}

#[derive(
  Clone, PartialEq, Deserialize,
)]
struct UiConfig {
  #[serde(default)]
  version: u32,
  api:     Option<ApiSection>,
  lookup:  Option<LookupSection>,
  toast:   Option<ToastSection>
}

#[derive(
  Clone, PartialEq, Deserialize,
)]
struct ApiSection {
  base: Option<String>
}

#[derive(
  Clone, PartialEq, Deserialize,
)]
struct LookupSection {
  debounce_ms:    Option<u32>,
  min_term_chars: Option<usize>
}

#[derive(
  Clone, PartialEq, Deserialize,
)]
struct ToastSection {
  dismiss_ms: Option<u32>,
  leave_ms:   Option<u32>
}

impl UiConfig {
  fn api_base(&self) -> String {
    self
      .api
      .as_ref()
      .and_then(|api| api.base.clone())
      .unwrap_or_else(|| {
        DEFAULT_API_BASE.to_string()
      })
  }

  fn debounce_ms(&self) -> u32 {
    self
      .lookup
      .as_ref()
      .and_then(|lookup| {
        lookup.debounce_ms
      })
      .unwrap_or(DEFAULT_DEBOUNCE_MS)
  }

  fn min_term_chars(&self) -> usize {
    self
      .lookup
      .as_ref()
      .and_then(|lookup| {
        lookup.min_term_chars
      })
      .unwrap_or(
        DEFAULT_MIN_LOOKUP_CHARS
      )
  }

  fn toast_dismiss_ms(&self) -> u32 {
    self
      .toast
      .as_ref()
      .and_then(|toast| {
        toast.dismiss_ms
      })
      .unwrap_or(
        DEFAULT_TOAST_DISMISS_MS
      )
  }

  fn toast_leave_ms(&self) -> u32 {
    self
      .toast
      .as_ref()
      .and_then(|toast| toast.leave_ms)
      .unwrap_or(
        DEFAULT_TOAST_LEAVE_MS
      )
  }
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      version: 1,
      api:     None,
      lookup:  None,
      toast:   None
    }
  }
}

const THEME_STORAGE_KEY: &str = "theme";
const BOOTSTRAP_ELEMENT_ID: &str =
  "suchar-bootstrap";
const UI_CONFIG_TOML: &str =
  include_str!("../assets/ui.toml");
const DEFAULT_API_BASE: &str =
  "/api/suchary";
const DEFAULT_DEBOUNCE_MS: u32 = 300;
const DEFAULT_TOAST_DISMISS_MS: u32 =
  5_000;
const DEFAULT_TOAST_LEAVE_MS: u32 = 300;

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let view = props.view;
  let config =
    use_state(load_ui_config);
  let bootstrap =
    use_state(load_bootstrap);
  let theme =
    use_state(load_theme_mode);
  let nav_open = use_state(|| false);
  let help_open = use_state(|| false);
  let open_dropdown =
    use_state(|| None::<String>);
  let sort =
    use_state(|| SortMode::Newest);
  let feed = {
    let seed =
      (*bootstrap).suchary.clone();
    use_mut_ref(move || seed)
  };
  let busy_votes =
    use_mut_ref(BTreeSet::<i64>::new);
  let feed_tick =
    use_state(|| 0_u64);
  let toasts =
    use_mut_ref(Vec::<ToastNote>::new);
  let toast_seq =
    use_mut_ref(|| 0_u64);
  let toast_tick =
    use_state(|| 0_u64);

  let compose_prefill = (*bootstrap)
    .compose
    .clone()
    .unwrap_or_default();
  let text = {
    let seed =
      compose_prefill.text.clone();
    use_state(move || seed)
  };
  let tags_text = {
    let seed = compose_prefill
      .tags_input
      .clone();
    use_state(move || seed)
  };
  let publish_value = {
    let seed = compose_prefill
      .published_at
      .clone();
    use_state(move || seed)
  };
  let schedule_on = {
    let seed = compose_prefill
      .published_at
      .clone();
    use_state(move || {
      starts_scheduled(
        &seed,
        Local::now().naive_local()
      )
    })
  };
  let date_error = use_state(|| {
    None::<&'static str>
  });
  let suggestions =
    use_state(Vec::<String>::new);
  let suggest_open =
    use_state(|| false);
  let lookup_seq =
    use_mut_ref(|| 0_u64);
  let lookup_timer =
    use_mut_ref(|| None::<Timeout>);
  let tags_input_ref = use_node_ref();
  let publish_input_ref =
    use_node_ref();
  let csrf = use_state(csrf_token);

  let push_toast = {
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();
    let toast_tick =
      toast_tick.clone();
    let dismiss_ms =
      (*config).toast_dismiss_ms();
    let leave_ms =
      (*config).toast_leave_ms();
    Callback::from(
      move |(level, text): (
        String,
        String
      )| {
        let id = {
          let mut seq =
            toast_seq.borrow_mut();
          *seq = seq.wrapping_add(1);
          *seq
        };
        toasts.borrow_mut().push(
          ToastNote {
            id,
            level,
            text,
            leaving: false
          }
        );
        toast_tick.set(
          (*toast_tick).wrapping_add(1)
        );

        let toasts = toasts.clone();
        let toast_tick =
          toast_tick.clone();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(dismiss_ms).await;
            let mut gone = false;
            {
                let mut notes = toasts.borrow_mut();
                match notes.iter_mut().find(|note| note.id == id) {
                    Some(note) => note.leaving = true,
                    None => gone = true,
                }
            }
            if gone {
                return;
            }
            toast_tick.set((*toast_tick).wrapping_add(1));
            TimeoutFuture::new(leave_ms).await;
            toasts.borrow_mut().retain(|note| note.id != id);
            toast_tick.set((*toast_tick).wrapping_add(1));
        });
      }
    )
  };

  let on_close_toast = {
    let toasts = toasts.clone();
    let toast_tick =
      toast_tick.clone();
    Callback::from(move |id: u64| {
      toasts
        .borrow_mut()
        .retain(|note| note.id != id);
      toast_tick.set(
        (*toast_tick).wrapping_add(1)
      );
    })
  };

  {
    let bootstrap = bootstrap.clone();
    let push_toast = push_toast.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        &format!(
          "view={}",
          view.as_key()
        )
      );
      for message in
        (*bootstrap).messages.clone()
      {
        push_toast.emit((
          message.level,
          message.text
        ));
      }
      || ()
    });
  }

  let on_toggle_theme = {
    let theme = theme.clone();
    Callback::from(move |_| {
      theme.set((*theme).next());
    })
  };

  use_effect_with(*theme, move |mode| {
    apply_theme_mode(*mode);
    save_theme_mode(*mode);
    tracing::debug!(
      theme = mode.as_attr(),
      "applied theme"
    );
    || ()
  });

  let on_toggle_nav = {
    let nav_open = nav_open.clone();
    Callback::from(move |_| {
      nav_open.set(!*nav_open);
    })
  };

  let on_toggle_sort_dropdown = {
    let open_dropdown =
      open_dropdown.clone();
    Callback::from(move |_| {
      let open_now = (*open_dropdown)
        .as_deref()
        == Some("sort");
      let next = if open_now {
        None
      } else {
        Some("sort".to_string())
      };
      open_dropdown.set(next);
    })
  };

  let on_pick_sort = {
    let sort = sort.clone();
    let open_dropdown =
      open_dropdown.clone();
    Callback::from(
      move |key: String| {
        match SortMode::from_key(&key) {
          | Some(mode) => {
            ui_debug(
              "feed.sort",
              mode.as_key()
            );
            sort.set(mode);
          }
          | None => {
            tracing::warn!(
              key = %key,
              "ignored unknown sort \
               option"
            );
          }
        }
        open_dropdown.set(None);
      }
    )
  };

  {
    let open_dropdown =
      open_dropdown.clone();
    use_effect_with(
      (*open_dropdown).clone(),
      move |open| {
        let document =
          web_sys::window().and_then(
            |window| window.document()
          );
        let listener = match document {
          | Some(document)
            if open.is_some() =>
          {
            Some(EventListener::new(
              &document,
              "click",
              move |event| {
                if click_is_outside(
                  event,
                  "[data-dropdown]"
                ) {
                  open_dropdown
                    .set(None);
                }
              }
            ))
          }
          | _ => None
        };
        move || drop(listener)
      }
    );
  }

  let on_vote = {
    let feed = feed.clone();
    let busy_votes = busy_votes.clone();
    let feed_tick = feed_tick.clone();
    let api_base = (*config).api_base();
    Callback::from(
      move |(suchar_id, kind): (
        i64,
        VoteKind
      )| {
        if busy_votes
          .borrow()
          .contains(&suchar_id)
        {
          ui_debug(
            "vote.skip",
            "ignored click while \
             request in flight"
          );
          return;
        }

        let Some(csrf) = csrf_token()
        else {
          tracing::error!(
            suchar_id,
            "csrf token missing; \
             vote aborted"
          );
          return;
        };

        busy_votes
          .borrow_mut()
          .insert(suchar_id);
        feed_tick.set(
          (*feed_tick).wrapping_add(1)
        );
        ui_debug(
          "vote.begin",
          &format!(
            "suchar_id={suchar_id}, \
             kind={}",
            kind.as_str()
          )
        );

        let feed = feed.clone();
        let busy_votes =
          busy_votes.clone();
        let feed_tick =
          feed_tick.clone();
        let api_base =
          api_base.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = vote(&api_base, suchar_id, kind, &csrf).await;
            busy_votes.borrow_mut().remove(&suchar_id);
            match outcome {
                Ok(response) => {
                    {
                        let mut suchary = feed.borrow_mut();
                        if let Some(entry) = suchary.iter_mut().find(|suchar| suchar.id == suchar_id) {
                            entry.funny_count = response.funny_count;
                            entry.dry_count = response.dry_count;
                            entry.user_is_funny = response.user_is_funny;
                            entry.user_is_dry = response.user_is_dry;
                        }
                    }
                    tracing::debug!(
                        suchar_id,
                        funny = response.funny_count,
                        dry = response.dry_count,
                        "vote applied"
                    );
                }
                Err(err) => {
                    tracing::error!(error = %err, suchar_id, "vote failed");
                    alert_message("Nie udało się zagłosować. Spróbuj ponownie.");
                }
            }
            feed_tick.set((*feed_tick).wrapping_add(1));
        });
      }
    )
  };

  let on_text_input = {
    let text = text.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let area: web_sys::HtmlTextAreaElement =
          e.target_unchecked_into();
        text.set(area.value());
      }
    )
  };

  let on_tags_input = {
    let tags_text = tags_text.clone();
    let suggestions =
      suggestions.clone();
    let suggest_open =
      suggest_open.clone();
    let lookup_seq =
      lookup_seq.clone();
    let lookup_timer =
      lookup_timer.clone();
    let api_base = (*config).api_base();
    let debounce_ms =
      (*config).debounce_ms();
    let min_chars =
      (*config).min_term_chars();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let value = input.value();
        let caret = input
          .selection_start()
          .ok()
          .flatten()
          .unwrap_or_else(|| {
            value
              .encode_utf16()
              .count()
              as u32
          });

        tags_text.set(value.clone());

        if let Some(pending) =
          lookup_timer
            .borrow_mut()
            .take()
        {
          pending.cancel();
        }
        let generation = {
          let mut seq =
            lookup_seq.borrow_mut();
          *seq = seq.wrapping_add(1);
          *seq
        };

        let Some(term) = lookup_term(
          &value, caret, min_chars
        ) else {
          suggest_open.set(false);
          return;
        };

        let suggestions =
          suggestions.clone();
        let suggest_open =
          suggest_open.clone();
        let lookup_seq =
          lookup_seq.clone();
        let api_base =
          api_base.clone();
        let timer = Timeout::new(debounce_ms, move || {
            wasm_bindgen_futures::spawn_local(async move {
                tracing::debug!(term = %term, generation, "dispatching tag lookup");
                let outcome = search_tags(&api_base, &term).await;
                if *lookup_seq.borrow() != generation {
                    tracing::debug!(generation, "discarded stale tag lookup response");
                    return;
                }
                match outcome {
                    Ok(tags) => {
                        if tags.is_empty() {
                            suggest_open.set(false);
                        } else {
                            suggestions.set(tags.into_iter().map(|tag| tag.name).collect());
                            suggest_open.set(true);
                        }
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "tag lookup failed");
                        suggest_open.set(false);
                    }
                }
            });
        });
        *lookup_timer.borrow_mut() =
          Some(timer);
      }
    )
  };

  let on_pick_suggestion = {
    let tags_text = tags_text.clone();
    let suggest_open =
      suggest_open.clone();
    let lookup_seq =
      lookup_seq.clone();
    let lookup_timer =
      lookup_timer.clone();
    let tags_input_ref =
      tags_input_ref.clone();
    Callback::from(
      move |name: String| {
        if let Some(pending) =
          lookup_timer
            .borrow_mut()
            .take()
        {
          pending.cancel();
        }
        {
          let mut seq =
            lookup_seq.borrow_mut();
          *seq = seq.wrapping_add(1);
        }

        let Some(input) =
          tags_input_ref
            .cast::<web_sys::HtmlInputElement>()
        else {
          tracing::debug!(
            "tag input not mounted; \
             ignoring suggestion pick"
          );
          return;
        };
        let value = input.value();
        let caret = input
          .selection_start()
          .ok()
          .flatten()
          .unwrap_or_else(|| {
            value
              .encode_utf16()
              .count()
              as u32
          });
        let next = insert_suggestion(
          &value, caret, &name
        );

        input.set_value(&next);
        tags_text.set(next);
        suggest_open.set(false);
        let _ = input.focus();
        ui_debug(
          "compose.tag_inserted",
          &name
        );
      }
    )
  };

  {
    let suggest_open =
      suggest_open.clone();
    use_effect_with(
      *suggest_open,
      move |open| {
        let document =
          web_sys::window().and_then(
            |window| window.document()
          );
        let listener = match document {
          | Some(document) if *open =>
          {
            Some(EventListener::new(
              &document,
              "click",
              move |event| {
                if click_is_outside(
                  event,
                  "#id_tags_input, \
                   #tags-suggestions"
                ) {
                  suggest_open
                    .set(false);
                }
              }
            ))
          }
          | _ => None
        };
        move || drop(listener)
      }
    );
  }

  let on_schedule_toggle = {
    let schedule_on =
      schedule_on.clone();
    let publish_value =
      publish_value.clone();
    let publish_input_ref =
      publish_input_ref.clone();
    Callback::from(
      move |e: web_sys::Event| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        let checked = input.checked();
        schedule_on.set(checked);

        if checked {
          if (*publish_value)
            .is_empty()
          {
            let publish_input_ref =
              publish_input_ref
                .clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(100).await;
                if let Some(field) = publish_input_ref.cast::<web_sys::HtmlInputElement>() {
                    let _ = field.focus();
                }
            });
          }
        } else {
          publish_value
            .set(String::new());
        }
        ui_debug(
          "compose.schedule_toggle",
          if checked {
            "on"
          } else {
            "off"
          }
        );
      }
    )
  };

  let on_publish_input = {
    let publish_value =
      publish_value.clone();
    let date_error =
      date_error.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        publish_value
          .set(input.value());
        date_error.set(None);
      }
    )
  };

  let on_submit = {
    let schedule_on =
      schedule_on.clone();
    let publish_value =
      publish_value.clone();
    let date_error =
      date_error.clone();
    Callback::from(
      move |e: web_sys::SubmitEvent| {
        let now =
          Local::now().naive_local();
        match publish_date_error(
          *schedule_on,
          (*publish_value).as_str(),
          now
        ) {
          | Some(message) => {
            e.prevent_default();
            date_error
              .set(Some(message));
            ui_debug(
              "compose.submit_blocked",
              "publish date is not \
               in the future"
            );
          }
          | None => {
            date_error.set(None);
            ui_debug(
              "compose.submit",
              "native form \
               submission proceeding"
            );
          }
        }
      }
    )
  };

  let on_open_help = {
    let help_open = help_open.clone();
    Callback::from(move |_| {
      help_open.set(true);
    })
  };

  let on_close_help = {
    let help_open = help_open.clone();
    Callback::from(move |_| {
      help_open.set(false);
    })
  };

  let feed_items = sorted_feed(
    &feed.borrow(),
    *sort
  );
  let busy_snapshot =
    busy_votes.borrow().clone();
  let toast_snapshot =
    toasts.borrow().clone();
  let preview_empty =
    (*text).trim().is_empty();
  let preview_text = if preview_empty {
    "Tutaj pojawi się treść Twojego \
     suchara..."
      .to_string()
  } else {
    (*text).clone()
  };
  let schedule_min = Local::now()
    .naive_local()
    .format("%Y-%m-%dT%H:%M")
    .to_string();

  html! {
      <>
          <NavBar
              nav_open={*nav_open}
              theme_label={(*theme).toggle_label().to_string()}
              on_toggle_theme={on_toggle_theme}
              on_toggle_nav={on_toggle_nav}
          />
          <ToastStack toasts={toast_snapshot} on_close={on_close_toast} />
          <main class="container">
              {
                  if view == PageView::Feed {
                      html! {
                          <section class="feed">
                              <div class="feed-toolbar">
                                  <form method="get" action="">
                                      <Dropdown
                                          field_name="sort"
                                          open={(*open_dropdown).as_deref() == Some("sort")}
                                          options={sort_options()}
                                          selected={(*sort).as_key().to_string()}
                                          on_toggle={on_toggle_sort_dropdown}
                                          on_pick={on_pick_sort}
                                      />
                                  </form>
                                  <button type="button" class="btn" onclick={on_open_help}>
                                      { "Jak działa głosowanie?" }
                                  </button>
                              </div>
                              {
                                  if feed_items.is_empty() {
                                      html! {
                                          <p class="feed-empty text-muted">
                                              { "Nie ma jeszcze żadnych sucharów." }
                                          </p>
                                      }
                                  } else {
                                      html! {
                                          <>
                                              {
                                                  for feed_items.iter().map(|suchar| html! {
                                                      <SucharCard
                                                          suchar={suchar.clone()}
                                                          busy={busy_snapshot.contains(&suchar.id)}
                                                          on_vote={on_vote.clone()}
                                                      />
                                                  })
                                              }
                                          </>
                                      }
                                  }
                              }
                              <Modal
                                  open={*help_open}
                                  title="Jak działa głosowanie?"
                                  on_close={on_close_help}
                              >
                                  <p>
                                      { "\"Śmieszny\" oddaje głos na zabawnego suchara, \"Suchy\" docenia wyjątkowo suchy żart. Ponowne kliknięcie cofa Twój głos, a kliknięcie drugiego przycisku go zamienia." }
                                  </p>
                              </Modal>
                          </section>
                      }
                  } else {
                      html! {
                          <section class="compose">
                              <form method="post" action="" onsubmit={on_submit}>
                                  <input
                                      type="hidden"
                                      name="csrfmiddlewaretoken"
                                      value={(*csrf).clone().unwrap_or_default()}
                                  />
                                  <div class="form-group">
                                      <label for="id_text">{ "Treść" }</label>
                                      <textarea
                                          id="id_text"
                                          name="text"
                                          class="form-control"
                                          rows="4"
                                          value={(*text).clone()}
                                          oninput={on_text_input}
                                      />
                                  </div>
                                  <div
                                      id="tags-dropdown"
                                      class={classes!("dropdown", (*suggest_open).then_some("show"))}
                                  >
                                      <label for="id_tags_input">{ "Tagi" }</label>
                                      <input
                                          id="id_tags_input"
                                          name="tags_input"
                                          type="text"
                                          class="form-control"
                                          autocomplete="off"
                                          placeholder="suchar, it, programowanie"
                                          value={(*tags_text).clone()}
                                          oninput={on_tags_input}
                                          ref={tags_input_ref.clone()}
                                      />
                                      <SuggestionList
                                          suggestions={(*suggestions).clone()}
                                          on_pick={on_pick_suggestion}
                                      />
                                      <small class="form-text text-muted">
                                          { "Wpisz tagi oddzielone spacjami lub przecinkami (np. suchar, it, programowanie)." }
                                      </small>
                                  </div>
                                  <div class="form-check">
                                      <input
                                          type="checkbox"
                                          id="scheduleCheck"
                                          class="form-check-input"
                                          checked={*schedule_on}
                                          onchange={on_schedule_toggle}
                                      />
                                      <label class="form-check-label" for="scheduleCheck">
                                          { "Zaplanuj publikację" }
                                      </label>
                                  </div>
                                  <div
                                      id="scheduleContainer"
                                      class={classes!("form-group", (!*schedule_on).then_some("d-none"))}
                                  >
                                      <label for="id_published_at">{ "Data publikacji" }</label>
                                      <input
                                          type="datetime-local"
                                          id="id_published_at"
                                          name="published_at"
                                          class={classes!("form-control", (*date_error).is_some().then_some("is-invalid"))}
                                          min={schedule_min}
                                          disabled={!*schedule_on}
                                          value={(*publish_value).clone()}
                                          oninput={on_publish_input}
                                          ref={publish_input_ref.clone()}
                                      />
                                      <div
                                          id="dateError"
                                          class={classes!("invalid-feedback", if (*date_error).is_some() { "d-block" } else { "d-none" })}
                                      >
                                          { (*date_error).unwrap_or_default() }
                                      </div>
                                      <small class="form-text text-muted">
                                          { "Zostaw puste, aby opublikować od razu." }
                                      </small>
                                  </div>
                                  <button type="submit" class="btn btn-primary">
                                      { "Dodaj suchara" }
                                  </button>
                              </form>
                              <aside class="compose-preview">
                                  <div class="card">
                                      <div class="card-body">
                                          <p
                                              id="previewText"
                                              class={classes!(preview_empty.then_some("text-muted"), preview_empty.then_some("fst-italic"))}
                                          >
                                              { preview_text }
                                          </p>
                                          <div id="previewTags">
                                              <TagBadges tags={badge_terms((*tags_text).as_str())} />
                                          </div>
                                      </div>
                                  </div>
                              </aside>
                          </section>
                      }
                  }
              }
          </main>
      </>
  }
}

fn sort_options() -> Vec<(String, String)> {
  SortMode::all()
    .iter()
    .map(|mode| {
      (
        mode.as_key().to_string(),
        mode.label().to_string()
      )
    })
    .collect()
}

fn sorted_feed(
  suchary: &[SucharDto],
  sort: SortMode
) -> Vec<SucharDto> {
  let mut items = suchary.to_vec();
  if sort == SortMode::Top {
    rank_top(&mut items);
  }
  items
}

fn load_ui_config() -> UiConfig {
  match toml::from_str::<UiConfig>(
    UI_CONFIG_TOML
  ) {
    | Ok(config) => {
      tracing::info!(
        version = config.version,
        "loaded ui config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse ui config; using built-in defaults");
      UiConfig::default()
    }
  }
}

fn load_bootstrap() -> UiBootstrap {
  let raw = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id(
        BOOTSTRAP_ELEMENT_ID
      )
    })
    .and_then(|element| {
      element.text_content()
    });

  let Some(raw) = raw else {
    tracing::debug!(
      "no bootstrap block in page; \
       starting with empty state"
    );
    return UiBootstrap::default();
  };

  match serde_json::from_str::<UiBootstrap>(&raw) {
    | Ok(bootstrap) => {
      tracing::info!(
        suchar_count =
          bootstrap.suchary.len(),
        message_count =
          bootstrap.messages.len(),
        "loaded page bootstrap"
      );
      bootstrap
    }
    | Err(error) => {
      tracing::error!(%error, "failed to parse page bootstrap; starting with empty state");
      UiBootstrap::default()
    }
  }
}

fn load_theme_mode() -> ThemeMode {
  let stored = web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .and_then(|storage| {
      storage
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
    });

  match stored.as_deref() {
    | Some("dark") => ThemeMode::Dark,
    | Some("light") => {
      ThemeMode::Light
    }
    | _ => system_theme_mode()
  }
}

fn system_theme_mode() -> ThemeMode {
  let prefers_dark = web_sys::window()
    .and_then(|window| {
      window
        .match_media(
          "(prefers-color-scheme: \
           dark)"
        )
        .ok()
        .flatten()
    })
    .is_some_and(|query| {
      query.matches()
    });

  if prefers_dark {
    ThemeMode::Dark
  } else {
    ThemeMode::Light
  }
}

fn save_theme_mode(theme: ThemeMode) {
  if let Some(storage) =
    web_sys::window().and_then(
      |window| {
        window
          .local_storage()
          .ok()
          .flatten()
      }
    )
  {
    let _ = storage.set_item(
      THEME_STORAGE_KEY,
      theme.as_attr()
    );
  }
}

fn apply_theme_mode(theme: ThemeMode) {
  if let Some(root) =
    web_sys::window()
      .and_then(|window| {
        window.document()
      })
      .and_then(|document| {
        document.document_element()
      })
  {
    let _ = root.set_attribute(
      "data-theme",
      theme.as_attr()
    );
  }
}

fn click_is_outside(
  event: &web_sys::Event,
  selector: &str
) -> bool {
  let target = event
    .target()
    .and_then(|target| {
      target
        .dyn_into::<web_sys::Element>()
        .ok()
    });

  match target {
    | Some(element) => element
      .closest(selector)
      .ok()
      .flatten()
      .is_none(),
    | None => true
  }
}

fn alert_message(text: &str) {
  if let Some(window) =
    web_sys::window()
  {
    let _ = window
      .alert_with_message(text);
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
