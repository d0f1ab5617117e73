use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use suchar_api::{TagSuggestion, VoteKind, VoteRequest, VoteResponse};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

pub fn csrf_token() -> Option<String> {
    let field = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| {
            document
                .query_selector("[name=csrfmiddlewaretoken]")
                .ok()
                .flatten()
        })
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())?;

    let value = field.value();
    if value.is_empty() { None } else { Some(value) }
}

pub async fn vote(
    base: &str,
    suchar_id: i64,
    kind: VoteKind,
    csrf: &str,
) -> Result<VoteResponse, String> {
    let url = format!("{base}/{suchar_id}/vote");
    let response = Request::post(&url)
        .header("X-CSRFToken", csrf)
        .json(&VoteRequest { vote_type: kind })
        .map_err(|e| format!("failed to encode vote body: {e}"))?
        .send()
        .await
        .map_err(|e| format!("vote request failed: {e}"))?;

    decode_ok(response).await
}

pub async fn search_tags(base: &str, term: &str) -> Result<Vec<TagSuggestion>, String> {
    let query = js_sys::encode_uri_component(term);
    let url = format!("{base}/tags?q={query}");
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("tag lookup failed: {e}"))?;

    decode_ok(response).await
}

async fn decode_ok<R>(response: Response) -> Result<R, String>
where
    R: DeserializeOwned,
{
    if !response.ok() {
        return Err(format!("http status {}", response.status()));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| format!("decode error: {e}"))
}
