mod api;
mod app;
mod components;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  tracing::info!(
    "starting Suchar Overflow frontend"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  let view = mount
    .get_attribute("data-view")
    .as_deref()
    .and_then(app::PageView::from_key)
    .unwrap_or(app::PageView::Feed);

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps { view }
  )
  .render();
}
