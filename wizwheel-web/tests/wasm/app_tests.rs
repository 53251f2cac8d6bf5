use wasm_bindgen_test::*;
use yew::Renderer;

use wizwheel_web::app::App;
use wizwheel_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    wizwheel_web::i18n::set_lang("en");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[wasm_bindgen_test]
fn app_boots_on_the_start_screen() {
    render_app();
    let doc = dom::document();
    let start = doc
        .query_selector("[data-testid='start-screen']")
        .expect("query start screen");
    assert!(start.is_some());
}

#[wasm_bindgen_test]
fn saved_locale_round_trips_through_storage() {
    wizwheel_web::i18n::set_lang("id");
    let stored = dom::local_storage()
        .expect("localStorage")
        .get_item("wizwheel.locale")
        .expect("read locale");
    assert_eq!(stored.as_deref(), Some("id"));
    wizwheel_web::i18n::set_lang("en");
}
