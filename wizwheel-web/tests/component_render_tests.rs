use futures::executor::block_on;
use wizwheel_game::AudioPrefs;
use wizwheel_web::components::audio_controls::AudioControls;
use wizwheel_web::components::modal::Modal;
use yew::{AttrValue, Callback, LocalServerRenderer};

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    wizwheel_web::i18n::set_lang("en");
    let open_props = wizwheel_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Trusty"),
        description: AttrValue::from("How do you earn trust from your team?"),
        confirm_label: AttrValue::from("Cast My Spell"),
        on_close: Callback::noop(),
        on_hover: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__title"));
    assert!(html.contains("Trusty"));
    assert!(html.contains("How do you earn trust from your team?"));
    assert!(html.contains("aria-modal"));

    let closed_props = wizwheel_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Trusty"),
        description: AttrValue::from("desc"),
        confirm_label: AttrValue::from("Close"),
        on_close: Callback::noop(),
        on_hover: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn audio_controls_reflect_preference_state() {
    wizwheel_web::i18n::set_lang("en");
    let props = wizwheel_web::components::audio_controls::Props {
        prefs: AudioPrefs {
            master_volume: 0.5,
            sfx_enabled: true,
            music_enabled: false,
        },
        on_change: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<AudioControls>::with_props(props).render());
    assert!(html.contains("Sound effects"));
    assert!(html.contains("Music"));
    assert!(html.contains("aria-pressed=\"true\""));
    assert!(html.contains("aria-pressed=\"false\""));
    assert!(html.contains("0.5"));
}
