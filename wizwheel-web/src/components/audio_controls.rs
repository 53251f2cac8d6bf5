use web_sys::HtmlInputElement;
use wizwheel_game::AudioPrefs;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub prefs: AudioPrefs,
    pub on_change: Callback<AudioPrefs>,
}

/// Mute toggles and a master-volume slider, persisted by the caller.
#[function_component(AudioControls)]
pub fn audio_controls(props: &Props) -> Html {
    let prefs = props.prefs;

    let on_toggle_sfx = {
        let cb = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(AudioPrefs {
                sfx_enabled: !prefs.sfx_enabled,
                ..prefs
            });
        })
    };
    let on_toggle_music = {
        let cb = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit(AudioPrefs {
                music_enabled: !prefs.music_enabled,
                ..prefs
            });
        })
    };
    let on_volume = {
        let cb = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>()
                && let Ok(volume) = input.value().parse::<f32>()
            {
                cb.emit(prefs.with_master_volume(volume));
            }
        })
    };

    html! {
        <div class="audio-controls" role="group" aria-label={crate::i18n::t("audio.volume")}>
            <button
                type="button"
                class="audio-controls__toggle"
                aria-pressed={prefs.sfx_enabled.to_string()}
                onclick={on_toggle_sfx}
            >
                { crate::i18n::t("audio.sfx") }
            </button>
            <button
                type="button"
                class="audio-controls__toggle"
                aria-pressed={prefs.music_enabled.to_string()}
                onclick={on_toggle_music}
            >
                { crate::i18n::t("audio.music") }
            </button>
            <label class="audio-controls__volume">
                { crate::i18n::t("audio.volume") }
                <input
                    type="range"
                    min="0"
                    max="1"
                    step="0.05"
                    value={prefs.master_volume.to_string()}
                    oninput={on_volume}
                />
            </label>
        </div>
    }
}
