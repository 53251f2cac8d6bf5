//! Callback builders wiring the controllers to the shell: every builder
//! clones the state handles it needs and honors the effect lists the core
//! controllers return. Timers and the generation call are the only
//! suspension points, and both deliver their results back through the state
//! handles.

use crate::app::stage::{Stage, next_stage};
use crate::app::state::AppState;
use crate::audio::WebAudioSink;
use std::rc::Rc;
use wizwheel_game::audio::{AudioSink, BACKGROUND_VOLUME, Cue, DUCKED_VOLUME};
use wizwheel_game::{AudioPrefs, Effect, SessionEvent, WheelSession, share_message};
use yew::prelude::*;

pub struct AppHandlers {
    pub begin: Callback<()>,
    pub wheel_event: Callback<SessionEvent>,
    pub wheel_continue: Callback<()>,
    pub copy_share: Callback<()>,
    pub hover: Callback<()>,
    pub nucleus_particle: Callback<usize>,
    pub nucleus_close: Callback<()>,
    pub nucleus_complete: Callback<()>,
    pub answer_change: Callback<(usize, String)>,
    pub reflection_submit: Callback<()>,
    pub profile_continue: Callback<()>,
    pub closing_complete: Callback<()>,
    pub prefs_change: Callback<AudioPrefs>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            begin: build_begin(state),
            wheel_event: build_wheel_event(state),
            wheel_continue: build_stage_advance(state, Cue::Transition),
            copy_share: build_copy_share(state),
            hover: build_cue(state, Cue::Hover),
            nucleus_particle: build_nucleus_particle(state),
            nucleus_close: build_nucleus_close(state),
            nucleus_complete: build_nucleus_complete(state),
            answer_change: build_answer_change(state),
            reflection_submit: build_reflection_submit(state),
            profile_continue: build_stage_advance(state, Cue::Awaken),
            closing_complete: build_closing_complete(state),
            prefs_change: build_prefs_change(state),
        }
    }
}

fn play_effects(effects: &[Effect], audio: &Rc<WebAudioSink>) {
    for effect in effects {
        match effect {
            Effect::Play(cue) => audio.play_cue(*cue),
            Effect::DuckBackground => audio.set_background_volume(DUCKED_VOLUME),
            Effect::RestoreBackground => audio.set_background_volume(BACKGROUND_VOLUME),
            Effect::StartSpinTimer(_) => {}
        }
    }
}

/// Honor a session effect list, including the spin timer: when it fires, the
/// elapsed event is applied to the post-spin session value (no other session
/// event is legal while spinning) and its own effects are run in turn.
fn run_session_effects(
    effects: Vec<Effect>,
    audio: &Rc<WebAudioSink>,
    session: &UseStateHandle<WheelSession>,
    current: &WheelSession,
) {
    for effect in effects {
        match effect {
            Effect::Play(cue) => audio.play_cue(cue),
            Effect::DuckBackground => audio.set_background_volume(DUCKED_VOLUME),
            Effect::RestoreBackground => audio.set_background_volume(BACKGROUND_VOLUME),
            Effect::StartSpinTimer(duration_ms) => {
                #[cfg(target_arch = "wasm32")]
                {
                    let audio = audio.clone();
                    let session = session.clone();
                    let mut spinning = current.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let delay = i32::try_from(duration_ms).unwrap_or(i32::MAX);
                        if crate::dom::sleep_ms(delay).await.is_err() {
                            return;
                        }
                        let effects = spinning.apply(SessionEvent::SpinElapsed);
                        let after = spinning.clone();
                        session.set(spinning);
                        run_session_effects(effects, &audio, &session, &after);
                    });
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = (duration_ms, current);
                }
            }
        }
    }
}

fn build_begin(state: &AppState) -> Callback<()> {
    let stage = state.stage.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        // Called from the begin click, so playback is user-initiated.
        audio.play_cue(Cue::Splash);
        audio.play_cue(Cue::Background);
        stage.set(Stage::Splash);
        #[cfg(target_arch = "wasm32")]
        {
            let stage = stage.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let delay =
                    i32::try_from(crate::app::stage::SPLASH_DURATION_MS).unwrap_or(i32::MAX);
                if crate::dom::sleep_ms(delay).await.is_ok() {
                    stage.set(Stage::Wheel);
                }
            });
        }
    })
}

fn build_wheel_event(state: &AppState) -> Callback<SessionEvent> {
    let session = state.session.clone();
    let audio = state.audio.clone();
    let copy_label = state.copy_label.clone();
    Callback::from(move |event: SessionEvent| {
        if let SessionEvent::PickLanguage(locale) = event {
            crate::i18n::set_locale(locale);
            copy_label.set(AttrValue::from(crate::i18n::t("form.generateLink")));
        }
        let mut next = (*session).clone();
        let effects = next.apply(event);
        let after = next.clone();
        session.set(next);
        run_session_effects(effects, &audio, &session, &after);
    })
}

fn build_cue(state: &AppState, cue: Cue) -> Callback<()> {
    let audio = state.audio.clone();
    Callback::from(move |()| audio.play_cue(cue))
}

/// Advance to the next stage with a cue; used for the wheel-form continue
/// and the profile's awaken button.
fn build_stage_advance(state: &AppState, cue: Cue) -> Callback<()> {
    let stage = state.stage.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        audio.play_cue(cue);
        if let Some(next) = next_stage(*stage) {
            stage.set(next);
        }
    })
}

fn build_copy_share(state: &AppState) -> Callback<()> {
    let session = state.session.clone();
    let audio = state.audio.clone();
    let copy_label = state.copy_label.clone();
    Callback::from(move |()| {
        let current = (*session).clone();
        let locale = current.locale().unwrap_or_default();
        let message = share_message(locale, current.wheel(), &current.state().form);
        audio.play_cue(Cue::Copy);
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::clipboard_write(&message);
            copy_label.set(AttrValue::from(crate::i18n::t("form.linkCopied")));
            let copy_label = copy_label.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let delay =
                    i32::try_from(crate::app::stage::COPY_LABEL_RESET_MS).unwrap_or(i32::MAX);
                if crate::dom::sleep_ms(delay).await.is_ok() {
                    copy_label.set(AttrValue::from(crate::i18n::t("form.generateLink")));
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&message, &copy_label);
        }
    })
}

fn build_nucleus_particle(state: &AppState) -> Callback<usize> {
    let nucleus = state.nucleus.clone();
    let audio = state.audio.clone();
    Callback::from(move |index: usize| {
        let mut game = (*nucleus).clone();
        let effects = game.click_particle(index);
        nucleus.set(game);
        play_effects(&effects, &audio);
    })
}

fn build_nucleus_close(state: &AppState) -> Callback<()> {
    let nucleus = state.nucleus.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        let mut game = (*nucleus).clone();
        let effects = game.close_modal();
        nucleus.set(game);
        play_effects(&effects, &audio);
    })
}

fn build_nucleus_complete(state: &AppState) -> Callback<()> {
    let nucleus = state.nucleus.clone();
    let stage = state.stage.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        let mut game = (*nucleus).clone();
        let effects = game.complete();
        if effects.is_empty() {
            return;
        }
        nucleus.set(game);
        play_effects(&effects, &audio);
        stage.set(Stage::Reflection);
    })
}

fn build_answer_change(state: &AppState) -> Callback<(usize, String)> {
    let answers = state.answers.clone();
    Callback::from(move |(index, value): (usize, String)| {
        let mut next = (*answers).clone();
        next.set(index, value);
        answers.set(next);
    })
}

fn build_reflection_submit(state: &AppState) -> Callback<()> {
    let answers = state.answers.clone();
    let profile = state.profile.clone();
    let profile_error = state.profile_error.clone();
    let profile_busy = state.profile_busy.clone();
    let stage = state.stage.clone();
    let audio = state.audio.clone();
    Callback::from(move |()| {
        audio.play_cue(Cue::Submit);
        let spells = wizwheel_game::SpellBook::load_from_static().spells;
        let request = match wizwheel_game::build_request(&spells, &*answers) {
            Ok(request) => request,
            Err(err) => {
                log::warn!("reflection submit rejected: {err}");
                profile_error.set(Some(AttrValue::from(crate::i18n::t("reflection.notEnough"))));
                return;
            }
        };

        profile_error.set(None);
        profile_busy.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            use wizwheel_game::ProfileGenerator;
            let profile = profile.clone();
            let profile_error = profile_error.clone();
            let profile_busy = profile_busy.clone();
            let stage = stage.clone();
            let audio = audio.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let generator = crate::profile_gen::FetchProfileGenerator::default();
                match generator.generate(request).await {
                    Ok(generated) => {
                        profile.set(Some(generated));
                        profile_busy.set(false);
                        audio.play_cue(Cue::Success);
                        stage.set(Stage::Profile);
                    }
                    Err(err) => {
                        log::warn!("profile generation failed: {err}");
                        profile_error
                            .set(Some(AttrValue::from(crate::i18n::t("reflection.failed"))));
                        profile_busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (&request, &profile, &stage);
        }
    })
}

fn build_closing_complete(state: &AppState) -> Callback<()> {
    let audio = state.audio.clone();
    Callback::from(move |()| {
        audio.play_cue(Cue::SessionEnd);
        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                let delay =
                    i32::try_from(crate::app::stage::RELOAD_DELAY_MS).unwrap_or(i32::MAX);
                let _ = crate::dom::sleep_ms(delay).await;
                crate::dom::reload_page();
            });
        }
    })
}

fn build_prefs_change(state: &AppState) -> Callback<AudioPrefs> {
    let prefs = state.prefs.clone();
    let audio = state.audio.clone();
    Callback::from(move |next: AudioPrefs| {
        audio.apply_prefs(next);
        prefs.set(next);
    })
}
