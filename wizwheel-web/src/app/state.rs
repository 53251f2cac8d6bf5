use crate::app::stage::Stage;
use crate::audio::WebAudioSink;
use std::rc::Rc;
use wizwheel_game::profile::ReflectionAnswers;
use wizwheel_game::{
    AudioPrefs, NucleusGame, ParticleRing, TraitWheel, WheelSession, WizardProfile,
};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub stage: UseStateHandle<Stage>,
    pub session: UseStateHandle<WheelSession>,
    pub nucleus: UseStateHandle<NucleusGame>,
    pub answers: UseStateHandle<ReflectionAnswers>,
    pub profile: UseStateHandle<Option<WizardProfile>>,
    pub profile_error: UseStateHandle<Option<AttrValue>>,
    pub profile_busy: UseStateHandle<bool>,
    pub copy_label: UseStateHandle<AttrValue>,
    pub prefs: UseStateHandle<AudioPrefs>,
    pub audio: Rc<WebAudioSink>,
}

#[cfg(target_arch = "wasm32")]
fn session_seed() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(target_arch = "wasm32"))]
fn session_seed() -> u64 {
    0
}

#[hook]
pub fn use_app_state() -> AppState {
    let audio = use_memo((), |_| WebAudioSink::from_local_storage());
    let initial_prefs = audio.prefs();

    AppState {
        stage: use_state(|| Stage::Start),
        session: use_state(|| {
            WheelSession::new(TraitWheel::load_from_static(), session_seed())
        }),
        nucleus: use_state(|| NucleusGame::new(ParticleRing::load_from_static())),
        answers: use_state(ReflectionAnswers::default),
        profile: use_state(|| None::<WizardProfile>),
        profile_error: use_state(|| None::<AttrValue>),
        profile_busy: use_state(|| false),
        copy_label: use_state(|| AttrValue::from(crate::i18n::t("form.generateLink"))),
        prefs: use_state(move || initial_prefs),
        audio,
    }
}
