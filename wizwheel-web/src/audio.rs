//! Best-effort audio playback over `HtmlAudioElement`.
//!
//! Playback never blocks a transition: element creation and the play promise
//! are both allowed to fail, failures are logged and swallowed, and the
//! browser's autoplay gating is tolerated (the start screen's begin button is
//! the unlocking user gesture).

use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::HtmlAudioElement;
use wizwheel_game::audio::{AudioSink, Cue, PlayOpts};
use wizwheel_game::prefs::{AudioPrefs, PrefsStore};

/// Asset location for each cue.
#[must_use]
pub const fn cue_src(cue: Cue) -> &'static str {
    match cue {
        Cue::Click => "https://actions.google.com/sounds/v1/ui/ui_tap.ogg",
        Cue::Hover => "https://actions.google.com/sounds/v1/ui/ui_button_hover.ogg",
        Cue::Spin => "https://actions.google.com/sounds/v1/magical/magic_wand_swoosh.ogg",
        Cue::Reveal => "https://actions.google.com/sounds/v1/magical/magic_spell_charge_up.ogg",
        Cue::Success => "https://actions.google.com/sounds/v1/magical/magic_spell_success.ogg",
        Cue::Copy => "https://actions.google.com/sounds/v1/ui/ui_notification_active.ogg",
        Cue::Close => "https://actions.google.com/sounds/v1/ui/ui_pop_down.ogg",
        Cue::Transition => "https://actions.google.com/sounds/v1/ui/ui_transition_slide.ogg",
        Cue::Submit => "https://cdn.pixabay.com/audio/2022/10/18/audio_216209b2e5.mp3",
        Cue::Awaken => "https://actions.google.com/sounds/v1/magical/magic_spell_explosion.ogg",
        Cue::Particle => "https://cdn.pixabay.com/audio/2022/03/07/audio_a55381f9b1.mp3",
        Cue::NucleusGlow => "https://cdn.pixabay.com/audio/2022/10/13/audio_779c16bb77.mp3",
        Cue::Complete | Cue::SessionEnd => {
            "https://cdn.pixabay.com/audio/2022/03/24/audio_73f0c1126b.mp3"
        }
        Cue::Splash => "https://cdn.pixabay.com/audio/2022/03/15/audio_2b4b537f07.mp3",
        Cue::Background => "https://cdn.pixabay.com/audio/2022/11/17/audio_850d533c3a.mp3",
    }
}

/// `localStorage`-backed preference store. Degrades to a no-op store when
/// storage is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPrefs;

impl PrefsStore for LocalPrefs {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()
                .ok()
                .and_then(|storage| storage.get_item(key).ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Ok(storage) = crate::dom::local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }
}

/// Fire-and-forget sink over cached `HtmlAudioElement`s.
pub struct WebAudioSink {
    cache: RefCell<HashMap<Cue, HtmlAudioElement>>,
    prefs: RefCell<AudioPrefs>,
    background: RefCell<Option<HtmlAudioElement>>,
}

impl WebAudioSink {
    #[must_use]
    pub fn new(prefs: AudioPrefs) -> Self {
        Self {
            cache: RefCell::new(HashMap::new()),
            prefs: RefCell::new(prefs),
            background: RefCell::new(None),
        }
    }

    /// Construct with preferences loaded from `localStorage` (defaults on
    /// non-browser targets).
    #[must_use]
    pub fn from_local_storage() -> Self {
        Self::new(AudioPrefs::load(&LocalPrefs))
    }

    #[must_use]
    pub fn prefs(&self) -> AudioPrefs {
        *self.prefs.borrow()
    }

    /// Adopt new preferences and persist them, adjusting any playing music.
    pub fn apply_prefs(&self, prefs: AudioPrefs) {
        *self.prefs.borrow_mut() = prefs;
        prefs.save(&LocalPrefs);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(bg) = self.background.borrow().as_ref() {
                bg.set_volume(f64::from(
                    (wizwheel_game::audio::BACKGROUND_VOLUME * prefs.master_volume).clamp(0.0, 1.0),
                ));
                if prefs.music_enabled {
                    Self::fire(Cue::Background, bg);
                } else {
                    let _ = bg.pause();
                }
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn element(&self, cue: Cue) -> Option<HtmlAudioElement> {
        let mut cache = self.cache.borrow_mut();
        if let Some(el) = cache.get(&cue) {
            return Some(el.clone());
        }
        match HtmlAudioElement::new_with_src(cue_src(cue)) {
            Ok(el) => {
                cache.insert(cue, el.clone());
                Some(el)
            }
            Err(err) => {
                log::warn!(
                    "could not create audio element for {}: {}",
                    cue.as_str(),
                    crate::dom::js_error_message(&err)
                );
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn fire(cue: Cue, el: &HtmlAudioElement) {
        match el.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                        // Autoplay gating lands here; the session carries on.
                        log::warn!(
                            "playback blocked for {}: {}",
                            cue.as_str(),
                            crate::dom::js_error_message(&err)
                        );
                    }
                });
            }
            Err(err) => {
                log::warn!(
                    "playback failed for {}: {}",
                    cue.as_str(),
                    crate::dom::js_error_message(&err)
                );
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn play_background(&self, opts: PlayOpts) {
        let prefs = self.prefs();
        if !prefs.music_enabled {
            return;
        }
        let mut background = self.background.borrow_mut();
        let el = match background.as_ref() {
            Some(el) => el.clone(),
            None => match HtmlAudioElement::new_with_src(cue_src(Cue::Background)) {
                Ok(el) => {
                    *background = Some(el.clone());
                    el
                }
                Err(err) => {
                    log::warn!(
                        "could not create background audio: {}",
                        crate::dom::js_error_message(&err)
                    );
                    return;
                }
            },
        };
        el.set_loop(opts.looped);
        el.set_volume(f64::from((opts.volume * prefs.master_volume).clamp(0.0, 1.0)));
        Self::fire(Cue::Background, &el);
    }
}

impl AudioSink for WebAudioSink {
    fn play(&self, cue: Cue, opts: PlayOpts) {
        #[cfg(target_arch = "wasm32")]
        {
            if cue == Cue::Background {
                self.play_background(opts);
                return;
            }
            let prefs = self.prefs();
            if !prefs.sfx_enabled {
                return;
            }
            let Some(el) = self.element(cue) else {
                return;
            };
            el.set_current_time(0.0);
            el.set_loop(opts.looped);
            el.set_volume(f64::from((opts.volume * prefs.master_volume).clamp(0.0, 1.0)));
            Self::fire(cue, &el);
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (cue, opts);
        }
    }

    fn set_background_volume(&self, volume: f32) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(bg) = self.background.borrow().as_ref() {
                let master = self.prefs().master_volume;
                bg.set_volume(f64::from((volume * master).clamp(0.0, 1.0)));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = volume;
        }
    }
}
