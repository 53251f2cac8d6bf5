//! The wheel session controller.
//!
//! One session runs language-select -> landing -> spin -> reveal -> form and
//! ends at a full reload. Transitions are pure with respect to the owned
//! state: `apply` mutates the session and returns the side effects (sound
//! cues, timer starts) for the shell to honor or drop. Nothing here performs
//! I/O, so the whole machine is unit-testable without a renderer.

use crate::audio::Cue;
use crate::data::{Trait, TraitWheel};
use crate::locale::Locale;
use crate::spin::{SpinRng, landed_index, plan_spin};
use serde::{Deserialize, Serialize};

/// Which layout the session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Language,
    Landing,
    Spinning,
    Form,
}

/// Free-text fields collected on the form screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormFields {
    pub name: String,
    pub spell_text: String,
    pub tags: String,
}

/// The full serializable session value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub screen: Screen,
    pub locale: Option<Locale>,
    pub selected_trait: Option<usize>,
    pub rotation_degrees: f64,
    pub spin_duration_ms: u32,
    pub modal_open: bool,
    pub form: FormFields,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            screen: Screen::Language,
            locale: None,
            selected_trait: None,
            rotation_degrees: 0.0,
            spin_duration_ms: 0,
            modal_open: false,
            form: FormFields::default(),
        }
    }
}

impl SessionState {
    /// A trait is selected exactly while the reveal modal is open or the
    /// form screen is showing.
    #[must_use]
    pub fn invariant_holds(&self) -> bool {
        self.selected_trait.is_some() == (self.modal_open || self.screen == Screen::Form)
    }
}

/// User-driven inputs to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PickLanguage(Locale),
    Spin,
    /// Delivered by the shell's one-shot timer `spin_duration_ms` after the
    /// spin started.
    SpinElapsed,
    DismissReveal,
    EditName(String),
    EditSpell(String),
    EditTags(String),
}

/// Side effects requested by a transition. All are best-effort; dropping
/// any of them never corrupts the session (though dropping
/// `StartSpinTimer` leaves the wheel spinning forever).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Play(Cue),
    StartSpinTimer(u32),
    DuckBackground,
    RestoreBackground,
}

/// Controller owning one session's state, wheel data, and spin RNG.
#[derive(Debug, Clone)]
pub struct WheelSession {
    state: SessionState,
    wheel: TraitWheel,
    rng: SpinRng,
}

impl WheelSession {
    /// Construct a fresh session over a wheel, seeding the spin draw.
    #[must_use]
    pub fn new(wheel: TraitWheel, seed: u64) -> Self {
        Self {
            state: SessionState::default(),
            wheel,
            rng: SpinRng::from_seed(seed),
        }
    }

    /// Borrow the session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Borrow the wheel data.
    #[must_use]
    pub const fn wheel(&self) -> &TraitWheel {
        &self.wheel
    }

    /// The trait currently selected, if any.
    #[must_use]
    pub fn selected_trait(&self) -> Option<&Trait> {
        self.state.selected_trait.and_then(|i| self.wheel.get(i))
    }

    /// Locale latched by the language screen.
    #[must_use]
    pub const fn locale(&self) -> Option<Locale> {
        self.state.locale
    }

    /// Apply one event. Illegal events for the current screen are ignored
    /// and return no effects.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<Effect> {
        match event {
            SessionEvent::PickLanguage(locale) => self.pick_language(locale),
            SessionEvent::Spin => self.spin(),
            SessionEvent::SpinElapsed => self.spin_elapsed(),
            SessionEvent::DismissReveal => self.dismiss_reveal(),
            SessionEvent::EditName(value) => self.edit(|form| form.name = value),
            SessionEvent::EditSpell(value) => self.edit(|form| form.spell_text = value),
            SessionEvent::EditTags(value) => self.edit(|form| form.tags = value),
        }
    }

    fn pick_language(&mut self, locale: Locale) -> Vec<Effect> {
        if self.state.screen != Screen::Language {
            return Vec::new();
        }
        self.state.locale = Some(locale);
        self.state.screen = Screen::Landing;
        vec![Effect::Play(Cue::Click), Effect::Play(Cue::Transition)]
    }

    fn spin(&mut self) -> Vec<Effect> {
        if self.state.screen != Screen::Landing || self.wheel.is_empty() {
            return Vec::new();
        }
        let offset = self.rng.draw_offset();
        let plan = plan_spin(self.state.rotation_degrees, offset);
        self.state.rotation_degrees = plan.target_rotation;
        self.state.spin_duration_ms = plan.duration_ms;
        self.state.screen = Screen::Spinning;
        vec![
            Effect::Play(Cue::Click),
            Effect::Play(Cue::Spin),
            Effect::DuckBackground,
            Effect::StartSpinTimer(plan.duration_ms),
        ]
    }

    fn spin_elapsed(&mut self) -> Vec<Effect> {
        if self.state.screen != Screen::Spinning || self.state.modal_open {
            return Vec::new();
        }
        let index = landed_index(self.state.rotation_degrees, self.wheel.len());
        self.state.selected_trait = Some(index);
        self.state.modal_open = true;
        vec![Effect::RestoreBackground, Effect::Play(Cue::Reveal)]
    }

    fn dismiss_reveal(&mut self) -> Vec<Effect> {
        if !self.state.modal_open {
            return Vec::new();
        }
        self.state.modal_open = false;
        self.state.screen = Screen::Form;
        vec![Effect::Play(Cue::Close), Effect::Play(Cue::Transition)]
    }

    fn edit(&mut self, update: impl FnOnce(&mut FormFields)) -> Vec<Effect> {
        if self.state.screen != Screen::Form {
            return Vec::new();
        }
        update(&mut self.state.form);
        Vec::new()
    }
}
