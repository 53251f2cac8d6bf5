//! Wizwheel Session Engine
//!
//! Platform-agnostic core logic for the Wizwheel reflection game: the wheel
//! session state machine, the landing computation, share-message formatting,
//! the profile-generation contract, and the capability seams (audio,
//! preferences, generation) the web shell implements. No UI or
//! platform-specific dependencies live here.

pub mod audio;
pub mod data;
pub mod locale;
pub mod nucleus;
pub mod prefs;
pub mod profile;
pub mod session;
pub mod share;
pub mod spin;

// Re-export commonly used types
pub use audio::{AudioSink, BACKGROUND_VOLUME, Cue, DUCKED_VOLUME, NullSink, PlayOpts};
pub use data::{LocalizedText, Particle, ParticleRing, Spell, SpellBook, Trait, TraitWheel};
pub use locale::Locale;
pub use nucleus::NucleusGame;
pub use prefs::{AudioPrefs, MemoryPrefs, PrefsStore};
pub use profile::{
    CoreElement, GenerateRequest, MIN_ANSWERED, ProfileError, ProfileGenerator,
    ReflectionAnswers, WizardProfile, build_request, parse_profile, response_schema,
};
pub use session::{
    Effect, FormFields, Screen, SessionEvent, SessionState, WheelSession,
};
pub use share::{FALLBACK_NAME, SHARE_URL, format_tags, share_message};
pub use spin::{
    BASE_SPIN_DEGREES, SEGMENT_ANGLE, SPIN_DURATION_MS, SpinPlan, SpinRng, TRAIT_COUNT,
    landed_index, plan_spin,
};
