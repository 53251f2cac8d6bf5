use crate::locale::Locale;
use serde::{Deserialize, Serialize};

const DEFAULT_TRAIT_DATA: &str =
    include_str!("../../wizwheel-web/static/assets/data/traits.json");
const DEFAULT_SPELL_DATA: &str =
    include_str!("../../wizwheel-web/static/assets/data/spells.json");
const DEFAULT_PARTICLE_DATA: &str =
    include_str!("../../wizwheel-web/static/assets/data/particles.json");

/// A piece of copy carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedText {
    pub en: String,
    pub id: String,
}

impl LocalizedText {
    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Id => &self.id,
        }
    }
}

/// One wheel segment: a labelled trait and its reflection prompt.
///
/// The order of traits is semantically meaningful: index 0 is rendered at
/// the top of the wheel and the landing computation maps angles back to
/// indices in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub label: LocalizedText,
    pub prompt: LocalizedText,
}

/// The fixed nine-trait wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TraitWheel {
    pub traits: Vec<Trait>,
}

impl TraitWheel {
    /// Create an empty wheel (useful for tests).
    #[must_use]
    pub fn empty() -> Self {
        Self { traits: Vec::new() }
    }

    /// Parse a wheel from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the trait schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the embedded production wheel.
    ///
    /// # Panics
    ///
    /// Panics if the embedded trait data is malformed, which is a build
    /// defect rather than a runtime condition.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_TRAIT_DATA).expect("embedded trait data should parse")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Trait> {
        self.traits.get(index)
    }

    /// The prompt used as the opening line of the share message. This is the
    /// final trait's prompt ("You"), matching the wheel's closing question.
    #[must_use]
    pub fn intro_prompt(&self, locale: Locale) -> Option<&str> {
        self.traits.last().map(|t| t.prompt.get(locale))
    }
}

/// One reflection question on the questionnaire screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub title: String,
    pub question: String,
    pub purpose: String,
}

/// The fixed five-question reflection set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpellBook {
    pub spells: Vec<Spell>,
}

impl SpellBook {
    #[must_use]
    pub fn empty() -> Self {
        Self { spells: Vec::new() }
    }

    /// Parse a spell book from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the spell schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the embedded production spell book.
    ///
    /// # Panics
    ///
    /// Panics if the embedded spell data is malformed.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_SPELL_DATA).expect("embedded spell data should parse")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

/// One orbiting particle in the nucleus mini-game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub name: String,
    pub prompt: String,
}

/// The fixed particle ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ParticleRing {
    pub particles: Vec<Particle>,
}

impl ParticleRing {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            particles: Vec::new(),
        }
    }

    /// Parse a particle ring from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the particle schema.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the embedded production particle ring.
    ///
    /// # Panics
    ///
    /// Panics if the embedded particle data is malformed.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_PARTICLE_DATA).expect("embedded particle data should parse")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
