//! The wizard-profile generation contract.
//!
//! The generator itself is an opaque, possibly-failing remote dependency
//! implemented by the shell; this module owns everything testable about it:
//! the minimum-input gate, the request shape (prompt plus response schema),
//! and the response parsing.

use crate::data::Spell;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Number of reflection questions presented.
pub const ANSWER_COUNT: usize = 5;

/// Minimum non-blank answers required before a generation call is made.
pub const MIN_ANSWERED: usize = 3;

/// Structured profile returned by the generator. Field names mirror the
/// response schema keys exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardProfile {
    pub core_element: CoreElement,
    pub guiding_principle: String,
    pub latent_power: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreElement {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("at least {MIN_ANSWERED} reflections must be answered, got {answered}")]
    NotEnoughAnswers { answered: usize },
    #[error("profile generation failed: {0}")]
    Generation(String),
    #[error("malformed profile response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Free-text answers to the five reflection questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectionAnswers {
    answers: Vec<String>,
}

impl Default for ReflectionAnswers {
    fn default() -> Self {
        Self {
            answers: vec![String::new(); ANSWER_COUNT],
        }
    }
}

impl ReflectionAnswers {
    #[must_use]
    pub fn get(&self, index: usize) -> &str {
        self.answers.get(index).map_or("", String::as_str)
    }

    /// Out-of-range indexes are ignored.
    pub fn set(&mut self, index: usize, value: String) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = value;
        }
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| !a.trim().is_empty()).count()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.answered_count() >= MIN_ANSWERED
    }

    /// Question/answer pairs for the filled slots only.
    fn filled<'a>(&'a self, spells: &'a [Spell]) -> impl Iterator<Item = (&'a str, &'a str)> {
        spells
            .iter()
            .zip(&self.answers)
            .filter(|(_, answer)| !answer.trim().is_empty())
            .map(|(spell, answer)| (spell.question.as_str(), answer.trim()))
    }
}

/// Request shape sent to the generation endpoint: prompt text plus the JSON
/// schema the response must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    pub response_schema: Value,
}

/// The fixed response schema: `coreElement.name`, `coreElement.description`,
/// `guidingPrinciple`, `latentPower`.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "coreElement": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "The name of the core element." },
                    "description": { "type": "string", "description": "A description of why this is their element." }
                },
                "required": ["name", "description"]
            },
            "guidingPrinciple": { "type": "string", "description": "A summary of their leadership style." },
            "latentPower": { "type": "string", "description": "A potential strength to develop." }
        },
        "required": ["coreElement", "guidingPrinciple", "latentPower"]
    })
}

/// Build the generation request from the questionnaire, enforcing the
/// minimum-input precondition locally before any external call.
///
/// # Errors
///
/// Returns [`ProfileError::NotEnoughAnswers`] when fewer than
/// [`MIN_ANSWERED`] answers are non-blank.
pub fn build_request(
    spells: &[Spell],
    answers: &ReflectionAnswers,
) -> Result<GenerateRequest, ProfileError> {
    let answered = answers.answered_count();
    if answered < MIN_ANSWERED {
        return Err(ProfileError::NotEnoughAnswers { answered });
    }

    let reflections = answers
        .filled(spells)
        .map(|(question, answer)| format!("Q: {question}\nA: {answer}"))
        .collect::<Vec<_>>()
        .join("\n\n");

    let prompt = format!(
        "You are a wise, mystical mentor. Based on the following reflections about \
         leadership and integrity, create a personalized \"Inner Wizard Profile\". \
         The tone should be empowering, insightful, and magical.\n\n\
         User's Reflections:\n{reflections}\n\n\
         Generate a profile with these exact JSON keys: \"coreElement\" (with \"name\" \
         and \"description\"), \"guidingPrinciple\", and \"latentPower\".\n\
         - The \"coreElement\" name should be a classical element (e.g., Earth, Aether, \
         Crystal, Shadow, Starlight) that symbolizes their leadership foundation. The \
         description should explain why.\n\
         - The \"guidingPrinciple\" is a short, powerful summary of their leadership \
         philosophy based on their answers.\n\
         - The \"latentPower\" is a potential strength they can cultivate, framed as a \
         magical ability."
    );

    Ok(GenerateRequest {
        prompt,
        response_schema: response_schema(),
    })
}

/// Parse a generator response body into a profile.
///
/// # Errors
///
/// Returns [`ProfileError::Malformed`] when the body is not valid JSON or
/// does not satisfy the response schema.
pub fn parse_profile(body: &str) -> Result<WizardProfile, ProfileError> {
    Ok(serde_json::from_str(body)?)
}

/// Capability seam for the remote generator. Implementations carry their own
/// transport error type; no retry logic lives on either side of this trait.
#[allow(async_fn_in_trait)] // Single-threaded wasm caller; Send bounds are not wanted.
pub trait ProfileGenerator {
    type Error: std::error::Error;

    /// Submit a generation request and await the structured profile.
    async fn generate(&self, request: GenerateRequest) -> Result<WizardProfile, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SpellBook;

    fn answers(filled: usize) -> ReflectionAnswers {
        let mut answers = ReflectionAnswers::default();
        for i in 0..filled {
            answers.set(i, format!("answer {i}"));
        }
        answers
    }

    #[test]
    fn three_of_five_answers_are_accepted() {
        let book = SpellBook::load_from_static();
        let request = build_request(&book.spells, &answers(3)).unwrap();
        assert!(request.prompt.contains("answer 0"));
        assert!(request.prompt.contains("answer 2"));
        assert!(!request.prompt.contains("answer 3"));
    }

    #[test]
    fn two_of_five_answers_are_rejected_before_any_call() {
        let book = SpellBook::load_from_static();
        let err = build_request(&book.spells, &answers(2)).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::NotEnoughAnswers { answered: 2 }
        ));
    }

    #[test]
    fn blank_answers_do_not_count() {
        let mut a = answers(2);
        a.set(2, "   ".to_string());
        assert_eq!(a.answered_count(), 2);
        assert!(!a.can_submit());
    }

    #[test]
    fn out_of_range_answer_slots_are_ignored() {
        let mut a = ReflectionAnswers::default();
        a.set(99, "lost".to_string());
        assert_eq!(a.answered_count(), 0);
        assert_eq!(a.get(99), "");
    }

    #[test]
    fn schema_names_the_exact_required_keys() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["coreElement", "guidingPrinciple", "latentPower"]);
        assert!(schema["properties"]["coreElement"]["properties"]["name"].is_object());
        assert!(schema["properties"]["coreElement"]["properties"]["description"].is_object());
    }

    #[test]
    fn well_formed_response_parses() {
        let body = r#"{
            "coreElement": { "name": "Earth", "description": "Grounded choices." },
            "guidingPrinciple": "Act right when unseen.",
            "latentPower": "Stone-steady resolve."
        }"#;
        let profile = parse_profile(body).unwrap();
        assert_eq!(profile.core_element.name, "Earth");
        assert_eq!(profile.guiding_principle, "Act right when unseen.");
    }

    #[test]
    fn schema_violating_response_is_an_error_not_a_crash() {
        let missing_key = r#"{ "coreElement": { "name": "Earth", "description": "x" } }"#;
        assert!(matches!(
            parse_profile(missing_key),
            Err(ProfileError::Malformed(_))
        ));
        assert!(matches!(
            parse_profile("not json"),
            Err(ProfileError::Malformed(_))
        ));
    }

    #[test]
    fn profile_serializes_back_to_schema_keys() {
        let profile = WizardProfile {
            core_element: CoreElement {
                name: "Aether".to_string(),
                description: "d".to_string(),
            },
            guiding_principle: "g".to_string(),
            latent_power: "l".to_string(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("coreElement").is_some());
        assert!(value.get("guidingPrinciple").is_some());
        assert!(value.get("latentPower").is_some());
    }
}
