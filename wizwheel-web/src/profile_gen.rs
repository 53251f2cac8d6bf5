//! Fetch-backed implementation of the profile generator capability.
//!
//! The request carries the assembled prompt plus the response JSON schema;
//! the endpoint is expected to answer with a body matching that schema. No
//! retries: a failure surfaces to the form, which stays resubmittable.

use wasm_bindgen_futures::JsFuture;
use wizwheel_game::profile::{GenerateRequest, ProfileError, ProfileGenerator, WizardProfile};

/// Generation endpoint, proxied server-side so no credential ships with the
/// client bundle.
pub const GENERATE_ENDPOINT: &str = "api/profile";

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// POSTs generation requests to [`GENERATE_ENDPOINT`].
#[derive(Debug, Clone)]
pub struct FetchProfileGenerator {
    endpoint: String,
}

impl Default for FetchProfileGenerator {
    fn default() -> Self {
        Self {
            endpoint: GENERATE_ENDPOINT.to_string(),
        }
    }
}

impl FetchProfileGenerator {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl ProfileGenerator for FetchProfileGenerator {
    type Error = GenerateError;

    async fn generate(&self, request: GenerateRequest) -> Result<WizardProfile, Self::Error> {
        let body = serde_json::to_string(&request).map_err(ProfileError::from)?;

        let response = crate::dom::post_json(&self.endpoint, &body)
            .await
            .map_err(|err| GenerateError::Network(crate::dom::js_error_message(&err)))?;
        if !response.ok() {
            return Err(GenerateError::Network(format!(
                "generation endpoint answered {}",
                response.status()
            )));
        }

        let text_promise = response
            .text()
            .map_err(|err| GenerateError::Network(crate::dom::js_error_message(&err)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|err| GenerateError::Network(crate::dom::js_error_message(&err)))?
            .as_string()
            .ok_or_else(|| GenerateError::Network("non-text response body".to_string()))?;

        Ok(wizwheel_game::profile::parse_profile(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_generator_targets_the_proxy_endpoint() {
        let generator = FetchProfileGenerator::default();
        assert_eq!(generator.endpoint, GENERATE_ENDPOINT);
        let custom = FetchProfileGenerator::new("https://example.test/gen");
        assert_eq!(custom.endpoint, "https://example.test/gen");
    }
}
