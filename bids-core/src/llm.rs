use crate::diagnostics::TextGenerator;
use futures::executor::block_on;
use rig::client::{completion::CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::openai;
use serde::{Deserialize, Serialize};
use std::future::IntoFuture;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub provider: String,
    pub model: String,
    pub api_key_env: String,
    pub temperature: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: "openai".into(),
            model: "gpt-4o-mini".into(),
            api_key_env: "OPENAI_API_KEY".into(),
            temperature: 0.2,
        }
    }
}

impl GenerationConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("LLM_PROVIDER").unwrap_or(defaults.provider),
            model: std::env::var("LLM_MODEL").unwrap_or(defaults.model),
            api_key_env: std::env::var("LLM_API_KEY_ENV").unwrap_or(defaults.api_key_env),
            temperature: std::env::var("LLM_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(defaults.temperature),
        }
    }

    /// Whether the required secret is present in the process environment.
    pub fn key_present(&self) -> bool {
        std::env::var(&self.api_key_env).is_ok()
    }
}

pub struct OpenAiGenerator {
    config: GenerationConfig,
}

impl OpenAiGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }
}

impl TextGenerator for OpenAiGenerator {
    fn generate(&self, prompt: &str) -> Result<String, String> {
        run_prompt(&self.config, "You are a connectivity probe.", prompt)
    }
}

fn run_prompt(config: &GenerationConfig, preamble: &str, prompt: &str) -> Result<String, String> {
    if config.provider.to_lowercase() != "openai" {
        return Err(format!("unsupported llm provider '{}'", config.provider));
    }

    let client = if config.api_key_env == "OPENAI_API_KEY" {
        openai::Client::from_env()
    } else {
        let api_key = std::env::var(&config.api_key_env)
            .map_err(|_| format!("missing env var {}", config.api_key_env))?;
        openai::Client::new(&api_key).map_err(|e| format!("openai client error: {e}"))?
    };

    let agent = client
        .agent(&config.model)
        .preamble(preamble)
        .temperature(config.temperature)
        .build();

    let fut = agent.prompt(prompt).into_future();
    let out: Result<String, _> = block_on(fut);
    out.map_err(|e| format!("llm prompt failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_openai_probe() {
        let config = GenerationConfig::default();
        assert_eq!(config.provider, "openai");
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn rejects_unsupported_provider() {
        let config = GenerationConfig {
            provider: "anthropic".into(),
            ..GenerationConfig::default()
        };
        let err = run_prompt(&config, "probe", "hello").expect_err("provider check");
        assert!(err.contains("unsupported llm provider"));
    }
}
