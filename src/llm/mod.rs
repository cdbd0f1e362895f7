//! Online text generation.
//!
//! `LlmProvider` is an enum over concrete backends; add a variant + module in
//! `providers/` for each new one. The assistant engine does not see the enum:
//! it depends on [`TextGenerator`], which [`PromptedProvider`] implements by
//! pairing a provider with the configured system instruction.

pub mod providers;

use std::future::Future;

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Generator seam ────────────────────────────────────────────────────────────

/// Anything that can answer a free-text question online.
pub trait TextGenerator: Send + Sync {
    fn generate_text(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
///
/// Enum dispatch avoids `dyn` trait objects. Adding a backend = new module +
/// new variant + new `complete` arm.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Dummy(providers::dummy::DummyProvider),
    OpenAiCompatible(providers::openai_compatible::OpenAiCompatibleProvider),
}

impl LlmProvider {
    /// Send `content` (with an optional system instruction) and return the reply text.
    pub async fn complete(&self, content: &str, system: Option<&str>) -> Result<String, ProviderError> {
        match self {
            LlmProvider::Dummy(p) => p.complete(content).await,
            LlmProvider::OpenAiCompatible(p) => p.complete(content, system).await,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::Dummy(_) => "dummy",
            LlmProvider::OpenAiCompatible(_) => "openai",
        }
    }
}

/// A provider bound to the assistant's system instruction.
#[derive(Debug, Clone)]
pub struct PromptedProvider {
    provider: LlmProvider,
    system_prompt: String,
}

impl PromptedProvider {
    pub fn new(provider: LlmProvider, system_prompt: impl Into<String>) -> Self {
        Self { provider, system_prompt: system_prompt.into() }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}

impl TextGenerator for PromptedProvider {
    async fn generate_text(&self, prompt: &str) -> Result<String, ProviderError> {
        let system = Some(self.system_prompt.as_str()).filter(|s| !s.trim().is_empty());
        self.provider.complete(prompt, system).await
    }
}
