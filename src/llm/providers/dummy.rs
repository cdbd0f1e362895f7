//! Placeholder provider for installs without an online backend.
//!
//! Every call fails, so a keyless install answers online misses with the
//! failure reply and never learns anything from them.

use crate::llm::ProviderError;

#[derive(Debug, Clone)]
pub struct DummyProvider;

impl DummyProvider {
    pub async fn complete(&self, _content: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Request("no online provider configured".into()))
    }
}
