//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory
//! (or an explicit path), then applies `GYT_WORK_DIR` and `GYT_LOG_LEVEL`
//! env overrides. `LLM_API_KEY` is only ever read from the environment.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::AppError;
use crate::logger;

/// Default persistence identifier for the knowledge corpus.
pub const DEFAULT_KNOWLEDGE_KEY: &str = "gyt_assistant_knowledge";

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Which durable slot backend holds the knowledge corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// One JSON file per key under `work_dir`.
    File,
    /// Process memory only; nothing survives a restart.
    Tmp,
}

/// Knowledge store configuration (`[knowledge]`).
#[derive(Debug, Clone)]
pub struct KnowledgeConfig {
    pub slot: SlotKind,
    /// Persistence key the corpus is stored under.
    pub key: String,
}

/// Fixed user-facing reply texts (`[replies]`).
#[derive(Debug, Clone)]
pub struct Replies {
    /// Printed once when a conversation opens.
    pub greeting: String,
    /// Offline and nothing in the corpus matched.
    pub not_yet_known: String,
    /// The online collaborator failed.
    pub online_failure: String,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            not_yet_known: default_not_yet_known(),
            online_failure: default_online_failure(),
        }
    }
}

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (`"dummy"`, `"openai"`).
    /// Maps to `default` in `[llm]` TOML.
    pub provider: String,
    /// System instruction sent with every online question.
    pub system_prompt: String,
    pub openai: OpenAiConfig,
}

/// Fully-resolved assistant configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    /// Working directory for persistent data (already expanded, no `~`).
    pub work_dir: PathBuf,
    pub log_level: String,
    /// Initial connectivity flag handed to the engine by the console.
    pub start_online: bool,
    pub knowledge: KnowledgeConfig,
    pub replies: Replies,
    pub llm: LlmConfig,
    /// API key from `LLM_API_KEY` env var. Never sourced from TOML.
    pub llm_api_key: Option<String>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    assistant: RawAssistant,
    #[serde(default)]
    knowledge: RawKnowledge,
    #[serde(default)]
    replies: RawReplies,
    #[serde(default)]
    llm: RawLlm,
}

#[derive(Deserialize)]
struct RawAssistant {
    name: String,
    work_dir: String,
    log_level: String,
    #[serde(default = "default_true")]
    start_online: bool,
}

#[derive(Deserialize)]
struct RawKnowledge {
    #[serde(default = "default_slot")]
    store: String,
    #[serde(default = "default_knowledge_key")]
    key: String,
}

impl Default for RawKnowledge {
    fn default() -> Self {
        Self { store: default_slot(), key: default_knowledge_key() }
    }
}

#[derive(Deserialize)]
struct RawReplies {
    #[serde(default = "default_greeting")]
    greeting: String,
    #[serde(default = "default_not_yet_known")]
    not_yet_known: String,
    #[serde(default = "default_online_failure")]
    online_failure: String,
}

impl Default for RawReplies {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            not_yet_known: default_not_yet_known(),
            online_failure: default_online_failure(),
        }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default = "default_system_prompt")]
    system_prompt: String,
    #[serde(default)]
    openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            system_prompt: default_system_prompt(),
            openai: RawOpenAiConfig::default(),
        }
    }
}

#[derive(Deserialize)]
struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_openai_model")]
    model: String,
    #[serde(default = "default_openai_temperature")]
    temperature: f32,
    #[serde(default = "default_openai_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            temperature: default_openai_temperature(),
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

fn default_true() -> bool { true }
fn default_slot() -> String { "file".to_string() }
fn default_knowledge_key() -> String { DEFAULT_KNOWLEDGE_KEY.to_string() }
fn default_llm_provider() -> String { "dummy".to_string() }
fn default_openai_api_base_url() -> String { "https://api.openai.com/v1/chat/completions".to_string() }
fn default_openai_model() -> String { "gpt-4o-mini".to_string() }
fn default_openai_temperature() -> f32 { 0.2 }
fn default_openai_timeout_seconds() -> u64 { 60 }

fn default_greeting() -> String {
    "Olá! Como posso ajudar você a usar o Gerador YouTube hoje?".to_string()
}

fn default_not_yet_known() -> String {
    "Eu ainda não tenho a resposta para isso. Pergunte-me novamente quando você estiver online, e eu aprenderei!".to_string()
}

fn default_online_failure() -> String {
    "Não consegui encontrar uma resposta online. Tente novamente mais tarde.".to_string()
}

fn default_system_prompt() -> String {
    "Você é um assistente prestativo para um aplicativo de geração de mídia chamado 'Gerador YouTube'. Responda de forma concisa e amigável.".to_string()
}

/// Load config from `path` (or `config/default.toml`), then apply env-var overrides.
pub fn load(path: Option<&str>) -> Result<Config, AppError> {
    let work_dir_override = env::var("GYT_WORK_DIR").ok();
    let log_level_override = env::var("GYT_LOG_LEVEL").ok();
    let mut config = load_from(
        Path::new(path.unwrap_or(DEFAULT_CONFIG_PATH)),
        work_dir_override.as_deref(),
        log_level_override.as_deref(),
    )?;
    config.llm_api_key = env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty());
    Ok(config)
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    work_dir_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let a = parsed.assistant;
    let work_dir = expand_home(work_dir_override.unwrap_or(&a.work_dir));
    let log_level = log_level_override.unwrap_or(&a.log_level).trim().to_lowercase();
    logger::parse_level(&log_level).map_err(|_| {
        AppError::Config(format!("invalid log_level '{log_level}' (expected error|warn|info|debug|trace)"))
    })?;

    let slot = match parsed.knowledge.store.as_str() {
        "file" => SlotKind::File,
        "tmp" => SlotKind::Tmp,
        other => {
            return Err(AppError::Config(format!(
                "unknown knowledge store '{other}' (expected \"file\" or \"tmp\")"
            )));
        }
    };
    if parsed.knowledge.key.trim().is_empty() {
        return Err(AppError::Config("knowledge.key must not be empty".into()));
    }

    Ok(Config {
        name: a.name,
        work_dir,
        log_level,
        start_online: a.start_online,
        knowledge: KnowledgeConfig { slot, key: parsed.knowledge.key },
        replies: Replies {
            greeting: parsed.replies.greeting,
            not_yet_known: parsed.replies.not_yet_known,
            online_failure: parsed.replies.online_failure,
        },
        llm: LlmConfig {
            provider: parsed.llm.provider,
            system_prompt: parsed.llm.system_prompt,
            openai: OpenAiConfig {
                api_base_url: parsed.llm.openai.api_base_url,
                model: parsed.llm.openai.model,
                temperature: parsed.llm.openai.temperature,
                timeout_seconds: parsed.llm.openai.timeout_seconds,
            },
        },
        llm_api_key: None,
    })
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
[assistant]
name = "test-assistant"
work_dir = "~/.gyt-assistant"
log_level = "info"
"#;

    fn write_toml(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn parse_minimal_config_uses_defaults() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), None, None).unwrap();
        assert_eq!(cfg.name, "test-assistant");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.start_online);
        assert_eq!(cfg.knowledge.slot, SlotKind::File);
        assert_eq!(cfg.knowledge.key, DEFAULT_KNOWLEDGE_KEY);
        assert_eq!(cfg.llm.provider, "dummy");
        assert!(cfg.replies.not_yet_known.contains("online"));
        assert_eq!(cfg.replies.greeting, default_greeting());
        assert!(cfg.llm_api_key.is_none());
    }

    #[test]
    fn parse_full_config() {
        let f = write_toml(
            r#"
[assistant]
name = "full"
work_dir = "/srv/gyt"
log_level = "debug"
start_online = false

[knowledge]
store = "tmp"
key = "custom_key"

[replies]
greeting = "hi"
not_yet_known = "later"
online_failure = "oops"

[llm]
default = "openai"
system_prompt = "be brief"

[llm.openai]
model = "local-model"
timeout_seconds = 5
"#,
        );
        let cfg = load_from(f.path(), None, None).unwrap();
        assert!(!cfg.start_online);
        assert_eq!(cfg.knowledge.slot, SlotKind::Tmp);
        assert_eq!(cfg.knowledge.key, "custom_key");
        assert_eq!(cfg.replies.greeting, "hi");
        assert_eq!(cfg.replies.not_yet_known, "later");
        assert_eq!(cfg.replies.online_failure, "oops");
        assert_eq!(cfg.llm.provider, "openai");
        assert_eq!(cfg.llm.system_prompt, "be brief");
        assert_eq!(cfg.llm.openai.model, "local-model");
        assert_eq!(cfg.llm.openai.timeout_seconds, 5);
        assert_eq!(cfg.llm.openai.api_base_url, default_openai_api_base_url());
    }

    #[test]
    fn unknown_store_kind_errors() {
        let f = write_toml(&format!("{MINIMAL_TOML}\n[knowledge]\nstore = \"redis\"\n"));
        let msg = load_from(f.path(), None, None).unwrap_err().to_string();
        assert!(msg.contains("redis"));
    }

    #[test]
    fn empty_knowledge_key_errors() {
        let f = write_toml(&format!("{MINIMAL_TOML}\n[knowledge]\nkey = \"  \"\n"));
        assert!(load_from(f.path(), None, None).is_err());
    }

    #[test]
    fn tilde_expands_to_home() {
        let home = dirs::home_dir().expect("home dir must exist in test env");
        let expanded = expand_home("~/.gyt-assistant");
        assert!(expanded.starts_with(&home));
        assert!(expanded.ends_with(".gyt-assistant"));
    }

    #[test]
    fn absolute_path_unchanged() {
        assert_eq!(expand_home("/absolute/path"), PathBuf::from("/absolute/path"));
    }

    #[test]
    fn missing_file_errors() {
        let result = load_from(Path::new("/nonexistent/config.toml"), None, None);
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("config error"));
    }

    #[test]
    fn env_overrides_apply() {
        let f = write_toml(MINIMAL_TOML);
        let cfg = load_from(f.path(), Some("/tmp/gyt-override"), Some("debug")).unwrap();
        assert_eq!(cfg.work_dir, PathBuf::from("/tmp/gyt-override"));
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn invalid_log_level_errors() {
        let f = write_toml(&MINIMAL_TOML.replace("\"info\"", "\"verbose\""));
        let msg = load_from(f.path(), None, None).unwrap_err().to_string();
        assert!(msg.starts_with("config error"));
        assert!(msg.contains("verbose"));
    }

    #[test]
    fn invalid_log_level_override_errors() {
        let f = write_toml(MINIMAL_TOML);
        assert!(load_from(f.path(), None, Some("loud")).is_err());
        let cfg = load_from(f.path(), None, Some(" WARN ")).unwrap();
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn shipped_default_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_PATH);
        let cfg = load_from(&path, None, None).unwrap();
        assert_eq!(cfg.llm.provider, "dummy");
        assert!(cfg.replies.greeting.starts_with("Olá!"));
    }
}
