//! gyt-assistant — offline-first help assistant.
//!
//! Answers questions from a local keyword corpus and, when online, asks an
//! LLM for anything it does not know and remembers the answer.

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod llm;
pub mod logger;

pub use engine::AssistantEngine;
pub use error::AppError;
