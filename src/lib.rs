//! # Atomizer
//!
//! Turns raw text into a compact JSON summary: a title, an extractive
//! summary, keywords, an estimated reading duration and a few runtime
//! metrics.
//!
//! ## Features
//!
//! - **Injected NLP**: any [`nlp::LanguageModel`] can drive the summary; the
//!   crate ships a rule-based English model
//! - **Deterministic keywords**: noun phrase heads and named entities in
//!   first-seen (or frequency) order
//! - **Typed output**: [`SummaryResult`] with a published JSON Schema

pub mod atomizer;
pub mod config;
pub mod memory;
pub mod nlp;
pub mod summary;

pub use atomizer::{AtomizeError, TextAtomizer};
pub use config::Config;
pub use nlp::{LanguageModel, ModelError, NlpError, RuleModel};
pub use summary::{Metrics, SummaryResult};
