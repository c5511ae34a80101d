//! Natural language processing capability
//!
//! The atomizer consumes sentence segmentation, noun chunks and named
//! entities through the [`LanguageModel`] trait. The crate ships one
//! implementation, the rule-based English model in [`rules`].

pub mod chunker;
pub mod entities;
pub mod lexicon;
pub mod rules;
pub mod segmenter;
pub mod tagger;
pub mod tokenizer;

use crate::config::ModelConfig;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub use rules::RuleModel;

/// Name of the bundled rule-based English model
pub const DEFAULT_MODEL: &str = "en_rules";

/// The model could not be initialized
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("unknown model: {0} (available: en_rules)")]
    UnknownModel(String),
    #[error("failed to read lexicon {}: {source}", .path.display())]
    LexiconRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse lexicon {}: {source}", .path.display())]
    LexiconParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// The model could not process a given text
#[derive(Error, Debug)]
pub enum NlpError {
    #[error("text of length {len} exceeds maximum of {max}")]
    TextTooLong { len: usize, max: usize },
}

/// A segmented sentence. Offsets are byte positions in the analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A base noun phrase and its syntactic head
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounChunk {
    pub text: String,
    /// Surface text of the head token
    pub root: String,
    pub start: usize,
    pub end: usize,
    /// Index of the sentence containing the chunk
    pub sentence: usize,
}

/// Category assigned to a named entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Name,
    Date,
    Cardinal,
    Percent,
    Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
    pub sentence: usize,
}

/// Everything one analysis pass produces, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
    pub noun_chunks: Vec<NounChunk>,
    pub entities: Vec<Entity>,
}

/// A loaded NLP capability.
///
/// Implementations are expected to be deterministic: analyzing the same text
/// twice gives the same document.
pub trait LanguageModel {
    /// Identifier the model was loaded under
    fn name(&self) -> &str;

    /// Segment `text` and extract its noun chunks and named entities
    fn analyze(&self, text: &str) -> Result<Document, NlpError>;
}

impl<M: LanguageModel + ?Sized> LanguageModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn analyze(&self, text: &str) -> Result<Document, NlpError> {
        (**self).analyze(text)
    }
}

/// Load the model named in the configuration
pub fn load(config: &ModelConfig) -> Result<RuleModel, ModelError> {
    match config.name.as_str() {
        DEFAULT_MODEL | "en" => {
            let model = RuleModel::load(config)?;
            info!(model = %config.name, lexicon = ?config.lexicon, "model loaded");
            Ok(model)
        }
        other => Err(ModelError::UnknownModel(other.to_string())),
    }
}
