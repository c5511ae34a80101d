//! The bundled rule-based English model.

use tracing::debug;

use super::chunker::extract_chunks;
use super::entities::extract_entities;
use super::lexicon::Lexicon;
use super::segmenter::SentenceSegmenter;
use super::tagger::tag_tokens;
use super::tokenizer::tokenize;
use super::{Document, LanguageModel, ModelError, NlpError, DEFAULT_MODEL};
use crate::config::ModelConfig;

/// Segmenter, tagger, chunker and entity rules over one lexicon
#[derive(Debug, Clone)]
pub struct RuleModel {
    lexicon: Lexicon,
    max_length: usize,
}

impl RuleModel {
    pub fn new(lexicon: Lexicon, max_length: usize) -> Self {
        Self {
            lexicon,
            max_length,
        }
    }

    /// Build the model from configuration, reading the lexicon extension if any
    pub fn load(config: &ModelConfig) -> Result<Self, ModelError> {
        let lexicon = match &config.lexicon {
            Some(path) => Lexicon::with_extension_file(path)?,
            None => Lexicon::builtin(),
        };
        Ok(Self::new(lexicon, config.max_length))
    }
}

impl Default for RuleModel {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), ModelConfig::default().max_length)
    }
}

impl LanguageModel for RuleModel {
    fn name(&self) -> &str {
        DEFAULT_MODEL
    }

    fn analyze(&self, text: &str) -> Result<Document, NlpError> {
        if text.len() > self.max_length {
            return Err(NlpError::TextTooLong {
                len: text.len(),
                max: self.max_length,
            });
        }

        let sentences = SentenceSegmenter::new(&self.lexicon).segment(text);
        let mut tokens = tokenize(text, &sentences);
        tag_tokens(&mut tokens, &self.lexicon);

        let noun_chunks = extract_chunks(text, &tokens);
        let entities = extract_entities(text, &tokens);
        debug!(
            sentences = sentences.len(),
            tokens = tokens.len(),
            noun_chunks = noun_chunks.len(),
            entities = entities.len(),
            "text analyzed"
        );

        Ok(Document {
            sentences,
            noun_chunks,
            entities,
        })
    }
}
