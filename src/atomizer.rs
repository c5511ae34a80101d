//! Text atomization: one NLP pass, then the summary fields.

use std::collections::HashMap;
use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::config::{Config, KeywordOrder, SummaryConfig};
use crate::memory::{self, MemoryProbe, ProcessMemory};
use crate::nlp::{Document, LanguageModel, NlpError};
use crate::summary::{Metrics, SummaryResult};

const SECONDS_PER_MINUTE: f64 = 60.0;

#[derive(Error, Debug)]
pub enum AtomizeError {
    #[error("text analysis failed: {0}")]
    Analysis(#[from] NlpError),
}

/// Summarizes text with an injected language model.
///
/// The model is loaded once by the caller and reused for every call; the
/// output for a given input does not depend on earlier calls.
pub struct TextAtomizer<M, P = ProcessMemory> {
    model: M,
    probe: P,
    settings: SummaryConfig,
    extended_metrics: bool,
}

impl<M: LanguageModel> TextAtomizer<M, ProcessMemory> {
    pub fn new(model: M, config: &Config) -> Self {
        Self::with_probe(model, ProcessMemory::new(), config)
    }
}

impl<M: LanguageModel, P: MemoryProbe> TextAtomizer<M, P> {
    /// Use a specific memory probe instead of the process reader
    pub fn with_probe(model: M, probe: P, config: &Config) -> Self {
        Self {
            model,
            probe,
            settings: config.summary.clone(),
            extended_metrics: config.metrics.extended,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Summarize `content`.
    ///
    /// Input without any sentence yields the empty result: empty title and
    /// summary, no keywords, zero duration.
    pub fn summarize(&mut self, content: &str) -> Result<SummaryResult, AtomizeError> {
        let started = Instant::now();

        let before = self.probe.resident_bytes();
        let doc = self.model.analyze(content)?;
        let after = self.probe.resident_bytes();
        let memory_usage = memory::delta_mb(before, after);

        if doc.sentences.is_empty() {
            debug!("no sentences found, returning empty summary");
        }

        let title = doc
            .sentences
            .first()
            .map(|s| truncate_chars(&s.text, self.settings.title_max_chars))
            .unwrap_or_default();
        let summary = doc
            .sentences
            .iter()
            .take(self.settings.sentences)
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = select_keywords(
            &doc,
            self.settings.max_keywords,
            self.settings.keyword_order,
        );

        let words = word_count(content);
        let duration = reading_duration(
            words,
            self.settings.words_per_minute,
            self.settings.max_duration_secs,
        );

        let mut metrics = Metrics::new(memory_usage);
        if self.extended_metrics {
            metrics.word_count = Some(words);
            metrics.sentence_count = Some(doc.sentences.len());
            metrics.processing_time_ms = Some(started.elapsed().as_secs_f64() * 1000.0);
        }

        Ok(SummaryResult {
            title,
            summary,
            keywords,
            duration,
            metrics,
        })
    }
}

/// Number of whitespace-separated words
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Reading time in seconds at `words_per_minute`, capped at `max_secs`
pub fn reading_duration(words: usize, words_per_minute: f64, max_secs: f64) -> f64 {
    let seconds = words as f64 * SECONDS_PER_MINUTE / words_per_minute;
    seconds.min(max_secs)
}

/// Keep at most `max` characters, cutting on a char boundary
fn truncate_chars(text: &str, max: Option<usize>) -> String {
    match max.and_then(|max| text.char_indices().nth(max)) {
        Some((cut, _)) => text[..cut].trim_end().to_string(),
        None => text.to_string(),
    }
}

/// Deduplicated chunk heads and entity texts.
///
/// Mentions are ordered by position in the text. `FirstSeen` keeps that
/// order; `Frequency` ranks by mention count with ties in text order.
pub fn select_keywords(doc: &Document, max: usize, order: KeywordOrder) -> Vec<String> {
    let mut mentions: Vec<(usize, &str)> = doc
        .noun_chunks
        .iter()
        .map(|chunk| (chunk.start, chunk.root.as_str()))
        .chain(doc.entities.iter().map(|ent| (ent.start, ent.text.as_str())))
        .filter(|(_, text)| !text.trim().is_empty())
        .collect();
    mentions.sort_by_key(|&(offset, _)| offset);

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut candidates: Vec<(&str, usize)> = Vec::new();
    for (_, text) in mentions {
        match index.get(text) {
            Some(&idx) => candidates[idx].1 += 1,
            None => {
                index.insert(text, candidates.len());
                candidates.push((text, 1));
            }
        }
    }

    if order == KeywordOrder::Frequency {
        // Stable, so ties stay in first-seen order
        candidates.sort_by(|a, b| b.1.cmp(&a.1));
    }

    candidates
        .into_iter()
        .take(max)
        .map(|(text, _)| text.to_string())
        .collect()
}
