//! Sentence segmentation
//!
//! Splits running text at terminal punctuation (`.`, `!`, `?`) followed by
//! whitespace, and at paragraph breaks. A lone period does not end a
//! sentence after an abbreviation, after a single-letter initial, or when the
//! next word starts in lowercase.

use super::lexicon::Lexicon;
use super::Sentence;

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

/// Closing quotes and brackets that belong to the sentence they follow
fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '»')
}

/// Sentence splitter bound to a lexicon's abbreviation list
#[derive(Debug, Clone, Copy)]
pub struct SentenceSegmenter<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentenceSegmenter<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Segment `text` into trimmed, non-empty sentences in input order
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |idx: usize| chars.get(idx).map_or(text.len(), |&(pos, _)| pos);

        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, c) = chars[i];

            if c == '\n' {
                // A blank line closes the current sentence
                let mut j = i + 1;
                while j < chars.len() && chars[j].1.is_whitespace() && chars[j].1 != '\n' {
                    j += 1;
                }
                if j < chars.len() && chars[j].1 == '\n' {
                    push_sentence(text, start, pos, &mut sentences);
                    start = pos;
                    i = j + 1;
                    continue;
                }
                i += 1;
                continue;
            }

            if is_terminator(c) {
                let mut j = i;
                while j < chars.len() && is_terminator(chars[j].1) {
                    j += 1;
                }
                let only_periods = chars[i..j].iter().all(|&(_, c)| c == '.');
                while j < chars.len() && is_closer(chars[j].1) {
                    j += 1;
                }

                let at_boundary = j == chars.len() || chars[j].1.is_whitespace();
                if at_boundary && !(only_periods && self.continues(text, start, pos, &chars[j..]))
                {
                    let end = byte_at(j);
                    push_sentence(text, start, end, &mut sentences);
                    start = end;
                }
                i = j;
                continue;
            }

            i += 1;
        }

        push_sentence(text, start, text.len(), &mut sentences);
        sentences
    }

    /// Whether a period at `period` continues the sentence started at `start`
    fn continues(&self, text: &str, start: usize, period: usize, rest: &[(usize, char)]) -> bool {
        let before = &text[start..period];
        let word = before
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());

        if !word.is_empty() {
            let lower = word.to_lowercase();
            if self.lexicon.is_abbreviation(&lower) {
                return true;
            }
            let mut letters = word.chars();
            if let (Some(first), None) = (letters.next(), letters.next()) {
                // "I." usually ends a sentence; other capitals are initials
                if first.is_uppercase() && first != 'I' {
                    return true;
                }
            }
        }

        rest.iter()
            .map(|&(_, c)| c)
            .find(|c| !c.is_whitespace())
            .is_some_and(|c| c.is_lowercase())
    }
}

fn push_sentence(text: &str, start: usize, end: usize, sentences: &mut Vec<Sentence>) {
    let span = &text[start..end];
    let trimmed = span.trim();
    if trimmed.is_empty() {
        return;
    }
    let leading = span.len() - span.trim_start().len();
    let start = start + leading;
    sentences.push(Sentence {
        text: trimmed.to_string(),
        start,
        end: start + trimmed.len(),
    });
}
