//! Coarse part-of-speech tagging
//!
//! Closed-class words are looked up; open-class words fall back on the
//! lexicon, capitalization and suffix heuristics. Tagging mutates the token
//! stream in place.

use std::collections::HashSet;

use super::lexicon::{self, Lexicon};
use super::tokenizer::Token;

/// Coarse part-of-speech tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Determiner,
    /// Possessive determiner ("my", "their")
    Possessive,
    Pronoun,
    Adjective,
    Noun,
    ProperNoun,
    Verb,
    Auxiliary,
    Adverb,
    Preposition,
    Conjunction,
    Numeral,
    Punctuation,
    /// Not tagged yet
    Other,
}

impl PosTag {
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Tags that can sit between a determiner and the head noun
    pub fn is_modifier(&self) -> bool {
        matches!(self, PosTag::Adjective | PosTag::Numeral)
    }
}

fn is_numeric(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// For each token, whether it is the first word of its sentence
fn sentence_initial_flags(tokens: &[Token<'_>]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(tokens.len());
    let mut sentence = None;
    let mut seen_word = false;
    for token in tokens {
        if sentence != Some(token.sentence) {
            sentence = Some(token.sentence);
            seen_word = false;
        }
        flags.push(token.is_word() && !seen_word);
        seen_word |= token.is_word();
    }
    flags
}

/// Tag every token in place
pub fn tag_tokens(tokens: &mut [Token<'_>], lexicon: &Lexicon) {
    let initial = sentence_initial_flags(tokens);

    // Words seen capitalized away from a sentence start
    let mid_caps: HashSet<String> = tokens
        .iter()
        .zip(&initial)
        .filter(|(t, first)| {
            t.is_word()
                && t.is_capitalized()
                && !**first
                && !lexicon::is_function_word(&t.text.to_lowercase())
        })
        .map(|(t, _)| t.text.to_string())
        .collect();

    for i in 0..tokens.len() {
        let prev = if i > 0 && tokens[i - 1].sentence == tokens[i].sentence {
            Some(tokens[i - 1].tag)
        } else {
            None
        };
        let next_capitalized = tokens.get(i + 1).is_some_and(|n| {
            n.sentence == tokens[i].sentence && n.is_word() && n.is_capitalized()
        });
        tokens[i].tag = classify(
            &tokens[i],
            prev,
            initial[i],
            next_capitalized,
            &mid_caps,
            lexicon,
        );
    }

    // "her" and "his" stand alone as pronouns unless a noun phrase follows
    for i in 0..tokens.len() {
        if tokens[i].tag != PosTag::Possessive {
            continue;
        }
        let followed = tokens.get(i + 1).is_some_and(|n| {
            n.sentence == tokens[i].sentence && (n.tag.is_noun() || n.tag.is_modifier())
        });
        if !followed {
            tokens[i].tag = PosTag::Pronoun;
        }
    }
}

fn classify(
    token: &Token<'_>,
    prev: Option<PosTag>,
    initial: bool,
    next_capitalized: bool,
    mid_caps: &HashSet<String>,
    lexicon: &Lexicon,
) -> PosTag {
    let text = token.text;
    if !token.is_word() {
        return PosTag::Punctuation;
    }
    if is_numeric(text) {
        return PosTag::Numeral;
    }

    let lower = text.to_lowercase();
    let capitalized = token.is_capitalized();

    // "May 2024" is a month, "may" is an auxiliary
    if capitalized && !initial && lexicon::is_month(&lower) {
        return PosTag::ProperNoun;
    }
    if lexicon::is_number_word(&lower) {
        return PosTag::Numeral;
    }
    if lexicon::is_determiner(&lower) {
        return PosTag::Determiner;
    }
    if lexicon::is_possessive(&lower) {
        return PosTag::Possessive;
    }
    if lexicon::is_pronoun(&lower) {
        return PosTag::Pronoun;
    }
    if lexicon::is_auxiliary(&lower) {
        return PosTag::Auxiliary;
    }
    if lexicon::is_preposition(&lower) {
        return PosTag::Preposition;
    }
    if lexicon::is_conjunction(&lower) {
        return PosTag::Conjunction;
    }

    if capitalized {
        if !initial || mid_caps.contains(text) {
            return PosTag::ProperNoun;
        }
        // "New York", but not "Then Alice"
        if next_capitalized && !lexicon.is_adverb(&lower) && !lexicon.is_verb(&lower) {
            return PosTag::ProperNoun;
        }
    }

    if lexicon.is_noun(&lower) {
        return PosTag::Noun;
    }
    if lexicon.is_verb(&lower) {
        return PosTag::Verb;
    }
    if lexicon.is_adverb(&lower) {
        return PosTag::Adverb;
    }
    if lexicon.is_adjective(&lower) {
        return PosTag::Adjective;
    }

    let len = lower.chars().count();
    if len > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if len > 4 && lower.ends_with("ed") {
        return PosTag::Verb;
    }
    if len > 5 && lower.ends_with("ing") {
        return match prev {
            Some(
                PosTag::Determiner | PosTag::Possessive | PosTag::Adjective | PosTag::Preposition,
            ) => PosTag::Noun,
            _ => PosTag::Verb,
        };
    }
    // Third person singular after "he", "she", "it"
    if prev == Some(PosTag::Pronoun) && lower.ends_with('s') && !lower.ends_with("ss") {
        return PosTag::Verb;
    }

    PosTag::Noun
}
