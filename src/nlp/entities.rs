//! Rule-based named entity recognition
//!
//! Gazetteer and pattern rules over tagged tokens, applied in priority order
//! so each token belongs to at most one entity:
//!
//! 1. Money: currency symbol followed by a numeral
//! 2. Date: month (with optional day and year), weekday, relative day, year
//! 3. Percent: numeral followed by `%` or "percent"
//! 4. Cardinal: remaining numerals
//! 5. Name: maximal runs of proper nouns

use lazy_static::lazy_static;
use regex::Regex;

use super::lexicon;
use super::tagger::PosTag;
use super::tokenizer::Token;
use super::{Entity, EntityLabel};

lazy_static! {
    static ref YEAR: Regex = Regex::new(r"^(1[0-9]{3}|20[0-9]{2})$").unwrap();
    static ref DAY: Regex = Regex::new(r"^([1-9]|[12][0-9]|3[01])(st|nd|rd|th)?$").unwrap();
}

const CURRENCY: &[&str] = &["$", "€", "£", "¥"];

/// Extract named entities from tagged tokens
pub fn extract_entities(text: &str, tokens: &[Token<'_>]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let matched = match_money(tokens, i)
            .or_else(|| match_date(tokens, i))
            .or_else(|| match_number(tokens, i))
            .or_else(|| match_name(tokens, i));

        match matched {
            Some((end, label)) => {
                let first = &tokens[i];
                let last = &tokens[end - 1];
                entities.push(Entity {
                    text: text[first.start..last.end].to_string(),
                    label,
                    start: first.start,
                    end: last.end,
                    sentence: first.sentence,
                });
                i = end;
            }
            None => i += 1,
        }
    }

    entities
}

fn same_sentence(tokens: &[Token<'_>], a: usize, b: usize) -> bool {
    b < tokens.len() && tokens[a].sentence == tokens[b].sentence
}

/// Consume a run of numerals starting at `i`; returns the end index
fn numeral_run(tokens: &[Token<'_>], i: usize) -> usize {
    let mut end = i;
    while same_sentence(tokens, i, end) && tokens[end].tag == PosTag::Numeral {
        end += 1;
    }
    end
}

fn match_money(tokens: &[Token<'_>], i: usize) -> Option<(usize, EntityLabel)> {
    if !CURRENCY.contains(&tokens[i].text) {
        return None;
    }
    let end = numeral_run(tokens, i + 1);
    if end == i + 1 {
        return None;
    }
    Some((end, EntityLabel::Money))
}

fn match_date(tokens: &[Token<'_>], i: usize) -> Option<(usize, EntityLabel)> {
    let token = &tokens[i];
    let lower = token.text.to_lowercase();

    if lexicon::is_relative_day(&lower) {
        return Some((i + 1, EntityLabel::Date));
    }
    if token.is_capitalized() && lexicon::is_weekday(&lower) {
        return Some((i + 1, EntityLabel::Date));
    }
    if token.tag == PosTag::Numeral && YEAR.is_match(token.text) {
        return Some((i + 1, EntityLabel::Date));
    }
    if !(token.is_capitalized() && lexicon::is_month(&lower)) {
        return None;
    }

    // Month [day] [,] [year]
    let mut end = i + 1;
    let mut qualified = false;
    if same_sentence(tokens, i, end) && DAY.is_match(tokens[end].text) {
        end += 1;
        qualified = true;
    }
    if same_sentence(tokens, i, end) && tokens[end].text == "," {
        if same_sentence(tokens, i, end + 1) && YEAR.is_match(tokens[end + 1].text) && qualified {
            end += 2;
        }
    } else if same_sentence(tokens, i, end) && YEAR.is_match(tokens[end].text) {
        end += 1;
        qualified = true;
    }

    // A bare "May" or "March" is more often a modal or a verb
    if !qualified && matches!(lower.as_str(), "may" | "march") {
        return None;
    }
    Some((end, EntityLabel::Date))
}

fn match_number(tokens: &[Token<'_>], i: usize) -> Option<(usize, EntityLabel)> {
    if tokens[i].tag != PosTag::Numeral {
        return None;
    }
    let end = numeral_run(tokens, i);
    if same_sentence(tokens, i, end) {
        let next = tokens[end].text;
        if next == "%" || next.eq_ignore_ascii_case("percent") {
            return Some((end + 1, EntityLabel::Percent));
        }
    }
    Some((end, EntityLabel::Cardinal))
}

fn match_name(tokens: &[Token<'_>], i: usize) -> Option<(usize, EntityLabel)> {
    if tokens[i].tag != PosTag::ProperNoun {
        return None;
    }
    let mut end = i;
    while same_sentence(tokens, i, end) && tokens[end].tag == PosTag::ProperNoun {
        end += 1;
    }
    Some((end, EntityLabel::Name))
}
