//! Noun chunk detection
//!
//! Identifies base noun phrases using pattern matching on tags.
//! Pattern: (DET|POSS)? (ADJ|NUM)* (NOUN|PROPN)+, head = last noun.
//! A lone personal pronoun is a chunk headed by itself.

use super::tagger::PosTag;
use super::tokenizer::Token;
use super::NounChunk;

/// Extract noun chunks from tagged tokens, sentence by sentence
pub fn extract_chunks(text: &str, tokens: &[Token<'_>]) -> Vec<NounChunk> {
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < tokens.len() {
        let sentence = tokens[start].sentence;
        let end = tokens[start..]
            .iter()
            .position(|t| t.sentence != sentence)
            .map_or(tokens.len(), |offset| start + offset);
        extract_from_sentence(text, &tokens[start..end], &mut chunks);
        start = end;
    }

    chunks
}

fn extract_from_sentence(text: &str, tokens: &[Token<'_>], chunks: &mut Vec<NounChunk>) {
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].tag == PosTag::Pronoun {
            chunks.push(make_chunk(text, tokens, i, i + 1, i));
            i += 1;
            continue;
        }

        match match_noun_phrase(tokens, i) {
            Ok((end, head)) => {
                chunks.push(make_chunk(text, tokens, i, end, head));
                i = end;
            }
            Err(resume) => i = resume,
        }
    }
}

/// Try to match a noun phrase starting at `start`.
///
/// Returns (end, head) on a match, otherwise the index to resume from.
fn match_noun_phrase(tokens: &[Token<'_>], start: usize) -> Result<(usize, usize), usize> {
    let mut end = start;

    if matches!(tokens[end].tag, PosTag::Determiner | PosTag::Possessive) {
        end += 1;
    }

    while end < tokens.len() && tokens[end].tag.is_modifier() {
        end += 1;
    }

    let noun_start = end;
    while end < tokens.len() && tokens[end].tag.is_noun() {
        end += 1;
    }

    if end == noun_start {
        // Any start inside the modifier run fails at the same token
        return Err(noun_start.max(start + 1));
    }
    Ok((end, end - 1))
}

fn make_chunk(
    text: &str,
    tokens: &[Token<'_>],
    start: usize,
    end: usize,
    head: usize,
) -> NounChunk {
    let first = &tokens[start];
    let last = &tokens[end - 1];
    NounChunk {
        text: text[first.start..last.end].to_string(),
        root: tokens[head].text.to_string(),
        start: first.start,
        end: last.end,
        sentence: first.sentence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &'static str, tag: PosTag, start: usize, sentence: usize) -> Token<'static> {
        let mut token = Token::new(text, start, sentence);
        token.tag = tag;
        token
    }

    fn token_at(text: &str, start: usize, end: usize, tag: PosTag) -> Token<'_> {
        let mut token = Token::new(&text[start..end], start, 0);
        token.tag = tag;
        token
    }

    const FOX: &str = "The quick brown fox jumps over the lazy dog";

    fn make_tokens() -> Vec<Token<'static>> {
        let text = FOX;
        vec![
            token(&text[0..3], PosTag::Determiner, 0, 0),
            token(&text[4..9], PosTag::Adjective, 4, 0),
            token(&text[10..15], PosTag::Adjective, 10, 0),
            token(&text[16..19], PosTag::Noun, 16, 0),
            token(&text[20..25], PosTag::Verb, 20, 0),
            token(&text[26..30], PosTag::Preposition, 26, 0),
            token(&text[31..34], PosTag::Determiner, 31, 0),
            token(&text[35..39], PosTag::Adjective, 35, 0),
            token(&text[40..43], PosTag::Noun, 40, 0),
        ]
    }

    #[test]
    fn test_basic_chunk_extraction() {
        let tokens = make_tokens();
        let chunks = extract_chunks(FOX, &tokens);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].text, "The quick brown fox");
        assert_eq!(chunks[0].root, "fox");
        assert_eq!(chunks[1].text, "the lazy dog");
        assert_eq!(chunks[1].root, "dog");
    }

    #[test]
    fn test_proper_noun_run() {
        let text = "New York City";
        let tokens = vec![
            token(&text[0..3], PosTag::ProperNoun, 0, 0),
            token(&text[4..8], PosTag::ProperNoun, 4, 0),
            token(&text[9..13], PosTag::ProperNoun, 9, 0),
        ];
        let chunks = extract_chunks(text, &tokens);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "New York City");
        assert_eq!(chunks[0].root, "City");
    }

    #[test]
    fn test_pronoun_chunk() {
        let text = "it ran";
        let tokens = vec![
            token(&text[0..2], PosTag::Pronoun, 0, 0),
            token(&text[3..6], PosTag::Verb, 3, 0),
        ];
        let chunks = extract_chunks(text, &tokens);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].root, "it");
    }

    #[test]
    fn test_determiner_without_noun() {
        let text = "the big";
        let tokens = vec![
            token(&text[0..3], PosTag::Determiner, 0, 0),
            token(&text[4..7], PosTag::Adjective, 4, 0),
        ];
        assert!(extract_chunks(text, &tokens).is_empty());
    }

    #[test]
    fn test_modifier_run_then_pronoun() {
        let text = "the big red it";
        let tokens = vec![
            token(&text[0..3], PosTag::Determiner, 0, 0),
            token(&text[4..7], PosTag::Adjective, 4, 0),
            token(&text[8..11], PosTag::Adjective, 8, 0),
            token(&text[12..14], PosTag::Pronoun, 12, 0),
        ];
        let chunks = extract_chunks(text, &tokens);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "it");
    }

    #[test]
    fn test_long_numeral_run_without_noun() {
        let count = 100_000;
        let text = format!("{}cats", "7 ".repeat(count));
        let mut tokens: Vec<Token<'_>> = (0..count)
            .map(|i| token_at(&text, i * 2, i * 2 + 1, PosTag::Numeral))
            .collect();
        assert!(extract_chunks(&text, &tokens).is_empty());

        tokens.push(token_at(&text, count * 2, text.len(), PosTag::Noun));
        let chunks = extract_chunks(&text, &tokens);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start, 0);
        assert_eq!(chunks[0].root, "cats");
    }

    #[test]
    fn test_cross_sentence_boundary() {
        let text = "machine learning";
        let tokens = vec![
            token(&text[0..7], PosTag::Noun, 0, 0),
            token(&text[8..16], PosTag::Noun, 8, 1), // Different sentence
        ];
        let chunks = extract_chunks(text, &tokens);

        // Should not merge across sentences
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].sentence, 0);
        assert_eq!(chunks[1].sentence, 1);
    }
}
