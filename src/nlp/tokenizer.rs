//! Word tokenization within sentences
//!
//! Words are alphanumeric runs that may carry internal apostrophes, hyphens,
//! periods (`U.S`, `3.14`) or digit group commas (`1,000`). English clitics
//! (`'s`, `'re`, `'ve`, `'ll`, `'d`, `'m`) are split off into their own token.
//! Every other non-whitespace character is a single punctuation token.

use super::tagger::PosTag;
use super::Sentence;

/// A token borrowed from the analyzed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offsets into the analyzed text
    pub start: usize,
    pub end: usize,
    /// Index of the containing sentence
    pub sentence: usize,
    pub tag: PosTag,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, start: usize, sentence: usize) -> Self {
        Self {
            text,
            start,
            end: start + text.len(),
            sentence,
            tag: PosTag::Other,
        }
    }

    pub fn is_word(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_alphanumeric)
    }

    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

fn is_joiner(c: char) -> bool {
    matches!(c, '\'' | '’' | '-' | '.' | ',')
}

/// Tokenize every sentence of `text`, keeping sentence indices
pub fn tokenize<'a>(text: &'a str, sentences: &[Sentence]) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    for (idx, sentence) in sentences.iter().enumerate() {
        tokenize_span(text, sentence.start, sentence.end, idx, &mut tokens);
    }
    tokens
}

fn tokenize_span<'a>(
    text: &'a str,
    span_start: usize,
    span_end: usize,
    sentence: usize,
    tokens: &mut Vec<Token<'a>>,
) {
    let span = &text[span_start..span_end];
    let chars: Vec<(usize, char)> = span.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if !c.is_alphanumeric() {
            let next = detached_clitic_end(&chars, i, span).unwrap_or(i + 1);
            let start = span_start + pos;
            let end = span_start + chars.get(next).map_or(span.len(), |&(p, _)| p);
            tokens.push(Token::new(&text[start..end], start, sentence));
            i = next;
            continue;
        }

        let mut j = i + 1;
        while j < chars.len() {
            let c = chars[j].1;
            if c.is_alphanumeric() {
                j += 1;
                continue;
            }
            let next_is_alnum = chars.get(j + 1).is_some_and(|&(_, n)| n.is_alphanumeric());
            let joins = match c {
                // Only digit groups, not lists like "cats,dogs"
                ',' => {
                    chars[j - 1].1.is_ascii_digit()
                        && chars.get(j + 1).is_some_and(|&(_, n)| n.is_ascii_digit())
                }
                _ => is_joiner(c) && next_is_alnum,
            };
            if !joins {
                break;
            }
            j += 1;
        }

        let end = chars.get(j).map_or(span.len(), |&(p, _)| p);
        push_word(text, span_start + pos, span_start + end, sentence, tokens);
        i = j;
    }
}

/// An apostrophe followed by a bare clitic ("’s" after a stray quote) stays
/// one token; returns the char index past the clitic
fn detached_clitic_end(chars: &[(usize, char)], i: usize, span: &str) -> Option<usize> {
    if !matches!(chars[i].1, '\'' | '’') {
        return None;
    }
    let mut j = i + 1;
    while j < chars.len() && chars[j].1.is_alphanumeric() {
        j += 1;
    }
    let from = chars.get(i + 1)?.0;
    let to = chars.get(j).map_or(span.len(), |&(p, _)| p);
    let suffix = span[from..to].to_lowercase();
    CLITICS
        .iter()
        .any(|clitic| clitic[1..] == suffix)
        .then_some(j)
}

/// Push a word, splitting off a trailing clitic
fn push_word<'a>(
    text: &'a str,
    start: usize,
    end: usize,
    sentence: usize,
    tokens: &mut Vec<Token<'a>>,
) {
    let word = &text[start..end];
    let normalized = word.replace('’', "'").to_lowercase();

    for clitic in CLITICS {
        if normalized.len() > clitic.len() && normalized.ends_with(clitic) {
            // The curly apostrophe is three bytes, the straight one is one
            let apostrophe = word
                .char_indices()
                .rev()
                .find(|&(_, c)| c == '\'' || c == '’')
                .map(|(idx, _)| idx);
            if let Some(split) = apostrophe {
                if split > 0 {
                    tokens.push(Token::new(&word[..split], start, sentence));
                    tokens.push(Token::new(&word[split..], start + split, sentence));
                    return;
                }
            }
        }
    }

    tokens.push(Token::new(word, start, sentence));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(text: &str) -> Vec<Sentence> {
        vec![Sentence {
            text: text.to_string(),
            start: 0,
            end: text.len(),
        }]
    }

    fn texts(text: &str) -> Vec<&str> {
        let sentences = whole(text);
        tokenize(text, &sentences).iter().map(|t| t.text).collect::<Vec<_>>()
    }

    #[test]
    fn words_and_punctuation() {
        assert_eq!(texts("The cat sat."), vec!["The", "cat", "sat", "."]);
        assert_eq!(texts("Hello, world!"), vec!["Hello", ",", "world", "!"]);
    }

    #[test]
    fn internal_joiners() {
        assert_eq!(texts("state-of-the-art"), vec!["state-of-the-art"]);
        assert_eq!(texts("the U.S. economy"), vec!["the", "U.S", ".", "economy"]);
        assert_eq!(texts("3.14 and 1,000"), vec!["3.14", "and", "1,000"]);
        assert_eq!(texts("cats,dogs"), vec!["cats", ",", "dogs"]);
    }

    #[test]
    fn clitics_split() {
        assert_eq!(texts("John's car"), vec!["John", "'s", "car"]);
        assert_eq!(texts("they’re here"), vec!["they", "’re", "here"]);
        assert_eq!(texts("don't"), vec!["don't"]);
    }

    #[test]
    fn detached_clitic_stays_whole() {
        assert_eq!(texts("’s"), vec!["’s"]);
        assert_eq!(texts("x’’s"), vec!["x", "’", "’s"]);
        assert_eq!(texts("the dogs ’re"), vec!["the", "dogs", "’re"]);
        assert_eq!(texts("'sup"), vec!["'", "sup"]);
        assert_eq!(texts("'"), vec!["'"]);
    }

    #[test]
    fn offsets_and_sentence_indices() {
        let text = "One two. Three";
        let sentences = vec![
            Sentence {
                text: "One two.".into(),
                start: 0,
                end: 8,
            },
            Sentence {
                text: "Three".into(),
                start: 9,
                end: 14,
            },
        ];
        let tokens = tokenize(text, &sentences);

        assert_eq!(tokens.len(), 4);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens[2].sentence, 0);
        assert_eq!(tokens[3].sentence, 1);
        assert_eq!(tokens[3].text, "Three");
    }

    #[test]
    fn unicode_words() {
        assert_eq!(texts("Café Zürich"), vec!["Café", "Zürich"]);
    }
}
