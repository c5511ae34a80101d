//! Word lists for the rule-based English model
//!
//! Closed-class words (determiners, pronouns, prepositions, ...) are fixed.
//! Open-class lists ship with a small built-in vocabulary and can be extended
//! from a TOML lexicon file:
//!
//! ```toml
//! nouns = ["wedding", "meeting"]
//! verbs = ["ships"]
//! adjectives = ["agile"]
//! adverbs = ["upstream"]
//! abbreviations = ["approx"]
//! ```

use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::ModelError;

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

lazy_static! {
    static ref DETERMINERS: HashSet<&'static str> = set(&[
        "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any",
        "no", "another", "either", "neither", "all", "both", "such", "several", "many", "much",
        "most", "more", "few", "fewer", "less",
    ]);
    static ref POSSESSIVES: HashSet<&'static str> =
        set(&["my", "your", "his", "her", "its", "our", "their", "whose"]);
    static ref PRONOUNS: HashSet<&'static str> = set(&[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
        "yourself", "himself", "herself", "itself", "ourselves", "yourselves", "themselves",
        "mine", "yours", "hers", "ours", "theirs", "something", "anything", "nothing",
        "everything", "someone", "anyone", "everyone", "nobody", "somebody", "anybody",
        "everybody",
    ]);
    static ref PREPOSITIONS: HashSet<&'static str> = set(&[
        "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
        "out", "off", "over", "under", "across", "along", "among", "around", "behind",
        "beside", "beyond", "despite", "except", "inside", "like", "near", "onto", "outside",
        "per", "since", "toward", "towards", "upon", "via", "within", "without", "than",
    ]);
    static ref CONJUNCTIONS: HashSet<&'static str> = set(&[
        "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while",
        "whereas", "if", "unless", "until", "whether", "as", "when", "where", "which", "who",
        "whom", "what", "why", "how",
    ]);
    static ref AUXILIARIES: HashSet<&'static str> = set(&[
        "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had",
        "having", "do", "does", "did", "will", "would", "shall", "should", "can", "could",
        "may", "might", "must", "not", "'s", "'re", "'ve", "'ll", "'d", "'m", "don't",
        "doesn't", "didn't", "isn't", "aren't", "wasn't", "weren't", "won't", "can't",
        "cannot", "couldn't", "shouldn't", "wouldn't", "haven't", "hasn't", "hadn't",
    ]);
    static ref NUMBER_WORDS: HashSet<&'static str> = set(&[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
        "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy",
        "eighty", "ninety", "hundred", "thousand", "million", "billion", "trillion",
    ]);
    static ref MONTHS: HashSet<&'static str> = set(&[
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december",
    ]);
    static ref WEEKDAYS: HashSet<&'static str> = set(&[
        "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    ]);
    static ref RELATIVE_DAYS: HashSet<&'static str> =
        set(&["today", "yesterday", "tomorrow", "tonight"]);

    static ref BUILTIN_VERBS: HashSet<&'static str> = set(&[
        "go", "goes", "went", "gone", "sit", "sits", "sat", "run", "runs", "ran", "fly",
        "flies", "flew", "flown", "set", "sets", "say", "says", "said", "make", "makes",
        "made", "take", "takes", "took", "taken", "come", "comes", "came", "see", "sees",
        "saw", "seen", "know", "knows", "knew", "known", "get", "gets", "got", "give",
        "gives", "gave", "given", "find", "finds", "found", "think", "thinks", "thought",
        "tell", "tells", "told", "become", "becomes", "became", "leave", "leaves", "left",
        "feel", "feels", "felt", "bring", "brings", "brought", "begin", "begins", "began",
        "keep", "keeps", "kept", "hold", "holds", "held", "write", "writes", "wrote",
        "written", "stand", "stands", "stood", "hear", "hears", "heard", "mean", "means",
        "meant", "meet", "meets", "met", "pay", "pays", "paid", "send", "sends", "sent",
        "build", "builds", "built", "spend", "spends", "spent", "grow", "grows", "grew",
        "grown", "fall", "falls", "fell", "fallen", "draw", "draws", "drew", "lose", "loses",
        "lost", "eat", "eats", "ate", "eaten", "rise", "rises", "rose", "drive", "drives",
        "drove", "speak", "speaks", "spoke", "choose", "chooses", "chose", "win", "wins",
        "won", "sing", "sings", "sang", "swim", "swims", "swam", "sleep", "sleeps", "slept",
        "want", "wants", "seem", "seems", "show", "shows", "shown", "include", "includes",
        "provide", "provides", "help", "helps", "allow", "allows", "let", "lets", "put",
        "puts", "read", "reads", "shine", "shines", "shone", "bark", "barks", "jump",
        "jumps", "sell", "sells", "sold", "buy", "buys", "bought", "teach", "teaches",
        "taught", "catch", "catches", "caught", "fight", "fights", "fought", "understand",
        "understands", "understood", "wear", "wears", "wore", "break", "breaks", "broke",
        "broken", "forget", "forgets", "forgot", "hide", "hides", "hid", "ride", "rides",
        "rode", "shake", "shakes", "shook", "throw", "throws", "threw", "thrown", "announce",
        "announces", "open", "opens", "close", "closes", "need", "needs", "try", "tries",
        "work", "works", "live", "lives", "move", "moves", "play", "plays", "look", "looks",
    ]);
    static ref BUILTIN_ADJECTIVES: HashSet<&'static str> = set(&[
        "good", "new", "first", "last", "long", "great", "little", "own", "other", "old",
        "right", "big", "high", "different", "small", "large", "next", "early", "young",
        "important", "bad", "same", "able", "best", "better", "worse", "worst", "late",
        "hard", "major", "minor", "real", "whole", "free", "full", "true", "false", "clear",
        "certain", "strong", "weak", "low", "short", "possible", "black", "white", "red",
        "blue", "green", "yellow", "quick", "brown", "lazy", "happy", "sad", "simple", "easy",
        "fast", "slow", "hot", "cold", "warm", "dark", "bright", "deep", "wide", "rich",
        "poor", "main", "recent", "local", "national", "social", "political", "economic",
        "final", "huge", "tiny", "quiet", "loud", "calm", "wild", "fresh", "nice", "fine",
        "sure", "ready", "heavy", "light", "empty", "busy", "safe", "key", "common", "general",
        "special", "private", "single", "various", "similar", "entire", "available",
    ]);
    static ref BUILTIN_ADVERBS: HashSet<&'static str> = set(&[
        "very", "too", "also", "just", "only", "never", "always", "often", "sometimes",
        "here", "there", "now", "then", "soon", "still", "already", "quite", "rather",
        "almost", "even", "ever", "again", "today", "yesterday", "tomorrow", "tonight",
        "away", "back", "well", "once", "twice", "perhaps", "maybe", "instead", "together",
        "however", "therefore", "thus", "indeed", "not",
    ]);
    static ref BUILTIN_ABBREVIATIONS: HashSet<&'static str> = set(&[
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "inc", "ltd", "co", "corp",
        "fig", "approx", "dept", "gen", "gov", "lt", "col", "capt", "sgt", "rev", "e.g",
        "i.e", "a.m", "p.m", "u.s", "u.k", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
        "sep", "sept", "oct", "nov", "dec", "mt", "ave", "blvd",
    ]);
}

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ish"];

/// Extension file layout
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LexiconFile {
    nouns: Vec<String>,
    verbs: Vec<String>,
    adjectives: Vec<String>,
    adverbs: Vec<String>,
    abbreviations: Vec<String>,
}

/// Open-class vocabulary used by the tagger and the segmenter
#[derive(Debug, Clone)]
pub struct Lexicon {
    nouns: HashSet<String>,
    verbs: HashSet<String>,
    adjectives: HashSet<String>,
    adverbs: HashSet<String>,
    abbreviations: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Lexicon {
    /// The built-in English vocabulary
    pub fn builtin() -> Self {
        fn owned(words: &HashSet<&'static str>) -> HashSet<String> {
            words.iter().map(|w| w.to_string()).collect()
        }

        Self {
            nouns: HashSet::new(),
            verbs: owned(&BUILTIN_VERBS),
            adjectives: owned(&BUILTIN_ADJECTIVES),
            adverbs: owned(&BUILTIN_ADVERBS),
            abbreviations: owned(&BUILTIN_ABBREVIATIONS),
        }
    }

    /// Built-in vocabulary extended with the words listed in a TOML file
    pub fn with_extension_file(path: &Path) -> Result<Self, ModelError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ModelError::LexiconRead {
                path: path.to_path_buf(),
                source,
            })?;
        let file: LexiconFile =
            toml::from_str(&content).map_err(|source| ModelError::LexiconParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut lexicon = Self::builtin();
        lexicon.extend(file);
        Ok(lexicon)
    }

    fn extend(&mut self, file: LexiconFile) {
        fn add(target: &mut HashSet<String>, words: Vec<String>) {
            target.extend(
                words
                    .into_iter()
                    .map(|w| w.trim().trim_end_matches('.').to_lowercase())
                    .filter(|w| !w.is_empty()),
            );
        }

        add(&mut self.nouns, file.nouns);
        add(&mut self.verbs, file.verbs);
        add(&mut self.adjectives, file.adjectives);
        add(&mut self.adverbs, file.adverbs);
        add(&mut self.abbreviations, file.abbreviations);
    }

    pub fn is_noun(&self, lower: &str) -> bool {
        self.nouns.contains(lower)
    }

    pub fn is_verb(&self, lower: &str) -> bool {
        self.verbs.contains(lower)
    }

    /// Listed adjective or a word carrying an adjective suffix
    pub fn is_adjective(&self, lower: &str) -> bool {
        self.adjectives.contains(lower)
            || ADJECTIVE_SUFFIXES
                .iter()
                .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
    }

    pub fn is_adverb(&self, lower: &str) -> bool {
        self.adverbs.contains(lower)
    }

    /// `lower` is the word before a period, without the period itself
    pub fn is_abbreviation(&self, lower: &str) -> bool {
        self.abbreviations.contains(lower)
    }
}

pub fn is_determiner(lower: &str) -> bool {
    DETERMINERS.contains(lower)
}

pub fn is_possessive(lower: &str) -> bool {
    POSSESSIVES.contains(lower)
}

pub fn is_pronoun(lower: &str) -> bool {
    PRONOUNS.contains(lower)
}

pub fn is_preposition(lower: &str) -> bool {
    PREPOSITIONS.contains(lower)
}

pub fn is_conjunction(lower: &str) -> bool {
    CONJUNCTIONS.contains(lower)
}

pub fn is_auxiliary(lower: &str) -> bool {
    AUXILIARIES.contains(lower) || AUXILIARIES.contains(lower.replace('’', "'").as_str())
}

pub fn is_number_word(lower: &str) -> bool {
    NUMBER_WORDS.contains(lower)
}

pub fn is_month(lower: &str) -> bool {
    MONTHS.contains(lower)
}

pub fn is_weekday(lower: &str) -> bool {
    WEEKDAYS.contains(lower)
}

pub fn is_relative_day(lower: &str) -> bool {
    RELATIVE_DAYS.contains(lower)
}

/// Any closed-class word; these never become proper nouns
pub fn is_function_word(lower: &str) -> bool {
    is_determiner(lower)
        || is_possessive(lower)
        || is_pronoun(lower)
        || is_preposition(lower)
        || is_conjunction(lower)
        || is_auxiliary(lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn closed_classes() {
        assert!(is_determiner("the"));
        assert!(is_possessive("their"));
        assert!(is_pronoun("it"));
        assert!(is_preposition("between"));
        assert!(is_conjunction("because"));
        assert!(is_auxiliary("wasn't"));
        assert!(is_auxiliary("’s"));
        assert!(!is_pronoun("cat"));
    }

    #[test]
    fn adjective_suffix_heuristic() {
        let lexicon = Lexicon::builtin();
        assert!(lexicon.is_adjective("famous"));
        assert!(lexicon.is_adjective("careful"));
        assert!(lexicon.is_adjective("quick"));
        // Too short for the suffix rule
        assert!(!lexicon.is_adjective("bus"));
        assert!(!lexicon.is_adjective("dog"));
    }

    #[test]
    fn extension_file_adds_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "nouns = [\"Wedding\"]\nverbs = [\"ships\"]\nabbreviations = [\"approx.\", \"Ref\"]"
        )
        .unwrap();

        let lexicon = Lexicon::with_extension_file(file.path()).unwrap();
        assert!(lexicon.is_noun("wedding"));
        assert!(lexicon.is_verb("ships"));
        assert!(lexicon.is_abbreviation("ref"));
        assert!(lexicon.is_abbreviation("approx"));
        // Built-ins survive
        assert!(lexicon.is_verb("sat"));
    }

    #[test]
    fn missing_extension_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::with_extension_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ModelError::LexiconRead { .. }));
    }

    #[test]
    fn invalid_extension_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "nouns = \"not a list\"").unwrap();

        let err = Lexicon::with_extension_file(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::LexiconParse { .. }));
    }
}
