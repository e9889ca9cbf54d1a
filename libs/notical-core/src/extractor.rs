//! Heuristic concept extraction.
//!
//! Sentences are scanned for definition, comparison and process patterns
//! using keyword lists and capitalization. A token qualifies as a term when,
//! with surrounding punctuation trimmed, it starts with an uppercase letter,
//! is longer than two characters and is not a connective such as "However"
//! or a common sentence opener such as "This". A qualifying token followed
//! directly by another qualifying token forms a two-word term
//! ("Machine Learning").
//!
//! Definition and process scans stop at the first match in a sentence.

use std::collections::HashSet;

use crate::types::{Concept, ConceptKind};

const DEFINITION_KEYWORDS: &[&str] = &[
    "is",
    "are",
    "means",
    "refers to",
    "constitutes",
    "represents",
];

const COMPARISON_KEYWORDS: &[&str] = &[
    "conversely",
    "however",
    "while",
    "whereas",
    "in contrast",
    "differs",
    "unlike",
];

const PROCESS_KEYWORDS: &[&str] = &[
    "relies on",
    "employs",
    "uses",
    "implements",
    "enables",
    "allows",
    "facilitates",
];

/// Words that are capitalized at sentence start but never terms.
const EXCLUDED_TERMS: &[&str] = &[
    // connectives
    "conversely",
    "however",
    "while",
    "whereas",
    "therefore",
    "thus",
    "hence",
    // determiners and pronouns
    "the",
    "this",
    "that",
    "these",
    "those",
    "there",
    "their",
    "they",
    "its",
    "it's",
    "our",
];

/// Fallback sentences must be longer than this.
pub const MIN_FALLBACK_LEN: usize = 30;

struct Token<'a> {
    raw: &'a str,
    clean: &'a str,
}

fn tokenize(sentence: &str) -> Vec<Token<'_>> {
    sentence
        .split_whitespace()
        .map(|raw| Token {
            raw,
            clean: raw.trim_matches(|c: char| !c.is_alphanumeric()),
        })
        .collect()
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().map_or(false, char::is_uppercase)
}

fn is_excluded(word: &str) -> bool {
    let lower = word.to_lowercase().replace('\u{2019}', "'");
    EXCLUDED_TERMS.contains(&lower.as_str())
}

fn qualifies(token: &Token<'_>) -> bool {
    starts_uppercase(token.clean) && token.clean.chars().count() > 2 && !is_excluded(token.clean)
}

fn contains_keyword(sentence: &str, keywords: &[&str]) -> bool {
    let lower = sentence.to_lowercase();
    keywords.iter().any(|kw| lower.contains(kw))
}

/// Whether the tokens right after `idx` spell out one of `keywords`.
fn keyword_follows(tokens: &[Token<'_>], idx: usize, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        kw.split(' ').enumerate().all(|(offset, word)| {
            tokens
                .get(idx + 1 + offset)
                .map_or(false, |t| t.clean.to_lowercase() == word)
        })
    })
}

/// Term starting at `idx` and the number of tokens it spans.
fn term_at(tokens: &[Token<'_>], idx: usize) -> Option<(String, usize)> {
    let token = tokens.get(idx)?;
    if !qualifies(token) {
        return None;
    }

    // Trailing punctuation closes the term ("Respiration, However").
    let open = token.raw.ends_with(token.clean);
    match tokens.get(idx + 1) {
        Some(next) if open && starts_uppercase(next.clean) && !is_excluded(next.clean) => {
            Some((format!("{} {}", token.clean, next.clean), 2))
        }
        _ => Some((token.clean.to_string(), 1)),
    }
}

fn first_term(tokens: &[Token<'_>]) -> Option<String> {
    (0..tokens.len()).find_map(|idx| term_at(tokens, idx).map(|(term, _)| term))
}

/// Distinct terms in order of appearance, at most `limit`.
fn distinct_terms(tokens: &[Token<'_>], limit: usize) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let mut idx = 0;

    while idx < tokens.len() && terms.len() < limit {
        match term_at(tokens, idx) {
            Some((term, span)) => {
                if !terms.contains(&term) {
                    terms.push(term);
                }
                idx += span;
            }
            None => idx += 1,
        }
    }

    terms
}

/// Finds candidate concepts in a list of sentences.
#[derive(Debug, Clone)]
pub struct ConceptExtractor {
    min_fallback_len: usize,
}

impl Default for ConceptExtractor {
    fn default() -> Self {
        Self {
            min_fallback_len: MIN_FALLBACK_LEN,
        }
    }
}

impl ConceptExtractor {
    pub fn new(min_fallback_len: usize) -> Self {
        Self { min_fallback_len }
    }

    /// Extract concepts: definitions, then comparisons, then processes, then
    /// general fallbacks for sentences no earlier concept used.
    pub fn extract<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Concept> {
        let mut concepts = self.definitions(sentences);
        concepts.extend(self.comparisons(sentences));
        concepts.extend(self.processes(sentences));

        let used: HashSet<String> = concepts.iter().map(|c| c.context.clone()).collect();
        concepts.extend(self.general(sentences, &used));

        tracing::debug!(
            sentences = sentences.len(),
            concepts = concepts.len(),
            "extracted concepts"
        );
        concepts
    }

    /// Distinct terms across all sentences, each tied to the first sentence
    /// that mentions it.
    pub fn key_terms<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Concept> {
        let mut seen = HashSet::new();
        let mut concepts = Vec::new();

        for (idx, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            let tokens = tokenize(sentence);
            for term in distinct_terms(&tokens, usize::MAX) {
                if seen.insert(term.clone()) {
                    concepts.push(Concept {
                        term,
                        kind: ConceptKind::KeyTerm,
                        context: sentence.to_string(),
                        related_terms: vec![],
                        sentence_index: idx,
                    });
                }
            }
        }

        concepts
    }

    fn definitions<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Concept> {
        let mut concepts = Vec::new();

        for (idx, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            if !contains_keyword(sentence, DEFINITION_KEYWORDS) {
                continue;
            }

            let tokens = tokenize(sentence);
            let found = (0..tokens.len()).find(|&i| {
                qualifies(&tokens[i]) && keyword_follows(&tokens, i, DEFINITION_KEYWORDS)
            });

            if let Some(i) = found {
                concepts.push(Concept {
                    term: tokens[i].clean.to_string(),
                    kind: ConceptKind::Definition,
                    context: sentence.to_string(),
                    related_terms: vec![],
                    sentence_index: idx,
                });
            }
        }

        concepts
    }

    fn comparisons<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Concept> {
        let mut concepts = Vec::new();

        for (idx, sentence) in sentences.iter().enumerate() {
            let sentence = sentence.as_ref();
            if !contains_keyword(sentence, COMPARISON_KEYWORDS) {
                continue;
            }

            let mut terms = distinct_terms(&tokenize(sentence), 2);

            // A lone contrasted term is paired with the previous sentence's subject.
            if terms.len() < 2 && idx > 0 {
                let previous = tokenize(sentences[idx - 1].as_ref());
                let partner = distinct_terms(&previous, usize::MAX)
                    .into_iter()
                    .find(|t| !terms.contains(t));
                if let Some(term) = partner {
                    terms.push(term);
                }
            }

            if terms.len() >= 2 {
                concepts.push(Concept {
                    term: terms[0].clone(),
                    kind: ConceptKind::Comparison,
                    context: sentence.to_string(),
                    related_terms: terms,
                    sentence_index: idx,
                });
            }
        }

        concepts
    }

    fn processes<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Concept> {
        sentences
            .iter()
            .enumerate()
            .filter(|(_, s)| contains_keyword(s.as_ref(), PROCESS_KEYWORDS))
            .filter_map(|(idx, s)| {
                let sentence = s.as_ref();
                first_term(&tokenize(sentence)).map(|term| Concept {
                    term,
                    kind: ConceptKind::Process,
                    context: sentence.to_string(),
                    related_terms: vec![],
                    sentence_index: idx,
                })
            })
            .collect()
    }

    fn general<S: AsRef<str>>(&self, sentences: &[S], used: &HashSet<String>) -> Vec<Concept> {
        sentences
            .iter()
            .enumerate()
            .map(|(idx, s)| (idx, s.as_ref()))
            .filter(|(_, s)| !used.contains(*s) && s.chars().count() > self.min_fallback_len)
            .filter_map(|(idx, sentence)| {
                first_term(&tokenize(sentence)).map(|term| Concept {
                    term,
                    kind: ConceptKind::General,
                    context: sentence.to_string(),
                    related_terms: vec![],
                    sentence_index: idx,
                })
            })
            .collect()
    }
}
