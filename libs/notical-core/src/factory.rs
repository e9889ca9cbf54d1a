//! Turns extracted concepts into cards.

use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
use crate::types::{
    Card, CardKind, CardSource, Concept, ConceptKind, Difficulty, DifficultyLabel,
    DifficultyStrategy, Level, Style,
};

const CLOZE_BLANK: &str = "_____";

/// Builds cards for one difficulty strategy and provenance tag.
pub struct CardFactory<'a> {
    knowledge: &'a KnowledgeBase,
    strategy: DifficultyStrategy,
    source: CardSource,
}

impl<'a> CardFactory<'a> {
    pub fn new(knowledge: &'a KnowledgeBase, strategy: DifficultyStrategy, source: CardSource) -> Self {
        Self {
            knowledge,
            strategy,
            source,
        }
    }

    /// Build a card for a concept. Never fails: a concept without context
    /// gets a templated answer.
    pub fn build(
        &self,
        concept: &Concept,
        style: Style,
        exam_board: Option<&str>,
        level: Level,
    ) -> Card {
        let term = concept.term.as_str();
        let kind = CardKind::from(concept.kind);

        let (question, answer) = match concept.kind {
            ConceptKind::Definition => {
                let answer = self.answer_or_template(concept);
                (
                    format!("What is {}?", term),
                    apply_style(term, answer, style, exam_board),
                )
            }
            ConceptKind::Comparison => {
                let first = concept.related_terms.first().map_or(term, String::as_str);
                let question = match concept.related_terms.get(1) {
                    Some(second) => format!("How do {} and {} differ?", first, second),
                    None => format!("How does {} differ from related concepts?", first),
                };
                (question, self.answer_or_template(concept))
            }
            ConceptKind::Process => (
                format!("How does {} work?", term),
                self.answer_or_template(concept),
            ),
            ConceptKind::General => (
                format!("Explain the concept of {} based on the context", term),
                self.answer_or_template(concept),
            ),
            ConceptKind::KeyTerm => (
                format!("What does the text state about {}?", term),
                self.answer_or_template(concept),
            ),
        };

        self.card(kind, term, question, answer, style, level)
    }

    /// Fill-in-the-blank card hiding the first mention of the term.
    ///
    /// Returns `None` when the term does not appear in the context.
    pub fn build_cloze(&self, concept: &Concept, style: Style, level: Level) -> Option<Card> {
        let term = concept.term.as_str();
        if term.is_empty() || !concept.context.contains(term) {
            return None;
        }

        let blanked = concept.context.replacen(term, CLOZE_BLANK, 1);
        Some(self.card(
            CardKind::Cloze,
            term,
            format!("Fill in the blank: {}", blanked),
            term.to_string(),
            style,
            level,
        ))
    }

    /// Card explaining a term from its knowledge base entry.
    pub fn build_explanation(
        &self,
        term: &str,
        entry: &KnowledgeEntry,
        style: Style,
        level: Level,
    ) -> Card {
        let mut card = self.card(
            CardKind::Explanation,
            term,
            format!("Explain {} in your own words", term),
            entry.description.clone(),
            style,
            level,
        );
        card.source = CardSource::KnowledgeBase;
        card.ai_enhanced = true;
        card
    }

    fn card(
        &self,
        kind: CardKind,
        term: &str,
        question: String,
        answer: String,
        style: Style,
        level: Level,
    ) -> Card {
        let (difficulty, ai_enhanced) = match self.strategy {
            DifficultyStrategy::Fixed => (Difficulty::Label(fixed_difficulty(kind)), false),
            DifficultyStrategy::LevelTiered => (Difficulty::Tier(tier_for(term, level)), true),
        };

        Card {
            question,
            answer,
            kind,
            term: term.to_string(),
            difficulty,
            style,
            source: self.source,
            ai_enhanced,
        }
    }

    fn answer_or_template(&self, concept: &Concept) -> String {
        if concept.context.trim().is_empty() {
            self.templated_answer(&concept.term)
        } else {
            concept.context.clone()
        }
    }

    fn templated_answer(&self, term: &str) -> String {
        let role = self
            .knowledge
            .role(term)
            .unwrap_or_else(|| infer_role(term));
        format!("{} is a key {} covered in the study material.", term, role)
    }
}

fn apply_style(term: &str, answer: String, style: Style, exam_board: Option<&str>) -> String {
    match (style, exam_board) {
        (Style::Professional, _) => format!(
            "{} is a technical component that {}",
            term,
            answer.to_lowercase()
        ),
        (Style::ExamFocused, Some(board)) if !board.trim().is_empty() => {
            format!("For {}: {}", board, answer)
        }
        _ => answer,
    }
}

/// Difficulty label per card type.
pub fn fixed_difficulty(kind: CardKind) -> DifficultyLabel {
    match kind {
        CardKind::Comparison => DifficultyLabel::Hard,
        CardKind::Cloze => DifficultyLabel::Easy,
        CardKind::Definition | CardKind::Process | CardKind::Concept | CardKind::Explanation => {
            DifficultyLabel::Medium
        }
    }
}

/// Difficulty tier from term length relative to the study level.
pub fn tier_for(term: &str, level: Level) -> u8 {
    let len = term.chars().count();
    match level {
        Level::HighSchool => {
            if len < 6 { 1 } else { 2 }
        }
        Level::University => {
            if len < 8 { 2 } else { 3 }
        }
        Level::Postgraduate => {
            if len < 10 { 3 } else { 4 }
        }
    }
}

/// Guess what kind of thing a term names from its last word.
fn infer_role(term: &str) -> &'static str {
    let last = term
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .to_lowercase();

    if ["sis", "tion", "sion", "ing"].iter().any(|s| last.ends_with(s)) {
        "process"
    } else if last.ends_with("ism") {
        "mechanism"
    } else if last.ends_with("ory") {
        "theory"
    } else if ["ics", "ogy"].iter().any(|s| last.ends_with(s)) {
        "discipline"
    } else if ["ity", "ance", "ence"].iter().any(|s| last.ends_with(s)) {
        "property"
    } else if ["er", "or"].iter().any(|s| last.ends_with(s)) {
        "component"
    } else {
        "concept"
    }
}
