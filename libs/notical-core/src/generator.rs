//! The generation pipeline: analyze, extract, build, deduplicate.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analyzer::{AnalysisResult, TextAnalyzer};
use crate::dedup::finalize_with;
use crate::error::{GenerationError, Result};
use crate::extractor::ConceptExtractor;
use crate::factory::CardFactory;
use crate::knowledge::KnowledgeBase;
use crate::types::{Card, CardSource, Generation, GenerationRequest, Mode};

/// Flashcard generator. Holds no per-call state, so one instance can serve
/// any number of requests.
#[derive(Debug, Clone)]
pub struct Generator {
    analyzer: TextAnalyzer,
    extractor: ConceptExtractor,
    knowledge: Arc<KnowledgeBase>,
}

impl Generator {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_components(TextAnalyzer::default(), ConceptExtractor::default(), knowledge)
    }

    pub fn with_components(
        analyzer: TextAnalyzer,
        extractor: ConceptExtractor,
        knowledge: Arc<KnowledgeBase>,
    ) -> Self {
        Self {
            analyzer,
            extractor,
            knowledge,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn analyze(&self, content: &str) -> AnalysisResult {
        self.analyzer.analyze(content)
    }

    /// Validate the request, then run the pipeline.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Generation> {
        validate(request)?;
        Ok(self.run(request))
    }

    /// Run the pipeline without validation. Empty content yields no cards.
    pub fn run(&self, request: &GenerationRequest) -> Generation {
        let analysis = self.analyzer.analyze(&request.content);
        let sentences = &analysis.sentences;
        let factory = CardFactory::new(
            &self.knowledge,
            request.difficulty_strategy,
            CardSource::from(request.mode),
        );
        let exam_board = request.exam_board.as_deref();

        let concepts = match request.mode {
            Mode::StrictText => self.extractor.key_terms(sentences),
            Mode::SmartUnderstanding | Mode::OnlineResearch => self.extractor.extract(sentences),
        };

        let mut cards: Vec<Card> = concepts
            .iter()
            .map(|c| factory.build(c, request.style, exam_board, request.level))
            .collect();

        if request.mode == Mode::OnlineResearch {
            let mut explained = HashSet::new();
            for concept in &concepts {
                let Some(entry) = self.knowledge.get(&concept.term) else {
                    continue;
                };
                if explained.insert(concept.term.to_lowercase()) {
                    cards.push(factory.build_explanation(
                        &concept.term,
                        entry,
                        request.style,
                        request.level,
                    ));
                }
            }
        }

        if request.include_cloze {
            cards.extend(
                self.extractor
                    .key_terms(sentences)
                    .iter()
                    .filter_map(|c| factory.build_cloze(c, request.style, request.level)),
            );
        }

        cards.retain(|c| !c.question.trim().is_empty() && !c.answer.trim().is_empty());
        let candidates = cards.len();
        let cards = finalize_with(cards, request.num_cards, request.dedup);

        tracing::debug!(
            mode = request.mode.as_str(),
            sentences = sentences.len(),
            candidates,
            generated = cards.len(),
            requested = request.num_cards,
            "generation finished"
        );

        Generation {
            message: summary_message(cards.len(), request.num_cards),
            cards,
            requested: request.num_cards,
            analysis: analysis.summary(),
        }
    }
}

/// Reject requests the pipeline should not silently answer with nothing.
pub fn validate(request: &GenerationRequest) -> Result<()> {
    if request.content.trim().is_empty() {
        return Err(GenerationError::InvalidInput(
            "content must not be empty".to_string(),
        ));
    }
    if request.num_cards < 1 {
        return Err(GenerationError::InvalidInput(
            "num_cards must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Human-readable outcome of a generation call.
pub fn summary_message(generated: usize, requested: usize) -> String {
    if generated >= requested {
        format!("Generated {} flashcards", generated)
    } else {
        format!(
            "Generated {} of {} requested flashcards",
            generated, requested
        )
    }
}
