mod bands;

pub use bands::{RiskBand, HIGH_THRESHOLD, LOW_THRESHOLD, MODERATE_THRESHOLD};

use serde::{Deserialize, Serialize};

use super::catalog::{self, CatalogError};

/// Stateless evaluator summing the catalog weights of the selected answers.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score answers given as option labels, in questionnaire order.
    pub fn score<S: AsRef<str>>(&self, answers: &[S]) -> Result<ScoreCard, CatalogError> {
        let mut components = Vec::with_capacity(answers.len());
        let mut total: u16 = 0;

        for (index, answer) in answers.iter().enumerate() {
            let answer = answer.as_ref();
            let weight = catalog::weight_for(index, answer)?;
            total += u16::from(weight);
            components.push(ScoreComponent {
                question: index + 1,
                answer: answer.to_string(),
                weight,
            });
        }

        Ok(ScoreCard::new(total, components))
    }

    /// Score answers given as option positions, in questionnaire order.
    pub fn score_positions(&self, positions: &[usize]) -> Result<ScoreCard, CatalogError> {
        let labels = positions
            .iter()
            .enumerate()
            .map(|(index, position)| catalog::label_at(index, *position))
            .collect::<Result<Vec<_>, _>>()?;
        self.score(labels.as_slice())
    }
}

/// Weight contributed by one answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub question: usize,
    pub answer: String,
    pub weight: u8,
}

/// Total score, its band, and the per-question trail behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub total: u16,
    pub band: RiskBand,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    fn new(total: u16, components: Vec<ScoreComponent>) -> Self {
        Self {
            total,
            band: RiskBand::classify(total),
            components,
        }
    }

    /// Text shown to the respondent after a successful submission.
    pub fn result_text(&self) -> String {
        format!(
            "Sua pontuação: {}\nResultado: {}\n\n{}",
            self.total,
            self.band.label(),
            self.band.advice()
        )
    }
}
