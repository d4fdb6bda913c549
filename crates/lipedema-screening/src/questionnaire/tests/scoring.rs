use super::common::*;
use crate::questionnaire::catalog::{self, CatalogError, QUESTION_COUNT};
use crate::questionnaire::scoring::{RiskBand, ScoringEngine};

#[test]
fn catalog_has_nine_questions_with_expected_weights() {
    let weights: Vec<Vec<u8>> = catalog::questions()
        .iter()
        .map(|question| question.options.iter().map(|option| option.weight).collect())
        .collect();

    assert_eq!(weights.len(), QUESTION_COUNT);
    assert_eq!(weights[0], vec![3, 2, 1, 0]);
    for index in 1..=5 {
        assert_eq!(weights[index], vec![2, 1, 0, 0], "question {}", index + 1);
    }
    assert_eq!(weights[6], vec![3, 2, 1, 0]);
    assert_eq!(weights[7], vec![2, 1, 0, 0]);
    assert_eq!(weights[8], vec![2, 1, 0]);
    assert_eq!(catalog::max_score(), 20);
}

#[test]
fn weight_is_taken_from_the_selected_position() {
    let question = &catalog::questions()[6];
    for (position, option) in question.options.iter().enumerate() {
        assert_eq!(question.position_of(option.label), Some(position));
        assert_eq!(catalog::weight_for(6, option.label), Ok(option.weight));
    }
}

#[test]
fn unknown_answers_and_questions_are_errors() {
    assert_eq!(
        catalog::weight_for(0, "Sim"),
        Err(CatalogError::UnknownAnswer {
            question: 0,
            answer: "Sim".to_string(),
        })
    );
    assert_eq!(
        catalog::weight_for(QUESTION_COUNT, "Sim"),
        Err(CatalogError::UnknownQuestion(QUESTION_COUNT))
    );
    assert_eq!(
        catalog::label_at(8, 3),
        Err(CatalogError::UnknownPosition {
            question: 8,
            position: 3,
        })
    );
}

#[test]
fn answer_lookup_is_exact() {
    // The swelling question keeps a stray space before the comma.
    let label = "Sim , frequentemente incham, mas melhora com elevação.";
    assert_eq!(catalog::weight_for(7, label), Ok(1));
    assert!(catalog::weight_for(7, "Sim, frequentemente incham, mas melhora com elevação.").is_err());
}

#[test]
fn engine_sums_weights_of_selected_options() {
    let engine = ScoringEngine::new();

    let card = engine
        .score(labels_at(&MODERATE_POSITIONS).as_slice())
        .expect("answers score");
    assert_eq!(card.total, 11);
    assert_eq!(card.band, RiskBand::Moderate);
    assert_eq!(card.components.len(), QUESTION_COUNT);
    assert_eq!(card.components[0].weight, 2);
    assert_eq!(card.components[0].question, 1);

    let highest = engine
        .score_positions(&HIGHEST_POSITIONS)
        .expect("positions score");
    assert_eq!(highest.total, 20);
    assert_eq!(highest.band, RiskBand::High);

    let lowest = engine
        .score_positions(&LOWEST_POSITIONS)
        .expect("positions score");
    assert_eq!(lowest.total, 0);
    assert_eq!(lowest.band, RiskBand::VeryLow);
}

#[test]
fn total_matches_sum_of_weights_across_answer_combinations() {
    let engine = ScoringEngine::new();
    let questions = catalog::questions();
    let combinations: usize = questions
        .iter()
        .map(|question| question.options.len())
        .product();

    for seed in (0..combinations).step_by(97) {
        let mut remainder = seed;
        let mut positions = Vec::with_capacity(QUESTION_COUNT);
        let mut expected: u16 = 0;
        for question in questions {
            let position = remainder % question.options.len();
            remainder /= question.options.len();
            expected += u16::from(question.options[position].weight);
            positions.push(position);
        }

        let card = engine.score_positions(&positions).expect("valid positions");
        assert_eq!(card.total, expected, "positions {positions:?}");
        assert_eq!(card.band, RiskBand::classify(expected));
    }
}

#[test]
fn band_thresholds_are_inclusive() {
    assert_eq!(RiskBand::classify(0), RiskBand::VeryLow);
    assert_eq!(RiskBand::classify(4), RiskBand::VeryLow);
    assert_eq!(RiskBand::classify(5), RiskBand::Low);
    assert_eq!(RiskBand::classify(8), RiskBand::Low);
    assert_eq!(RiskBand::classify(9), RiskBand::Moderate);
    assert_eq!(RiskBand::classify(12), RiskBand::Moderate);
    assert_eq!(RiskBand::classify(13), RiskBand::High);
    assert_eq!(RiskBand::classify(20), RiskBand::High);
}

#[test]
fn result_text_combines_score_label_and_advice() {
    let card = ScoringEngine::new()
        .score_positions(&HIGHEST_POSITIONS)
        .expect("positions score");

    assert_eq!(
        card.result_text(),
        "Sua pontuação: 20\nResultado: 75-100% de chance de ter lipedema\n\nAlta chance de lipedema. Procure um especialista."
    );
}

#[test]
fn partial_answer_lists_score_the_answered_prefix() {
    let labels = labels_at(&HIGHEST_POSITIONS[..2]);
    let card = ScoringEngine::new()
        .score(labels.as_slice())
        .expect("prefix scores");
    assert_eq!(card.total, 5);
    assert_eq!(card.band, RiskBand::Low);
}
