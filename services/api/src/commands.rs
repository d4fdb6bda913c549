use crate::infra::open_repository;
use clap::Args;
use lipedema_screening::config::AppConfig;
use lipedema_screening::error::AppError;
use lipedema_screening::questionnaire::{catalog, ScoreCard, ScoringEngine};
use lipedema_screening::telemetry;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Option position (0-based) per question, in questionnaire order.
    /// Accepts repeated flags or a comma separated list.
    #[arg(long = "answer", value_delimiter = ',', required = true)]
    pub(crate) answers: Vec<usize>,
}

pub(crate) async fn run_init_db() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let repository = open_repository(&config).await?;
    repository.ensure_schema().await?;

    println!("Submission table ready");
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let card = ScoringEngine::new().score_positions(&args.answers)?;
    render_score_card(&card);
    Ok(())
}

fn render_score_card(card: &ScoreCard) {
    if card.components.len() < catalog::QUESTION_COUNT {
        println!(
            "Partial answers: {} of {} questions",
            card.components.len(),
            catalog::QUESTION_COUNT
        );
    }

    for component in &card.components {
        println!(
            "- Q{} (+{}): {}",
            component.question, component.weight, component.answer
        );
    }

    println!("\n{}", card.result_text());
}

pub(crate) fn print_questions() {
    for (index, question) in catalog::questions().iter().enumerate() {
        println!("{}. {}", index + 1, question.prompt);
        for (position, option) in question.options.iter().enumerate() {
            println!("   [{position}] {} (peso {})", option.label, option.weight);
        }
    }
    println!("\nPontuação máxima: {}", catalog::max_score());
}
