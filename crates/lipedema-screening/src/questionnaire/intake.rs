use std::sync::OnceLock;

use regex::Regex;

use super::catalog::{self, CatalogError, QUESTION_COUNT};
use super::domain::{PersonalInfo, ScreeningSubmission, ValidatedSubmission};

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const PHONE_PATTERN: &str = r"^[0-9]{11}$";
const MAX_AGE: u8 = 120;

/// Rejections raised before a submission is scored. The display text is shown
/// to the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("Por favor, preencha todas as informações pessoais.")]
    MissingPersonalInfo,
    #[error("Por favor, insira um e-mail válido.")]
    InvalidEmail,
    #[error("Por favor, insira um número de telefone válido com 11 dígitos (apenas números).")]
    InvalidPhone,
    #[error("Por favor, informe uma idade entre 0 e 120 anos.")]
    InvalidAge,
    #[error("Por favor, informe um peso válido em kg.")]
    InvalidWeight,
    #[error("Por favor, responda a pergunta {0}.")]
    UnansweredQuestion(usize),
    #[error("Resposta inválida para a pergunta {0}.")]
    UnknownAnswer(usize),
    #[error("Número de respostas inválido: {0}.")]
    UnexpectedAnswerCount(usize),
}

impl From<CatalogError> for IntakeViolation {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::UnknownAnswer { question, .. }
            | CatalogError::UnknownPosition { question, .. } => Self::UnknownAnswer(question + 1),
            CatalogError::UnknownQuestion(index) => Self::UnexpectedAnswerCount(index + 1),
        }
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Area code plus number, digits only.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_regex().is_match(phone)
}

/// Guard turning raw form input into a [`ValidatedSubmission`].
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Validate a submission. Checks run in a fixed order and the first
    /// failure wins: missing fields, email, phone, numeric ranges, answers.
    pub fn validate(
        &self,
        submission: ScreeningSubmission,
    ) -> Result<ValidatedSubmission, IntakeViolation> {
        let ScreeningSubmission {
            full_name,
            email,
            age,
            weight_kg,
            profession,
            whatsapp,
            answers,
        } = submission;

        let full_name = full_name.trim().to_string();
        let profession = profession.trim().to_string();
        let age = age.trim();
        let weight_kg = normalize_decimal(&weight_kg);

        // Email and phone are matched as typed; surrounding spaces fail the patterns.
        let missing = [
            full_name.as_str(),
            email.trim(),
            age,
            weight_kg.as_str(),
            profession.as_str(),
            whatsapp.trim(),
        ]
        .iter()
        .any(|value| value.is_empty())
            || is_zero(age)
            || rounds_to_zero(&weight_kg);
        if missing {
            return Err(IntakeViolation::MissingPersonalInfo);
        }

        if !is_valid_email(&email) {
            return Err(IntakeViolation::InvalidEmail);
        }

        if !is_valid_phone(&whatsapp) {
            return Err(IntakeViolation::InvalidPhone);
        }

        let age = parse_age(age)?;
        let weight_kg = parse_weight(&weight_kg)?;
        let answers = resolve_answers(answers)?;

        Ok(ValidatedSubmission {
            personal: PersonalInfo {
                full_name,
                email,
                age,
                weight_kg,
                profession,
                whatsapp,
            },
            answers,
        })
    }
}

fn normalize_decimal(raw: &str) -> String {
    raw.trim().replace(',', ".")
}

fn is_zero(raw: &str) -> bool {
    matches!(raw.parse::<f64>(), Ok(value) if value == 0.0)
}

fn parse_age(raw: &str) -> Result<u8, IntakeViolation> {
    let value: f64 = raw.parse().map_err(|_| IntakeViolation::InvalidAge)?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(MAX_AGE) {
        return Err(IntakeViolation::InvalidAge);
    }
    Ok(value as u8)
}

/// The form collects one decimal place.
fn round_weight(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn rounds_to_zero(raw: &str) -> bool {
    matches!(raw.parse::<f64>(), Ok(value) if round_weight(value) == 0.0)
}

fn parse_weight(raw: &str) -> Result<f64, IntakeViolation> {
    let value: f64 = raw.parse().map_err(|_| IntakeViolation::InvalidWeight)?;
    if !value.is_finite() {
        return Err(IntakeViolation::InvalidWeight);
    }

    let value = round_weight(value);
    if value == 0.0 {
        return Err(IntakeViolation::MissingPersonalInfo);
    }
    if value < 0.0 {
        return Err(IntakeViolation::InvalidWeight);
    }
    Ok(value)
}

fn resolve_answers(answers: Vec<Option<String>>) -> Result<Vec<String>, IntakeViolation> {
    if answers.len() > QUESTION_COUNT {
        return Err(IntakeViolation::UnexpectedAnswerCount(answers.len()));
    }

    let mut resolved = Vec::with_capacity(QUESTION_COUNT);
    let mut answers = answers.into_iter();
    for index in 0..QUESTION_COUNT {
        let answer = answers
            .next()
            .flatten()
            .filter(|answer| !answer.trim().is_empty())
            .ok_or(IntakeViolation::UnansweredQuestion(index + 1))?;
        catalog::weight_for(index, &answer)?;
        resolved.push(answer);
    }
    Ok(resolved)
}
