use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the store when a submission is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub i64);

/// Raw questionnaire submission exactly as the form delivers it.
///
/// Numeric fields stay as text so blank inputs can be reported as missing
/// information rather than failing deserialization. JSON clients may send
/// them as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSubmission {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub age: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub weight_kg: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub whatsapp: String,
    /// Selected option label per question, in questionnaire order.
    #[serde(default)]
    pub answers: Vec<Option<String>>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Decimal(f64),
    }

    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Integer(value)) => value.to_string(),
        Some(TextOrNumber::Decimal(value)) => value.to_string(),
        None => String::new(),
    })
}

/// Personal details after intake validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub age: u8,
    pub weight_kg: f64,
    pub profession: String,
    pub whatsapp: String,
}

/// Validated submission: personal details plus one resolved answer per question.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub personal: PersonalInfo,
    pub answers: Vec<String>,
}

/// Row persisted for every accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub full_name: String,
    pub email: String,
    pub age: i32,
    pub weight_kg: f64,
    pub profession: String,
    pub whatsapp: String,
    pub score: i32,
    pub result: String,
}

impl SubmissionRecord {
    pub fn new(personal: PersonalInfo, score: u16, result: &str) -> Self {
        Self {
            full_name: personal.full_name,
            email: personal.email,
            age: i32::from(personal.age),
            weight_kg: personal.weight_kg,
            profession: personal.profession,
            whatsapp: personal.whatsapp,
            score: i32::from(score),
            result: result.to_string(),
        }
    }
}
