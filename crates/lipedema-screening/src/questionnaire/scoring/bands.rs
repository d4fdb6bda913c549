use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the high band.
pub const HIGH_THRESHOLD: u16 = 13;
/// Lower bound (inclusive) of the moderate band.
pub const MODERATE_THRESHOLD: u16 = 9;
/// Lower bound (inclusive) of the low band.
pub const LOW_THRESHOLD: u16 = 5;

/// Likelihood band a total score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    VeryLow,
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub const fn classify(score: u16) -> Self {
        if score >= HIGH_THRESHOLD {
            RiskBand::High
        } else if score >= MODERATE_THRESHOLD {
            RiskBand::Moderate
        } else if score >= LOW_THRESHOLD {
            RiskBand::Low
        } else {
            RiskBand::VeryLow
        }
    }

    /// Label stored in the `resultado` column.
    pub const fn label(self) -> &'static str {
        match self {
            RiskBand::High => "75-100% de chance de ter lipedema",
            RiskBand::Moderate => "50-75% de chance de ter lipedema",
            RiskBand::Low => "25-50% de chance de ter lipedema",
            RiskBand::VeryLow => "0-25% de chance de ter lipedema",
        }
    }

    pub const fn advice(self) -> &'static str {
        match self {
            RiskBand::High => "Alta chance de lipedema. Procure um especialista.",
            RiskBand::Moderate => "Moderada chance de lipedema. Considere avaliação médica.",
            RiskBand::Low => "Baixa chance, mas consulte um profissional se houver sintomas.",
            RiskBand::VeryLow => "Muito baixa chance, mas procure orientação se houver sintomas.",
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            RiskBand::High => "high",
            RiskBand::Moderate => "moderate",
            RiskBand::Low => "low",
            RiskBand::VeryLow => "very_low",
        }
    }
}
