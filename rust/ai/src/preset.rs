//! Opponents that play one of the three stock strategies.

use serde::Serialize;
use showdown_engine::strategy::{DrawStrategy, RiskLevel};

use crate::AIOpponent;

/// Opponent playing the preset for its [`RiskLevel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetAI {
    risk: RiskLevel,
    name: String,
}

impl PresetAI {
    pub fn new(risk: RiskLevel) -> Self {
        let name = match risk {
            RiskLevel::Conservative => "ConservativeAI",
            RiskLevel::Balanced => "BalancedAI",
            RiskLevel::Aggressive => "AggressiveAI",
        };
        Self::with_name(risk, name)
    }

    pub fn with_name(risk: RiskLevel, name: impl Into<String>) -> Self {
        Self {
            risk,
            name: name.into(),
        }
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }
}

impl AIOpponent for PresetAI {
    fn strategy(&self) -> DrawStrategy {
        self.risk.preset()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// One-line summary shown when picking a strategy.
pub fn description(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Conservative => "Play it safe - keep pairs and high cards",
        RiskLevel::Balanced => "Balanced approach - moderate risk/reward",
        RiskLevel::Aggressive => "High risk, high reward - chase big hands",
    }
}
