//! Suspicion model: classifies a suspect from suspicion level, alibi
//! strength and status.
//!
//! Suspicion level is an input set by callers. Nothing in this crate derives
//! it from evidence; a narrative layer may read it but never writes it.
//!
//! Precedence when the signals disagree:
//!
//! 1. `Convicted` status classifies as [`Classification::Convicted`].
//! 2. `Cleared` or `Acquitted` status classifies as [`Classification::Cleared`],
//!    whatever the score.
//! 3. `PrimeSuspect` status classifies as [`Classification::PrimeSuspect`].
//! 4. A level at or above [`PRIME_SUSPECT_THRESHOLD`] without a strong alibi
//!    classifies as [`Classification::PrimeSuspect`].
//! 5. `UnderInvestigation`, or a high level backed by a strong alibi,
//!    classifies as [`Classification::PersonOfInterest`].
//! 6. Anything else is [`Classification::Unassessed`].

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AlibiStrength, SuspectStatus};

/// Score at or above which a suspect without a strong alibi is a prime suspect.
pub const PRIME_SUSPECT_THRESHOLD: f64 = 75.0;

pub const MIN_SUSPICION: f64 = 0.0;
pub const MAX_SUSPICION: f64 = 100.0;

/// Outcome of the suspicion model for one suspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Convicted,
    Cleared,
    PrimeSuspect,
    PersonOfInterest,
    Unassessed,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Convicted => "Convicted",
            Classification::Cleared => "Cleared",
            Classification::PrimeSuspect => "PrimeSuspect",
            Classification::PersonOfInterest => "PersonOfInterest",
            Classification::Unassessed => "Unassessed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Convicted => "Convicted",
            Classification::Cleared => "Cleared",
            Classification::PrimeSuspect => "Prime Suspect",
            Classification::PersonOfInterest => "Person of Interest",
            Classification::Unassessed => "Unassessed",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse reading of a suspicion level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuspicionBand {
    /// Below 25.
    Low,
    /// 25 up to 50.
    Medium,
    /// 50 up to 75.
    High,
    /// 75 and above.
    VeryHigh,
}

impl SuspicionBand {
    pub fn from_level(level: f64) -> Self {
        if level < 25.0 {
            SuspicionBand::Low
        } else if level < 50.0 {
            SuspicionBand::Medium
        } else if level < PRIME_SUSPECT_THRESHOLD {
            SuspicionBand::High
        } else {
            SuspicionBand::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SuspicionBand::Low => "Low",
            SuspicionBand::Medium => "Medium",
            SuspicionBand::High => "High",
            SuspicionBand::VeryHigh => "Very High",
        }
    }
}

/// Whether a value is an acceptable suspicion level. NaN is not.
pub fn is_valid_suspicion(level: f64) -> bool {
    (MIN_SUSPICION..=MAX_SUSPICION).contains(&level)
}

/// Classify a suspect. Pure; see the module docs for precedence.
pub fn classify(level: f64, alibi: AlibiStrength, status: SuspectStatus) -> Classification {
    let high_score = level >= PRIME_SUSPECT_THRESHOLD;

    match status {
        SuspectStatus::Convicted => Classification::Convicted,
        SuspectStatus::Cleared | SuspectStatus::Acquitted => Classification::Cleared,
        SuspectStatus::PrimeSuspect => Classification::PrimeSuspect,
        _ if high_score && !alibi.is_strong() => Classification::PrimeSuspect,
        SuspectStatus::UnderInvestigation => Classification::PersonOfInterest,
        _ if high_score => Classification::PersonOfInterest,
        _ => Classification::Unassessed,
    }
}
