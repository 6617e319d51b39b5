//! Investigation mechanics: the shared enums every layer speaks, and the
//! suspicion model built on top of them.
//!
//! Each enum crosses boundaries (projections, logs, serde) by its symbolic
//! variant name, never by ordinal. Parsing accepts either the symbolic name
//! or the human label, case-insensitively.

mod suspicion;

pub use suspicion::*;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Symbolic name used at every boundary.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }

            /// Human-readable label used in narrative text.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.as_str().eq_ignore_ascii_case(wanted)
                            || v.label().eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| {
                        Error::invalid(format!(
                            "unknown {} value: {:?}",
                            stringify!($name),
                            s
                        ))
                    })
            }
        }
    };
}

symbolic_enum! {
    /// Lifecycle of a case.
    pub enum CaseStatus {
        #[default]
        Open => "Open",
        InProgress => "In Progress",
        Solved => "Solved",
        Cold => "Cold",
        Unsolved => "Unsolved",
    }
}

symbolic_enum! {
    /// Case priority. Ordered Low < Medium < High < Urgent via [`Priority::rank`].
    pub enum Priority {
        Low => "Low",
        #[default]
        Medium => "Medium",
        High => "High",
        Urgent => "Urgent",
    }
}

symbolic_enum! {
    /// How well a suspect's alibi holds up.
    pub enum AlibiStrength {
        #[default]
        None => "None",
        Weak => "Weak",
        Moderate => "Moderate",
        Strong => "Strong",
        Confirmed => "Confirmed",
    }
}

symbolic_enum! {
    /// Investigative status of a suspect.
    pub enum SuspectStatus {
        #[default]
        Uninvestigated => "Uninvestigated",
        UnderInvestigation => "Under Investigation",
        Cleared => "Cleared",
        PrimeSuspect => "Prime Suspect",
        Convicted => "Convicted",
        Acquitted => "Acquitted",
    }
}

symbolic_enum! {
    /// Part a non-suspect character plays in an investigation.
    pub enum CharacterRole {
        Witness => "Witness",
        Informant => "Informant",
        Victim => "Victim",
        Officer => "Officer",
        Detective => "Detective",
        Expert => "Expert",
        #[default]
        Other => "Other",
    }
}

impl CaseStatus {
    pub fn is_solved(&self) -> bool {
        matches!(self, CaseStatus::Solved)
    }
}

impl Priority {
    /// Explicit ordering weight; declaration order carries no meaning.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
            Priority::Urgent => 3,
        }
    }

    /// High and Urgent.
    pub fn is_high(&self) -> bool {
        *self >= Priority::High
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl AlibiStrength {
    /// Strong and Confirmed alibis.
    pub fn is_strong(&self) -> bool {
        matches!(self, AlibiStrength::Strong | AlibiStrength::Confirmed)
    }
}

impl SuspectStatus {
    /// Cleared and Acquitted.
    pub fn is_cleared(&self) -> bool {
        matches!(self, SuspectStatus::Cleared | SuspectStatus::Acquitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbolic_names() {
        assert_eq!(CaseStatus::InProgress.as_str(), "InProgress");
        assert_eq!(CaseStatus::InProgress.label(), "In Progress");
        assert_eq!(SuspectStatus::PrimeSuspect.to_string(), "PrimeSuspect");
        assert_eq!(AlibiStrength::None.as_str(), "None");
    }

    #[test]
    fn test_parse_name_or_label() {
        assert_eq!("InProgress".parse::<CaseStatus>().unwrap(), CaseStatus::InProgress);
        assert_eq!("in progress".parse::<CaseStatus>().unwrap(), CaseStatus::InProgress);
        assert_eq!(" DETECTIVE ".parse::<CharacterRole>().unwrap(), CharacterRole::Detective);
        assert!(matches!(
            "Sleuth".parse::<CharacterRole>(),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Urgent);
        assert!(Priority::Urgent.is_high());
        assert!(Priority::High.is_high());
        assert!(!Priority::Medium.is_high());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CaseStatus::default(), CaseStatus::Open);
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(AlibiStrength::default(), AlibiStrength::None);
        assert_eq!(SuspectStatus::default(), SuspectStatus::Uninvestigated);
    }

    #[test]
    fn test_predicates() {
        assert!(AlibiStrength::Confirmed.is_strong());
        assert!(!AlibiStrength::Moderate.is_strong());
        assert!(SuspectStatus::Acquitted.is_cleared());
        assert!(!SuspectStatus::Convicted.is_cleared());
        assert!(CaseStatus::Solved.is_solved());
    }

    #[test]
    fn test_serde_uses_symbolic_name() {
        let json = serde_json::to_string(&SuspectStatus::UnderInvestigation).unwrap();
        assert_eq!(json, "\"UnderInvestigation\"");
    }
}
