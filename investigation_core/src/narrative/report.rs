//! Whole-casebook reports: the investigation timeline and the suspicion
//! ranking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use case_rules::{
    CaseId, CaseStatus, Classification, Priority, Result, SuspectId, SuspicionBand,
};

use super::NarrativeGenerator;

/// One case on the investigation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub case_id: CaseId,
    pub title: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    /// Falls back to the creation time when the incident time is unknown.
    pub incident_at: DateTime<Utc>,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}, {} priority)",
            self.created_at.format("%Y-%m-%d %H:%M"),
            self.title,
            self.status.label(),
            self.priority.label()
        )
    }
}

/// One line of the suspicion report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspicionEntry {
    pub suspect_id: SuspectId,
    pub name: String,
    pub suspicion_level: f64,
    pub band: SuspicionBand,
    pub classification: Classification,
}

impl fmt::Display for SuspicionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.1} ({}) - {}",
            self.name,
            self.suspicion_level,
            self.band.label(),
            self.classification.label()
        )
    }
}

impl NarrativeGenerator<'_> {
    /// Every case, oldest first. Ties on creation time go to the lower id.
    pub fn investigation_timeline(&self) -> Vec<TimelineEntry> {
        let mut entries: Vec<TimelineEntry> = self
            .book
            .cases()
            .map(|case| TimelineEntry {
                case_id: case.id,
                title: case.title.clone(),
                status: case.status,
                priority: case.priority,
                created_at: case.created_at,
                incident_at: case.incident_time(),
            })
            .collect();
        entries.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then(a.case_id.cmp(&b.case_id))
        });
        entries
    }

    /// The global timeline filtered to one case.
    pub fn case_timeline(&self, id: CaseId) -> Result<Vec<TimelineEntry>> {
        self.query.case(id)?;
        Ok(self
            .investigation_timeline()
            .into_iter()
            .filter(|entry| entry.case_id == id)
            .collect())
    }

    /// Every suspect, most suspicious first. Ties go to the name that sorts
    /// first.
    pub fn suspicion_report(&self) -> Vec<SuspicionEntry> {
        let mut entries: Vec<SuspicionEntry> = self
            .book
            .suspects()
            .map(|suspect| SuspicionEntry {
                suspect_id: suspect.id,
                name: suspect.name.clone(),
                suspicion_level: suspect.suspicion_level,
                band: suspect.suspicion_band(),
                classification: suspect.classification(),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.suspicion_level
                .total_cmp(&a.suspicion_level)
                .then_with(|| a.name.cmp(&b.name))
        });
        entries
    }

    /// The timeline as text, one case per line.
    pub fn render_timeline(&self) -> String {
        render_lines(&self.investigation_timeline())
    }

    /// The suspicion report as text, one suspect per line.
    pub fn render_suspicion_report(&self) -> String {
        render_lines(&self.suspicion_report())
    }
}

fn render_lines<T: fmt::Display>(entries: &[T]) -> String {
    entries
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
