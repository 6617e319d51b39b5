//! Case definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{limit_text, require_text, CaseId};
use crate::config::CasebookConfig;
use crate::error::Result;
use crate::mechanics::{CaseStatus, Priority};

/// An investigation record.
///
/// Linked suspects and characters live in the
/// [`RelationshipGraph`](crate::RelationshipGraph), not on the case itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    /// Unique among live cases.
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub solution: String,
    pub notes: String,
    /// Insertion ordered, no duplicates.
    pub evidence: Vec<String>,
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
    /// When the incident happened, if known.
    pub incident_at: Option<DateTime<Utc>>,
}

impl Case {
    pub(crate) fn from_new(id: CaseId, new: NewCase, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            location: new.location,
            status: new.status,
            priority: new.priority,
            solution: new.solution,
            notes: new.notes,
            evidence: new.evidence,
            tags: new.tags,
            created_at,
            incident_at: new.incident_at,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status.is_solved()
    }

    /// Incident time, falling back to creation time.
    pub fn incident_time(&self) -> DateTime<Utc> {
        self.incident_at.unwrap_or(self.created_at)
    }

    /// Whole days between the incident and `now`.
    pub fn days_since_incident_at(&self, now: DateTime<Utc>) -> i64 {
        (now - self.incident_time()).num_days()
    }

    /// Cold when marked `Cold`, or when unsolved and the incident is older
    /// than `cold_after_days`.
    pub fn is_cold_case_at(&self, now: DateTime<Utc>, cold_after_days: i64) -> bool {
        self.status == CaseStatus::Cold
            || (!self.is_solved() && self.days_since_incident_at(now) > cold_after_days)
    }

    /// [`Case::is_cold_case_at`] against the wall clock.
    pub fn is_cold_case(&self, cold_after_days: i64) -> bool {
        self.is_cold_case_at(Utc::now(), cold_after_days)
    }

    pub fn has_evidence(&self, item: &str) -> bool {
        self.evidence.iter().any(|e| e == item)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Check every field against the configured limits.
    pub fn validate(&self, config: &CasebookConfig) -> Result<()> {
        require_text("title", &self.title, config.max_title_length)?;
        limit_text("description", &self.description, config.max_description_length)?;
        limit_text("location", &self.location, config.max_title_length)?;
        limit_text("solution", &self.solution, config.max_description_length)?;
        limit_text("notes", &self.notes, config.max_description_length)?;
        for item in &self.evidence {
            require_text("evidence", item, config.max_description_length)?;
        }
        for tag in &self.tags {
            require_text("tag", tag, config.max_name_length)?;
        }
        Ok(())
    }
}

/// Input for creating a case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCase {
    pub title: String,
    pub description: String,
    pub location: String,
    pub status: CaseStatus,
    pub priority: Priority,
    pub solution: String,
    pub notes: String,
    pub evidence: Vec<String>,
    pub tags: BTreeSet<String>,
    pub incident_at: Option<DateTime<Utc>>,
}

impl NewCase {
    /// Create a new open, medium priority case input with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = solution.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Add an evidence item; duplicates are ignored.
    pub fn with_evidence(mut self, item: impl Into<String>) -> Self {
        let item = item.into();
        if !self.evidence.contains(&item) {
            self.evidence.push(item);
        }
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_incident_at(mut self, incident_at: DateTime<Utc>) -> Self {
        self.incident_at = Some(incident_at);
        self
    }
}

/// Field-change set for [`Casebook::update_case`](crate::Casebook::update_case).
///
/// Only fields set to `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaseChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub solution: Option<String>,
    pub notes: Option<String>,
    /// `Some(None)` clears the incident time.
    pub incident_at: Option<Option<DateTime<Utc>>>,
}

impl CaseChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn status(mut self, status: CaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = Some(solution.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn incident_at(mut self, incident_at: Option<DateTime<Utc>>) -> Self {
        self.incident_at = Some(incident_at);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, case: &mut Case) {
        if let Some(title) = self.title {
            case.title = title;
        }
        if let Some(description) = self.description {
            case.description = description;
        }
        if let Some(location) = self.location {
            case.location = location;
        }
        if let Some(status) = self.status {
            case.status = status;
        }
        if let Some(priority) = self.priority {
            case.priority = priority;
        }
        if let Some(solution) = self.solution {
            case.solution = solution;
        }
        if let Some(notes) = self.notes {
            case.notes = notes;
        }
        if let Some(incident_at) = self.incident_at {
            case.incident_at = incident_at;
        }
    }
}
