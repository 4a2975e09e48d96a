//! Schedule use-case service.
//!
//! # Responsibility
//! - Provide create/get/update/delete/list entry points for boundary callers.
//! - Enforce the password gate on every mutation of an existing record.
//! - Shape stored records into boundary-facing response snapshots.
//!
//! # Invariants
//! - A mutation request's password is verification-only input; the stored
//!   password is written once at creation and never rewritten.
//! - Partial update: request fields left unset do not touch stored fields.
//! - Every accepted mutation advances `updated_date`; reads never do.

use crate::model::schedule::{NewSchedule, Schedule, ScheduleId};
use crate::repo::schedule_repo::ScheduleRepository;
use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for schedule service operations.
pub type ServiceResult<T> = Result<T, ScheduleServiceError>;

/// Service error for schedule use-cases. All kinds terminate the current
/// call; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleServiceError {
    /// No live record under this id: it never existed or was deleted.
    NotFound(ScheduleId),
    /// Supplied password missing or not equal to the stored one.
    InvalidPassword(ScheduleId),
    /// A record confirmed present vanished before the follow-up store
    /// mutation completed. Signals a bug or unsynchronized caller, not a
    /// user mistake.
    InconsistentState(&'static str),
}

impl Display for ScheduleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "schedule not found: {id}"),
            Self::InvalidPassword(id) => write!(f, "invalid password for schedule {id}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent schedule state: {details}")
            }
        }
    }
}

impl Error for ScheduleServiceError {}

/// Mutation payload shared by create and update, mirroring the wire body.
///
/// All fields are optional: create treats absent text fields as empty, and
/// update treats absent fields as "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    /// Task description to store or overwrite.
    pub task: Option<String>,
    /// Author display name to store or overwrite.
    pub author_name: Option<String>,
    /// On create: the guard secret to store. On update: verification input,
    /// never written.
    pub password: Option<String>,
}

/// Listing filter options. Absent filters always match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleQuery {
    /// Calendar date the record was last updated on, rendered `YYYY-MM-DD`.
    pub updated_date: Option<String>,
    /// Author name, compared case-insensitively on the full string.
    pub author_name: Option<String>,
}

/// Boundary-facing snapshot of one stored record.
///
/// Taken by value copy at return time; it does not track later mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub id: ScheduleId,
    pub task: String,
    pub author_name: String,
    pub password: String,
    pub created_date: NaiveDateTime,
    pub updated_date: NaiveDateTime,
}

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id,
            task: schedule.task.clone(),
            author_name: schedule.author_name.clone(),
            password: schedule.password.clone(),
            created_date: schedule.created_date,
            updated_date: schedule.updated_date,
        }
    }
}

/// Schedule service facade over a repository implementation.
pub struct ScheduleService<R: ScheduleRepository> {
    repo: R,
}

impl<R: ScheduleRepository> ScheduleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one schedule from the request fields.
    ///
    /// Absent text fields are stored as empty strings. There is no password
    /// check here: whatever password arrives becomes the record's guard
    /// secret, empty included. Creation cannot fail.
    pub fn create_schedule(&self, request: ScheduleRequest) -> ScheduleResponse {
        let draft = NewSchedule::new(
            request.task.unwrap_or_default(),
            request.author_name.unwrap_or_default(),
            request.password.unwrap_or_default(),
        );
        let saved = self.repo.save(draft);
        info!(
            "event=schedule_create module=service status=ok id={}",
            saved.id
        );
        ScheduleResponse::from(&saved)
    }

    /// Gets one schedule by id.
    pub fn get_schedule(&self, id: ScheduleId) -> ServiceResult<ScheduleResponse> {
        let schedule = self
            .repo
            .find_by_id(id)
            .ok_or(ScheduleServiceError::NotFound(id))?;
        debug!("event=schedule_get module=service status=ok id={id}");
        Ok(ScheduleResponse::from(&schedule))
    }

    /// Applies a password-gated partial update to one schedule.
    ///
    /// Request fields left unset are not touched; the request password is
    /// compared against the stored one and never written. On success the
    /// record's `updated_date` is stamped to now.
    pub fn update_schedule(
        &self,
        id: ScheduleId,
        request: ScheduleRequest,
    ) -> ServiceResult<ScheduleResponse> {
        let current = self
            .repo
            .find_by_id(id)
            .ok_or(ScheduleServiceError::NotFound(id))?;
        verify_password(&current, request.password.as_deref())?;

        let updated = self
            .repo
            .update_fields(
                id,
                request.task.as_deref(),
                request.author_name.as_deref(),
                Local::now().naive_local(),
            )
            .ok_or(ScheduleServiceError::NotFound(id))?;
        info!("event=schedule_update module=service status=ok id={id}");
        Ok(ScheduleResponse::from(&updated))
    }

    /// Deletes one schedule after verifying the password.
    ///
    /// A record that passes the lookup but is gone by the time the store
    /// removes it reports [`ScheduleServiceError::InconsistentState`], not
    /// `NotFound`: presence was just confirmed, so the disappearance is an
    /// invariant violation rather than ordinary absence.
    pub fn delete_schedule(&self, id: ScheduleId, password: Option<&str>) -> ServiceResult<()> {
        let current = self
            .repo
            .find_by_id(id)
            .ok_or(ScheduleServiceError::NotFound(id))?;
        verify_password(&current, password)?;

        if !self.repo.delete_by_id(id) {
            return Err(ScheduleServiceError::InconsistentState(
                "schedule vanished between lookup and removal",
            ));
        }
        info!("event=schedule_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Lists schedules matching every supplied filter, in store iteration
    /// order (ascending id).
    pub fn list_schedules(&self, query: &ScheduleQuery) -> Vec<ScheduleResponse> {
        let items: Vec<ScheduleResponse> = self
            .repo
            .list_all()
            .iter()
            .filter(|schedule| matches_query(schedule, query))
            .map(ScheduleResponse::from)
            .collect();
        debug!(
            "event=schedule_list module=service status=ok count={}",
            items.len()
        );
        items
    }
}

/// Opaque exact-equality password gate. An omitted password never matches.
fn verify_password(schedule: &Schedule, supplied: Option<&str>) -> ServiceResult<()> {
    match supplied {
        Some(password) if password == schedule.password => Ok(()),
        _ => Err(ScheduleServiceError::InvalidPassword(schedule.id)),
    }
}

/// Returns whether a record passes every supplied filter.
///
/// Rules:
/// - `updated_date` matches when the record's last-update calendar date
///   renders as exactly the filter string (`YYYY-MM-DD`); time-of-day is
///   discarded.
/// - `author_name` matches case-insensitively on full-string equality, not
///   substring containment.
/// - Absent filters always match.
fn matches_query(schedule: &Schedule, query: &ScheduleQuery) -> bool {
    let date_matches = query
        .updated_date
        .as_deref()
        .map_or(true, |wanted| schedule.updated_on().to_string() == wanted);

    let author_matches = query.author_name.as_deref().map_or(true, |wanted| {
        schedule.author_name.to_lowercase() == wanted.to_lowercase()
    });

    date_matches && author_matches
}
