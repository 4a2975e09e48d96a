//! Schedule domain model.
//!
//! # Responsibility
//! - Define the stored record (`Schedule`) and the pre-assignment draft
//!   (`NewSchedule`).
//! - Keep timestamp bookkeeping rules next to the data they protect.
//!
//! # Invariants
//! - `id` is assigned exactly once, by the store, and never changes.
//! - `created_date` is set once at construction; `updated_date` starts equal
//!   to it and moves forward on every accepted mutation.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Store-assigned schedule identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ScheduleId = u64;

/// Canonical schedule record as owned by the store.
///
/// The password is an opaque shared secret compared verbatim on mutation;
/// it is part of the record and travels with every projection of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Unique identifier, assigned by the store at save time.
    pub id: ScheduleId,
    /// Free-form task description.
    pub task: String,
    /// Display name of the record author.
    pub author_name: String,
    /// Opaque mutation guard secret.
    pub password: String,
    /// Wall-clock time of creation. Never changes afterwards.
    pub created_date: NaiveDateTime,
    /// Wall-clock time of the last accepted mutation.
    pub updated_date: NaiveDateTime,
}

impl Schedule {
    /// Returns the calendar-date component of the last mutation time.
    ///
    /// Listing filters compare against this value only; time-of-day is
    /// deliberately discarded.
    pub fn updated_on(&self) -> NaiveDate {
        self.updated_date.date()
    }
}

/// Schedule draft awaiting identifier assignment by the store.
///
/// Splitting the draft from [`Schedule`] keeps "record without an id" out
/// of the stored shape entirely: a `Schedule` you can observe always has a
/// valid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchedule {
    pub task: String,
    pub author_name: String,
    pub password: String,
    pub created_date: NaiveDateTime,
    pub updated_date: NaiveDateTime,
}

impl NewSchedule {
    /// Creates a draft with both timestamps stamped to the current wall
    /// clock, so a freshly stored record satisfies
    /// `created_date == updated_date`.
    pub fn new(
        task: impl Into<String>,
        author_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let now = Local::now().naive_local();
        Self {
            task: task.into(),
            author_name: author_name.into(),
            password: password.into(),
            created_date: now,
            updated_date: now,
        }
    }

    /// Promotes the draft into a stored record under the given identifier.
    ///
    /// Only the store calls this; the identifier must be free.
    pub fn into_schedule(self, id: ScheduleId) -> Schedule {
        Schedule {
            id,
            task: self.task,
            author_name: self.author_name,
            password: self.password,
            created_date: self.created_date,
            updated_date: self.updated_date,
        }
    }
}
