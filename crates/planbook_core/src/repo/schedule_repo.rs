//! Schedule repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed schedule storage for the lifetime of the process.
//! - Assign identifiers at save time using the max-of-current-ids policy.
//!
//! # Invariants
//! - Identifier computation and insert happen under one lock hold, so two
//!   concurrent saves can never pick the same id.
//! - Reads hand out detached copies; stored records are mutated only through
//!   [`ScheduleRepository::update_fields`].
//! - Iteration order is ascending by id and therefore stable for a given
//!   store state.

use crate::model::schedule::{NewSchedule, Schedule, ScheduleId};
use chrono::NaiveDateTime;
use parking_lot::Mutex;
use std::collections::BTreeMap;

/// Storage contract for schedule records.
///
/// Implementations own the authoritative copy of every record. Callers never
/// hold references into storage; every returned `Schedule` is a snapshot.
pub trait ScheduleRepository {
    /// Stores a draft, assigns the next free identifier and returns the
    /// stored record with the id set.
    fn save(&self, draft: NewSchedule) -> Schedule;

    /// Point lookup returning a detached copy. Absence is not an error at
    /// this layer.
    fn find_by_id(&self, id: ScheduleId) -> Option<Schedule>;

    /// Rewrites the given fields of a stored record in place and stamps the
    /// new `updated_date`, all under one lock hold. `None` fields are left
    /// untouched. Returns the updated copy, or `None` when the id has no
    /// live record.
    fn update_fields(
        &self,
        id: ScheduleId,
        task: Option<&str>,
        author_name: Option<&str>,
        updated_date: NaiveDateTime,
    ) -> Option<Schedule>;

    /// Removes the record if present and reports whether a removal occurred.
    fn delete_by_id(&self, id: ScheduleId) -> bool;

    /// Snapshot of all stored records in ascending id order.
    fn list_all(&self) -> Vec<Schedule>;
}

/// Process-lifetime schedule store backed by a locked ordered map.
#[derive(Debug, Default)]
pub struct MemoryScheduleRepository {
    schedules: Mutex<BTreeMap<ScheduleId, Schedule>>,
}

impl MemoryScheduleRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScheduleRepository for MemoryScheduleRepository {
    fn save(&self, draft: NewSchedule) -> Schedule {
        let mut schedules = self.schedules.lock();
        // Max over current contents plus one, not a monotonic counter:
        // numbers freed by deleting the highest records become assignable
        // again, while collisions with live records stay impossible.
        let id = schedules
            .last_key_value()
            .map_or(1, |(max_id, _)| max_id + 1);
        let schedule = draft.into_schedule(id);
        schedules.insert(id, schedule.clone());
        schedule
    }

    fn find_by_id(&self, id: ScheduleId) -> Option<Schedule> {
        self.schedules.lock().get(&id).cloned()
    }

    fn update_fields(
        &self,
        id: ScheduleId,
        task: Option<&str>,
        author_name: Option<&str>,
        updated_date: NaiveDateTime,
    ) -> Option<Schedule> {
        let mut schedules = self.schedules.lock();
        let schedule = schedules.get_mut(&id)?;
        if let Some(task) = task {
            schedule.task = task.to_owned();
        }
        if let Some(author_name) = author_name {
            schedule.author_name = author_name.to_owned();
        }
        schedule.updated_date = updated_date;
        Some(schedule.clone())
    }

    fn delete_by_id(&self, id: ScheduleId) -> bool {
        self.schedules.lock().remove(&id).is_some()
    }

    fn list_all(&self) -> Vec<Schedule> {
        self.schedules.lock().values().cloned().collect()
    }
}
