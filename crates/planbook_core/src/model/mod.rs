//! Domain model for schedule records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store and service layers.
//! - Keep identifier assignment out of the model: drafts have no id until
//!   the store accepts them.
//!
//! # Invariants
//! - A stored `Schedule` always carries a store-assigned identifier.
//! - `updated_date` never precedes `created_date`.

pub mod schedule;
