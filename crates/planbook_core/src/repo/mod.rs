//! Repository layer: storage contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the keyed-storage contract the service layer depends on.
//! - Own identifier assignment and the exclusion discipline around it.
//!
//! # Invariants
//! - Absence is reported as `Option::None`/`false`, never as an error;
//!   translating absence into failures is the service layer's job.
//! - Every compound read-modify-write runs under one lock acquisition.

pub mod schedule_repo;
