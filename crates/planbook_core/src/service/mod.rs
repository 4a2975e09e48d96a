//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Translate storage-layer absence into reportable error kinds.
//!
//! # Invariants
//! - Services never retain record copies across calls; the store stays the
//!   single owner of record state.

pub mod schedule_service;
