//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `planbook_core` linkage.
//! - Walk one schedule through its lifecycle with deterministic output for
//!   quick local sanity checks.

use planbook_core::{
    default_log_level, init_logging, MemoryScheduleRepository, ScheduleQuery, ScheduleRequest,
    ScheduleService,
};

fn main() {
    // Logging is opt-in so a plain run writes nothing to disk.
    if let Ok(log_dir) = std::env::var("PLANBOOK_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("planbook_cli logging disabled: {err}");
        }
    }

    println!("planbook_core version={}", planbook_core::core_version());

    let service = ScheduleService::new(MemoryScheduleRepository::new());

    let created = service.create_schedule(ScheduleRequest {
        task: Some("buy milk".to_owned()),
        author_name: Some("Bob".to_owned()),
        password: Some("pw1".to_owned()),
    });
    println!("created id={} task={}", created.id, created.task);

    match service.get_schedule(created.id) {
        Ok(found) => println!("found id={} author={}", found.id, found.author_name),
        Err(err) => println!("lookup failed: {err}"),
    }

    let request = ScheduleRequest {
        task: Some("buy milk and eggs".to_owned()),
        author_name: None,
        password: Some("pw1".to_owned()),
    };
    match service.update_schedule(created.id, request) {
        Ok(updated) => println!("updated id={} task={}", updated.id, updated.task),
        Err(err) => println!("update failed: {err}"),
    }

    let listed = service.list_schedules(&ScheduleQuery::default());
    println!("listed count={}", listed.len());

    match service.delete_schedule(created.id, Some("nope")) {
        Ok(()) => println!("delete with bad password went through"),
        Err(err) => println!("delete rejected: {err}"),
    }
    match service.delete_schedule(created.id, Some("pw1")) {
        Ok(()) => println!("deleted id={}", created.id),
        Err(err) => println!("delete failed: {err}"),
    }
    match service.get_schedule(created.id) {
        Ok(found) => println!("found id={}", found.id),
        Err(err) => println!("final lookup: {err}"),
    }
}
