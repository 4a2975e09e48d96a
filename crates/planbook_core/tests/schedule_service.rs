use chrono::NaiveDateTime;
use planbook_core::{
    MemoryScheduleRepository, NewSchedule, Schedule, ScheduleId, ScheduleRepository,
    ScheduleRequest, ScheduleService, ScheduleServiceError,
};
use std::thread::sleep;
use std::time::Duration;

fn service() -> ScheduleService<MemoryScheduleRepository> {
    ScheduleService::new(MemoryScheduleRepository::new())
}

fn request(task: Option<&str>, author_name: Option<&str>, password: Option<&str>) -> ScheduleRequest {
    ScheduleRequest {
        task: task.map(str::to_owned),
        author_name: author_name.map(str::to_owned),
        password: password.map(str::to_owned),
    }
}

#[test]
fn create_assigns_id_and_equal_timestamps() {
    let service = service();

    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    assert_eq!(created.id, 1);
    assert_eq!(created.task, "buy milk");
    assert_eq!(created.author_name, "Bob");
    assert_eq!(created.password, "pw1");
    assert_eq!(created.created_date, created.updated_date);
}

#[test]
fn create_stores_absent_fields_as_empty_strings() {
    let service = service();

    let created = service.create_schedule(ScheduleRequest::default());

    assert_eq!(created.task, "");
    assert_eq!(created.author_name, "");
    assert_eq!(created.password, "");

    // The empty password is still the guard secret: supplying it verbatim
    // passes the gate, omitting it does not.
    let denied = service.update_schedule(created.id, request(Some("x"), None, None));
    assert_eq!(
        denied.unwrap_err(),
        ScheduleServiceError::InvalidPassword(created.id)
    );
    let accepted = service.update_schedule(created.id, request(Some("x"), None, Some("")));
    assert_eq!(accepted.unwrap().task, "x");
}

#[test]
fn get_schedule_returns_current_snapshot() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    let fetched = service.get_schedule(created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn get_schedule_unknown_id_is_not_found() {
    let service = service();

    assert_eq!(
        service.get_schedule(42).unwrap_err(),
        ScheduleServiceError::NotFound(42)
    );
}

#[test]
fn update_with_wrong_password_changes_nothing() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    let err = service
        .update_schedule(created.id, request(Some("changed"), Some("Mallory"), Some("wrong")))
        .unwrap_err();
    assert_eq!(err, ScheduleServiceError::InvalidPassword(created.id));

    let current = service.get_schedule(created.id).unwrap();
    assert_eq!(current.task, "buy milk");
    assert_eq!(current.author_name, "Bob");
    assert_eq!(current.updated_date, created.updated_date);
}

#[test]
fn update_without_password_changes_nothing() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    let err = service
        .update_schedule(created.id, request(Some("changed"), None, None))
        .unwrap_err();
    assert_eq!(err, ScheduleServiceError::InvalidPassword(created.id));

    let current = service.get_schedule(created.id).unwrap();
    assert_eq!(current.task, "buy milk");
    assert_eq!(current.updated_date, created.updated_date);
}

#[test]
fn update_with_task_only_keeps_author_and_advances_updated_date() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    sleep(Duration::from_millis(5));
    let updated = service
        .update_schedule(created.id, request(Some("buy milk and eggs"), None, Some("pw1")))
        .unwrap();

    assert_eq!(updated.task, "buy milk and eggs");
    assert_eq!(updated.author_name, "Bob");
    assert_eq!(updated.password, "pw1");
    assert_eq!(updated.created_date, created.created_date);
    assert!(updated.updated_date > created.updated_date);
}

#[test]
fn update_with_author_only_keeps_task() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    let updated = service
        .update_schedule(created.id, request(None, Some("Robert"), Some("pw1")))
        .unwrap();

    assert_eq!(updated.task, "buy milk");
    assert_eq!(updated.author_name, "Robert");
}

#[test]
fn update_password_field_never_rewrites_the_stored_secret() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    service
        .update_schedule(created.id, request(Some("changed"), None, Some("pw1")))
        .unwrap();

    // The old secret still gates the next mutation.
    let again = service.update_schedule(created.id, request(Some("changed twice"), None, Some("pw1")));
    assert!(again.is_ok());
    assert_eq!(service.get_schedule(created.id).unwrap().password, "pw1");
}

#[test]
fn update_unknown_id_is_not_found() {
    let service = service();

    let err = service
        .update_schedule(9, request(Some("x"), None, Some("pw")))
        .unwrap_err();
    assert_eq!(err, ScheduleServiceError::NotFound(9));
}

#[test]
fn delete_with_wrong_password_keeps_the_record() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    let err = service.delete_schedule(created.id, Some("wrong")).unwrap_err();
    assert_eq!(err, ScheduleServiceError::InvalidPassword(created.id));
    assert!(service.get_schedule(created.id).is_ok());

    let err = service.delete_schedule(created.id, None).unwrap_err();
    assert_eq!(err, ScheduleServiceError::InvalidPassword(created.id));
    assert!(service.get_schedule(created.id).is_ok());
}

#[test]
fn delete_unknown_id_is_not_found() {
    let service = service();

    assert_eq!(
        service.delete_schedule(9, Some("pw")).unwrap_err(),
        ScheduleServiceError::NotFound(9)
    );
}

#[test]
fn every_operation_on_a_deleted_id_reports_not_found() {
    let service = service();
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));
    service.delete_schedule(created.id, Some("pw1")).unwrap();

    assert_eq!(
        service.get_schedule(created.id).unwrap_err(),
        ScheduleServiceError::NotFound(created.id)
    );
    assert_eq!(
        service
            .update_schedule(created.id, request(Some("x"), None, Some("pw1")))
            .unwrap_err(),
        ScheduleServiceError::NotFound(created.id)
    );
    assert_eq!(
        service.delete_schedule(created.id, Some("pw1")).unwrap_err(),
        ScheduleServiceError::NotFound(created.id)
    );
}

#[test]
fn live_ids_stay_distinct_across_mixed_creates_and_deletes() {
    let service = service();

    let a = service.create_schedule(request(Some("a"), Some("A"), Some("pw")));
    let b = service.create_schedule(request(Some("b"), Some("B"), Some("pw")));
    let c = service.create_schedule(request(Some("c"), Some("C"), Some("pw")));
    assert_eq!((a.id, b.id, c.id), (1, 2, 3));

    service.delete_schedule(b.id, Some("pw")).unwrap();
    let d = service.create_schedule(request(Some("d"), Some("D"), Some("pw")));
    assert_eq!(d.id, 4);

    // Clearing the top of the id range makes those numbers assignable again.
    service.delete_schedule(d.id, Some("pw")).unwrap();
    service.delete_schedule(c.id, Some("pw")).unwrap();
    let e = service.create_schedule(request(Some("e"), Some("E"), Some("pw")));
    assert_eq!(e.id, 2);

    let live: Vec<u64> = service
        .list_schedules(&Default::default())
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(live, vec![1, 2]);
}

#[test]
fn end_to_end_lifecycle() {
    let service = service();

    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));
    assert_eq!(created.id, 1);
    assert_eq!(created.created_date, created.updated_date);

    sleep(Duration::from_millis(5));
    let updated = service
        .update_schedule(1, request(Some("buy milk and eggs"), None, Some("pw1")))
        .unwrap();
    assert_eq!(updated.task, "buy milk and eggs");
    assert_eq!(updated.author_name, "Bob");
    assert!(updated.updated_date > created.updated_date);

    let denied = service.delete_schedule(1, Some("wrong")).unwrap_err();
    assert_eq!(denied, ScheduleServiceError::InvalidPassword(1));
    assert!(service.get_schedule(1).is_ok());

    service.delete_schedule(1, Some("pw1")).unwrap();
    assert_eq!(
        service.get_schedule(1).unwrap_err(),
        ScheduleServiceError::NotFound(1)
    );
}

/// Repository double whose removals always miss, simulating a record that
/// vanishes between the service's lookup and the store's delete.
struct VanishingRepository {
    inner: MemoryScheduleRepository,
}

impl ScheduleRepository for VanishingRepository {
    fn save(&self, draft: NewSchedule) -> Schedule {
        self.inner.save(draft)
    }

    fn find_by_id(&self, id: ScheduleId) -> Option<Schedule> {
        self.inner.find_by_id(id)
    }

    fn update_fields(
        &self,
        id: ScheduleId,
        task: Option<&str>,
        author_name: Option<&str>,
        updated_date: NaiveDateTime,
    ) -> Option<Schedule> {
        self.inner.update_fields(id, task, author_name, updated_date)
    }

    fn delete_by_id(&self, id: ScheduleId) -> bool {
        let _ = self.inner.delete_by_id(id);
        false
    }

    fn list_all(&self) -> Vec<Schedule> {
        self.inner.list_all()
    }
}

#[test]
fn delete_reports_inconsistent_state_when_confirmed_record_vanishes() {
    let service = ScheduleService::new(VanishingRepository {
        inner: MemoryScheduleRepository::new(),
    });
    let created = service.create_schedule(request(Some("buy milk"), Some("Bob"), Some("pw1")));

    let err = service.delete_schedule(created.id, Some("pw1")).unwrap_err();
    assert!(matches!(err, ScheduleServiceError::InconsistentState(_)));
}
