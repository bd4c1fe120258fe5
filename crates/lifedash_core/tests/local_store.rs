use chrono::{DateTime, Duration, TimeZone, Utc};
use lifedash_core::model::habit::{Habit, HabitFrequency};
use lifedash_core::model::task::{Priority, Task};
use lifedash_core::model::tutoring::TutoringSession;
use lifedash_core::service::{habits, tasks, tutoring};
use lifedash_core::{
    Collection, CoreConfig, CoreContext, EntityId, KeyValueStore, LifeArea, LocalStore,
    MemoryKvStore,
};

fn task(text: &str, priority: Priority) -> impl FnOnce(EntityId) -> Task + '_ {
    move |id| Task::new(id, text, priority)
}

#[test]
fn save_then_load_roundtrips() {
    let store = LocalStore::new(MemoryKvStore::new());

    let empty = Collection::<Task>::new();
    store.save(&empty).unwrap();
    assert_eq!(store.load::<Task>().unwrap(), empty);

    let (single, _) = Collection::new().add(task("one", Priority::Low));
    store.save(&single).unwrap();
    assert_eq!(store.load::<Task>().unwrap(), single);

    let (many, _) = single.add(|id| {
        let mut record = Task::new(id, "two", Priority::High);
        record.due_date = Some(Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 15).unwrap());
        record.area = Some(LifeArea::Tutoring);
        record
    });
    let (many, _) = many.add(task("three", Priority::Medium));
    store.save(&many).unwrap();
    assert_eq!(store.load::<Task>().unwrap(), many);
}

#[test]
fn garbage_blob_loads_as_empty() {
    let store = LocalStore::new(MemoryKvStore::new());
    store.backend().set_item("todos", "not json").unwrap();

    assert!(store.load::<Task>().unwrap().is_empty());
}

#[test]
fn add_then_remove_restores_the_original() {
    let (original, _) = Collection::new().add(task("keep", Priority::Low));
    let (grown, added) = original.clone().add(task("drop", Priority::Low));

    assert_eq!(grown.len(), 2);
    assert_eq!(grown.remove(&added.id), original);
}

#[test]
fn update_of_unknown_id_is_a_no_op() {
    let (tasks, _) = Collection::new().add(task("only", Priority::Low));
    let unchanged = tasks.clone().update(&EntityId::from("missing"), |mut record| {
        record.text = "changed".to_string();
        record
    });
    assert_eq!(unchanged, tasks);
}

#[test]
fn buy_milk_scenario() {
    let store = LocalStore::new(MemoryKvStore::new());

    let created = store
        .mutate::<Task>(|tasks| tasks.add(task("Buy milk", Priority::Medium)).0)
        .unwrap();
    let id = created.records()[0].id.clone();

    let reloaded = store.load::<Task>().unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.records()[0].text, "Buy milk");
    assert!(!reloaded.records()[0].completed);

    store
        .mutate::<Task>(|tasks| tasks::toggle_completed(tasks, &id))
        .unwrap();
    assert!(store.load::<Task>().unwrap().records()[0].completed);

    store.mutate::<Task>(|tasks| tasks.remove(&id)).unwrap();
    assert!(store.load::<Task>().unwrap().is_empty());
}

#[test]
fn browser_written_dates_are_revived() {
    let store = LocalStore::new(MemoryKvStore::new());
    store
        .backend()
        .set_item(
            "habits",
            r#"[{"id":"1714550400000","name":"Meditate","description":"",
                "frequency":"custom","customDays":[1,3,5],
                "completedDates":["2024-05-01T06:30:00.000Z","2024-05-03T06:45:12.345Z"],
                "createdAt":"2024-04-30T08:00:00.000Z","color":"bg-teal-500",
                "goal":10,"unit":"minutes","area":"personal"}]"#,
        )
        .unwrap();

    let habits = store.load::<Habit>().unwrap();
    let habit = &habits.records()[0];
    assert_eq!(habit.frequency, HabitFrequency::Custom);
    assert_eq!(habit.completed_dates.len(), 2);
    assert_eq!(
        habit.completed_dates[1],
        Utc.with_ymd_and_hms(2024, 5, 3, 6, 45, 12).unwrap() + chrono::Duration::milliseconds(345)
    );

    store.save(&habits).unwrap();
    let raw = store.backend().get_item("habits").unwrap().unwrap();
    assert!(raw.contains("\"2024-05-03T06:45:12.345Z\""));
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoreConfig::new(dir.path()).unwrap();

    let saved = {
        let context = CoreContext::open(&config).unwrap();
        context
            .local_store()
            .mutate::<Task>(|tasks| tasks.add(task("Persist me", Priority::High)).0)
            .unwrap()
    };

    let context = CoreContext::open(&config).unwrap();
    assert_eq!(context.local_store().load::<Task>().unwrap(), saved);
    assert!(config.database_path().exists());
}

fn clock_reading() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap() + Duration::nanoseconds(123_456_789)
}

#[test]
fn clock_stamped_habits_reload_unchanged() {
    let store = LocalStore::new(MemoryKvStore::new());
    let now = clock_reading();

    let (created, habit) = Collection::new()
        .add(|id| Habit::new(id, "Stretch", HabitFrequency::Daily, now));
    store.save(&created).unwrap();
    assert_eq!(store.load::<Habit>().unwrap(), created);

    let saved = store
        .mutate::<Habit>(|habits| habits::toggle_in(habits, &habit.id, now))
        .unwrap();
    assert_eq!(saved.records()[0].completed_dates.len(), 1);
    assert_eq!(store.load::<Habit>().unwrap(), saved);
}

#[test]
fn clock_stamped_payment_reloads_unchanged() {
    let store = LocalStore::new(MemoryKvStore::new());
    let now = clock_reading();

    let (sessions, session) = Collection::new().add(|id| TutoringSession {
        id,
        student_name: "Ada".to_string(),
        subject: "Physics".to_string(),
        date: Utc.with_ymd_and_hms(2024, 5, 7, 0, 0, 0).unwrap(),
        start_time: "16:00".to_string(),
        end_time: "17:30".to_string(),
        duration_hours: 1.5,
        hourly_rate: 40.0,
        is_paid: false,
        payment_date: None,
        notes: None,
        location: None,
        is_recurring: false,
        recurring_frequency: None,
    });
    store.save(&sessions).unwrap();

    let paid = tutoring::toggle_paid(store.load().unwrap(), &session.id, now);
    store.save(&paid).unwrap();
    assert_eq!(store.load::<TutoringSession>().unwrap(), paid);
    assert_eq!(
        paid.records()[0].payment_date,
        Some(Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap() + Duration::milliseconds(123))
    );
}
