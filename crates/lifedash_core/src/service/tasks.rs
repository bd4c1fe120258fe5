//! To-do list views and mutations.

use crate::model::entity::EntityId;
use crate::model::task::Task;
use crate::store::Collection;
use chrono::NaiveDate;

/// Flips `completed` on one task; unknown ids are ignored.
pub fn toggle_completed(tasks: Collection<Task>, id: &EntityId) -> Collection<Task> {
    tasks.update(id, |mut task| {
        task.completed = !task.completed;
        task
    })
}

/// Open tasks first, then by priority (high to low); ties keep stored order.
pub fn sort_for_display<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut sorted: Vec<&Task> = tasks.into_iter().collect();
    sorted.sort_by_key(|task| (task.completed, task.priority.rank()));
    sorted
}

/// Truncates a display list to `limit` entries when one is set.
pub fn limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

/// Tasks due on `date`.
pub fn due_on<'a>(tasks: &'a [Task], date: NaiveDate) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.due_date.is_some_and(|due| due.date_naive() == date))
        .collect()
}

/// `(completed, total)`.
pub fn completion_counts(tasks: &[Task]) -> (usize, usize) {
    (tasks.iter().filter(|task| task.completed).count(), tasks.len())
}

#[cfg(test)]
mod tests {
    use super::{completion_counts, due_on, limit, sort_for_display, toggle_completed};
    use crate::model::entity::EntityId;
    use crate::model::task::{Priority, Task};
    use crate::store::Collection;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn task(id: &str, priority: Priority, completed: bool) -> Task {
        let mut task = Task::new(EntityId::from(id), id, priority);
        task.completed = completed;
        task
    }

    #[test]
    fn display_order_puts_open_high_priority_first() {
        let tasks = vec![
            task("done-high", Priority::High, true),
            task("low", Priority::Low, false),
            task("medium", Priority::Medium, false),
            task("high", Priority::High, false),
            task("low-2", Priority::Low, false),
        ];
        let order: Vec<&str> = sort_for_display(&tasks)
            .into_iter()
            .map(|task| task.id.as_str())
            .collect();
        assert_eq!(order, vec!["high", "medium", "low", "low-2", "done-high"]);
        assert_eq!(limit(order, Some(2)).len(), 2);
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let tasks = Collection::from_records(vec![
            task("1", Priority::Low, false),
            task("2", Priority::Low, false),
        ]);
        let tasks = toggle_completed(tasks, &EntityId::from("2"));
        assert_eq!(completion_counts(tasks.records()), (1, 2));
        assert!(tasks.records()[1].completed);

        let unchanged = toggle_completed(tasks.clone(), &EntityId::from("missing"));
        assert_eq!(unchanged, tasks);
    }

    #[test]
    fn due_on_matches_calendar_day() {
        let mut dated = task("1", Priority::Low, false);
        dated.due_date = Some(Utc.with_ymd_and_hms(2024, 3, 4, 23, 30, 0).unwrap());
        let tasks = vec![dated, task("2", Priority::Low, false)];

        assert_eq!(due_on(&tasks, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()).len(), 1);
        assert!(due_on(&tasks, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).is_empty());
    }
}
