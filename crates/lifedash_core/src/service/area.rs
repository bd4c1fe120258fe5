//! Life-area filtering shared by every area-tagged widget.

use crate::model::area::{AreaFilter, AreaTagged};

/// Records visible under `filter`, in their stored order.
pub fn filter_by_area<'a, T: AreaTagged>(items: &'a [T], filter: &AreaFilter) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| filter.matches(item.life_area()))
        .collect()
}

/// Number of records visible under `filter`.
pub fn count_in_area<T: AreaTagged>(items: &[T], filter: &AreaFilter) -> usize {
    items
        .iter()
        .filter(|item| filter.matches(item.life_area()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::{count_in_area, filter_by_area};
    use crate::model::area::{AreaFilter, LifeArea};
    use crate::model::entity::EntityId;
    use crate::model::task::{Priority, Task};

    fn task(id: &str, area: Option<LifeArea>) -> Task {
        let mut task = Task::new(EntityId::from(id), id, Priority::Low);
        task.area = area;
        task
    }

    #[test]
    fn all_keeps_untagged_records() {
        let tasks = vec![
            task("a", Some(LifeArea::University)),
            task("b", None),
            task("c", Some(LifeArea::Personal)),
        ];
        assert_eq!(filter_by_area(&tasks, &AreaFilter::All).len(), 3);

        let university = filter_by_area(&tasks, &AreaFilter::Only(LifeArea::University));
        assert_eq!(university.len(), 1);
        assert_eq!(university[0].text, "a");
        assert_eq!(count_in_area(&tasks, &AreaFilter::parse("personal")), 1);
    }
}
