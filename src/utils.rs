//! Some utility functions

use chrono::NaiveDate;

use crate::store::TaskStore;
use crate::traits::TaskStorage;
use crate::week;
use crate::Task;

/// A debug utility that pretty-prints a week of day columns
pub fn print_week<S>(store: &TaskStore<S>, anchor: NaiveDate)
where
    S: TaskStorage,
{
    println!("{}", week::format_range(anchor));

    for (day_name, date) in week::day_names().iter().zip(week::week_dates(anchor)) {
        let tasks = store.tasks_for_date(&date);
        println!("{} {}", day_name, date);
        for task in tasks {
            print_task(task);
        }
    }
}

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.completed() { "✓" } else { " " };
    println!("    {} [{}] {}\t{}", completion, task.priority(), task.text(), task.id());
}

/// Compare tasks by their creation time
///
/// Day columns display tasks in insertion order. This can be used to sort them differently, e.g. by using `sorted_by` from the `itertools` crate
pub fn compare_tasks_created(left: &&Task, right: &&Task) -> std::cmp::Ordering {
    Ord::cmp(left.created_at(), right.created_at())
}
