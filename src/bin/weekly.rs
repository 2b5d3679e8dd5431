//! A tiny terminal run of the planner data layer.
//! It seeds a few tasks into the current week (first run only), then prints the day columns and the week progress.
//! Data is kept in `./fridge-door-data/`, so running it again shows the saved state.

use std::path::Path;

use fridge_door::storage::LocalStorage;
use fridge_door::utils;
use fridge_door::week::WeekCursor;
use fridge_door::Priority;
use fridge_door::TaskStore;

fn main() {
    env_logger::init();

    let data_folder = Path::new("fridge-door-data");
    if let Err(err) = std::fs::create_dir_all(data_folder) {
        log::warn!("Unable to create {:?}: {}", data_folder, err);
    }

    let mut store = TaskStore::new(LocalStorage::in_folder(data_folder));
    store.subscribe(|event| log::info!("Store change: {}", event));

    let cursor = WeekCursor::new();
    let dates = cursor.dates();

    if store.tasks().is_empty() {
        store.add_task("Buy milk", &dates[0], Priority::High);
        store.add_task("Water the plants", &dates[2], Priority::Low);
        store.add_task("Call the bank", &dates[2], Priority::Medium);
    }

    utils::print_week(&store, cursor.anchor());

    let stats = store.week_statistics(&dates);
    println!("Week progress: {}/{} ({}%)", stats.completed, stats.total, stats.percentage);
}
