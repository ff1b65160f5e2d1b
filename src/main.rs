//! Habit Tracker Frontend Entry Point

#[cfg(target_arch = "wasm32")]
fn main() {
    habit_tracker_ui::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("habit-tracker-ui runs in the browser; build it for wasm32-unknown-unknown.");
}
