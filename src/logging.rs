//! Console Logging
//!
//! `log` records go to the browser console through `console_log`.

use log::Level;

/// Debug builds log everything down to `debug!`
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
pub fn init() {
    _ = console_log::init_with_level(max_level());
}
