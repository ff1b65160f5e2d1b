//! Habit Tracker UI
//!
//! Client layer of a server-rendered habit tracker: typed REST bindings,
//! per-widget controllers and, on wasm32, the Leptos islands that mount on
//! the page.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod models;
pub mod palette;
pub mod shell;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod context;

#[cfg(target_arch = "wasm32")]
pub use bootstrap::start;
