//! Nuvia landing page.
//!
//! A single Dioxus page that greets visitors with a time- and season-aware
//! message and links to the Nuvia Business Tool store listings.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod greeting;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
pub mod weather;

pub use greeting::{resolve, resolve_with};
pub use types::{Greeting, IconCategory, ThemeMode};
