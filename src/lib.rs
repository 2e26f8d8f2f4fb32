//! Dashboard widgets for a server-rendered analytics page.
//!
//! The host renders placeholder elements and calls [`services::host::mount_widget`]
//! for each one with JSON props and its `pushEvent` function. Widgets report
//! `set_date` and `set_interval` back through that function.

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod utils;
