//! Holdfast - hosts-file domain blocker with a cool-down on weakening changes.

pub mod cli;
pub mod config;
pub mod domain;
pub mod gate;
pub mod heal;
pub mod hosts;
pub mod platform;
pub mod preset;
pub mod state;
pub mod store;
