pub mod band;
pub mod classify;
pub mod config;
pub mod error;
pub mod gamemaster;
pub mod layout;
pub mod metric;
pub mod record;
pub mod reports;
pub mod titles;
