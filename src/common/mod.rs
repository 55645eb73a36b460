//! Shared helpers used across the udpecho test suites

pub mod test_utils;

pub use test_utils::{spawn_echo_server, spawn_truncating_server};
