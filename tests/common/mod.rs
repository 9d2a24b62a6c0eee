//! Shared test setup

pub mod queue_utils;
