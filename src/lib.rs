#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod client;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod tui;
