#![allow(dead_code)]

pub mod fakes;
pub mod utils;


// Index names shared across the scenario tests.
const SOURCE_INDEX: &str = "logs-2024";
const DEST_INDEX: &str = "logs-archive";
