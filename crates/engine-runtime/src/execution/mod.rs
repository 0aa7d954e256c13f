pub mod executor;
pub mod report;
pub mod settings;
