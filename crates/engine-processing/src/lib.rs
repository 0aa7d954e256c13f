pub mod error;
pub mod evaluate;
pub mod progress;
pub mod reader;
pub mod transform;
pub mod writer;
