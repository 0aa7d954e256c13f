pub mod core;
pub mod error;
pub mod records;
pub mod request;
pub mod response;
pub mod script;
pub mod wire;
