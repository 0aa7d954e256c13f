pub mod consistency;
pub mod limit;
pub mod version;
