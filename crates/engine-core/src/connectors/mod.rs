pub mod destination;
pub mod script;
pub mod source;
