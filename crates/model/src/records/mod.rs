pub mod action;
pub mod document;
pub mod page;
