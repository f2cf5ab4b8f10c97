pub mod date;
pub mod error;
