pub mod balance;
pub mod canonicalize;
pub mod catalog;
pub mod compat;
pub mod validate;
