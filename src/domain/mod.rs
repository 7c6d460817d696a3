pub mod account;
pub mod instruction;
pub mod ports;
