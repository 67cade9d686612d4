pub mod commands;
pub mod environment;
pub mod page;
