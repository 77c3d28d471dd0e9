pub mod actions;
pub mod commands;
pub mod config;
pub mod dispatch;

mod start;
pub use self::start::start;
