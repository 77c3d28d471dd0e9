pub mod cli;
pub mod ponte;
pub mod provider;
