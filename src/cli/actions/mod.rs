use crate::cli::config::Config;

pub mod server;

#[derive(Debug)]
pub enum Action {
    Server { port: u16, config: Config },
}
