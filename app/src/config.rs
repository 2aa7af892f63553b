use clap::Parser;
use todo_core::{TodoClient, DEFAULT_BASE_URL};
use tracing::Level;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "todo-app")]
#[command(about = "Terminal todo list backed by a /todos REST service")]
pub struct Config {
    /// Scheme, host and port of the todo service
    #[arg(long, env = "TODO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable debug logging (to stderr)
    #[arg(short, long)]
    pub debug: bool,
}

impl Config {
    pub fn client(&self) -> TodoClient {
        TodoClient::new(&self.base_url)
    }

    /// Quiet by default so log lines do not interleave with the list.
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}
