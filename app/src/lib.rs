//! Todo list screen: pure state machine, view model, and the plumbing that
//! runs its network effects.
//!
//! `update` never performs I/O. It returns `Effect`s; a `Driver` executes
//! them through a `Transport` and feeds the results back as `Msg`s. Every
//! successful mutation invalidates the cached list, which refetches it.

pub mod command;
pub mod config;
mod driver;
mod effect;
mod msg;
pub mod render;
mod state;
mod transport;
mod update;
mod view_model;

pub use config::Config;
pub use driver::{execute, Driver, InFlight};
pub use effect::Effect;
pub use msg::Msg;
pub use render::render;
pub use state::{AppState, Generation, MutationKind, MutationStatus, Mutations, TodosQuery};
pub use transport::{Transport, UreqTransport};
pub use update::update;
pub use view_model::{AppViewModel, TodoListView, TodoRowView, HEADING, NEW_TODO_PLACEHOLDER};
