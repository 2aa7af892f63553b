//! Runs effects off the UI thread and feeds their results back into `update`.
//!
//! # Design
//! Every effect becomes one blocking task on Tokio's blocking pool, tracked
//! in an `InFlight` set the caller owns for as long as the screen lives.
//! `Driver::apply` never waits: it updates the state and spawns whatever the
//! update asked for. Results come back out of `InFlight::next` in completion
//! order, so two mutations racing each other refetch in whatever order the
//! network decides; superseded list fetches are filtered out by `update`.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use todo_core::{ApiError, TodoClient};
use tokio::task::JoinSet;
use tracing::{debug, error};

use crate::{update, AppState, Effect, Msg, Transport};

/// Effects that have been spawned and not yet resolved.
#[derive(Debug, Default)]
pub struct InFlight {
    tasks: JoinSet<Msg>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The next result to complete, or `None` once nothing is in flight.
    /// Cancel safe, so it can sit in a `select!` next to user input.
    pub async fn next(&mut self) -> Option<Msg> {
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(msg) => return Some(msg),
                // Tasks catch their own panics, so only an abort lands here
                // and nothing aborts tasks before the set is dropped.
                Err(err) => error!(%err, "effect task did not complete"),
            }
        }
        None
    }
}

pub struct Driver<T> {
    client: TodoClient,
    transport: Arc<T>,
}

impl<T: Transport> Driver<T> {
    pub fn new(client: TodoClient, transport: T) -> Self {
        Self {
            client,
            transport: Arc::new(transport),
        }
    }

    pub fn client(&self) -> &TodoClient {
        &self.client
    }

    /// Apply `msg` and spawn the effects it produces without waiting for them.
    pub fn apply(&self, state: AppState, msg: Msg, in_flight: &mut InFlight) -> AppState {
        let (state, effects) = update(state, msg);
        self.spawn(in_flight, effects);
        state
    }

    pub fn spawn(&self, in_flight: &mut InFlight, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            debug!(?effect, "dispatching");
            let client = self.client.clone();
            let transport = Arc::clone(&self.transport);
            in_flight.tasks.spawn_blocking(move || {
                let fallback = effect.clone();
                catch_unwind(AssertUnwindSafe(|| execute(&client, transport.as_ref(), effect))).unwrap_or_else(|_| {
                    error!(effect = ?fallback, "request task panicked");
                    fallback.failed(ApiError::Transport("request task panicked".to_string()))
                })
            });
        }
    }

    /// Drive `in_flight` until it is empty, applying every result.
    pub async fn settle(&self, mut state: AppState, in_flight: &mut InFlight) -> AppState {
        while let Some(msg) = in_flight.next().await {
            state = self.apply(state, msg, in_flight);
        }
        state
    }

    /// Execute `effects` and everything they trigger, returning the state
    /// once nothing is in flight.
    pub async fn run(&self, state: AppState, effects: Vec<Effect>) -> AppState {
        let mut in_flight = InFlight::new();
        self.spawn(&mut in_flight, effects);
        self.settle(state, &mut in_flight).await
    }

    /// Apply one message and wait for everything it triggers.
    pub async fn dispatch(&self, state: AppState, msg: Msg) -> AppState {
        let mut in_flight = InFlight::new();
        let state = self.apply(state, msg, &mut in_flight);
        self.settle(state, &mut in_flight).await
    }
}

/// Perform one effect synchronously and wrap the outcome as a message.
pub fn execute<T: Transport + ?Sized>(client: &TodoClient, transport: &T, effect: Effect) -> Msg {
    match effect {
        Effect::FetchTodos { generation } => {
            let result = transport
                .execute(&client.build_list_todos())
                .and_then(|response| client.parse_list_todos(response));
            Msg::TodosFetched { generation, result }
        }
        Effect::CreateTodo(input) => {
            let result = client
                .build_create_todo(&input)
                .and_then(|request| transport.execute(&request))
                .and_then(|response| client.parse_create_todo(response));
            Msg::TodoCreated(result)
        }
        Effect::UpdateTodo { id, input } => {
            let result = client
                .build_update_todo(&id, &input)
                .and_then(|request| transport.execute(&request))
                .and_then(|response| client.parse_update_todo(response));
            Msg::TodoUpdated { id, result }
        }
        Effect::DeleteTodo { id } => {
            let result = transport
                .execute(&client.build_delete_todo(&id))
                .and_then(|response| client.parse_delete_todo(response));
            Msg::TodoDeleted { id, result }
        }
    }
}
