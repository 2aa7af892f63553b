use todo_core::{ApiError, CreateTodo, UpdateTodo};
use tracing::{debug, warn};

use crate::{AppState, Effect, MutationKind, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => state
            .todos
            .ensure_fetching()
            .map(|generation| Effect::FetchTodos { generation })
            .into_iter()
            .collect(),
        Msg::NewTodoChanged(text) => {
            state.new_todo = text;
            Vec::new()
        }
        Msg::AddClicked => {
            // The draft is cleared as soon as the request is fired, not on success.
            let title = std::mem::take(&mut state.new_todo);
            state.mutations.begin(MutationKind::Create);
            vec![Effect::CreateTodo(CreateTodo::new(title))]
        }
        Msg::DeleteClicked(id) => {
            state.mutations.begin(MutationKind::Delete);
            vec![Effect::DeleteTodo { id }]
        }
        Msg::EditClicked(id) => {
            if let Some(title) = state.todos.title_of(&id) {
                state.edit_draft = title.to_string();
                state.editing = Some(id);
            }
            Vec::new()
        }
        Msg::EditDraftChanged(text) => {
            if state.editing.is_some() {
                state.edit_draft = text;
            }
            Vec::new()
        }
        Msg::SaveClicked => match state.editing.clone() {
            Some(id) => {
                state.mutations.begin(MutationKind::Update);
                vec![Effect::UpdateTodo {
                    id,
                    input: UpdateTodo::title(state.edit_draft.clone()),
                }]
            }
            None => Vec::new(),
        },
        Msg::RefreshRequested => vec![Effect::FetchTodos {
            generation: state.todos.invalidate(),
        }],
        Msg::TodosFetched { generation, result } => {
            if !state.todos.resolve(generation, result) {
                debug!(generation, "dropped superseded todo list");
            }
            Vec::new()
        }
        Msg::TodoCreated(result) => settle_mutation(&mut state, MutationKind::Create, result.map(drop)),
        Msg::TodoUpdated { id, result } => {
            let saved = result.is_ok();
            let effects = settle_mutation(&mut state, MutationKind::Update, result.map(drop));
            if saved {
                debug!(%id, "saved edit");
                state.editing = None;
                state.edit_draft.clear();
            }
            effects
        }
        Msg::TodoDeleted { id, result } => {
            debug!(%id, ok = result.is_ok(), "delete settled");
            settle_mutation(&mut state, MutationKind::Delete, result)
        }
    };

    (state, effects)
}

/// Success invalidates the list; failure is recorded and logged only.
fn settle_mutation(state: &mut AppState, kind: MutationKind, result: Result<(), ApiError>) -> Vec<Effect> {
    let effects = match &result {
        Ok(()) => vec![Effect::FetchTodos {
            generation: state.todos.invalidate(),
        }],
        Err(err) => {
            warn!(?kind, error = %err, "mutation failed");
            Vec::new()
        }
    };
    state.mutations.settle(kind, result);
    effects
}
