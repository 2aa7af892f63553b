use todo_core::{ApiError, CreateTodo, TodoId, UpdateTodo};

use crate::{Generation, Msg};

/// Network work requested by `update`. Each effect resolves to exactly one
/// `Msg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchTodos { generation: Generation },
    CreateTodo(CreateTodo),
    UpdateTodo { id: TodoId, input: UpdateTodo },
    DeleteTodo { id: TodoId },
}

impl Effect {
    /// The message this effect resolves to when it fails with `err`.
    pub fn failed(self, err: ApiError) -> Msg {
        match self {
            Effect::FetchTodos { generation } => Msg::TodosFetched {
                generation,
                result: Err(err),
            },
            Effect::CreateTodo(_) => Msg::TodoCreated(Err(err)),
            Effect::UpdateTodo { id, .. } => Msg::TodoUpdated { id, result: Err(err) },
            Effect::DeleteTodo { id } => Msg::TodoDeleted { id, result: Err(err) },
        }
    }
}
