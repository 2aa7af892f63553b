use todo_core::{ApiError, Todo, TodoId};

use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Screen shown for the first time; starts the list query.
    Mounted,
    /// User typed into the new-todo input.
    NewTodoChanged(String),
    /// User clicked Add Todo.
    AddClicked,
    /// User clicked Delete on a row.
    DeleteClicked(TodoId),
    /// User clicked Edit on a row.
    EditClicked(TodoId),
    /// User typed into the edit input of the row being edited.
    EditDraftChanged(String),
    /// User clicked Save on the row being edited.
    SaveClicked,
    /// Explicit refetch of the list.
    RefreshRequested,
    /// List fetch finished.
    TodosFetched {
        generation: Generation,
        result: Result<Vec<Todo>, ApiError>,
    },
    TodoCreated(Result<Todo, ApiError>),
    TodoUpdated {
        id: TodoId,
        result: Result<Todo, ApiError>,
    },
    TodoDeleted {
        id: TodoId,
        result: Result<(), ApiError>,
    },
}
