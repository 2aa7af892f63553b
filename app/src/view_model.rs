use todo_core::TodoId;

use crate::AppState;

pub const HEADING: &str = "My Simple Todolist";
pub const NEW_TODO_PLACEHOLDER: &str = "Add new todo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppViewModel {
    /// The list has never resolved. Nothing else is shown.
    Loading,
    /// The list fetch failed; `message` is the error's display text.
    Failed { message: String },
    Ready(TodoListView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub heading: &'static str,
    pub new_todo: String,
    pub placeholder: &'static str,
    pub rows: Vec<TodoRowView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoRowView {
    Viewing { id: TodoId, title: String },
    Editing { id: TodoId, draft: String },
}

impl TodoRowView {
    pub fn id(&self) -> &TodoId {
        match self {
            TodoRowView::Viewing { id, .. } | TodoRowView::Editing { id, .. } => id,
        }
    }
}

impl AppState {
    pub fn view_model(&self) -> AppViewModel {
        let todos = self.todos();
        if todos.is_pending() {
            return AppViewModel::Loading;
        }
        if let Some(err) = todos.error() {
            return AppViewModel::Failed {
                message: err.to_string(),
            };
        }

        let rows = todos
            .data()
            .unwrap_or_default()
            .iter()
            .map(|todo| match self.editing() {
                Some(editing) if *editing == todo.id => TodoRowView::Editing {
                    id: todo.id.clone(),
                    draft: self.edit_draft().to_string(),
                },
                _ => TodoRowView::Viewing {
                    id: todo.id.clone(),
                    title: todo.title.clone(),
                },
            })
            .collect();

        AppViewModel::Ready(TodoListView {
            heading: HEADING,
            new_todo: self.new_todo().to_string(),
            placeholder: NEW_TODO_PLACEHOLDER,
            rows,
        })
    }
}
