//! Plain-text rendering of the view model for the terminal front-end.

use crate::{AppViewModel, TodoListView, TodoRowView};

pub const LOADING_TEXT: &str = "Loading...";

pub fn render(view: &AppViewModel) -> String {
    match view {
        AppViewModel::Loading => LOADING_TEXT.to_string(),
        AppViewModel::Failed { message } => format!("An error occurred: {message}"),
        AppViewModel::Ready(list) => render_list(list),
    }
}

fn render_list(list: &TodoListView) -> String {
    let mut lines = vec![list.heading.to_string()];
    if list.new_todo.is_empty() {
        lines.push(format!("[ {} ] [Add Todo]", list.placeholder));
    } else {
        lines.push(format!("[{}] [Add Todo]", list.new_todo));
    }
    lines.extend(list.rows.iter().enumerate().map(|(index, row)| {
        let n = index + 1;
        match row {
            TodoRowView::Viewing { title, .. } => format!("{n:>3}. {title}  [Edit] [Delete]"),
            TodoRowView::Editing { draft, .. } => format!("{n:>3}. [{draft}] [Save]"),
        }
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use todo_core::TodoId;

    use super::*;
    use crate::view_model::{HEADING, NEW_TODO_PLACEHOLDER};

    fn list(new_todo: &str, rows: Vec<TodoRowView>) -> AppViewModel {
        AppViewModel::Ready(TodoListView {
            heading: HEADING,
            new_todo: new_todo.to_string(),
            placeholder: NEW_TODO_PLACEHOLDER,
            rows,
        })
    }

    #[test]
    fn loading_is_exactly_the_indicator() {
        assert_eq!(render(&AppViewModel::Loading), "Loading...");
    }

    #[test]
    fn failure_shows_message() {
        let view = AppViewModel::Failed {
            message: "Network response was not ok".to_string(),
        };
        assert_eq!(render(&view), "An error occurred: Network response was not ok");
    }

    #[test]
    fn list_rows_are_numbered() {
        let view = list(
            "",
            vec![
                TodoRowView::Viewing {
                    id: TodoId::from(7),
                    title: "Buy milk".to_string(),
                },
                TodoRowView::Editing {
                    id: TodoId::from(9),
                    draft: "Walk do".to_string(),
                },
            ],
        );
        assert_eq!(
            render(&view),
            "My Simple Todolist\n\
             [ Add new todo ] [Add Todo]\n  \
             1. Buy milk  [Edit] [Delete]\n  \
             2. [Walk do] [Save]"
        );
    }

    #[test]
    fn typed_draft_replaces_placeholder() {
        let out = render(&list("Feed cat", vec![]));
        assert_eq!(out, "My Simple Todolist\n[Feed cat] [Add Todo]");
    }
}
