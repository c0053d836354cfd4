//! Render-agnostic snapshot of the todo page.

use std::fmt;

use crate::controller::PageState;
use crate::types::TodoId;

pub const HEADING: &str = "Task Manager";
pub const INPUT_PLACEHOLDER: &str = "Add a new task...";
pub const EMPTY_LIST: &str = "No todos yet. Add one above!";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this todo?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Editing { id: TodoId, buffer: String },
    Display { id: TodoId, title: String, edited: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Fetching,
    Empty,
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub heading: &'static str,
    pub input: String,
    pub submit_enabled: bool,
    pub list: ListView,
    pub delete_prompt: Option<&'static str>,
}

impl PageView {
    pub fn from_state(state: &PageState) -> Self {
        let list = if state.fetching {
            ListView::Fetching
        } else if state.todos.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(
                state
                    .todos
                    .iter()
                    .map(|todo| match &state.editing {
                        Some(edit) if edit.id == todo.id => RowView::Editing {
                            id: todo.id.clone(),
                            buffer: edit.buffer.clone(),
                        },
                        _ => RowView::Display {
                            id: todo.id.clone(),
                            title: todo.title.clone(),
                            edited: todo.is_edited(),
                        },
                    })
                    .collect(),
            )
        };

        Self {
            heading: HEADING,
            input: state.input.clone(),
            submit_enabled: state.can_submit(),
            list,
            delete_prompt: state.is_delete_dialog_open().then_some(DELETE_PROMPT),
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        let input = if self.input.is_empty() {
            INPUT_PLACEHOLDER
        } else {
            &self.input
        };
        let button = if self.submit_enabled { "[+]" } else { "[...]" };
        writeln!(f, "> {input} {button}")?;

        match &self.list {
            ListView::Fetching => writeln!(f, "Loading...")?,
            ListView::Empty => writeln!(f, "{EMPTY_LIST}")?,
            ListView::Rows(rows) => {
                for row in rows {
                    match row {
                        RowView::Editing { id, buffer } => {
                            writeln!(f, "* [{buffer}] (editing {id}) [save] [cancel]")?
                        }
                        RowView::Display { id, title, edited } => {
                            let mark = if *edited { " (Edited)" } else { "" };
                            writeln!(f, "- {title}  ID: {id}{mark}")?
                        }
                    }
                }
            }
        }

        if let Some(prompt) = self.delete_prompt {
            writeln!(f, "! {prompt} [Cancel] [Delete]")?;
        }
        Ok(())
    }
}
