//! Local mirror of the server's todo list.
//!
//! Entries keep insertion order for display. Lookups are a linear scan by id,
//! which is plenty for a single page of todos.

use chrono::{DateTime, Utc};

use crate::types::{Todo, TodoId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    pub fn push(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.items.iter().find(|todo| &todo.id == id)
    }

    /// Set the title and edit time of the entry with `id`. Returns false when
    /// no such entry exists.
    pub fn rename(&mut self, id: &TodoId, title: &str, at: DateTime<Utc>) -> bool {
        match self.items.iter_mut().find(|todo| &todo.id == id) {
            Some(todo) => {
                todo.title = title.to_string();
                todo.updated_at = Some(at);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        let index = self.items.iter().position(|todo| &todo.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.items
    }
}

impl From<Vec<Todo>> for TodoList {
    fn from(items: Vec<Todo>) -> Self {
        Self { items }
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoList {
        TodoList::from(vec![
            Todo::new("1", "Buy milk"),
            Todo::new("2", "Walk dog"),
            Todo::new("3", "Buy milk"),
        ])
    }

    #[test]
    fn rename_touches_only_the_matching_entry() {
        let mut list = sample();
        let at = Utc::now();
        assert!(list.rename(&TodoId::from("2"), "Walk cat", at));
        assert_eq!(list.as_slice()[0], Todo::new("1", "Buy milk"));
        assert_eq!(list.as_slice()[1].title, "Walk cat");
        assert_eq!(list.as_slice()[1].updated_at, Some(at));
        assert_eq!(list.as_slice()[2], Todo::new("3", "Buy milk"));
    }

    #[test]
    fn rename_unknown_id_is_a_no_op() {
        let mut list = sample();
        assert!(!list.rename(&TodoId::from("9"), "x", Utc::now()));
        assert_eq!(list, sample());
    }

    #[test]
    fn remove_takes_exactly_one_entry() {
        let mut list = sample();
        let removed = list.remove(&TodoId::from("1")).unwrap();
        assert_eq!(removed.id.as_str(), "1");
        assert_eq!(list.len(), 2);
        assert!(list.get(&TodoId::from("1")).is_none());
        assert!(list.remove(&TodoId::from("1")).is_none());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut list = TodoList::new();
        list.push(Todo::new("b", "second"));
        list.push(Todo::new("a", "first"));
        let ids: Vec<_> = list.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
