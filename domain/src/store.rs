use dashmap::DashMap;
use events::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// A todo item shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// The demo's in-memory state. One instance is created at start-up and shared
/// with every request handler through the application state.
#[derive(Debug, Default)]
pub struct Store {
    counter: AtomicU64,
    // Insertion sequence per todo keeps listings in creation order.
    todos: DashMap<String, (u64, Todo)>,
    sequence: AtomicU64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two starter todos.
    pub fn seeded(ids: &dyn IdGenerator) -> Self {
        let store = Self::new();
        for title in ["Do this", "Do that"] {
            store.insert_todo(Todo {
                id: ids.next_id(),
                title: title.to_string(),
                description: String::new(),
            });
        }
        store
    }

    pub(crate) fn counter(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Adds `amount` and returns the new value, saturating at `u64::MAX`.
    pub(crate) fn add_to_counter(&self, amount: u64) -> u64 {
        let previous = self
            .counter
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |value| {
                Some(value.saturating_add(amount))
            })
            .unwrap_or_else(|value| value);
        previous.saturating_add(amount)
    }

    pub(crate) fn insert_todo(&self, todo: Todo) {
        let position = self.sequence.fetch_add(1, Ordering::SeqCst);
        self.todos.insert(todo.id.clone(), (position, todo));
    }

    pub(crate) fn remove_todo(&self, id: &str) -> Option<Todo> {
        self.todos.remove(id).map(|(_, (_, todo))| todo)
    }

    pub(crate) fn todo(&self, id: &str) -> Option<Todo> {
        self.todos.get(id).map(|entry| entry.value().1.clone())
    }

    pub(crate) fn todos(&self) -> Vec<Todo> {
        let mut todos: Vec<(u64, Todo)> = self
            .todos
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        todos.sort_by_key(|(position, _)| *position);
        todos.into_iter().map(|(_, todo)| todo).collect()
    }

    pub(crate) fn todo_count(&self) -> usize {
        self.todos.len()
    }
}
