use crate::error::Error;
use crate::{Store, Todo};
use events::{DomainEvent, EventPublisher, IdGenerator};
use log::*;

/// Adds a todo and announces the new count. The title must not be blank.
pub async fn create(
    store: &Store,
    event_publisher: &EventPublisher,
    ids: &dyn IdGenerator,
    title: &str,
    description: &str,
) -> Result<Todo, Error> {
    let title = title.trim();
    if title.is_empty() {
        return Err(Error::invalid("todo title must not be blank"));
    }

    let todo = Todo {
        id: ids.next_id(),
        title: title.to_string(),
        description: description.trim().to_string(),
    };
    store.insert_todo(todo.clone());
    debug!("Created todo {}: {:?}", todo.id, todo.title);

    event_publisher
        .publish(DomainEvent::TodosUpdated {
            count: store.todo_count(),
        })
        .await;

    Ok(todo)
}

/// Removes a todo and announces the new count.
///
/// Removing an id that does not exist is not an error; the list is
/// re-announced either way.
pub async fn delete(
    store: &Store,
    event_publisher: &EventPublisher,
    id: &str,
) -> Result<Option<Todo>, Error> {
    if id.trim().is_empty() {
        return Err(Error::invalid("todo id must not be blank"));
    }

    let removed = store.remove_todo(id);
    match &removed {
        Some(todo) => debug!("Deleted todo {id}: {:?}", todo.title),
        None => debug!("Todo {id} was already gone"),
    }

    event_publisher
        .publish(DomainEvent::TodosUpdated {
            count: store.todo_count(),
        })
        .await;

    Ok(removed)
}

pub fn find_by_id(store: &Store, id: &str) -> Result<Todo, Error> {
    store.todo(id).ok_or_else(Error::not_found)
}

/// All todos in creation order.
pub fn find_all(store: &Store) -> Vec<Todo> {
    store.todos()
}

pub fn count(store: &Store) -> usize {
    store.todo_count()
}
