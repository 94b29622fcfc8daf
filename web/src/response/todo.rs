use super::escape;
use domain::Todo;
use events::UPDATE_TODOS;

pub(crate) fn render_item(todo: &Todo) -> String {
    let id = escape(&todo.id);
    let description = if todo.description.is_empty() {
        String::new()
    } else {
        format!(" <small>{}</small>", escape(&todo.description))
    };
    format!(
        r#"<li id="todo-{id}"><strong>{title}</strong>{description} <button hx-delete="/todos/{id}" hx-swap="none">Delete</button></li>"#,
        title = escape(&todo.title),
    )
}

/// The todo list, refreshed from `/todos` on every todo update.
pub(crate) fn render_list(todos: &[Todo]) -> String {
    let items: String = todos.iter().map(render_item).collect();
    format!(
        r#"<ul id="todos" hx-get="/todos" hx-trigger="sse:{UPDATE_TODOS}" hx-swap="outerHTML">{items}</ul>"#
    )
}
