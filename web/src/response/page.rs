use super::counter::CounterData;
use super::todo::render_list;
use domain::Todo;

const HTMX: &str = r#"<script src="https://unpkg.com/htmx.org@1.9.12"></script>
<script src="https://unpkg.com/htmx.org@1.9.12/dist/ext/sse.js"></script>"#;

const COUNTER_FORM: &str = r#"<form hx-post="/counter" hx-swap="none">
<input type="number" name="value" min="1" value="1" required>
<button>Add</button>
</form>"#;

const TODO_FORM: &str = r#"<form hx-post="/todos" hx-swap="none" hx-on::after-request="this.reset()">
<input name="title" placeholder="Title" required>
<input name="description" placeholder="Description">
<button>Add</button>
</form>"#;

/// Everything the full demo page shows.
pub(crate) struct PageData {
    pub(crate) counter: CounterData,
    pub(crate) double: CounterData,
    pub(crate) todos_count: CounterData,
    pub(crate) todos: Vec<Todo>,
}

impl PageData {
    pub(crate) fn render(&self) -> String {
        layout(&format!(
            "<h1>Counter {counter}</h1>\n\
             <p>Doubled: {double}</p>\n\
             {COUNTER_FORM}\n\
             <h1>Todos ({todos_count})</h1>\n\
             {todos}\n\
             {TODO_FORM}",
            counter = self.counter.render(),
            double = self.double.render(),
            todos_count = self.todos_count.render(),
            todos = render_list(&self.todos),
        ))
    }
}

/// The page served by the counter-only demo.
pub(crate) fn render_counter_page(counter: &CounterData, double: &CounterData) -> String {
    layout(&format!(
        "<h1>Counter {counter}</h1>\n<p>Doubled: {double}</p>\n{COUNTER_FORM}",
        counter = counter.render(),
        double = double.render(),
    ))
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Live demo</title>
{HTMX}
</head>
<body hx-ext="sse" sse-connect="/events">
{body}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use events::{UPDATE_COUNTER, UPDATE_TODOS};

    #[test]
    fn test_full_page_connects_to_event_stream() {
        let page = PageData {
            counter: CounterData::new("/counter", 3, UPDATE_COUNTER),
            double: CounterData::new("/counter?m=2", 6, UPDATE_COUNTER),
            todos_count: CounterData::new("/todos/count", 0, UPDATE_TODOS),
            todos: Vec::new(),
        }
        .render();

        assert!(page.contains(r#"sse-connect="/events""#));
        assert!(page.contains(r#"hx-get="/counter?m=2""#));
        assert!(page.contains(r#"hx-get="/todos/count" hx-trigger="sse:update-todos""#));
        assert!(page.contains(r#"hx-post="/todos""#));
    }

    #[test]
    fn test_counter_page_has_no_todos() {
        let page = render_counter_page(
            &CounterData::new("/counter", 1, UPDATE_COUNTER),
            &CounterData::new("/counter?m=2", 2, UPDATE_COUNTER),
        );

        assert!(page.contains(r#"hx-post="/counter""#));
        assert!(!page.contains("/todos"));
    }
}
