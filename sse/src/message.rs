use axum::response::sse::Event as AxumEvent;

/// An immutable notification broadcast to every subscriber.
///
/// All three fields are opaque to the broker: producers choose them and the
/// broker never generates or interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: String,
    name: String,
    data: String,
}

impl Event {
    pub fn new(id: impl Into<String>, name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &str {
        &self.data
    }
}

/// Encodes the event as an `id:` line, an `event:` line and one `data:` line per
/// payload line, terminated by a blank line.
///
/// Single-line fields cannot carry line breaks on the wire, so they are
/// replaced with spaces; carriage returns in the payload become line feeds.
impl From<Event> for AxumEvent {
    fn from(event: Event) -> Self {
        AxumEvent::default()
            .id(single_line(&event.id))
            .event(single_line(&event.name))
            .data(normalize_line_endings(&event.data))
    }
}

fn single_line(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\r' | '\n' | '\0' => ' ',
            c => c,
        })
        .collect()
}

fn normalize_line_endings(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\r', "\n")
}
