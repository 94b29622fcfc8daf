use super::escape;

/// A number that re-fetches itself from `endpoint` whenever `trigger` is
/// broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CounterData {
    pub(crate) endpoint: String,
    pub(crate) value: u64,
    pub(crate) trigger: &'static str,
}

impl CounterData {
    pub(crate) fn new(endpoint: impl Into<String>, value: u64, trigger: &'static str) -> Self {
        Self {
            endpoint: endpoint.into(),
            value,
            trigger,
        }
    }

    pub(crate) fn render(&self) -> String {
        format!(
            r#"<span hx-get="{endpoint}" hx-trigger="sse:{trigger}" hx-swap="outerHTML">{value}</span>"#,
            endpoint = escape(&self.endpoint),
            trigger = escape(self.trigger),
            value = self.value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_wires_endpoint_and_trigger() {
        let html = CounterData::new("/counter?m=2", 6, "update-counter").render();
        assert_eq!(
            html,
            r#"<span hx-get="/counter?m=2" hx-trigger="sse:update-counter" hx-swap="outerHTML">6</span>"#
        );
    }
}
