use serde::Serialize;

pub(crate) mod counter_controller;
pub(crate) mod health_check_controller;
pub(crate) mod page_controller;
pub(crate) mod todo_controller;

/// Response header htmx turns into a client-side event of the same name.
pub(crate) const HX_TRIGGER: &str = "HX-Trigger";

/// JSON envelope for the non-HTML endpoints.
#[derive(Debug, Serialize)]
struct ApiResponse<T: Serialize> {
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status_code: u16, data: T) -> Self {
        Self {
            status_code,
            data: Some(data),
        }
    }
}
