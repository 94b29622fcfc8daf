use serde::Deserialize;

/// Form body of `POST /todos`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CreateParams {
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
}
