use domain::error::Error as DomainError;
use serde::Deserialize;

/// Form body of `POST /counter`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct IncrementParams {
    #[serde(default)]
    pub(crate) value: String,
}

/// Query string of `GET /counter`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReadParams {
    #[serde(default)]
    pub(crate) m: Option<String>,
}

impl ReadParams {
    /// An absent or empty `m` means no multiplier.
    pub(crate) fn multiplier(&self) -> Result<Option<u64>, DomainError> {
        match self.m.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(m) => Ok(Some(m.parse()?)),
        }
    }
}
