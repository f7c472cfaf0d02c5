use serde::Serialize;

/// Result shape handed to front-ends: a success flag, a human-readable
/// message, and a count whose meaning depends on the operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    pub count: usize,
}

impl Outcome {
    pub fn ok(message: impl Into<String>, count: usize) -> Self {
        Self {
            success: true,
            message: message.into(),
            count,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            count: 0,
        }
    }
}
