//! Feedback DTO.

/// DTO for storing a feedback submission.
#[derive(Debug, Clone)]
pub struct CreateFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
    /// One of `feedback`, `bug`, `feature`, `support`.
    pub kind: String,
}
