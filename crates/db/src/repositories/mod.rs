//! Repository layer: one zero-sized struct per table, methods take a pool.

pub mod api_usage_repo;
pub mod design_history_repo;
pub mod feedback_repo;

pub use api_usage_repo::ApiUsageRepo;
pub use design_history_repo::DesignHistoryRepo;
pub use feedback_repo::FeedbackRepo;
