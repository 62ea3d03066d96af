pub mod api_usage;
pub mod design_history;
pub mod feedback;
