pub mod admin;
pub mod design;
pub mod feedback;
pub mod health;
