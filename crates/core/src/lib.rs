//! Domain types and pure logic for the room design service.

pub mod data_url;
pub mod design;
pub mod error;
pub mod feedback;
pub mod generation;
pub mod types;
pub mod validation;
