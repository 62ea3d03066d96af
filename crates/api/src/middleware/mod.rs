//! Request extractors and middleware.
//!
//! - [`client::ClientMeta`] -- user agent and peer address of the caller.
//! - [`usage::record_usage`] -- writes one usage record per handled request.

pub mod client;
pub mod usage;
