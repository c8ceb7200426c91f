//! Domain model for todo records.
//!
//! The todo domain models the records managed by the service: an optional
//! storage-assigned identifier plus free-form title and description text.
//! All infrastructure concerns stay outside of the domain boundary.

mod ids;
mod todo;

pub use ids::TodoId;
pub use todo::Todo;
