//! Adapter implementations of the todo persistence port.

pub mod memory;
pub mod sqlite;
