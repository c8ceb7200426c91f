//! Todo service: a REST CRUD service for todo records.
//!
//! This crate provides the core functionality for managing todo records:
//! creating, listing, fetching, updating, and deleting them behind a small
//! JSON HTTP surface.
//!
//! # Architecture
//!
//! The todo context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (SQLite, in-memory)
//!
//! # Modules
//!
//! - [`todo`]: Todo domain, persistence ports and adapters, and services
//! - [`http`]: REST routes, error mapping, and the server loop

pub mod http;
pub mod todo;
