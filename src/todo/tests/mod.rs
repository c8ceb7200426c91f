//! Unit and behavioural tests for the todo context.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod domain_tests;
mod service_tests;
