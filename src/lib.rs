// ABOUTME: Library root for openchat — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod client;
pub mod config;
pub mod connectors;
pub mod options;
