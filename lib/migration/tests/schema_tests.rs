#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

mod fixtures;

#[path = "test/agent.rs"]
mod agent_tests;
