//! Observability module - per-action tracing spans.

mod action_id;

pub use action_id::action_span;
