//! In-memory store - used when no remote API is configured, and in tests.

mod posts;

pub use posts::InMemoryPostRepository;
