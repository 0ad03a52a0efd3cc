//! Shared utilities for the statusline integration tests
//!
//! Tests run the real binary against throwaway git repositories and a
//! throwaway home directory, so nothing touches the developer's own cache or
//! env file.

pub mod assertions;
pub mod repository;
