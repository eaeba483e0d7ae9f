//! Property-based tests for extraction.
