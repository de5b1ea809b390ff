//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the whole browser through a
//! `TestBackend` terminal; property tests hammer it with random key streams.
