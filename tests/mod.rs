//! Integration tests for podtui
//!
//! Tests are organized by component:
//! - catalog_test: Directory API client tests
//! - favorites_test: Favorites persistence tests
//! - cli_test: CLI command handler tests (exit codes, config plumbing)
//! - ui_test: UI rendering tests
//! - e2e_test: End-to-end flow tests (Load -> Browse -> Detail -> Play)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
