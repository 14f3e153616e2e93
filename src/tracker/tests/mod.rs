//! Unit tests for the tracker domain, stores and repositories.

mod support;

mod store_tests;
