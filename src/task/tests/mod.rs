//! Unit tests for task board reconciliation.

mod support;

mod domain_tests;
