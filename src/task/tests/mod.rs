//! Unit tests for task record management.

mod support;
