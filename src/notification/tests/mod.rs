//! Unit tests for the notification module.

mod dispatcher_tests;
