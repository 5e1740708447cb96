//! Unit tests for the API facade and response envelope.

mod envelope_tests;
