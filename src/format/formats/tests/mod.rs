//! Tests for the palette format implementations.

mod grouped_tests;
