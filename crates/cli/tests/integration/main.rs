//! CLI integration tests for marcel.


mod execute_tests;
