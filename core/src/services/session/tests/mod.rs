//! Session lifecycle tests

mod service_tests;
