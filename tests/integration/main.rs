//! Integration tests

mod cache_test;
mod exchange_test;
mod registry_test;
