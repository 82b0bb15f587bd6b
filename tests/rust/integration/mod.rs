//! Integration tests - Tests that exercise the catalog against fixture files
//!
//! These tests load the fraud data-model fixture the way the engine loads a
//! customer model, then resolve pivots over it.

mod data_model_fixture_tests;
