//! Tests for the flatten/unflatten codec.

mod flatten_tests;
mod roundtrip_tests;
