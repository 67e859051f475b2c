//! Tests for the validation pipeline
