//! Integration tests for Layer 1: Records
//!
//! Tests for block reading and the field decoders.

mod fields;
mod reader;
