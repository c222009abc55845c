//! Integration tests for the command parser.
//!
//! Tests for tokenizing, splitting and fuzzy matching against game content.

mod matching;
