//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: BoundedHistory, Error, Registry and CounterMap.

mod history;
mod registry;
