//! Integration tests for Layer 1: Preparse
//!
//! Tests for macro expansion, synonyms, repetition, and the preparse pipeline.
