//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the pipeline: it validates configuration
//! before anything is allocated, runs sieve → enumeration → enrichment →
//! grouping in order, and packages the output for callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for the pair pipeline.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for pipeline runs.
pub mod output;
