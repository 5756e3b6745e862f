//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the pair-oriented core of the pipeline:
//! exhaustive enumeration of unique even-sum prime pairs, enrichment
//! with rank and duplicate-count coordinates, and insertion-ordered
//! grouping by shared sum.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Exhaustive unique-pair enumeration with even-sum filtering.
pub mod enumeration;

/// Rank and duplicate-count enrichment.
pub mod enrichment;

/// Insertion-ordered grouping by shared sum.
pub mod grouping;
