//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns enriched records into renderer- and
//! persistence-facing shapes: named-field projection onto plot axes,
//! and the fixed-column tabular contract.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Axis enumeration and record projection.
pub mod projection;

/// Fixed-column tabular contract.
pub mod table;
