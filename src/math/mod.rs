//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure number-theoretic building block of the
//! pipeline: prime generation via the Sieve of Eratosthenes. It has no
//! algorithm-specific logic and no knowledge of pairs or records.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Prime generation via the Sieve of Eratosthenes.
pub mod sieve;
