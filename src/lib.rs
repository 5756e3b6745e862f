//! # Goldbach — prime-pair enumeration for Rust
//!
//! An exploration of Goldbach's conjecture (every even integer >= 4 is the
//! sum of two primes): sieve the primes up to a bound, enumerate every
//! unique prime pair with an even sum, enrich each pair with rank and
//! duplicate-count coordinates, and hand the result to a plotting or
//! persistence collaborator as a plain table of numbers.
//!
//! ## What does it compute?
//!
//! For a sieve limit `N`, the pipeline produces one record per pair
//! `(p1, p2)` with `p1 <= p2`, both prime, `p1 + p2` even (and optionally
//! bounded by a sum ceiling). Each record carries the two primes, their
//! sum, the 1-based rank of each prime in the sieved list, and the number
//! of pairs sharing the same sum. Records sharing a sum can be chained
//! pairwise into connective line segments for decluttered plotting.
//!
//! ## Quick Start
//!
//! ```rust
//! use goldbach::prelude::*;
//!
//! // Build the model
//! let model = Goldbach::new()
//!     .limit(20u64)           // Sieve primes up to 20
//!     .show_connections()     // Chain records sharing a sum
//!     .build()?;
//!
//! // Run the pipeline
//! let result = model.run()?;
//!
//! println!("{}", result);
//! assert!(result.records.iter().all(|r| r.sum % 2 == 0));
//! # Result::<(), GoldbachError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use goldbach::prelude::*;
//!
//! let model = Goldbach::new()
//!     .max_sum(60u64)         // Sum ceiling; sieve limit derived from it
//!     .dimensions(3)          // 3-D projection
//!     .x_axis(Prime1)         // X: smaller prime
//!     .y_axis(Sum)            // Y: pair sum
//!     .z_axis(Index2)         // Z: rank of the larger prime
//!     .show_connections()
//!     .build()?;
//!
//! let result = model.run()?;
//!
//! // Projected scatter points and connective segments for the renderer.
//! let points = result.points();
//! let segments = result.segments();
//! assert_eq!(points.len(), result.records.len());
//!
//! // Delimited text for the persistence collaborator.
//! let csv = result.table().to_delimited(',');
//! assert!(csv.starts_with("Prime1,Prime2,Sum,Index1,Index2,DuplicateCount"));
//! # let _ = segments;
//! # Result::<(), GoldbachError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `build` and `run` return `Result<_, GoldbachError>`; the `?` operator is
//! idiomatic. All validation happens in `build`, before any computation:
//! a degenerate limit, an infeasible sieve allocation, a bad axis name, or
//! a 2-D/3-D axis conflict never reaches the pipeline.
//!
//! ```rust
//! use goldbach::prelude::*;
//!
//! match Goldbach::<u64>::new().limit(1).build() {
//!     Ok(_) => unreachable!("limit 1 yields no primes"),
//!     Err(e) => assert!(matches!(e, GoldbachError::InvalidLimit { got: 1, min: 2 })),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - records and error types.
mod primitives;

// Layer 2: Math - the prime sieve.
mod math;

// Layer 3: Algorithms - enumeration, enrichment, grouping.
mod algorithms;

// Layer 4: Evaluation - axis projection and the tabular contract.
mod evaluation;

// Layer 5: Engine - validation, orchestration and execution control.
mod engine;

// High-level fluent API for Goldbach pair enumeration.
mod api;

// Standard Goldbach prelude.
pub mod prelude {
    pub use crate::api::{
        Axis,
        Axis::{DuplicateCount, Index1, Index2, Prime1, Prime2, Sum},
        AxisAssignment, GoldbachBuilder as Goldbach, GoldbachError, GoldbachModel,
        GoldbachResult, PairTable,
    };
    pub use crate::primitives::record::{EnrichedRecord, PairRecord};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
