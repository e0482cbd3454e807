//! Layer 2: Math
//!
//! This layer provides the pure numerical reduction shared by every fit
//! parameterization. It is a reusable building block with no
//! algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters (args, file)
//!   ↓
//! Layer 3: Engine (validator, solver, output)
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives (point, errors)
//! ```

/// Single-pass sigma-sum accumulation.
pub mod sums;
