//! # Integration Tests Crate
//!
//! End-to-end scenarios for the paracross executor: whole consensus
//! rounds driven through the public entrypoint against an in-memory KV,
//! checking receipts, persisted state, and replay determinism together
//! rather than module by module.
//!
//! ## Structure
//!
//! ```text
//! integration-tests/
//! └── src/
//!     ├── lib.rs        # This file
//!     └── scenarios.rs  # Multi-validator consensus rounds
//! ```

pub mod scenarios;
