//! # Campus Repository Store
//!
//! In-process storage for the department website backend. All six entity
//! collections live in memory for the lifetime of the process: records
//! are created once, never updated or deleted, and everything is reseeded
//! from fixtures on restart.
//!
//! The store is an explicitly constructed value owned by the process
//! entry point and injected into the API layer through the [`Storage`]
//! trait; there is no global singleton to reach for.

pub mod collection;
pub mod mem;
pub mod seed;

pub use collection::Collection;
pub use mem::{MemStore, Storage};
