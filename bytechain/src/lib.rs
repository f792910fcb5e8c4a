//! `bytechain`: the byte-oriented chain buffer behind the KAT text format.
//!
//! One mutable byte container, the [`Chain`], is used uniformly as parse
//! token, emission buffer and decoded value. Solvers append bytes as a
//! document streams in, emitters append encoded output, and both read typed
//! values back out through byte-level projections. Around it sit narrow
//! helpers: a pluggable buffer pool ([`Bucket`]), a one-shot byte cursor
//! ([`Reader`]), role-tagged token wrappers ([`Value`], [`Alias`]) and the
//! parsing/formatting primitives of [`convert`] and [`binary`].
//!
//! ```
//! use bytechain::Chain;
//!
//! let mut chain = Chain::new();
//! chain.concat_str("kat").unwrap();
//! chain.concat_byte(b'-').unwrap();
//! chain.concat_int(42).unwrap();
//!
//! assert_eq!(chain.to_string(), "kat-42");
//! assert_eq!(chain.find_seq("42"), Some(4));
//! ```
//!
//! # Ownership and concurrency
//!
//! A chain belongs to one owner. Its lazy hash and string caches use
//! interior mutability, so the type is intentionally not `Sync`; share the
//! bytes, not the chain. [`Bucket`] implementations are the one shared
//! resource and carry their own locking.
//!
//! # Error contract
//!
//! Hard failures — range violations, mutating a sealed chain, reading past
//! a cursor's end, sink failures — surface as [`Error`]. Parse failures are
//! soft: every projection takes a default and falls back to it, so a solver
//! can try projections cheaply without error plumbing.

pub mod binary;
pub mod bucket;
pub mod chain;
pub mod convert;
pub mod error;
pub mod reader;
pub mod token;

pub use bucket::{Bucket, SlabBucket};
pub use chain::Chain;
pub use convert::Number;
pub use error::{Error, Result};
pub use reader::Reader;
pub use token::{Alias, Value};
