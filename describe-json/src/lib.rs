//! Structure-preserving summaries of JSON documents.
//!
//! This crate separates:
//! - **Policy**: the thresholds and options controlling summarization
//!   ([`DescribePolicy`]).
//! - **Descriptor**: the recursive transform that walks a
//!   [`serde_json::Value`] and replaces bulk with compact placeholders
//!   ([`Describer`], [`describe`]).
//!
//! What this crate does:
//! - passes scalars (null, booleans, numbers) through unchanged
//! - replaces over-long strings with a prefix, the original length, and an
//!   MD5 digest of the original
//! - collapses over-long arrays to a two-element `[label, example]` summary
//! - optionally rewrites object keys to full jq-style access paths
//!
//! What it does not do:
//! - perform I/O, parsing, or serialization (the caller owns both ends)
//! - validate or infer schemas
//! - mutate its input
//!
//! # Example
//!
//! ```rust
//! use describe_json::{DescribePolicy, describe};
//! use serde_json::json;
//!
//! let summary = describe(&json!({"ids": [1, 2, 3]}), &DescribePolicy::new());
//! assert_eq!(summary, json!({"ids": ["length: 3; example:", 1]}));
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::multiple_crate_versions
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod describe;
mod path;
mod policy;
mod select;

// Re-exports from the describe module
pub use describe::{Describer, describe};
// Re-exports from the policy module
pub use policy::{DescribePolicy, MAX_ARRAY_DEFAULT, MAX_STRING_DEFAULT};
// Re-exports from the select module
pub use select::{IndexSource, SeededSource, ThreadRngSource};
