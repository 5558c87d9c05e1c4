//! Pattern-driven input masking.
//!
//! This crate separates:
//! - **Pattern**: what shape the output takes. An expression mixes typed
//!   placeholders (`D` digit, `L` letter, `C` conditioned) with literal
//!   separators emitted verbatim.
//! - **Policy**: how input characters that do not fit the current
//!   placeholder are handled.
//!
//! A [`Mask`] is configured once and then applied to the full raw text on
//! every change; it recomputes the whole output from the whole input rather
//! than editing a previous result.
//!
//! Key rules:
//! - Placeholder letters are case-sensitive and cannot be escaped, so a
//!   literal `D`, `L`, or `C` cannot appear in an expression.
//! - An optional same-length template overlays fixed display characters on
//!   placeholder positions (e.g. force the leading `7` of a phone number).
//! - Each `C` placeholder consumes the next allow-list from the configured
//!   conditions, in scan order, restarting on every call.
//! - Separators missing from the input are inserted; separators present in
//!   the input are consumed so they are not counted twice.
//!
//! What this crate does:
//! - classifies pattern characters and parses condition allow-lists
//! - implements the two scanning policies ([`InvalidInputPolicy`])
//! - exposes a plain-data [`MaskConfig`] for configurations kept in files
//!
//! What it does not do:
//! - perform I/O or logging
//! - raise errors: [`Mask::apply_to`] is total over all string inputs
//! - bind to any UI toolkit (see the `inputmask-field` crate for the
//!   framework-free field driver)
//!
//! ```rust
//! use inputmask::Mask;
//!
//! let phone = Mask::new("+C(DDD)-DDD-DD-DD")
//!     .with_conditions(["7, 8"])
//!     .with_template("+7(DDD)-DDD-DD-DD");
//!
//! assert_eq!(phone.apply_to("87011234567"), "+7(701)-123-45-67");
//! assert_eq!(phone.apply_to("7 701 123 45 67"), "+7(701)-123-45-67");
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
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod config;
mod mask;
mod pattern;

// Re-exports
pub use config::MaskConfig;
pub use mask::{InvalidInputPolicy, Mask};
pub use pattern::Placeholder;
