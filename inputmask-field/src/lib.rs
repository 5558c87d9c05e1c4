//! Framework-free editable-field driver for `inputmask`.
//!
//! This crate is the boundary layer a UI binding sits on. It:
//! - re-masks the full proposed text on every edit
//! - rejects edits whose masked form would overflow the pattern
//! - notifies a non-owning observer about text changes and editing end
//!
//! It does **not** touch any UI toolkit. A binding owns a [`MaskedField`],
//! forwards each proposed edit to [`MaskedField::propose`], and renders
//! [`MaskedField::text`] afterwards.
//!
//! The observer is held as a [`Weak`] back-reference: the field never keeps
//! its observer alive, and a dropped observer is silently skipped.

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
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_const_for_fn
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::rc::{Rc, Weak};

use inputmask::Mask;

/// Receives notifications from a [`MaskedField`].
///
/// Both methods default to no-ops, so an observer implements only what it
/// cares about.
pub trait MaskedFieldObserver {
    /// Called after an accepted edit replaced the field's text.
    fn text_changed(&self, _text: &str) {}

    /// Called when editing ends.
    fn editing_ended(&self, _text: &str) {}
}

/// Owns a [`Mask`] and the masked text currently displayed by a field.
///
/// ```rust
/// use inputmask::Mask;
/// use inputmask_field::MaskedField;
///
/// let mut field = MaskedField::new(
///     Mask::new("+C(DDD)-DDD-DD-DD")
///         .with_conditions(["7, 8"])
///         .with_template("+7(DDD)-DDD-DD-DD"),
/// );
///
/// assert!(field.propose("8701123"));
/// assert_eq!(field.text(), "+7(701)-123");
/// ```
pub struct MaskedField {
    mask: Mask,
    text: String,
    observer: Option<Weak<dyn MaskedFieldObserver>>,
}

impl MaskedField {
    /// Creates a field driven by `mask`, with empty text and no observer.
    #[must_use]
    pub fn new(mask: Mask) -> Self {
        Self {
            mask,
            text: String::new(),
            observer: None,
        }
    }

    /// Attaches an observer without taking ownership of it.
    ///
    /// Only the most recently attached observer is notified.
    pub fn set_observer(&mut self, observer: &Rc<dyn MaskedFieldObserver>) {
        self.observer = Some(Rc::downgrade(observer));
    }

    /// The mask driving this field.
    #[must_use]
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// The currently displayed (masked) text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Handles one proposed edit, given the full post-edit text.
    ///
    /// Masks `updated_text` and, if the masked form fits within
    /// [`Mask::limit`], stores it, notifies
    /// [`MaskedFieldObserver::text_changed`], and returns `true`. An
    /// over-long result rejects the edit: the stored text is untouched, no
    /// notification fires, and `false` is returned.
    pub fn propose(&mut self, updated_text: &str) -> bool {
        let masked = self.mask.apply_to(updated_text);
        if masked.chars().count() > self.mask.limit() {
            return false;
        }

        self.text = masked;
        if let Some(observer) = self.upgraded_observer() {
            observer.text_changed(&self.text);
        }
        true
    }

    /// Notifies [`MaskedFieldObserver::editing_ended`] with the current
    /// text.
    pub fn end_editing(&self) {
        if let Some(observer) = self.upgraded_observer() {
            observer.editing_ended(&self.text);
        }
    }

    fn upgraded_observer(&self) -> Option<Rc<dyn MaskedFieldObserver>> {
        self.observer.as_ref().and_then(Weak::upgrade)
    }
}
