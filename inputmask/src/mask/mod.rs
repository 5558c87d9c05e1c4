//! The masking engine and its configuration.
//!
//! This module ties the pieces together:
//!
//! - **`policy`**: the two invalid-input strategies
//! - **`ignore`**: skip-and-retry scanning
//! - **`consume`**: pattern-driven scanning
//!
//! Pattern-character classification lives in `crate::pattern`.

mod consume;
mod ignore;
mod policy;

pub use policy::InvalidInputPolicy;

use crate::pattern::Placeholder;

/// A configured mask: expression, optional template overlay, condition
/// allow-lists, and an invalid-input policy.
///
/// A `Mask` is immutable once built and keeps no state between calls, so one
/// shared instance can format text for any number of threads.
///
/// ```rust
/// use inputmask::{InvalidInputPolicy, Mask};
///
/// let mask = Mask::new("LL-DD").with_policy(InvalidInputPolicy::Ignore);
/// assert_eq!(mask.apply_to("!!ab__12??"), "ab-12");
/// ```
#[derive(Clone, Debug)]
pub struct Mask {
    policy: InvalidInputPolicy,
    expression: Vec<char>,
    template: Option<Vec<char>>,
    conditions: Vec<String>,
}

impl Mask {
    /// Creates a mask for `expression` with the default
    /// [`InvalidInputPolicy::Ignore`] policy, no conditions, and no
    /// template.
    #[must_use]
    pub fn new(expression: &str) -> Self {
        Self {
            policy: InvalidInputPolicy::default(),
            expression: expression.chars().collect(),
            template: None,
            conditions: Vec::new(),
        }
    }

    /// Uses a specific invalid-input policy.
    #[must_use]
    pub fn with_policy(mut self, policy: InvalidInputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Supplies one allow-list per `C` placeholder, in scan order.
    ///
    /// Each list is a raw comma-separated string of single-character
    /// alternatives; spaces are insignificant (`"7, 8"` allows `'7'` and
    /// `'8'`). A `C` placeholder reached after the lists run out contributes
    /// nothing for the remainder of the scan.
    #[must_use]
    pub fn with_conditions<I, S>(mut self, conditions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.conditions = conditions.into_iter().map(Into::into).collect();
        self
    }

    /// Overlays a display template on the expression.
    ///
    /// The template is consulted only if its character length equals the
    /// expression's; a mismatched template is silently dropped for the whole
    /// configuration, with no error raised. At a placeholder position, a
    /// *literal* template character replaces the matched input character in
    /// the output; template characters at literal expression positions are
    /// never consulted.
    #[must_use]
    pub fn with_template(mut self, template: &str) -> Self {
        let template: Vec<char> = template.chars().collect();
        self.template = (template.len() == self.expression.len()).then_some(template);
        self
    }

    /// Maximum possible output length, equal to the expression length in
    /// characters.
    ///
    /// Callers driving an editable field can use this to reject edits that
    /// would overflow the pattern without masking at all.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.expression.len()
    }

    /// Formats `input` against the expression.
    ///
    /// This method is total: any input, including the empty string and
    /// arbitrary Unicode, produces a (possibly empty) output no longer than
    /// [`limit`](Self::limit). Input characters that fit nowhere are dropped
    /// according to the configured policy.
    #[must_use]
    pub fn apply_to(&self, input: &str) -> String {
        match self.policy {
            InvalidInputPolicy::Ignore => ignore::scan(self, input),
            InvalidInputPolicy::Consume => consume::scan(self, input),
        }
    }

    /// Returns the template character overriding expression position
    /// `index`, if the template is active and holds a literal there.
    fn template_override(&self, index: usize) -> Option<char> {
        let ch = *self.template.as_ref()?.get(index)?;
        Placeholder::classify(ch).is_none().then_some(ch)
    }
}
