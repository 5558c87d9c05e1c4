//! Invalid-input handling strategies.
//!
//! The policy is fixed when the mask is built and selects one of two
//! scanning algorithms. The two are kept as separate passes on purpose:
//! their cursor-advance and termination rules differ in ways a shared
//! parameterized loop would obscure.

/// Strategy for input characters that do not satisfy the current pattern
/// position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InvalidInputPolicy {
    /// Skip the offending input character and retry the same pattern
    /// position against the next one. Stray separators and typos anywhere
    /// in the input are filtered out.
    #[default]
    Ignore,
    /// Discard the offending input character and move on to the next
    /// pattern position, leaving a gap in the output. Each pattern position
    /// gets at most one look at the input.
    Consume,
}
