//! Plain-data mask configuration.
//!
//! [`MaskConfig`] mirrors the fields a [`Mask`] is built from, so
//! configurations can live alongside other application settings. With the
//! `serde` feature enabled it derives `Serialize`/`Deserialize`; policy,
//! conditions, and template all default when omitted.

use crate::{InvalidInputPolicy, Mask};

/// The raw pieces of a mask configuration.
///
/// ```rust
/// use inputmask::{Mask, MaskConfig};
///
/// let config = MaskConfig {
///     expression: "+C(DDD)-DDD-DD-DD".into(),
///     conditions: vec!["7, 8".into()],
///     template: Some("+7(DDD)-DDD-DD-DD".into()),
///     ..MaskConfig::default()
/// };
/// let mask = Mask::from(config);
/// assert_eq!(mask.apply_to("87011234567"), "+7(701)-123-45-67");
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskConfig {
    /// Strategy for characters that fail a placeholder's test.
    #[cfg_attr(feature = "serde", serde(default))]
    pub policy: InvalidInputPolicy,
    /// The pattern expression (`D`/`L`/`C` placeholders plus literals).
    pub expression: String,
    /// One allow-list per `C` placeholder, in scan order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conditions: Vec<String>,
    /// Optional same-length display overlay.
    #[cfg_attr(feature = "serde", serde(default))]
    pub template: Option<String>,
}

impl From<MaskConfig> for Mask {
    fn from(config: MaskConfig) -> Self {
        let mut mask = Mask::new(&config.expression)
            .with_policy(config.policy)
            .with_conditions(config.conditions);
        if let Some(template) = &config.template {
            mask = mask.with_template(template);
        }
        mask
    }
}
