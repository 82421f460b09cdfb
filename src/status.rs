//! Statuses
//!
//! Every record kind carries a closed status enumeration. Anything that
//! renders a status (badges, tabs, summary lines) goes through the [`Status`]
//! trait, so the mapping from variant to label and tone is a total `match`
//! checked at compile time rather than a string-keyed lookup.

use std::{fmt::Debug, hash::Hash};

/// Visual class of a status badge.
///
/// Tones are deliberately coarse; the renderer decides what a tone looks
/// like in a given medium (a terminal color, a CSS class, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Settled, healthy states (active, paid, completed).
    Positive,

    /// In-flight states (sent, processing, pending).
    Info,

    /// States needing attention but not yet wrong (overdue, temporary).
    Warning,

    /// Failed or terminal states (failed, banned, permanent).
    Critical,

    /// States with no signal attached (draft, inactive, refunded).
    Neutral,
}

/// A closed status enumeration for one record kind.
pub trait Status: Copy + Eq + Hash + Debug + 'static {
    /// Every variant, in display order (tab order, summary order).
    const ALL: &'static [Self];

    /// Human-readable label shown on tabs and badges.
    fn label(&self) -> &'static str;

    /// Badge tone for this variant.
    fn tone(&self) -> Tone;
}
