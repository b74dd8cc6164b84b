//! Eisenhower-matrix classification.
//!
//! The classifier is a total function over the two task flags; every
//! `(is_urgent, is_important)` pair maps to exactly one quadrant.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One of the four urgent×important classification buckets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// Urgent and important — do it now.
    Do,
    /// Important but not urgent — schedule it.
    Schedule,
    /// Urgent but not important — delegate it.
    Delegate,
    /// Neither urgent nor important — eliminate it.
    Eliminate,
}

/// All quadrants in display order (Do, Schedule, Delegate, Eliminate).
pub const ALL_QUADRANTS: [Quadrant; 4] = [
    Quadrant::Do,
    Quadrant::Schedule,
    Quadrant::Delegate,
    Quadrant::Eliminate,
];

/// Classify a task's flags into its matrix quadrant.
#[must_use]
pub const fn classify(is_urgent: bool, is_important: bool) -> Quadrant {
    match (is_urgent, is_important) {
        (true, true) => Quadrant::Do,
        (false, true) => Quadrant::Schedule,
        (true, false) => Quadrant::Delegate,
        (false, false) => Quadrant::Eliminate,
    }
}

impl Quadrant {
    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Do => "Do",
            Self::Schedule => "Schedule",
            Self::Delegate => "Delegate",
            Self::Eliminate => "Eliminate",
        }
    }

    /// Stable lowercase identifier for URLs and element ids.
    #[must_use]
    pub const fn as_slug(self) -> &'static str {
        match self {
            Self::Do => "do",
            Self::Schedule => "schedule",
            Self::Delegate => "delegate",
            Self::Eliminate => "eliminate",
        }
    }

    /// One-line description of the bucket's criteria.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Do => "Urgent and important",
            Self::Schedule => "Important, not urgent",
            Self::Delegate => "Urgent, not important",
            Self::Eliminate => "Neither urgent nor important",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Do => 0,
            Self::Schedule => 1,
            Self::Delegate => 2,
            Self::Eliminate => 3,
        }
    }
}

impl Display for Quadrant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-quadrant task counts for a classified collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuadrantCounts([usize; 4]);

impl QuadrantCounts {
    /// Tally quadrants from an iterator of classified items.
    pub fn tally(quadrants: impl IntoIterator<Item = Quadrant>) -> Self {
        let mut counts = [0usize; 4];
        for quadrant in quadrants {
            counts[quadrant.index()] += 1;
        }
        Self(counts)
    }

    /// Count for a single quadrant.
    #[must_use]
    pub const fn get(&self, quadrant: Quadrant) -> usize {
        self.0[quadrant.index()]
    }

    /// Total across all quadrants.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}
