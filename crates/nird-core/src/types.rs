//! Core domain types for the onboarding wizard

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Number of stages in the onboarding sequence
pub const STEP_COUNT: usize = 5;

/// One ordinal position in the fixed onboarding sequence.
///
/// Steps are totally ordered and bounded: moving past either end clamps
/// instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Hero,
    Profile,
    Content,
    Resources,
    Final,
}

impl Step {
    /// All steps in navigation order
    pub const ALL: [Step; STEP_COUNT] = [
        Step::Hero,
        Step::Profile,
        Step::Content,
        Step::Resources,
        Step::Final,
    ];

    pub const FIRST: Step = Step::Hero;
    pub const LAST: Step = Step::Final;

    /// Zero-based position in the sequence
    pub fn index(self) -> usize {
        match self {
            Step::Hero => 0,
            Step::Profile => 1,
            Step::Content => 2,
            Step::Resources => 3,
            Step::Final => 4,
        }
    }

    /// Step at `index`, clamped to the last step when out of range
    pub fn from_index(index: usize) -> Step {
        Self::ALL[index.min(STEP_COUNT - 1)]
    }

    /// Following step, or `self` at the upper bound
    pub fn next(self) -> Step {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, or `self` at the lower bound
    pub fn prev(self) -> Step {
        Self::from_index(self.index().saturating_sub(1))
    }

    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Short label shown under the progress dots
    pub fn label(self) -> &'static str {
        match self {
            Step::Hero => "Accueil",
            Step::Profile => "Profil",
            Step::Content => "Contenu",
            Step::Resources => "Ressources",
            Step::Final => "Communauté",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The role a visitor declares on the profile step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Student,
    Teacher,
    School,
}

impl Profile {
    /// All profiles in the order the picker shows them
    pub const ALL: [Profile; 3] = [Profile::Student, Profile::Teacher, Profile::School];

    /// Stable identifier (`student`, `teacher`, `school`)
    pub fn id(self) -> &'static str {
        match self {
            Profile::Student => "student",
            Profile::Teacher => "teacher",
            Profile::School => "school",
        }
    }

    /// Look up a profile by identifier. Unknown identifiers yield `None`.
    pub fn from_id(id: &str) -> Option<Profile> {
        Self::ALL.into_iter().find(|p| p.id() == id)
    }

    /// Position in [`Profile::ALL`]
    pub fn position(self) -> usize {
        match self {
            Profile::Student => 0,
            Profile::Teacher => 1,
            Profile::School => 2,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Profile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::from_id(s.trim()).ok_or_else(|| Error::unknown_profile(s.trim()))
    }
}

/// Colour scheme of the interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The other theme
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}
