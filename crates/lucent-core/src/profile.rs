//! Named lighting profiles for a day cycle.
//!
//! | name      | breakpoints     |
//! |-----------|-----------------|
//! | `dawn`    | 0 → 20          |
//! | `sunrise` | 20 → 75         |
//! | `noon`    | 75 → 100 → 75   |
//! | `sunset`  | 75 → 20         |
//! | `dusk`    | 20 → 0          |
//!
//! A profile with `N` breakpoints runs as `N - 1` consecutive ramps sharing
//! the requested duration equally.

use crate::error::{Error, Result};
use crate::value::Minutes;

/// A named sequence of breakpoint levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    /// Profile name.
    pub name: &'static str,
    /// Levels visited in order, in percent.
    pub breakpoints: &'static [f64],
}

/// One ramp of a decomposed profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    /// Starting level in percent.
    pub begin: f64,
    /// Final level in percent.
    pub end: f64,
    /// Time allotted to this ramp.
    pub duration: Minutes,
}

impl Profile {
    /// Split the profile into consecutive ramps over `total`.
    pub fn ramps(&self, total: Minutes) -> Result<Vec<Ramp>> {
        let share = total.split(self.breakpoints.len().saturating_sub(1))?;
        Ok(self
            .breakpoints
            .windows(2)
            .map(|pair| Ramp {
                begin: pair[0],
                end: pair[1],
                duration: share,
            })
            .collect())
    }
}

/// Built-in profiles, in day order.
pub const PROFILES: [Profile; 5] = [
    Profile {
        name: "dawn",
        breakpoints: &[0.0, 20.0],
    },
    Profile {
        name: "sunrise",
        breakpoints: &[20.0, 75.0],
    },
    Profile {
        name: "noon",
        breakpoints: &[75.0, 100.0, 75.0],
    },
    Profile {
        name: "sunset",
        breakpoints: &[75.0, 20.0],
    },
    Profile {
        name: "dusk",
        breakpoints: &[20.0, 0.0],
    },
];

/// Look up a profile by name, ignoring ASCII case.
pub fn lookup(name: &str) -> Result<&'static Profile> {
    PROFILES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownProfile(name.to_string()))
}

/// Names of all built-in profiles, in day order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|p| p.name)
}
