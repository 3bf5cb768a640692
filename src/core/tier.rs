//! Tier tokens: `"5"` for a normal tier, `"5+"` for its tournament variant.

use crate::errors::{Error, Result};
use std::fmt;

/// Highest normal tier.
pub const MAX_TIER: u32 = 18;

/// Tiers that have a tournament (`+`) variant.
pub const TOURNAMENT_TIERS: [u32; 6] = [1, 3, 5, 8, 11, 14];

/// A validated tier.
///
/// Only [`parse_tier`] and [`TierDescriptor::new`] build one, so `tier` is always in
/// `1..=18` and tournament descriptors always use a whitelisted tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierDescriptor {
    tier: u32,
    is_tournament: bool,
}

impl TierDescriptor {
    /// Validates a tier number and tournament flag.
    ///
    /// # Errors
    /// [`Error::InvalidTournamentTier`] for a tournament on a tier without one,
    /// [`Error::InvalidTierRange`] for a normal tier outside `1..=18`.
    pub fn new(tier: u32, is_tournament: bool) -> Result<Self> {
        if is_tournament {
            if !TOURNAMENT_TIERS.contains(&tier) {
                return Err(Error::InvalidTournamentTier { tier });
            }
        } else if !(1..=MAX_TIER).contains(&tier) {
            return Err(Error::InvalidTierRange { tier });
        }

        Ok(Self {
            tier,
            is_tournament,
        })
    }

    /// Tier number, 1 through 18.
    #[must_use]
    pub const fn tier(&self) -> u32 {
        self.tier
    }

    /// Whether this is the tournament ruleset.
    #[must_use]
    pub const fn is_tournament(&self) -> bool {
        self.is_tournament
    }
}

impl fmt::Display for TierDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_tournament {
            write!(f, "{}+", self.tier)
        } else {
            write!(f, "{}", self.tier)
        }
    }
}

/// Either an unparsed tier token or a descriptor that was already validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierInput<'a> {
    /// Raw token such as `"8+"`
    Token(&'a str),
    /// Already parsed
    Descriptor(TierDescriptor),
}

impl<'a> From<&'a str> for TierInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Token(value)
    }
}

impl<'a> From<&'a String> for TierInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Token(value.as_str())
    }
}

impl From<TierDescriptor> for TierInput<'_> {
    fn from(value: TierDescriptor) -> Self {
        Self::Descriptor(value)
    }
}

impl From<&TierDescriptor> for TierInput<'_> {
    fn from(value: &TierDescriptor) -> Self {
        Self::Descriptor(*value)
    }
}

/// Parses a tier token of the form `<digits>` or `<digits>+`.
///
/// # Errors
/// [`Error::InvalidTierFormat`] when the token has any other shape, plus the
/// range errors of [`TierDescriptor::new`].
pub fn parse_tier(input: &str) -> Result<TierDescriptor> {
    let (digits, is_tournament) = input
        .strip_suffix('+')
        .map_or((input, false), |digits| (digits, true));

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidTierFormat {
            input: input.to_string(),
        });
    }

    // absurdly long digit strings are still just out of range
    let tier = digits.parse::<u32>().unwrap_or(u32::MAX);
    let descriptor = TierDescriptor::new(tier, is_tournament)?;
    tracing::trace!(%descriptor, "parsed tier token");
    Ok(descriptor)
}

/// Turns either accepted tier form into a descriptor.
///
/// # Errors
/// Propagates [`parse_tier`] failures for raw tokens.
pub fn resolve_tier<'a>(input: impl Into<TierInput<'a>>) -> Result<TierDescriptor> {
    match input.into() {
        TierInput::Token(token) => parse_tier(token),
        TierInput::Descriptor(descriptor) => Ok(descriptor),
    }
}

/// Every token [`parse_tier`] accepts: normal tiers first, then tournament tiers.
#[must_use]
pub fn valid_tier_tokens() -> Vec<String> {
    (1..=MAX_TIER)
        .map(|tier| tier.to_string())
        .chain(TOURNAMENT_TIERS.iter().map(|tier| format!("{tier}+")))
        .collect()
}
