//! Weekly leaderboard types.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A derived leaderboard row, recomputed by the backend on every query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRankingItem {
    /// 1-based rank
    pub rank: u32,
    /// User id
    pub id: i64,
    /// Display name
    #[serde(default)]
    pub user_name: String,
    /// Twitter handle, if linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    /// Points earned during the week
    #[serde(default)]
    pub weekly_points: i64,
    /// Wallet address, if linked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}

/// A validated week number (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekNumber(NonZeroU32);

impl WeekNumber {
    /// Create from a raw value; `None` for zero.
    pub fn new(week: u32) -> Option<Self> {
        NonZeroU32::new(week).map(Self)
    }

    /// Parse user input.
    ///
    /// Blank input means "latest week" and yields `Ok(None)`. Anything else
    /// must be a positive integer.
    pub fn parse(input: &str) -> Result<Option<Self>, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        trimmed
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .map(Some)
            .ok_or_else(|| ValidationError::InvalidWeek {
                input: input.to_string(),
            })
    }

    /// Raw value
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
