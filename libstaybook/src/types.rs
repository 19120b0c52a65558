//! Core types for Staybook

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::StaybookError;

/// Room categories offered by every hotel in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    PresidentialSuite,
}

impl RoomType {
    /// All room types in display order
    pub const ALL: [RoomType; 4] = [
        RoomType::Standard,
        RoomType::Deluxe,
        RoomType::Suite,
        RoomType::PresidentialSuite,
    ];

    /// Human-readable label shown in pickers and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Deluxe => "Deluxe",
            Self::Suite => "Suite",
            Self::PresidentialSuite => "Presidential Suite",
        }
    }

    /// Position of this room type in [`RoomType::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Standard => 0,
            Self::Deluxe => 1,
            Self::Suite => 2,
            Self::PresidentialSuite => 3,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RoomType {
    type Err = StaybookError;

    /// Accepts the display label or its kebab/snake spelling, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();

        match normalized.as_str() {
            "standard" => Ok(Self::Standard),
            "deluxe" => Ok(Self::Deluxe),
            "suite" => Ok(Self::Suite),
            "presidential suite" | "presidential" => Ok(Self::PresidentialSuite),
            _ => Err(StaybookError::InvalidInput(format!(
                "Unknown room type: '{}'. Valid options: Standard, Deluxe, Suite, Presidential Suite",
                s
            ))),
        }
    }
}

/// Number of guests for a stay, always within 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuestCount(u8);

impl GuestCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Every selectable guest count, smallest first
    pub const ALL: [GuestCount; 6] = [
        GuestCount(1),
        GuestCount(2),
        GuestCount(3),
        GuestCount(4),
        GuestCount(5),
        GuestCount(6),
    ];

    /// Returns `None` when `count` falls outside the offered range
    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&count).then_some(Self(count))
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Position of this count in [`GuestCount::ALL`]
    pub fn index(&self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl std::fmt::Display for GuestCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GuestCount {
    type Err = StaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(GuestCount::new)
            .ok_or_else(|| {
                StaybookError::InvalidInput(format!(
                    "Invalid guest count: '{}'. Must be between {} and {}",
                    s,
                    GuestCount::MIN,
                    GuestCount::MAX
                ))
            })
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GuestCount::new(value).ok_or_else(|| format!("guest count {} out of range", value))
    }
}

impl From<GuestCount> for u8 {
    fn from(count: GuestCount) -> Self {
        count.0
    }
}

/// Which end of the stay a date selection targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSlot {
    CheckIn,
    CheckOut,
}

impl std::fmt::Display for DateSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckIn => write!(f, "check-in"),
            Self::CheckOut => write!(f, "check-out"),
        }
    }
}
