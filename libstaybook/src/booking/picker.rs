//! Picker overlay visibility
//!
//! Single source of truth for which selection surface is open. At most one
//! surface is visible; opening another replaces it.

use serde::{Deserialize, Serialize};

use crate::types::DateSlot;

/// A selection overlay that captures one field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerSurface {
    CheckIn,
    CheckOut,
    RoomType,
    GuestCount,
}

impl PickerSurface {
    /// The date slot a calendar surface writes to; `None` for list surfaces
    pub fn date_slot(&self) -> Option<DateSlot> {
        match self {
            Self::CheckIn => Some(DateSlot::CheckIn),
            Self::CheckOut => Some(DateSlot::CheckOut),
            Self::RoomType | Self::GuestCount => None,
        }
    }
}

impl From<DateSlot> for PickerSurface {
    fn from(slot: DateSlot) -> Self {
        match slot {
            DateSlot::CheckIn => Self::CheckIn,
            DateSlot::CheckOut => Self::CheckOut,
        }
    }
}

impl std::fmt::Display for PickerSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CheckIn => write!(f, "check-in"),
            Self::CheckOut => write!(f, "check-out"),
            Self::RoomType => write!(f, "room type"),
            Self::GuestCount => write!(f, "guest count"),
        }
    }
}

/// Which picker surface is currently visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerVisibility {
    #[default]
    None,
    CheckIn,
    CheckOut,
    RoomType,
    GuestCount,
}

impl PickerVisibility {
    /// Show `surface`, implicitly closing whatever was open
    pub fn open(self, surface: PickerSurface) -> Self {
        match surface {
            PickerSurface::CheckIn => Self::CheckIn,
            PickerSurface::CheckOut => Self::CheckOut,
            PickerSurface::RoomType => Self::RoomType,
            PickerSurface::GuestCount => Self::GuestCount,
        }
    }

    pub fn close(self) -> Self {
        Self::None
    }

    /// The visible surface, if any
    pub fn surface(&self) -> Option<PickerSurface> {
        match self {
            Self::None => None,
            Self::CheckIn => Some(PickerSurface::CheckIn),
            Self::CheckOut => Some(PickerSurface::CheckOut),
            Self::RoomType => Some(PickerSurface::RoomType),
            Self::GuestCount => Some(PickerSurface::GuestCount),
        }
    }

    pub fn is_open(&self, surface: PickerSurface) -> bool {
        self.surface() == Some(surface)
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}
