//! Reservation draft record
//!
//! A [`ReservationDraft`] is the in-progress, unsaved reservation for one
//! booking attempt. It is created when the booking form mounts and lives
//! until it is handed off or discarded.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StaybookError};
use crate::types::{GuestCount, RoomType};

use super::dates;

/// In-progress reservation for one booking attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    /// Free-text guest name, never validated
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// `None` until the guest picks a room type
    pub room_type: Option<RoomType>,
    /// `None` until the guest picks a guest count
    pub guest_count: Option<GuestCount>,
    /// Local part of the phone number; the country code is display-only
    pub phone_number: String,
    pub terms_accepted: bool,
}

impl ReservationDraft {
    /// Create a blank draft with both dates set to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            guest_name: String::new(),
            check_in: today,
            check_out: today,
            room_type: None,
            guest_count: None,
            phone_number: String::new(),
            terms_accepted: false,
        }
    }

    /// Create a blank draft dated with the local calendar day
    pub fn starting_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Replace exactly one field, leaving every other field untouched
    ///
    /// Date fields are written verbatim here; ordering rules are applied by
    /// the form before it reaches this point.
    pub fn with_field(self, field: DraftField) -> Self {
        match field {
            DraftField::GuestName(guest_name) => Self { guest_name, ..self },
            DraftField::CheckIn(check_in) => Self { check_in, ..self },
            DraftField::CheckOut(check_out) => Self { check_out, ..self },
            DraftField::RoomType(room_type) => Self {
                room_type: Some(room_type),
                ..self
            },
            DraftField::GuestCount(guest_count) => Self {
                guest_count: Some(guest_count),
                ..self
            },
            DraftField::PhoneNumber(phone_number) => Self {
                phone_number,
                ..self
            },
        }
    }
}

/// A single field write
///
/// Room type and guest count carry closed enums, so only offered values can
/// ever reach a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    GuestName(String),
    CheckIn(NaiveDate),
    CheckOut(NaiveDate),
    RoomType(RoomType),
    GuestCount(GuestCount),
    PhoneNumber(String),
}

impl DraftField {
    /// Build a field write from a string-keyed pair, e.g. `("roomType", "Suite")`
    ///
    /// Field names are matched case-insensitively and ignore `-` and `_`, so
    /// `guest_count`, `guest-count` and `guestCount` are equivalent.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let key: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "name" | "guestname" => Ok(Self::GuestName(value.to_string())),
            "checkin" => Ok(Self::CheckIn(dates::parse_date(value)?)),
            "checkout" => Ok(Self::CheckOut(dates::parse_date(value)?)),
            "room" | "roomtype" => Ok(Self::RoomType(value.parse()?)),
            "guests" | "guestcount" => Ok(Self::GuestCount(value.parse()?)),
            "phone" | "phonenumber" => Ok(Self::PhoneNumber(value.to_string())),
            _ => Err(StaybookError::InvalidInput(format!(
                "Unknown reservation field: '{}'",
                name
            ))),
        }
    }

    /// Field name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::GuestName(_) => "guest_name",
            Self::CheckIn(_) => "check_in",
            Self::CheckOut(_) => "check_out",
            Self::RoomType(_) => "room_type",
            Self::GuestCount(_) => "guest_count",
            Self::PhoneNumber(_) => "phone_number",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = ReservationDraft::new(june(1));

        assert_eq!(draft.guest_name, "");
        assert_eq!(draft.check_in, june(1));
        assert_eq!(draft.check_out, june(1));
        assert!(draft.room_type.is_none());
        assert!(draft.guest_count.is_none());
        assert_eq!(draft.phone_number, "");
        assert!(!draft.terms_accepted);
    }

    #[test]
    fn test_with_field_replaces_only_that_field() {
        let draft = ReservationDraft::new(june(1))
            .with_field(DraftField::GuestName("Jane Doe".to_string()))
            .with_field(DraftField::PhoneNumber("5551234".to_string()));

        let updated = draft
            .clone()
            .with_field(DraftField::RoomType(RoomType::Deluxe));

        assert_eq!(updated.room_type, Some(RoomType::Deluxe));
        assert_eq!(updated.guest_name, draft.guest_name);
        assert_eq!(updated.phone_number, draft.phone_number);
        assert_eq!(updated.check_in, draft.check_in);
        assert_eq!(updated.guest_count, draft.guest_count);
        assert_eq!(updated.terms_accepted, draft.terms_accepted);
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!(
            DraftField::parse("name", "Jane Doe").unwrap(),
            DraftField::GuestName("Jane Doe".to_string())
        );
        assert_eq!(
            DraftField::parse("roomType", "Suite").unwrap(),
            DraftField::RoomType(RoomType::Suite)
        );
        assert_eq!(
            DraftField::parse("guest_count", "2").unwrap(),
            DraftField::GuestCount(GuestCount::new(2).unwrap())
        );
        assert_eq!(
            DraftField::parse("check-in", "2024-06-01").unwrap(),
            DraftField::CheckIn(june(1))
        );
        assert_eq!(
            DraftField::parse("phoneNumber", "").unwrap(),
            DraftField::PhoneNumber(String::new())
        );
    }

    #[test]
    fn test_parse_rejects_values_outside_closed_sets() {
        assert!(DraftField::parse("roomType", "Broom Closet").is_err());
        assert!(DraftField::parse("guestCount", "7").is_err());
        assert!(DraftField::parse("checkOut", "June 5").is_err());
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = DraftField::parse("loyaltyNumber", "123").unwrap_err();
        assert!(err.to_string().contains("Unknown reservation field"));
    }
}
