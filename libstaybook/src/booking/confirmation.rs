//! Confirmation step
//!
//! Builds the summary shown once a draft has been handed off. Nothing is
//! stored or sent anywhere; the reference id only labels the summary.

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::Hotel;
use crate::error::Result;
use crate::types::{GuestCount, RoomType};

use super::dates;
use super::draft::ReservationDraft;

/// Summary of a handed-off reservation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Confirmation {
    pub reference: String,
    pub hotel_id: String,
    pub hotel_name: String,
    pub guest_name: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub check_in_display: String,
    pub check_out_display: String,
    pub nights: i64,
    pub room_type: Option<RoomType>,
    pub guest_count: Option<GuestCount>,
    /// Phone with the display-only country code; empty when none was entered
    pub phone: String,
    /// Nights times the nightly rate; `None` for stays shorter than one night
    pub estimated_total: Option<u64>,
}

impl Confirmation {
    pub fn new(draft: &ReservationDraft, hotel: &Hotel, country_code: &str) -> Self {
        let nights = dates::nights(draft.check_in, draft.check_out);
        let estimated_total = u64::try_from(nights)
            .ok()
            .filter(|n| *n > 0)
            .map(|n| n * u64::from(hotel.price_per_night));

        let phone = if draft.phone_number.trim().is_empty() {
            String::new()
        } else {
            format!("{} {}", country_code, draft.phone_number.trim())
        };

        Self {
            reference: uuid::Uuid::new_v4().to_string(),
            hotel_id: hotel.id.to_string(),
            hotel_name: hotel.name.to_string(),
            guest_name: draft.guest_name.clone(),
            check_in: draft.check_in,
            check_out: draft.check_out,
            check_in_display: dates::format_for_display(draft.check_in),
            check_out_display: dates::format_for_display(draft.check_out),
            nights,
            room_type: draft.room_type,
            guest_count: draft.guest_count,
            phone,
            estimated_total,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Label/value rows for text output, in display order
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let or_dash = |value: &str| {
            if value.is_empty() {
                "-".to_string()
            } else {
                value.to_string()
            }
        };

        vec![
            ("Reference", self.reference.clone()),
            ("Hotel", self.hotel_name.clone()),
            ("Guest", or_dash(&self.guest_name)),
            ("Check-in", self.check_in_display.clone()),
            ("Check-out", self.check_out_display.clone()),
            ("Nights", self.nights.to_string()),
            (
                "Room type",
                self.room_type
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Guests",
                self.guest_count
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ("Contact", or_dash(&self.phone)),
            (
                "Estimated total",
                self.estimated_total
                    .map(|t| format!("${}", t))
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn draft() -> ReservationDraft {
        ReservationDraft {
            guest_name: "Jane Doe".to_string(),
            check_in: june(1),
            check_out: june(5),
            room_type: Some(RoomType::Suite),
            guest_count: GuestCount::new(2),
            phone_number: "555 0100".to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_confirmation_from_draft() {
        let hotel = catalog::find("mountain-view-lodge").unwrap();
        let confirmation = Confirmation::new(&draft(), hotel, "+1");

        assert_eq!(confirmation.hotel_name, "Mountain View Lodge");
        assert_eq!(confirmation.nights, 4);
        assert_eq!(confirmation.estimated_total, Some(640));
        assert_eq!(confirmation.phone, "+1 555 0100");
        assert_eq!(confirmation.check_in_display, "Jun 1, 2024");
        assert_eq!(confirmation.check_out_display, "Jun 5, 2024");
        assert!(uuid::Uuid::parse_str(&confirmation.reference).is_ok());
    }

    #[test]
    fn test_zero_night_stay_has_no_total() {
        let same_day = ReservationDraft {
            check_out: june(1),
            ..draft()
        };
        let confirmation = Confirmation::new(&same_day, catalog::default_hotel(), "+1");
        assert_eq!(confirmation.nights, 0);
        assert_eq!(confirmation.estimated_total, None);
    }

    #[test]
    fn test_empty_fields_render_as_dash() {
        let blank = ReservationDraft::new(june(1));
        let confirmation = Confirmation::new(&blank, catalog::default_hotel(), "+1");
        let rows = confirmation.summary_rows();

        let value = |label: &str| {
            rows.iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(value("Guest"), "-");
        assert_eq!(value("Room type"), "-");
        assert_eq!(value("Contact"), "-");
    }

    #[test]
    fn test_to_json_uses_snake_case_room_type() {
        let confirmation = Confirmation::new(&draft(), catalog::default_hotel(), "+1");
        let json: serde_json::Value = serde_json::from_str(&confirmation.to_json().unwrap()).unwrap();
        assert_eq!(json["room_type"], "suite");
        assert_eq!(json["guest_count"], 2);
        assert_eq!(json["check_in"], "2024-06-01");
    }
}
