//! Static hotel catalog
//!
//! The browse and detail screens only ever show fixed mock records; this
//! module is that data.

use serde::Serialize;

use crate::error::{Result, StaybookError};

/// A hotel as shown on the detail screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    /// Nightly rate in whole US dollars
    pub price_per_night: u32,
    pub rating: f32,
    pub reviews: u32,
    pub amenities: &'static [&'static str],
    pub description: &'static str,
}

impl Hotel {
    /// Price label as shown on listings, e.g. `$160/night`
    pub fn price_label(&self) -> String {
        format!("${}/night", self.price_per_night)
    }
}

const AMENITIES: &[&str] = &["Beach", "AC", "Gym", "Pool", "Wifi"];

/// Identifier of the hotel the detail screen falls back to
pub const DEFAULT_HOTEL_ID: &str = "golden-sands";

static HOTELS: [Hotel; 3] = [
    Hotel {
        id: DEFAULT_HOTEL_ID,
        name: "Golden Sands Beachfront",
        location: "Phuket, Thailand",
        price_per_night: 100,
        rating: 4.8,
        reviews: 785,
        amenities: AMENITIES,
        description: "Nestled on the pristine shores of Phuket, Thailand. Golden Sands \
                      Beachfront offers a luxurious escape with breathtaking views of the sea.",
    },
    Hotel {
        id: "mountain-view-lodge",
        name: "Mountain View Lodge",
        location: "Aspen, Colorado",
        price_per_night: 160,
        rating: 4.7,
        reviews: 412,
        amenities: AMENITIES,
        description: "A timber lodge at the foot of the Aspen slopes with fireside \
                      lounges and ski-in access.",
    },
    Hotel {
        id: "palm-grove-hideaway",
        name: "Palm Grove Hideaway",
        location: "Bora Bora, French Polynesia",
        price_per_night: 395,
        rating: 4.9,
        reviews: 238,
        amenities: AMENITIES,
        description: "Overwater bungalows set in a quiet lagoon, a short boat ride \
                      from the main island.",
    },
];

/// Every hotel in listing order
pub fn hotels() -> &'static [Hotel] {
    &HOTELS
}

/// Look up a hotel by id
pub fn find(id: &str) -> Result<&'static Hotel> {
    HOTELS
        .iter()
        .find(|hotel| hotel.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| StaybookError::UnknownHotel(id.to_string()))
}

/// The hotel shown when no id is given
pub fn default_hotel() -> &'static Hotel {
    &HOTELS[0]
}
