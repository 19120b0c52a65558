//! Date range rules for the stay
//!
//! Applies check-in/check-out selections to a draft under a [`DatePolicy`]
//! and formats dates for display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Result, StaybookError};
use crate::types::DateSlot;

use super::draft::ReservationDraft;

/// Display format, fixed to the en-US short convention (`Jun 1, 2024`)
const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Input format accepted from the command line and config
const INPUT_FORMAT: &str = "%Y-%m-%d";

/// How a selection that would put check-out before check-in is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// No cross-check between the two dates
    Permissive,
    /// Pull the other date along so that check-out never precedes check-in
    #[default]
    Clamp,
    /// Drop the out-of-order selection and keep the draft as it was
    Reject,
}

impl FromStr for DatePolicy {
    type Err = StaybookError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "permissive" => Ok(DatePolicy::Permissive),
            "clamp" => Ok(DatePolicy::Clamp),
            "reject" => Ok(DatePolicy::Reject),
            _ => Err(StaybookError::InvalidInput(format!(
                "Invalid date policy: '{}'. Valid options: permissive, clamp, reject",
                s
            ))),
        }
    }
}

impl std::fmt::Display for DatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatePolicy::Permissive => write!(f, "permissive"),
            DatePolicy::Clamp => write!(f, "clamp"),
            DatePolicy::Reject => write!(f, "reject"),
        }
    }
}

/// What happened to a date selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOutcome {
    /// Picker dismissed without a date
    Cancelled,
    /// Selected date written as-is
    Applied,
    /// Selected date written, and `adjusted` was moved to keep the range ordered
    Clamped { adjusted: DateSlot, to: NaiveDate },
    /// Selection would have inverted the range and was dropped
    Rejected,
}

/// Write `date` into `slot` of `draft`, honouring `policy`
pub fn apply_to_draft(
    draft: ReservationDraft,
    slot: DateSlot,
    date: NaiveDate,
    policy: DatePolicy,
) -> (ReservationDraft, DateOutcome) {
    let out_of_order = match slot {
        DateSlot::CheckIn => date > draft.check_out,
        DateSlot::CheckOut => date < draft.check_in,
    };

    if !out_of_order || policy == DatePolicy::Permissive {
        let draft = match slot {
            DateSlot::CheckIn => ReservationDraft {
                check_in: date,
                ..draft
            },
            DateSlot::CheckOut => ReservationDraft {
                check_out: date,
                ..draft
            },
        };
        return (draft, DateOutcome::Applied);
    }

    match policy {
        DatePolicy::Reject => {
            tracing::warn!(%slot, %date, "Rejected out-of-order date selection");
            (draft, DateOutcome::Rejected)
        }
        // Both ends collapse onto the selected check-in, or check-out snaps
        // back to check-in.
        _ => {
            let (draft, adjusted, to) = match slot {
                DateSlot::CheckIn => (
                    ReservationDraft {
                        check_in: date,
                        check_out: date,
                        ..draft
                    },
                    DateSlot::CheckOut,
                    date,
                ),
                DateSlot::CheckOut => {
                    let check_in = draft.check_in;
                    (
                        ReservationDraft {
                            check_out: check_in,
                            ..draft
                        },
                        DateSlot::CheckOut,
                        check_in,
                    )
                }
            };
            tracing::debug!(%slot, %date, %adjusted, %to, "Clamped date selection");
            (draft, DateOutcome::Clamped { adjusted, to })
        }
    }
}

/// Human-readable short form, e.g. `Jun 1, 2024`
pub fn format_for_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_FORMAT).map_err(|_| {
        StaybookError::InvalidInput(format!(
            "Invalid date: '{}'. Expected format: YYYY-MM-DD",
            input
        ))
    })
}

/// Nights between check-in and check-out; negative when the range is inverted
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}
