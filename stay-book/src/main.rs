//! stay-book - Fill in and submit a reservation from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use libstaybook::booking::DateOutcome;
use libstaybook::{
    catalog, logging, BookingFlow, Config, Confirmation, DatePolicy, DraftField, FormCommand,
    Hotel, Navigator, ReservationDraft, StaybookError, SubmitOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "stay-book")]
#[command(version, about = "Fill in and submit a hotel reservation")]
#[command(long_about = r#"Fill in and submit a hotel reservation.

Each flag writes one field of the booking form, in form order. The form is
then submitted; it goes through only when the terms are accepted.

EXAMPLES:
    # Three nights in a suite for two
    stay-book --name "Jane Doe" --check-in 2024-06-01 --check-out 2024-06-04 \
        --room suite --guests 2 --phone 5550100 --accept-terms

    # Machine-readable confirmation
    stay-book --accept-terms --format json | jq .reference

    # Refuse out-of-order dates instead of adjusting them
    stay-book --check-in 2024-06-05 --check-out 2024-06-01 --date-policy reject

EXIT CODES:
    0 - Reservation handed off, confirmation printed
    1 - Configuration error
    3 - Invalid input (bad date, room type, guest count, hotel)
    4 - Submission blocked (terms not accepted or selections missing)
"#)]
struct Cli {
    /// Hotel to book (catalog id)
    #[arg(long, value_name = "ID")]
    hotel: Option<String>,

    /// Guest full name
    #[arg(long)]
    name: Option<String>,

    /// Check-in date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    check_in: Option<String>,

    /// Check-out date (YYYY-MM-DD), defaults to check-in
    #[arg(long, value_name = "DATE")]
    check_out: Option<String>,

    /// Room type: standard, deluxe, suite, presidential-suite
    #[arg(long, value_name = "ROOM")]
    room: Option<String>,

    /// Number of guests (1-6)
    #[arg(long, value_name = "N")]
    guests: Option<String>,

    /// Phone number, without country code
    #[arg(long)]
    phone: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    accept_terms: bool,

    /// Date ordering rule: permissive, clamp or reject
    #[arg(long, value_name = "POLICY")]
    date_policy: Option<String>,

    /// Require room type and guest count before submitting
    #[arg(long)]
    require_selections: bool,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// How a run ended when no error occurred
enum Outcome {
    Confirmed,
    Blocked(String),
}

/// Builds the confirmation once the form hands its draft off
struct ConfirmingNavigator {
    hotel: &'static Hotel,
    country_code: String,
    confirmation: Option<Confirmation>,
}

impl Navigator for ConfirmingNavigator {
    fn proceed(&mut self, draft: ReservationDraft) {
        self.confirmation = Some(Confirmation::new(&draft, self.hotel, &self.country_code));
    }

    fn go_back(&mut self) {
        tracing::debug!("Booking abandoned");
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Confirmed) => {}
        Ok(Outcome::Blocked(message)) => {
            eprintln!("Error: {}", message);
            std::process::exit(4);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<StaybookError>()
                .map_or(1, StaybookError::exit_code);
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let mut log_config = logging::from_env(config.logging.format, "error");
    log_config.verbose = cli.verbose;
    log_config.init().context("Failed to initialize logging")?;

    if let Some(policy) = &cli.date_policy {
        config.booking.date_policy = policy.parse::<DatePolicy>()?;
    }
    if cli.require_selections {
        config.booking.require_selections = true;
    }

    let hotel_id = cli
        .hotel
        .clone()
        .unwrap_or_else(|| config.booking.default_hotel.clone());
    let hotel = catalog::find(&hotel_id)?;

    let fields = collect_fields(&cli)?;

    // The draft starts on the requested check-in so only check-out is ordered against it
    let start = fields
        .iter()
        .find_map(|field| match field {
            DraftField::CheckIn(date) => Some(*date),
            _ => None,
        })
        .unwrap_or_else(today);

    let navigator = ConfirmingNavigator {
        hotel,
        country_code: config.booking.country_code.clone(),
        confirmation: None,
    };
    let mut flow = BookingFlow::start(navigator, start, config.booking.policy());

    for field in fields {
        let writes_date = matches!(field, DraftField::CheckIn(_) | DraftField::CheckOut(_));
        flow.dispatch(FormCommand::SetField(field));
        if writes_date {
            report_date_outcome(&flow)?;
        }
    }
    if cli.accept_terms {
        flow.dispatch(FormCommand::ToggleTerms);
    }

    match flow.submit() {
        SubmitOutcome::HandedOff => {}
        SubmitOutcome::Blocked => {
            let message = match flow.form() {
                Some(form) if !form.draft().terms_accepted => {
                    "Terms and conditions not accepted (pass --accept-terms)".to_string()
                }
                Some(form) => {
                    let missing: Vec<String> = form
                        .missing_selections()
                        .iter()
                        .map(|s| s.to_string())
                        .collect();
                    format!("Missing selection: {}", missing.join(", "))
                }
                None => "Booking session already ended".to_string(),
            };
            return Ok(Outcome::Blocked(message));
        }
        SubmitOutcome::Inactive => {
            return Ok(Outcome::Blocked("Booking session already ended".to_string()));
        }
    }

    let confirmation = flow
        .into_navigator()
        .confirmation
        .context("Reservation was handed off without a confirmation")?;

    tracing::info!(reference = %confirmation.reference, hotel = hotel.id, "Reservation handed off");

    match cli.format.as_str() {
        "json" => println!("{}", confirmation.to_json()?),
        _ => {
            for (label, value) in confirmation.summary_rows() {
                println!("{:<16}{}", format!("{}:", label), value);
            }
        }
    }

    Ok(Outcome::Confirmed)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse the field flags in form order
fn collect_fields(cli: &Cli) -> Result<Vec<DraftField>> {
    let pairs = [
        ("name", &cli.name),
        ("check-in", &cli.check_in),
        ("check-out", &cli.check_out),
        ("room", &cli.room),
        ("guests", &cli.guests),
        ("phone", &cli.phone),
    ];

    let mut fields = Vec::new();
    for (name, value) in pairs {
        if let Some(value) = value {
            fields.push(DraftField::parse(name, value)?);
        }
    }
    Ok(fields)
}

/// Surface adjusted or refused dates; a refused date is an input error
fn report_date_outcome<N: Navigator>(flow: &BookingFlow<N>) -> Result<()> {
    let outcome = flow.form().and_then(|form| form.last_date_outcome());
    match outcome {
        Some(DateOutcome::Clamped { adjusted, to }) => {
            eprintln!("Note: {} adjusted to {}", adjusted, to);
            Ok(())
        }
        Some(DateOutcome::Rejected) => Err(StaybookError::InvalidInput(
            "Check-out date is before check-in date".to_string(),
        )
        .into()),
        _ => Ok(()),
    }
}
