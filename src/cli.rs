use clap::{Args, Parser, Subcommand};

use crate::config::ApiConfig;
use crate::models::flight_query::{self, FlightQuery};
use crate::models::prediction::SubmissionState;
use crate::services::prediction_service::PredictionService;
use crate::services::submission_service::SubmissionService;
use crate::services::validation_service::ValidationService;
use crate::utils::error::AppResult;
use crate::views::{price_ticker, result_view};

#[derive(Parser)]
#[command(name = "flight-fare", about = "Flight price prediction client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict the fare for a flight
    Predict(PredictArgs),
    /// Check whether the prediction API is reachable
    Status,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Start from the documented sample flight instead of an empty form
    #[arg(long)]
    pub sample: bool,

    #[arg(long)]
    pub airline: Option<String>,

    #[arg(long)]
    pub source: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    /// Route legs; derived from source and destination when omitted
    #[arg(long)]
    pub route: Option<String>,

    /// Journey date as YYYY-MM-DD; defaults to tomorrow
    #[arg(long)]
    pub date: Option<String>,

    /// Departure time, e.g. 10:00
    #[arg(long)]
    pub dep_time: Option<String>,

    /// Arrival time, e.g. 12:30
    #[arg(long)]
    pub arrival_time: Option<String>,

    /// Flight duration, e.g. "2h 50m"
    #[arg(long)]
    pub duration: Option<String>,

    /// Stop descriptor, e.g. non-stop
    #[arg(long)]
    pub total_stops: Option<String>,

    #[arg(long)]
    pub additional_info: Option<String>,

    /// Print the final price without the count-up animation
    #[arg(long)]
    pub no_animation: bool,
}

impl PredictArgs {
    /// Merge the flags over the sample flight or the form defaults,
    /// the same way editing a pre-filled form would.
    pub fn into_query(self) -> FlightQuery {
        let base = if self.sample {
            FlightQuery::sample()
        } else {
            FlightQuery::form_defaults()
        };

        let mut query = FlightQuery {
            airline: self.airline.unwrap_or(base.airline),
            source: self.source.unwrap_or(base.source),
            destination: self.destination.unwrap_or(base.destination),
            route: self.route.unwrap_or(base.route),
            date_of_journey: self.date.unwrap_or(base.date_of_journey),
            dep_time: self.dep_time.unwrap_or(base.dep_time),
            arrival_time: self.arrival_time.unwrap_or(base.arrival_time),
            duration: self.duration.unwrap_or(base.duration),
            total_stops: self.total_stops.unwrap_or(base.total_stops),
            additional_info: self.additional_info.unwrap_or(base.additional_info),
        };

        if query.route.is_empty() && !query.source.is_empty() && !query.destination.is_empty() {
            query.route = flight_query::derive_route(&query.source, &query.destination);
        }

        query
    }
}

pub async fn run(cli: Cli) -> AppResult<()> {
    let config = ApiConfig::from_env();
    let prediction_service = PredictionService::new(config);

    match cli.command {
        Commands::Status => {
            let status = prediction_service.check_status().await;
            println!("API status: {}", status);
        }
        Commands::Predict(args) => {
            let animate = !args.no_animation;
            let query = args.into_query();

            let submission = SubmissionService::new(ValidationService::new(), prediction_service);
            let state = submission
                .submit(&query, |state| match state {
                    SubmissionState::Validating | SubmissionState::Submitting => {
                        println!("{}", result_view::render(state));
                    }
                    _ => {}
                })
                .await;

            match state {
                SubmissionState::Success(result) => {
                    if animate {
                        price_ticker::play(result.price).await;
                        println!();
                        println!("{}", result_view::summary_block(&result.payload.summary()));
                    } else {
                        println!("{}", result_view::render_success(&result));
                    }
                }
                SubmissionState::Failure(message) => {
                    eprintln!("{}", result_view::render_failure(&message));
                    std::process::exit(1);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
