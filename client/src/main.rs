//! BMI Calculator command-line client
//!
//! Drives the form controller from the terminal: compute a BMI locally,
//! save it to the site's history, or ask the server to check it.

use anyhow::{bail, Result};
use bmi_calculator_client::{
    api::HttpApiClient,
    config::AppConfig,
    ui::{format_score, ConsoleNotifier, DashboardForm, QuickForm},
    FormController, SaveOutcome, Session,
};
use bmi_calculator_shared::bmi::Measurement;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "bmi-client", version, about = "Compute and save BMI measurements")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute and classify a BMI without saving it
    Compute(MeasurementArgs),
    /// Compute a BMI and save it to your history
    Save {
        #[command(flatten)]
        measurement: MeasurementArgs,
        /// Use the dashboard form (note allowed, form cleared after saving)
        #[arg(long)]
        dashboard: bool,
        /// Note stored with a dashboard save
        #[arg(long, requires = "dashboard")]
        note: Option<String>,
    },
    /// Ask the server to compute and classify a BMI
    Check(MeasurementArgs),
}

#[derive(Debug, Args)]
struct MeasurementArgs {
    /// Weight in kilograms
    #[arg(long)]
    weight: String,
    /// Height in centimeters
    #[arg(long)]
    height: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        logged_in = config.session.logged_in,
        "Starting BMI client"
    );

    let client = HttpApiClient::from_config(&config.api)?;
    let controller = FormController::new(
        Session::from_flag(config.session.logged_in),
        client.clone(),
        ConsoleNotifier,
    )
    .with_quick_note(config.forms.quick_note.clone());

    match cli.command {
        Command::Compute(args) => {
            let mut form = QuickForm::with_inputs(args.weight, args.height);
            controller.compute_quick(&mut form);
            print_quick_form(&form);
        }
        Command::Save {
            measurement,
            dashboard,
            note,
        } => {
            let state = controller.save_button_state();
            if !state.enabled {
                info!(title = state.title, "Save button disabled");
            }

            let outcome = if dashboard {
                let mut form = DashboardForm::with_inputs(
                    measurement.weight,
                    measurement.height,
                    note.unwrap_or_default(),
                );
                let outcome = controller.save_dashboard(&mut form).await;
                println!("BMI: {}  Category: {}", form.score.text(), form.category.text());
                outcome
            } else {
                let mut form = QuickForm::with_inputs(measurement.weight, measurement.height);
                let outcome = controller.save_quick(&mut form).await;
                print_quick_form(&form);
                outcome
            };

            if outcome != SaveOutcome::Saved {
                bail!("BMI was not saved");
            }
        }
        Command::Check(args) => {
            let measurement = Measurement::parse(&args.weight, &args.height)?;
            let response = client.check_bmi(&measurement).await?;
            match response.result() {
                Some(result) => println!(
                    "BMI: {}  Category: {}",
                    format_score(result.value),
                    result.category
                ),
                None => bail!("Check failed: {}", response.failure_reason()),
            }
        }
    }

    Ok(())
}

fn print_quick_form(form: &QuickForm) {
    println!("BMI: {}  Category: {}", form.score.text(), form.category.text());
    if !form.advice.text().is_empty() {
        println!("{}", form.advice.text());
    }
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout only carries results.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "bmi_calculator_client=info".into()
        } else {
            "bmi_calculator_client=debug,bmi_client=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
