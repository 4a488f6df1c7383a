use dish_form_rs::constants::API_URL;
use dish_form_rs::data_backend::dish_api::HttpDishApi;
use dish_form_rs::data_types::{FieldName, SubmitOutcome};
use dish_form_rs::form_controller::DishForm;
use dish_form_rs::shared_main::{build_form_report, logger_init};
use dish_form_rs::submission_client::SubmissionClient;

use anyhow::{bail, Result};
use clap::Parser;

/// Submit a dish (pizza, soup or sandwich) to the dish API.
/// {n}Fields are validated locally before anything is sent.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Endpoint receiving the POST
    #[arg(long, env = "DISH_API_URL", default_value = API_URL)]
    api_url: String,
    /// Dish name
    #[arg(short, long)]
    name: Option<String>,
    /// Preparation time as HH:MM:SS, MM:SS or SS [default: 00:00:00]
    #[arg(short, long)]
    preparation_time: Option<String>,
    /// One of pizza, soup, sandwich
    #[arg(short = 't', long = "type", id = "TYPE")]
    dish_type: Option<String>,
    /// Pizza only [default: 1]
    #[arg(long)]
    no_of_slices: Option<String>,
    /// Pizza only [default: 0]
    #[arg(long)]
    diameter: Option<String>,
    /// Soup only, 1 to 10 [default: 5]
    #[arg(long)]
    spiciness_scale: Option<String>,
    /// Sandwich only [default: 0]
    #[arg(long)]
    slices_of_bread: Option<String>,
    /// Validate and print the JSON payload without sending it
    #[arg(long)]
    dry_run: bool,
    /// Enable verbose logging (request timings){n}[SETS env: RUST_LOG=debug]
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn fill_form(&self, form: &mut DishForm) {
        let fields = [
            (FieldName::Type, &self.dish_type),
            (FieldName::Name, &self.name),
            (FieldName::PreparationTime, &self.preparation_time),
            (FieldName::NoOfSlices, &self.no_of_slices),
            (FieldName::Diameter, &self.diameter),
            (FieldName::SpicinessScale, &self.spiciness_scale),
            (FieldName::SlicesOfBread, &self.slices_of_bread),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                form.set_value(field, value.as_str());
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    logger_init(module_path!());

    let mut form = DishForm::new();
    args.fill_form(&mut form);

    if args.dry_run {
        return match form.prepare_submission() {
            Ok(dish) => {
                println!("{}", serde_json::to_string_pretty(&dish)?);
                Ok(())
            }
            Err(e) => {
                print!("{}", build_form_report(&form, &Default::default()));
                Err(e.into())
            }
        };
    }

    let client = SubmissionClient::new(HttpDishApi::new(args.api_url)?);
    log::info!("Sending to {}", client.api().url());

    let outcome = form.submit(&client).await;
    print!("{}", build_form_report(&form, &client.state()));

    match outcome {
        Err(e) => Err(e.into()),
        Ok(SubmitOutcome::Applied(state)) if state.is_failed() => bail!("dish was not saved"),
        Ok(_) => Ok(()),
    }
}
