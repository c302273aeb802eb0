extern crate flasc;

use flasc::queries::{self, Selection};
use flasc::{plotting, solving};

type Result<T> = std::result::Result<T, ExampleError>;

#[derive(Debug)]
enum ExampleError {
    Unknown,
}

const DEMO_LP: &str = "demos/chatbot.lp";
const DEMO_SVG: &str = "demos/chatbot.svg";

fn main() -> Result<()> {
    println!("reading from: {}", DEMO_LP);
    let models = solving::collect_models(DEMO_LP, 0).map_err(|_| ExampleError::Unknown)?;
    println!("collected {:?} models", models.len());

    println!("\nfull output");
    queries::print_raw(&models).map_err(|_| ExampleError::Unknown)?;

    println!("all fluents by time step");
    queries::print_fluents(&models, Selection::All, None).map_err(|_| ExampleError::Unknown)?;

    println!("active fluents by time step");
    queries::print_fluents(&models, Selection::Active, None).map_err(|_| ExampleError::Unknown)?;

    println!("inactive fluents at time step 2");
    queries::print_fluents(&models, Selection::Inactive, Some(2))
        .map_err(|_| ExampleError::Unknown)?;

    let counts = queries::status_counts(&models);
    println!("active/inactive counts by time step: {:?}", counts);
    plotting::render_counts(DEMO_SVG, &counts).map_err(|_| ExampleError::Unknown)?;
    println!("wrote chart to: {}", DEMO_SVG);

    Ok(())
}
