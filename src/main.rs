mod args;
mod config;

use ctv::Result;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Beginning process...");

    let input_args = args::parse_input_args()?;
    log::debug!("Found input args: {input_args:?}");

    let output_dir = config::resolve_output_dir(input_args.output_dir, &input_args.input);
    log::debug!("Writing outputs into: {output_dir:?}");

    let summary = ctv::process_file(&input_args.input, &output_dir)?;

    log::debug!("Process complete. Reporting summary...");

    println!("{}", serde_json::to_string(&summary)?);

    log::debug!("Application finished successfully!");

    Ok(())
}
