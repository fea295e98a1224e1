use base64::{engine::general_purpose, Engine};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Full path to TOML case file
    #[clap(short, long, value_parser)]
    toml: Option<String>,

    /// Base64 encoded TOML case file
    #[clap(short, long, value_parser)]
    data: Option<String>,
}

fn main() {
    let args = Args::parse();
    println!("[casework] Starting case analysis!");

    if let Some(toml) = args.toml {
        if !toml.is_empty() {
            let analysis_results = casework_core::core::parse_case_file(&toml);
            match analysis_results {
                Ok(report) => println!("[casework] Case report written to {report}"),
                Err(err) => {
                    println!("[casework] Failed to analyze case: {err:?}");
                    return;
                }
            }
        }
    } else if let Some(data) = args.data {
        if !data.is_empty() {
            let toml_data_results = general_purpose::STANDARD.decode(&data);
            let toml_data = match toml_data_results {
                Ok(results) => results,
                Err(err) => {
                    println!("[casework] Failed to base64 decode TOML case file {data}, error: {err:?}");
                    return;
                }
            };
            let analysis_results = casework_core::core::parse_case_data(&toml_data);
            match analysis_results {
                Ok(report) => println!("[casework] Case report written to {report}"),
                Err(err) => {
                    println!("[casework] Failed to analyze case: {err:?}");
                    return;
                }
            }
        }
    } else {
        println!("[casework] No TOML file or data provided!");
        return;
    }
    println!("[casework] Finished case analysis!");
}
