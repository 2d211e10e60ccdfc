use std::{fs, path::PathBuf, process::ExitCode};

use cck_gpx::{config::Config, extract::extract_route, Error, Result};
use clap::Parser;
use log::LevelFilter;
use scraper::Html;

/// Extract delivery route waypoints from a saved route page into a GPX file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Route page saved from a browser after it has run the page's scripts
    input: PathBuf,
    /// GPX file to write
    output: PathBuf,
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let bytes = fs::read(&args.input).map_err(|source| Error::Read {
        path: args.input.clone(),
        source,
    })?;
    // a stray invalid byte should cost at most the stop it sits in
    let document = Html::parse_document(&String::from_utf8_lossy(&bytes));

    let extraction = extract_route(&document, config)?;
    for diagnostic in &extraction.diagnostics {
        log::warn!("{diagnostic}");
    }
    if extraction.waypoints.is_empty() {
        return Err(Error::NoRoutePoints);
    }

    let count = extraction.waypoints.len();
    let gpx = extraction.into_gpx(&config.gpx_creator);
    gpx.save(&args.output).map_err(|source| Error::Write {
        path: args.output.clone(),
        source,
    })?;
    log::info!("wrote {count} waypoints to {}", args.output.display());
    Ok(())
}

/// Process exit status for the outcome of [`run`]. Usage errors exit with 2 from clap.
fn exit_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    // diagnostics are warnings, so show them unless RUST_LOG says otherwise
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    let result = run(&args, &config);
    if let Err(e) = &result {
        log::error!("{e}");
    }
    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::path::Path;

    const ROUTE_PAGE: &str = "./src/parse/html_examples/route_page/route.html";

    /// A path in the temp dir unique to this test process, removed up front.
    fn scratch_path(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cck_gpx-{}-{name}", std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    fn args(input: &Path, output: &Path) -> Args {
        Args {
            input: input.to_owned(),
            output: output.to_owned(),
        }
    }

    #[test]
    fn test_empty_route_list_fails_without_output() {
        let input = scratch_path("empty.html");
        let output = scratch_path("empty.gpx");
        fs::write(&input, "<main><div></div><div><ul></ul></div></main>").unwrap();

        let result = run(&args(&input, &output), &Config::default());
        assert!(matches!(result, Err(Error::NoRoutePoints)));
        assert_eq!(exit_status(&result), 1);
        assert!(!output.exists());
        fs::remove_file(&input).unwrap();
    }

    #[test]
    fn test_missing_route_list_fails() {
        let input = scratch_path("no-list.html");
        let output = scratch_path("no-list.gpx");
        fs::write(&input, "<main><noscript>Enable Javascript</noscript></main>").unwrap();

        let result = run(&args(&input, &output), &Config::default());
        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(exit_status(&result), 1);
        assert!(!output.exists());
        fs::remove_file(&input).unwrap();
    }

    #[test]
    fn test_unreadable_input_fails() {
        let input = scratch_path("does-not-exist.html");
        let output = scratch_path("does-not-exist.gpx");
        let result = run(&args(&input, &output), &Config::default());
        assert!(matches!(result, Err(Error::Read { .. })));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_route_page_with_invalid_utf8() {
        let input = scratch_path("route.html");
        let output = scratch_path("route.gpx");
        let mut page = fs::read(ROUTE_PAGE).unwrap();
        page.extend_from_slice(b"<p>\xff</p>\n");
        fs::write(&input, page).unwrap();

        let result = run(&args(&input, &output), &Config::default());
        assert!(result.is_ok(), "{result:?}");
        assert_eq!(exit_status(&result), 0);
        let gpx = fs::read_to_string(&output).unwrap();
        assert_eq!(gpx.matches("<wpt ").count(), 3);
        assert!(gpx.contains("<name>Alex</name>"));
        fs::remove_file(&input).unwrap();
        fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_missing_arguments_are_usage_errors() {
        let err = Args::try_parse_from(["cck_gpx"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);

        let err = Args::try_parse_from(["cck_gpx", "route.html"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let parsed = Args::try_parse_from(["cck_gpx", "route.html", "route.gpx"]).unwrap();
        assert_eq!(parsed.output, PathBuf::from("route.gpx"));
    }
}
