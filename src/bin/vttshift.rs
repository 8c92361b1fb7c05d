use clap::{ArgGroup, Parser};
use log::debug;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use vttshift::{
    default_output_path, resolve_shift, shift_file, OffsetSource, VttShiftError, VttShiftResult,
};

/// Shift timestamps in a WebVTT (.vtt) file.
#[derive(Parser, Debug)]
#[command(name = "vttshift")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("shift").args(["offset", "seconds"])))]
struct Cli {
    /// Path to input .vtt file
    input: PathBuf,

    /// Path to output .vtt file (default: <input>_shifted.vtt)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Time offset as HH:MM:SS.mmm (or MM:SS.mmm). Default: 00:22:58.000
    #[arg(short = 't', long, value_name = "TIME")]
    offset: Option<String>,

    /// Time offset in seconds (can be fractional)
    #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
    seconds: Option<f64>,

    /// Shift backward instead of forward
    #[arg(long)]
    subtract: bool,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        debug!("Run failed: {:?}", e);
        match &e {
            VttShiftError::Offset(_) => eprintln!("Error parsing offset: {}", e),
            _ => eprintln!("Error: {}", e),
        }
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> VttShiftResult<()> {
    if !cli.input.exists() {
        return Err(VttShiftError::InputNotFound(cli.input));
    }

    let output = cli
        .output
        .unwrap_or_else(|| default_output_path(&cli.input));
    let source = OffsetSource::from_args(cli.offset, cli.seconds);
    let shift = resolve_shift(&source, cli.subtract)?;

    let summary = shift_file(&cli.input, &output, shift)?;
    if cli.json {
        let json = serde_json::to_string(&summary).map_err(std::io::Error::from)?;
        println!("{}", json);
    } else {
        println!("{}", summary);
    }
    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .from_env_lossy()
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use std::path::Path;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["vttshift", "movie.vtt"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("movie.vtt"));
        assert!(cli.output.is_none());
        assert!(!cli.subtract);
        assert_eq!(
            OffsetSource::from_args(cli.offset, cli.seconds),
            OffsetSource::Default
        );
        assert_eq!(
            default_output_path(Path::new("movie.vtt")),
            PathBuf::from("movie_shifted.vtt")
        );
    }

    #[test]
    fn test_offset_and_seconds_conflict() {
        let err = Cli::try_parse_from(["vttshift", "a.vtt", "-t", "00:01.000", "-s", "1"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_subtract_with_seconds() {
        let cli =
            Cli::try_parse_from(["vttshift", "a.vtt", "--seconds", "5", "--subtract"]).unwrap();
        let subtracted =
            resolve_shift(&OffsetSource::from_args(cli.offset, cli.seconds), cli.subtract)
                .unwrap();

        let cli = Cli::try_parse_from(["vttshift", "a.vtt", "-s", "-5"]).unwrap();
        let negative =
            resolve_shift(&OffsetSource::from_args(cli.offset, cli.seconds), cli.subtract)
                .unwrap();

        assert_eq!(subtracted, negative);
        assert_eq!(negative, vttshift::TimeDelta::seconds(-5));
    }

    #[test]
    fn test_negative_seconds_report_backward() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.vtt");
        std::fs::write(&input, "WEBVTT\n\n00:00:10.000 --> 00:00:12.000\n").unwrap();

        let cli = Cli::try_parse_from(["vttshift", "in.vtt", "-s", "-5"]).unwrap();
        let shift =
            resolve_shift(&OffsetSource::from_args(cli.offset, cli.seconds), cli.subtract)
                .unwrap();
        let summary = shift_file(&input, &default_output_path(&input), shift).unwrap();
        assert_eq!(summary.direction, vttshift::Direction::Backward);
        assert_eq!(
            summary.to_string(),
            "Shifted 'in.vtt' backward by 00:00:05.000 → 'in_shifted.vtt'"
        );

        // Subtracting a negative offset moves cues forward
        let cli =
            Cli::try_parse_from(["vttshift", "in.vtt", "-s", "-5", "--subtract"]).unwrap();
        let shift =
            resolve_shift(&OffsetSource::from_args(cli.offset, cli.seconds), cli.subtract)
                .unwrap();
        let summary = shift_file(&input, &default_output_path(&input), shift).unwrap();
        assert_eq!(summary.direction, vttshift::Direction::Forward);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("in_shifted.vtt")).unwrap(),
            "WEBVTT\n\n00:00:15.000 --> 00:00:17.000\n"
        );
    }

    #[test]
    fn test_output_and_offset_flags() {
        let cli = Cli::try_parse_from([
            "vttshift",
            "in.vtt",
            "-o",
            "out.vtt",
            "--offset",
            "01:00.000",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.vtt")));
        assert_eq!(cli.offset.as_deref(), Some("01:00.000"));
        assert!(cli.json);
    }

    #[test]
    fn test_missing_input_exits_with_one() {
        let cli = Cli::try_parse_from(["vttshift", "/definitely/not/here.vtt"]).unwrap();
        let err = run(cli).unwrap_err();
        assert!(matches!(err, VttShiftError::InputNotFound(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_bad_offset_exits_with_two() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.vtt");
        std::fs::write(&input, "WEBVTT\n").unwrap();

        let cli = Cli::try_parse_from([
            "vttshift".into(),
            input.into_os_string(),
            "-t".into(),
            "soon".into(),
        ])
        .unwrap();
        let err = run(cli).unwrap_err();
        assert!(matches!(err, VttShiftError::Offset(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let err = Cli::try_parse_from(["vttshift", "a.vtt", "-v", "-q"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
