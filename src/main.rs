use chrono_tz::Tz;
use clap::Parser;
use color_eyre::eyre::{bail, eyre};
use media_redate::adapters::exiftool::ExifToolAdapter;
use media_redate::adapters::ffmpeg::FfmpegTool;
use media_redate::policy::TimestampPolicy;
use media_redate::redater::MediaRedater;
use media_redate::structs::{MediaKind, Outcome};
use media_redate::time::filename_parsing::parse_datetime_from_filename;
use media_redate::time::parsing::parse_exact_date;
use media_redate::time::zone::offset_label;
use media_redate::utils::list_media_files;
use std::path::PathBuf;

/// Batch-adjust the creation timestamps of video and photo files.
///
/// With no timestamp flags, each file's date is recovered from its filename
/// (e.g. `2018-04-07 17.50.41.mp4`). Adjusted copies are written to a
/// subdirectory of DIRECTORY; originals are never modified.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Directory whose immediate media files are processed.
    directory: PathBuf,

    /// Stamp every file with this exact date, e.g. "2024-03-15T14:30:00".
    #[arg(long, value_name = "DATETIME")]
    exact_date: Option<String>,

    /// Shift each file's embedded timestamp by this many days.
    #[arg(long, allow_negative_numbers = true, value_name = "N")]
    days: Option<i64>,

    /// Shift each file's embedded timestamp by this many hours.
    #[arg(long, allow_negative_numbers = true, value_name = "N")]
    hours: Option<i64>,

    /// Shift each file's embedded timestamp by this many minutes.
    #[arg(long, allow_negative_numbers = true, value_name = "N")]
    minutes: Option<i64>,

    /// Timezone filename timestamps are interpreted in.
    #[arg(long, default_value = "America/Sao_Paulo", value_name = "TZ")]
    timezone: String,

    /// Path to the ffmpeg executable (found on PATH by default).
    #[arg(long, value_name = "PATH")]
    ffmpeg_path: Option<PathBuf>,

    /// Path to the exiftool executable (found on PATH by default).
    #[arg(long, value_name = "PATH")]
    exiftool_path: Option<PathBuf>,
}

fn build_policy(cli: &Cli) -> color_eyre::Result<TimestampPolicy> {
    let has_offset = cli.days.is_some() || cli.hours.is_some() || cli.minutes.is_some();
    let policy = match (&cli.exact_date, has_offset) {
        (Some(_), true) => {
            bail!("--exact-date cannot be combined with --days/--hours/--minutes")
        }
        (Some(raw), false) => {
            let instant = parse_exact_date(raw)
                .ok_or_else(|| eyre!("could not parse exact date {raw:?}"))?;
            TimestampPolicy::ExactDate { instant }
        }
        (None, true) => TimestampPolicy::Offset {
            days: cli.days.unwrap_or(0),
            hours: cli.hours.unwrap_or(0),
            minutes: cli.minutes.unwrap_or(0),
        },
        (None, false) => TimestampPolicy::FromFilename,
    };
    policy.validate()?;
    Ok(policy)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Argument errors exit 1 like every other usage error; help and
    // version output are not errors and keep exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let policy = build_policy(&cli)?;
    let timezone: Tz = cli
        .timezone
        .parse()
        .map_err(|_| eyre!("unknown timezone {:?}", cli.timezone))?;

    let video_tool = FfmpegTool::detect(cli.ffmpeg_path.clone());
    if video_tool.is_none() {
        println!("Warning: ffmpeg not found, video files will be skipped.");
    }
    let photo_tool = match ExifToolAdapter::new(cli.exiftool_path.clone()) {
        Ok(tool) => Some(tool),
        Err(_) => {
            println!("Warning: exiftool not found, photo files will be skipped.");
            None
        }
    };
    if video_tool.is_none() && photo_tool.is_none() {
        bail!("neither ffmpeg nor exiftool is available");
    }

    let mut redater = MediaRedater::builder()
        .maybe_video_tool(video_tool.map(|t| Box::new(t) as _))
        .maybe_photo_tool(photo_tool.map(|t| Box::new(t) as _))
        .timezone(timezone)
        .build();

    println!("Processing media files in {}", cli.directory.display());
    println!(
        "Output directory: {}",
        cli.directory.join(policy.output_subdir()).display()
    );
    match &policy {
        TimestampPolicy::Offset {
            days,
            hours,
            minutes,
        } => println!("Mode: offset by {days}d {hours}h {minutes}m"),
        TimestampPolicy::ExactDate { instant } => println!("Mode: exact date {instant}"),
        TimestampPolicy::FromFilename => {
            println!("Mode: from filename, interpreted in {timezone}")
        }
    }
    if cli.directory.is_dir() {
        let found = list_media_files(&cli.directory)?;
        let videos = found.iter().filter(|f| f.kind == MediaKind::Video).count();
        let photos = found.len() - videos;
        println!("Found {videos} video(s) and {photos} photo(s).");
    }
    println!();

    let from_filename = matches!(policy, TimestampPolicy::FromFilename);
    let report = redater.run(&cli.directory, &policy, &mut |result| {
        let kind = match result.kind {
            MediaKind::Video => "[video]",
            MediaKind::Photo => "[photo]",
        };
        let name = result
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match &result.outcome {
            Outcome::Success { original, new } => {
                println!("{kind} {name}");
                if from_filename {
                    if let Some(civil) = parse_datetime_from_filename(&name) {
                        println!(
                            "  From filename: {civil} ({})",
                            offset_label(civil, timezone)
                        );
                    }
                    println!("  Previous: {original}");
                } else {
                    println!("  Original: {original}");
                }
                println!("  New:      {new}");
            }
            Outcome::Skipped { reason } => println!("{kind} {name}\n  Skipped: {reason}"),
            Outcome::Error { detail } => println!("{kind} {name}\n  Error: {detail}"),
        }
    })?;

    println!();
    println!(
        "Done: {} updated, {} skipped, {} errors.",
        report.success_count(),
        report.skipped_count(),
        report.error_count()
    );
    println!("Output written to {}", report.output_dir.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from([&["media_redate"], args].concat()).unwrap()
    }

    #[test]
    fn test_argument_errors_are_usage_errors_not_help_output() {
        // Missing positional and unknown flags print to stderr and must map
        // to exit 1; help and version print to stdout and map to exit 0.
        let missing = Cli::try_parse_from(["media_redate"]).unwrap_err();
        assert!(missing.use_stderr());
        let unknown = Cli::try_parse_from(["media_redate", "--bogus", "d"]).unwrap_err();
        assert!(unknown.use_stderr());
        let help = Cli::try_parse_from(["media_redate", "--help"]).unwrap_err();
        assert!(!help.use_stderr());
    }

    #[test]
    fn test_mode_selection() {
        assert_eq!(
            build_policy(&cli(&["d"])).unwrap(),
            TimestampPolicy::FromFilename
        );
        assert_eq!(
            build_policy(&cli(&["d", "--days", "729", "--hours", "-1"])).unwrap(),
            TimestampPolicy::Offset {
                days: 729,
                hours: -1,
                minutes: 0
            }
        );
        assert!(matches!(
            build_policy(&cli(&["d", "--exact-date", "2024-03-15T14:30:00"])).unwrap(),
            TimestampPolicy::ExactDate { .. }
        ));
    }

    #[test]
    fn test_conflicting_and_invalid_modes_are_rejected() {
        assert!(build_policy(&cli(&["d", "--exact-date", "2024-03-15T14:30:00", "--days", "1"])).is_err());
        assert!(build_policy(&cli(&["d", "--exact-date", "15/03/2024"])).is_err());
        assert!(build_policy(&cli(&["d", "--days", "0", "--hours", "0", "--minutes", "0"])).is_err());
    }
}
