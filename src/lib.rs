//! # Media Redate
//!
//! Batch-adjust the creation timestamps of video and photo files.
//!
//! This crate re-stamps the metadata creation date of every media file in a
//! directory according to one of three policies, writing adjusted copies to
//! a subdirectory and never touching the originals.
//!
//! ## Key Features
//!
//! - **Relative offset**: Shift each file's embedded timestamp by a fixed
//!   number of days, hours and minutes (components may be negative).
//! - **Exact date**: Stamp every file with the same fully-specified instant.
//! - **From filename**: Recover the timestamp encoded in names like
//!   `2018-04-07 17.50.41.mp4` or `2025-06-24 at 3.08.35 PM.jpeg`,
//!   interpreting it as local wall-clock time in a configurable timezone
//!   with full DST handling.
//! - **Tool adapters**: Videos are re-stamped through `ffmpeg`, photos
//!   through `exiftool`; a missing tool excludes its media kind instead of
//!   failing the run.
//!
//! ## Usage
//!
//! Create a [`redater::MediaRedater`] with the tools you have available and
//! run it over a directory with a [`policy::TimestampPolicy`].
//!
//! ```rust,no_run
//! use std::path::Path;
//! use media_redate::adapters::exiftool::ExifToolAdapter;
//! use media_redate::adapters::ffmpeg::FfmpegTool;
//! use media_redate::policy::TimestampPolicy;
//! use media_redate::redater::MediaRedater;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut redater = MediaRedater::builder()
//!         .maybe_video_tool(FfmpegTool::detect(None).map(|t| Box::new(t) as _))
//!         .maybe_photo_tool(ExifToolAdapter::new(None).ok().map(|t| Box::new(t) as _))
//!         .timezone(chrono_tz::America::Sao_Paulo)
//!         .build();
//!
//!     let policy = TimestampPolicy::Offset {
//!         days: 729,
//!         hours: -1,
//!         minutes: 0,
//!     };
//!     let report = redater.run(Path::new("videos"), &policy, &mut |result| {
//!         println!("{result:?}");
//!     })?;
//!
//!     println!(
//!         "{} updated, {} skipped, {} errors",
//!         report.success_count(),
//!         report.skipped_count(),
//!         report.error_count()
//!     );
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod error;
pub mod policy;
pub mod redater;
pub mod structs;
pub mod time;
pub mod utils;

pub use error::MediaRedateError;
