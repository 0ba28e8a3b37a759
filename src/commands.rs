//! Command-line interface definition for zipdir.
//!
//! This module defines the CLI arguments, the usage text printed when no input
//! is given, and the pipeline that turns a [`Job`] into an archive on disk:
//! resolve the root and output path, walk the inputs, build the archive in
//! memory, then write it out.

use crate::archive;
use crate::error::Result;
use crate::file_util;
use crate::job::{Job, Level};
use crate::path_util;
use crate::settings::Settings;
use crate::walk;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Printed when the tool is started without any input.
pub const USAGE: &str = "\
Usage of zip:

  zip [-to=out/path] [-level=LEVEL] file1 [file2 ...]

  Provide one or more file/folder paths to be archived into one .zip file.
  All paths must be rooted in the same folder.
  The default output file name is that of the first given input file with the
  extension changed to .zip. If that file already exists, \" (2)\", \" (3)\" etc.
  is appended to the name. Provide the -to option to overwrite this path.
  Inputs must name a file or folder, so \".\" and \"..\" are not accepted; pass
  the folder by name from its parent instead (e.g. \"cd .. && zip project\").
";

/// Long flags that may also be spelled with a single dash, e.g. `-to=out.zip`.
const SINGLE_DASH_FLAGS: &[&str] = &["to", "level"];

/// Command-line interface definition for zipdir.
#[derive(Parser, Debug)]
#[command(name = "zip", version, about, long_about = None)]
pub struct Cli {
    /// Output file path. Derived from the first input when empty.
    #[arg(long = "to", value_name = "OUTPUT_PATH")]
    pub to: Option<OsString>,
    /// Compression level. Falls back to the settings file, then to `default`.
    #[arg(long, value_name = "LEVEL")]
    pub level: Option<Level>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Files or folders to archive. All must share the same parent folder.
    pub inputs: Vec<PathBuf>,
}

impl Cli {
    /// Parses the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Turns the parsed arguments into a job.
    ///
    /// The compression level comes from the command line if given, otherwise
    /// from `settings`.
    pub fn into_job(self, settings: &Settings) -> Job {
        Job {
            inputs: self.inputs,
            output: self.to.filter(|p| !p.is_empty()).map(PathBuf::from),
            level: self.level.or(settings.level).unwrap_or_default(),
        }
    }
}

/// Rewrites `-to`, `-to=x`, `-level` and `-level=x` into their `--` forms.
///
/// Only arguments before the first `--` are rewritten; everything else passes
/// through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut options_done = false;
    for arg in args {
        if !options_done {
            if arg == "--" {
                options_done = true;
            } else if let Some(long) = single_dash_flag(&arg) {
                out.push(long);
                continue;
            }
        }
        out.push(arg);
    }
    out
}

fn single_dash_flag(arg: &OsStr) -> Option<OsString> {
    let s = arg.to_str()?;
    let rest = s.strip_prefix('-')?;
    if rest.starts_with('-') {
        return None;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS
        .contains(&name)
        .then(|| OsString::from(format!("-{s}")))
}

/// Runs the whole pipeline for `job` and returns the path of the written archive.
///
/// Nothing is written unless every input was read and the archive was
/// finalized.
///
/// # Errors
/// Returns the first error hit by any stage.
pub fn run(job: &Job) -> Result<PathBuf> {
    let (root, output) = path_util::resolve(&job.inputs, job.output.as_deref())?;
    tracing::info!("root: {}, output: {}", root.display(), output.display());

    let bytes = archive::build(walk::walk(&job.inputs), job.level)?;
    file_util::write_archive(&output, &bytes)?;
    tracing::info!("wrote {} bytes to {}", bytes.len(), output.display());
    Ok(output)
}
