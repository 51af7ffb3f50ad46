use std::ffi::OsString;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use crate::data::aggregate::aggregate;
use crate::data::format::format_g25;
use crate::data::loader::load_file;
use crate::data::model::{Aggregate, AverageMode};

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Average Global25 coordinate samples into a single sample.
///
/// Input lines look like `Name,c1,c2,...,c25`. Blank lines and lines
/// starting with `#` are ignored.
#[derive(Debug, Clone, Parser)]
#[command(name = "g25-average")]
#[command(version)]
pub struct Args {
    /// Input file with one sample per line
    pub input: PathBuf,

    /// simple: every sample counts equally; grouped: every group (text
    /// before the first ':' or, failing that, the first '_') counts equally
    #[arg(long, value_enum, ignore_case = true, default_value_t = AverageMode::Simple)]
    pub mode: AverageMode,

    /// Output file (default: <input>.avg.txt)
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Name of the averaged sample (prompted for when omitted; an empty name
    /// exits with status 2)
    #[arg(long)]
    pub name: Option<String>,

    /// Print a JSON summary instead of the text report
    #[arg(long)]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

/// The output sample name was empty after trimming.
#[derive(Debug, thiserror::Error)]
#[error("output name cannot be empty")]
pub struct EmptyNameError;

/// Process exit status for a failed run: 2 for a usage problem, 1 otherwise.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    if err.is::<EmptyNameError>() {
        2
    } else {
        1
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub name: String,
    #[serde(flatten)]
    pub aggregate: Aggregate,
    pub line: String,
    pub output: PathBuf,
}

/// Load, average, report and save.
///
/// `stdin` answers the name prompt, `stdout` receives the report and
/// `stderr` the prompt itself.
pub fn run<R, W, E>(args: &Args, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> Result<Outcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let samples = load_file(&args.input)?;

    let name = match &args.name {
        Some(name) => name.trim().to_string(),
        None => prompt_name(stdin, stderr)?,
    };
    if name.is_empty() {
        return Err(EmptyNameError.into());
    }

    let aggregate = aggregate(&samples, args.mode)?;
    let line = format_g25(&name, &aggregate.vector);
    let output = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    std::fs::write(&output, format!("{line}\n"))
        .with_context(|| format!("writing {}", output.display()))?;
    info!("saved {} to {}", name, output.display());

    let outcome = Outcome {
        name,
        aggregate,
        line,
        output,
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *stdout, &outcome).context("serializing summary")?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_report(&outcome))?;
    }
    Ok(outcome)
}

fn prompt_name<R: BufRead, E: Write>(stdin: &mut R, stderr: &mut E) -> Result<String> {
    write!(stderr, "Enter output sample name: ")?;
    stderr.flush()?;

    let mut answer = String::new();
    stdin.read_line(&mut answer).context("reading output sample name")?;
    Ok(answer.trim().to_string())
}

/// `<input>.avg.txt`, keeping the input's own extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut path = OsString::from(input.as_os_str());
    path.push(".avg.txt");
    PathBuf::from(path)
}

/// Human-readable summary ending with the saved location.
pub fn render_report(outcome: &Outcome) -> String {
    let agg = &outcome.aggregate;
    let mut lines = Vec::new();

    lines.push(String::new());
    match &agg.group_counts {
        None => lines.push(format!("Averaged {} samples (simple).", agg.sample_count)),
        Some(counts) => {
            lines.push(format!(
                "Averaged {} samples using grouped mode (equal weight per group).",
                agg.sample_count
            ));
            lines.push("Group counts:".to_string());
            for (label, count) in counts {
                lines.push(format!("  - {label}: {count}"));
            }
        }
    }
    lines.push(String::new());
    lines.push("Result:".to_string());
    lines.push(outcome.line.clone());
    lines.push(String::new());
    lines.push(format!("Saved to: {}", outcome.output.display()));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}
