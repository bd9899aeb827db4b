//! The `json-join` command-line shell.
//!
//! Thin plumbing around the core: decodes the two input streams, validates
//! the key-expression options, and renders the joined pairs. Every error is
//! detected before the join engine runs; the tool is batch, all-or-nothing.

use std::fs::File;
use std::io::{self, BufReader};

use clap::{Args, Parser, Subcommand};
use json_join_keypath::KeyPath;
use serde_json::Value;
use thiserror::Error;

use crate::join::{join, JoinFlags};
use crate::partition::Partition;
use crate::render::{render_left, render_pair};
use crate::stream::decode_stream;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{side} data stream required")]
    MissingStream { side: &'static str },
    #[error("cannot read {path}")]
    UnreadableStream {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    MalformedStream {
        path: String,
        source: serde_json::Error,
    },
    #[error("keys required")]
    MissingKeySpec,
    #[error("using is mutually exclusive with left-key and right-key")]
    ConflictingKeySpec,
    #[error("both left-key and right-key are required")]
    IncompleteKeySpec,
    #[error("cannot render output: {0}")]
    Render(#[from] serde_json::Error),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "json-join", version, about = "Join records from two JSON streams.")]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Mode,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Inner join.
    Inner(StreamOpts),
    /// Full outer join.
    Outer(StreamOpts),
    /// Left outer join.
    LeftOuter(StreamOpts),
    /// Right outer join.
    RightOuter(StreamOpts),
    /// Symmetric difference.
    SymmDiff(StreamOpts),
    /// Subtract the right stream from the left stream.
    Subtract(StreamOpts),
}

impl Mode {
    fn opts(&self) -> &StreamOpts {
        match self {
            Mode::Inner(o)
            | Mode::Outer(o)
            | Mode::LeftOuter(o)
            | Mode::RightOuter(o)
            | Mode::SymmDiff(o)
            | Mode::Subtract(o) => o,
        }
    }

    fn flags(&self) -> JoinFlags {
        match self {
            Mode::Inner(_) => JoinFlags::INNER,
            Mode::Outer(_) => JoinFlags::FULL_OUTER,
            Mode::LeftOuter(_) => JoinFlags::LEFT_OUTER,
            Mode::RightOuter(_) => JoinFlags::RIGHT_OUTER,
            Mode::SymmDiff(_) => JoinFlags::SYMMETRIC_DIFFERENCE,
            Mode::Subtract(_) => JoinFlags::SUBTRACT,
        }
    }
}

#[derive(Debug, Args, Default)]
pub struct StreamOpts {
    /// Left JSON stream ("-" for stdin).
    #[arg(short = 'l', long)]
    pub left: Option<String>,
    /// Right JSON stream ("-" for stdin).
    #[arg(short = 'r', long)]
    pub right: Option<String>,
    /// Left stream join key.
    #[arg(long)]
    pub left_key: Option<String>,
    /// Right stream join key.
    #[arg(long)]
    pub right_key: Option<String>,
    /// Join both streams using this key.
    #[arg(short = 'u', long)]
    pub using: Option<String>,
}

// ── Configuration validation ──────────────────────────────────────────────

/// Resolve the key-expression options into one path per side.
///
/// Exactly one of `--using` or the `--left-key`/`--right-key` pair must be
/// supplied; any other combination is a configuration error.
pub fn key_paths(opts: &StreamOpts) -> Result<(KeyPath, KeyPath), CliError> {
    match (&opts.using, &opts.left_key, &opts.right_key) {
        (None, None, None) => Err(CliError::MissingKeySpec),
        (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(CliError::ConflictingKeySpec),
        (Some(expr), None, None) => {
            let path = KeyPath::parse(expr);
            Ok((path.clone(), path))
        }
        (None, Some(left), Some(right)) => Ok((KeyPath::parse(left), KeyPath::parse(right))),
        (None, _, _) => Err(CliError::IncompleteKeySpec),
    }
}

fn load_stream(side: &'static str, location: Option<&str>) -> Result<Vec<Value>, CliError> {
    let location = location.ok_or(CliError::MissingStream { side })?;
    let decoded = if location == "-" {
        decode_stream(io::stdin().lock())
    } else {
        let file = File::open(location).map_err(|source| CliError::UnreadableStream {
            path: location.to_string(),
            source,
        })?;
        decode_stream(BufReader::new(file))
    };
    decoded.map_err(|source| CliError::MalformedStream {
        path: location.to_string(),
        source,
    })
}

/// Everything the join needs, fully materialized and validated.
#[derive(Debug)]
pub struct JoinInputs {
    pub left: Vec<Value>,
    pub right: Vec<Value>,
    pub left_key: KeyPath,
    pub right_key: KeyPath,
}

impl JoinInputs {
    pub fn gather(opts: &StreamOpts) -> Result<JoinInputs, CliError> {
        let left = load_stream("left", opts.left.as_deref())?;
        let right = load_stream("right", opts.right.as_deref())?;
        let (left_key, right_key) = key_paths(opts)?;
        Ok(JoinInputs { left, right, left_key, right_key })
    }
}

// ── Execution ─────────────────────────────────────────────────────────────

/// Join the gathered inputs and render one document per pair.
///
/// Each side is partitioned with its own declared key path. For every mode
/// but subtract, a pair renders as `{"left": …, "right": …}`; subtract emits
/// only the surviving left record.
pub fn execute(inputs: &JoinInputs, flags: JoinFlags) -> Result<Vec<String>, CliError> {
    let left = Partition::build(&inputs.left_key, &inputs.left);
    let right = Partition::build(&inputs.right_key, &inputs.right);
    let subtract = flags == JoinFlags::SUBTRACT;

    let mut documents = Vec::new();
    for pair in join(&left, &right, flags) {
        let doc = if subtract { render_left(&pair)? } else { render_pair(&pair)? };
        documents.push(doc);
    }
    Ok(documents)
}

/// Run a parsed invocation, printing one document per joined pair.
///
/// Zero pairs is success; the caller exits non-zero only on error.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let inputs = JoinInputs::gather(cli.mode.opts())?;
    for doc in execute(&inputs, cli.mode.flags())? {
        println!("{doc}");
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
