//! Command line interface for compiling, decoding, hashing and framing
//! values.

use std::fs;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use strata::frame::{write_frame, FrameReader};
use strata::{DecodeError, FrameError, ParseError, Value};

/// Compile, decode, hash and format values.
#[derive(Debug, Parser)]
#[command(name = "strata", version)]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compile a text file (.st) into its canonical encoding (.scb).
    Compile {
        /// The text notation input.
        input: PathBuf,
        /// The file to write the encoding to.
        output: PathBuf,
    },

    /// Decode an encoded file (.scb) and print the value.
    Decode {
        /// The encoded input.
        input: PathBuf,
        /// Print the value as JSON instead of text notation.
        #[arg(long)]
        json: bool,
    },

    /// Print the BLAKE3 digest of a text (.st) or encoded (.scb) file.
    ///
    /// Text files are compiled first, so both forms of the same value have
    /// the same digest.
    Hash {
        /// The input, compiled if its extension is `.st`.
        input: PathBuf,
    },

    /// Parse a text file (.st) and print it in normalized form.
    Fmt {
        /// The text notation input.
        input: PathBuf,
        /// Print the value as JSON instead of text notation.
        #[arg(long)]
        json: bool,
    },

    /// Write encoded files (.scb) to a single frame stream.
    Frame {
        /// The encoded inputs, one frame each.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// The file to write the stream to.
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Read a frame stream and print each value on its own line.
    Unframe {
        /// The frame stream input.
        input: PathBuf,
        /// Print the values as JSON lines instead of text notation.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(report(&err)),
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match command {
        Command::Compile { input, output } => {
            let value = parse_file(&input)?;
            let bytes = strata::encode(&value);
            fs::write(&output, &bytes)
                .with_context(|| format!("failed to write `{}`", output.display()))?;
            log::info!("compiled {} bytes to `{}`", bytes.len(), output.display());
        }

        Command::Decode { input, json } => {
            let value = decode_file(&input)?;
            print_value(&mut stdout, &value, json, true)?;
        }

        Command::Hash { input } => {
            let bytes = if input.extension().map_or(false, |ext| ext == "st") {
                strata::encode(&parse_file(&input)?)
            } else {
                read(&input)?
            };
            writeln!(stdout, "{}", strata::hash_bytes(&bytes))?;
        }

        Command::Fmt { input, json } => {
            let value = parse_file(&input)?;
            print_value(&mut stdout, &value, json, true)?;
        }

        Command::Frame { inputs, output } => {
            let file = fs::File::create(&output)
                .with_context(|| format!("failed to create `{}`", output.display()))?;
            let mut writer = BufWriter::new(file);
            for input in &inputs {
                let value = decode_file(input)?;
                write_frame(&mut writer, &value)
                    .with_context(|| format!("failed to write `{}`", output.display()))?;
            }
            writer
                .flush()
                .with_context(|| format!("failed to write `{}`", output.display()))?;
            log::info!("wrote {} frames to `{}`", inputs.len(), output.display());
        }

        Command::Unframe { input, json } => {
            let file = fs::File::open(&input)
                .with_context(|| format!("failed to open `{}`", input.display()))?;
            for (i, value) in FrameReader::new(BufReader::new(file)).enumerate() {
                let value = value.with_context(|| {
                    format!("failed to read frame {i} of `{}`", input.display())
                })?;
                print_value(&mut stdout, &value, json, false)?;
            }
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read `{}`", path.display()))
}

fn parse_file(path: &Path) -> Result<Value> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    strata::parse(&source).with_context(|| format!("failed to parse `{}`", path.display()))
}

fn decode_file(path: &Path) -> Result<Value> {
    let bytes = read(path)?;
    strata::decode(&bytes).with_context(|| format!("failed to decode `{}`", path.display()))
}

fn print_value(out: &mut impl Write, value: &Value, json: bool, pretty: bool) -> Result<()> {
    match (json, pretty) {
        (true, true) => writeln!(out, "{:#}", inspect(value))?,
        (true, false) => writeln!(out, "{}", inspect(value))?,
        (false, true) => writeln!(out, "{value:#}")?,
        (false, false) => writeln!(out, "{value}")?,
    }
    Ok(())
}

/// Converts a value to JSON for inspection.
///
/// Integers are written as strings because JSON consumers commonly lose
/// precision above 2^53. Bytes are written as arrays of numbers.
fn inspect(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::String(i.to_string()),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(bytes) => bytes.iter().map(|&b| serde_json::Value::from(b)).collect(),
        Value::List(list) => list.iter().map(inspect).collect(),
        Value::Map(map) => serde_json::Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), inspect(value)))
                .collect(),
        ),
    }
}

/// Prints the error and returns the process exit code.
///
/// | Code  | Meaning                                  |
/// | ----- | ---------------------------------------- |
/// | `1`   | the input is not valid text or encoding  |
/// | `2`   | a file could not be read or written      |
/// | `100` | anything else                            |
fn report(err: &anyhow::Error) -> u8 {
    eprintln!("error: {err}");
    for cause in err.chain().skip(1) {
        match cause.downcast_ref::<ParseError>() {
            Some(err) => eprintln!("{err:#}"),
            None => eprintln!("  caused by: {cause}"),
        }
    }
    exit_code(err)
}

fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if cause.is::<ParseError>() || cause.is::<DecodeError>() {
            return 1;
        }
        if let Some(err) = cause.downcast_ref::<FrameError>() {
            return match err {
                FrameError::Io(_) => 2,
                _ => 1,
            };
        }
        if cause.is::<io::Error>() {
            return 2;
        }
    }
    100
}
