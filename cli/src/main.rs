use std::path::PathBuf;

use cinder::bytecode::{ByteSink, Writer};
use cinder::{Thread, ThreadOptions, parse_hex, run_to_completion, to_hex};
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::debug;

/// Cinder - run and inspect stack machine bytecode
#[derive(Parser, Debug)]
#[command(name = "cinder")]
#[command(about = "Run and inspect Cinder bytecode", long_about = None)]
struct Args {
    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute a bytecode file
    Run {
        file: PathBuf,

        /// Program counter to start at
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        pc: isize,

        /// Stop after this many opcodes instead of running to the end
        #[arg(long)]
        steps: Option<usize>,

        /// Maximum number of values on the stack (unlimited if omitted)
        #[arg(long)]
        max_stack: Option<usize>,

        /// The file holds hex text instead of raw bytes
        #[arg(long)]
        hex: bool,
    },

    /// Encode unsigned values as big-endian immediates
    Encode {
        /// Decimal or 0x-prefixed values
        #[arg(required = true, value_parser = parse_u64)]
        values: Vec<u64>,

        /// Fixed width in bytes; defaults to the smallest that fits each value
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        width: Option<u8>,
    },

    /// Decode a run of same-width immediates
    Decode {
        hex: String,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=8))]
        width: u8,

        /// Read two's-complement values
        #[arg(long)]
        signed: bool,
    },
}

fn parse_u64(text: &str) -> std::result::Result<u64, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid value {text:?}: {e}"))
}

fn write_fixed<S: ByteSink>(
    writer: &mut Writer<S>,
    value: u64,
    width: u8,
) -> std::result::Result<usize, S::Error> {
    // Narrower widths keep the low-order bytes
    match width {
        1 => writer.write_u8(value as u8),
        2 => writer.write_u16(value as u16),
        3 => writer.write_u24(value as u32),
        4 => writer.write_u32(value as u32),
        5 => writer.write_u40(value),
        6 => writer.write_u48(value),
        7 => writer.write_u56(value),
        _ => writer.write_u64(value),
    }
}

fn run(file: PathBuf, options: ThreadOptions, steps: Option<usize>, hex: bool) -> Result<()> {
    let raw = std::fs::read(&file)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", file.display()))?;
    let code = if hex {
        let text = String::from_utf8(raw)
            .into_diagnostic()
            .wrap_err("hex bytecode must be UTF-8 text")?;
        parse_hex(&text)?
    } else {
        raw
    };
    debug!(len = code.len(), start_pc = options.start_pc, "loaded bytecode");

    let mut thread = Thread::with_options(&code, options);
    match steps {
        Some(steps) => match thread.run_for(steps) {
            Ok(()) => {}
            Err(e) if e.is_end_of_program() => {}
            Err(e) => return Err(cinder::Error::from(e).into()),
        },
        None => run_to_completion(&mut thread)?,
    }

    println!("pc: {}", thread.pc());
    for (depth, value) in thread.stack().iter().rev().enumerate() {
        println!("{depth:>4}: {value}");
    }
    Ok(())
}

fn encode(values: &[u64], width: Option<u8>) -> Result<()> {
    let mut writer = Writer::new(Vec::new());
    for &value in values {
        // Writing into a Vec cannot fail
        let Ok(_) = (match width {
            Some(width) => write_fixed(&mut writer, value, width),
            None => writer.write_var_int(value),
        });
    }
    println!("{}", to_hex(&writer.into_inner()));
    Ok(())
}

fn decode(hex: &str, width: u8, signed: bool) -> Result<()> {
    let code = parse_hex(hex)?;
    let mut thread = Thread::new(&code);
    let width = isize::from(width);
    while thread.pc() < code.len() as isize {
        if signed {
            println!("{}", thread.fetch_signed(width).map_err(cinder::Error::from)?);
        } else {
            println!("{}", thread.fetch_unsigned(width).map_err(cinder::Error::from)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    use tracing_subscriber::{EnvFilter, fmt};

    let default_level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match args.command {
        Command::Run {
            file,
            pc,
            steps,
            max_stack,
            hex,
        } => {
            let options = ThreadOptions {
                start_pc: pc,
                max_stack_size: max_stack,
            };
            run(file, options, steps, hex)
        }
        Command::Encode { values, width } => encode(&values, width),
        Command::Decode { hex, width, signed } => decode(&hex, width, signed),
    }
}
