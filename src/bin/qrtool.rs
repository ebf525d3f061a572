use clap::{Parser, Subcommand, ValueEnum};
use qr_encode::encoder::version::capacity;
use qr_encode::{ECLevel, EncodeOptions, MaskPattern, Mode, QRCode, SegmentSpec, Version};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code encoder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the module grid
    Encode {
        text: String,
        /// Error correction level (l, m, q, h); unknown tokens are rejected
        /// here, unlike QR_DEFAULT_ECL which falls back to m
        #[arg(long, default_value = "m", value_parser = parse_ec_level)]
        ecl: ECLevel,
        /// Fixed version (1-40)
        #[arg(long, value_parser = parse_version)]
        version: Option<Version>,
        /// Fixed mask pattern (0-7)
        #[arg(long, value_parser = parse_mask)]
        mask: Option<MaskPattern>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Encode explicit segments given as MODE:DATA or DATA
    ///
    /// Unknown mode names such as `auto` leave the mode to be picked from
    /// the data; prefix data containing ':' with `auto:`.
    Segments {
        #[arg(required = true)]
        segments: Vec<String>,
        #[arg(long, default_value = "m", value_parser = parse_ec_level)]
        ecl: ECLevel,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print how many characters each mode fits at a version and level
    Capacity {
        #[arg(long, value_parser = parse_version)]
        version: Version,
        #[arg(long, default_value = "m", value_parser = parse_ec_level)]
        ecl: ECLevel,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Block characters, two per module
    Text,
    /// Rows of 0 and 1
    Bits,
}

fn parse_ec_level(s: &str) -> Result<ECLevel, String> {
    s.parse().map_err(|e: qr_encode::EncodeError| e.to_string())
}

fn parse_version(s: &str) -> Result<Version, String> {
    let n: u8 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    Version::new(n).map_err(|e| e.to_string())
}

fn parse_mask(s: &str) -> Result<MaskPattern, String> {
    let n: u8 = s.parse().map_err(|_| format!("not a number: {}", s))?;
    MaskPattern::from_index(n).map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("QR_LOG"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Encode {
            text,
            ecl,
            version,
            mask,
            format,
        } => {
            let mut options = EncodeOptions::new().with_error_correction(ecl);
            if let Some(version) = version {
                options = options.with_version(version);
            }
            if let Some(mask) = mask {
                options = options.with_mask_pattern(mask);
            }
            report(qr_encode::create_qr_code(&text, &options), format)
        }
        Command::Segments {
            segments,
            ecl,
            format,
        } => {
            let specs: Vec<SegmentSpec> = segments.iter().map(|s| parse_segment(s)).collect();
            let options = EncodeOptions::new().with_error_correction(ecl);
            report(qr_encode::create_qr_code_from_segments(&specs, &options), format)
        }
        Command::Capacity { version, ecl } => {
            capacity_cmd(version, ecl);
            ExitCode::SUCCESS
        }
    }
}

fn parse_segment(arg: &str) -> SegmentSpec {
    match arg.split_once(':') {
        Some((mode, data)) => SegmentSpec::with_mode_name(data, mode),
        None => SegmentSpec::new(arg),
    }
}

fn report(result: qr_encode::Result<QRCode>, format: OutputFormat) -> ExitCode {
    match result {
        Ok(qr) => {
            eprintln!(
                "version={} error_correction={:?} mask={} segments={}",
                qr.version,
                qr.error_correction,
                qr.mask_pattern.index(),
                qr.segments.len()
            );
            print_symbol(&qr, format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_symbol(qr: &QRCode, format: OutputFormat) {
    for row in qr.to_rows() {
        let line: String = match format {
            OutputFormat::Bits => row.iter().map(|&m| if m == 1 { '1' } else { '0' }).collect(),
            OutputFormat::Text => row
                .iter()
                .map(|&m| if m == 1 { "██" } else { "  " })
                .collect(),
        };
        println!("{}", line);
    }
}

fn capacity_cmd(version: Version, ecl: ECLevel) {
    println!("Version {} / {:?}", version, ecl);
    for mode in Mode::ALL {
        println!("  {:<13} {}", mode, capacity(version, ecl, mode));
    }
}
