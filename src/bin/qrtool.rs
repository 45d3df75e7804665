use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use upi_qr::tools::{OutputFormat, describe, init_tracing, matrix_dump, read_payload, write_rendered};
use upi_qr::{Compliance, Encoder, EncoderConfig, UpiPayment};

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Offline QR encoder CLI")]
struct Cli {
    /// Pixels per module (overrides QR_MODULE_SIZE)
    #[arg(long, global = true)]
    module_size: Option<u32>,
    /// Quiet zone in modules (overrides QR_QUIET_ZONE)
    #[arg(long, global = true)]
    quiet_zone: Option<u32>,
    /// Use ISO-conformant count indicator, version info and format copy
    #[arg(long, global = true)]
    standard: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Svg,
    Png,
    Ascii,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Svg => OutputFormat::Svg,
            Format::Png => OutputFormat::Png,
            Format::Ascii => OutputFormat::Ascii,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Encode text (or a file, or stdin) as a QR code
    Encode {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format; guessed from the output extension when omitted
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Build a UPI payment link and encode it
    Upi {
        #[arg(long)]
        pa: String,
        #[arg(long)]
        pn: String,
        #[arg(long)]
        am: f64,
        #[arg(long)]
        tn: Option<String>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
    /// Print version, mask penalties and the module grid for a payload
    Inspect {
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let mut config = EncoderConfig::from_env();
    if let Some(module_size) = cli.module_size {
        config = config.with_module_size(module_size);
    }
    if let Some(quiet_zone) = cli.quiet_zone {
        config = config.with_quiet_zone(quiet_zone);
    }
    if cli.standard {
        config = config.with_compliance(Compliance::Standard);
    }
    let encoder = Encoder::with_config(config);

    let result = match cli.command {
        Command::Encode {
            text,
            input,
            output,
            format,
        } => encode_cmd(&encoder, text, input.as_deref(), output.as_deref(), format),
        Command::Upi {
            pa,
            pn,
            am,
            tn,
            output,
            format,
        } => upi_cmd(&encoder, pa, pn, am, tn, output.as_deref(), format),
        Command::Inspect { text, input } => inspect_cmd(&encoder, text, input.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("qrtool: {err}");
            ExitCode::FAILURE
        }
    }
}

type CmdResult = Result<(), Box<dyn std::error::Error>>;

fn pick_format(format: Option<Format>, output: Option<&Path>) -> OutputFormat {
    match (format, output) {
        (Some(format), _) => format.into(),
        (None, Some(path)) => OutputFormat::from_path(path),
        (None, None) => OutputFormat::Svg,
    }
}

fn render_payload(
    encoder: &Encoder,
    payload: &[u8],
    output: Option<&Path>,
    format: Option<Format>,
) -> CmdResult {
    let qr = encoder.encode_matrix(payload)?;
    let config = encoder.config();
    write_rendered(
        &qr,
        pick_format(format, output),
        output,
        config.module_size,
        config.quiet_zone,
    )?;
    if let Some(path) = output {
        eprintln!(
            "wrote {} (version {}, mask {})",
            path.display(),
            qr.version().number(),
            qr.mask().index()
        );
    }
    Ok(())
}

fn encode_cmd(
    encoder: &Encoder,
    text: Option<String>,
    input: Option<&Path>,
    output: Option<&Path>,
    format: Option<Format>,
) -> CmdResult {
    let payload = read_payload(text, input)?;
    render_payload(encoder, &payload, output, format)
}

fn upi_cmd(
    encoder: &Encoder,
    pa: String,
    pn: String,
    am: f64,
    tn: Option<String>,
    output: Option<&Path>,
    format: Option<Format>,
) -> CmdResult {
    let mut payment = UpiPayment::new(pa, pn, am);
    if let Some(note) = tn {
        payment = payment.with_note(note);
    }
    let uri = payment.to_uri()?;
    eprintln!("{uri}");
    render_payload(encoder, uri.as_bytes(), output, format)
}

fn inspect_cmd(encoder: &Encoder, text: Option<String>, input: Option<&Path>) -> CmdResult {
    let payload = read_payload(text, input)?;
    let qr = encoder.encode_matrix(&payload)?;
    println!("payload: {} bytes", payload.len());
    for line in describe(&qr) {
        println!("{line}");
    }
    print!("{}", matrix_dump(&qr));
    Ok(())
}
