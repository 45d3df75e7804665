//! Helpers shared by the `qrtool` binary.

use crate::error::RenderError;
use crate::models::QrCode;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Rendered output kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// SVG markup.
    Svg,
    /// PNG raster.
    Png,
    /// Block characters for a terminal.
    Ascii,
}

impl OutputFormat {
    /// Guess the format from a file extension, defaulting to SVG.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("png") => OutputFormat::Png,
            Some("txt") => OutputFormat::Ascii,
            _ => OutputFormat::Svg,
        }
    }

    /// Parse a `--format` value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "svg" => Some(OutputFormat::Svg),
            "png" => Some(OutputFormat::Png),
            "ascii" | "text" | "txt" => Some(OutputFormat::Ascii),
            _ => None,
        }
    }
}

/// Payload from `--text`, else from a file, else from stdin.
pub fn read_payload(text: Option<String>, file: Option<&Path>) -> io::Result<Vec<u8>> {
    if let Some(text) = text {
        return Ok(text.into_bytes());
    }
    if let Some(path) = file {
        return fs::read(path);
    }
    let mut buf = Vec::new();
    io::Read::read_to_end(&mut io::stdin(), &mut buf)?;
    // Drop the newline a shell pipe usually appends
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(buf)
}

/// Render `qr` and write it to `path`, or to stdout when `path` is `None`.
///
/// PNG output requires a path.
pub fn write_rendered(
    qr: &QrCode,
    format: OutputFormat,
    path: Option<&Path>,
    module_size: u32,
    quiet_zone: u32,
) -> Result<(), RenderError> {
    let text = match format {
        OutputFormat::Png => {
            let Some(path) = path else {
                return Err(RenderError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "png output needs --output",
                )));
            };
            return qr.save_png(path, module_size, quiet_zone);
        }
        OutputFormat::Svg => qr.to_svg(module_size, quiet_zone),
        OutputFormat::Ascii => qr.to_ascii(quiet_zone),
    };

    match path {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if format == OutputFormat::Svg {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

/// Summary lines for `qrtool inspect`.
pub fn describe(qr: &QrCode) -> Vec<String> {
    let mut lines = vec![
        format!("version: {} ({}x{})", qr.version().number(), qr.size(), qr.size()),
        format!("ec level: {:?}", qr.ec_level()),
        format!("mask: {} (penalty {})", qr.mask().index(), qr.penalty()),
    ];
    for (i, p) in qr.mask_penalties().iter().enumerate() {
        let marker = if i == qr.mask().index() { " *" } else { "" };
        lines.push(format!("  mask {i}: {p}{marker}"));
    }
    lines
}

/// One line per row, `#` for dark and `.` for light.
pub fn matrix_dump(qr: &QrCode) -> String {
    let mut out = String::with_capacity(qr.size() * (qr.size() + 1));
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            out.push(if qr.get(x, y) { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}
