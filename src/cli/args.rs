//! CLI argument parsing and configuration.

use std::path::PathBuf;

use thiserror::Error;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Invalid {flag} value: {value}")]
    InvalidNumber { flag: &'static str, value: String },
    #[error("Unknown argument: {0}")]
    Unknown(String),
    #[error("--menu-open only applies to --export-html")]
    MenuOpenWithoutExport,
}

/// What the process should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run,
    ExportHtml(PathBuf),
    DumpContent,
    Help,
    Version,
}

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub breakpoint: Option<u16>,
    pub ascii_only: bool,
    pub menu_open: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Portfolio TUI - Single-page portfolio in the terminal");
    eprintln!();
    eprintln!("Usage: portfolio-tui [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --breakpoint <COLS>    Width below which the compact menu is used (default: 96)");
    eprintln!("  --ascii                Use ASCII-only glyphs");
    eprintln!("  --export-html <PATH>   Write the page as static HTML and exit");
    eprintln!("  --menu-open            With --export-html: export with the menu open");
    eprintln!("  --dump-content         Print every display record as JSON and exit");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  m            Open/close the navigation menu (narrow terminals)");
    eprintln!("  1-5          Jump to Work, Approach, Capabilities, About, Contact");
    eprintln!("  j/k, arrows  Scroll, or move the menu cursor while it is open");
    eprintln!("  q            Quit");
}

/// Parse CLI arguments (without the program name)
pub fn parse_args<I>(args: I) -> Result<CliConfig, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let mut command = Command::Run;
    let mut breakpoint: Option<u16> = None;
    let mut ascii_only = false;
    let mut menu_open = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => {
                command = Command::Help;
                break;
            }
            "-V" | "--version" => {
                command = Command::Version;
                break;
            }
            "--ascii" => ascii_only = true,
            "--menu-open" => menu_open = true,
            "--dump-content" => command = Command::DumpContent,
            "--breakpoint" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or(ArgsError::MissingValue("--breakpoint"))?;
                let columns = value.parse().map_err(|_| ArgsError::InvalidNumber {
                    flag: "--breakpoint",
                    value: value.clone(),
                })?;
                breakpoint = Some(columns);
            }
            "--export-html" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or(ArgsError::MissingValue("--export-html"))?;
                command = Command::ExportHtml(PathBuf::from(value));
            }
            _ => return Err(ArgsError::Unknown(arg.to_string())),
        }
        i += 1;
    }

    if menu_open && matches!(command, Command::Run | Command::DumpContent) {
        return Err(ArgsError::MenuOpenWithoutExport);
    }

    Ok(CliConfig {
        command,
        breakpoint,
        ascii_only,
        menu_open,
    })
}
