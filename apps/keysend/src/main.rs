//! keysend - post one synthetic key event from the command line
//!
//! Used to drive accessibility tests by hand or from scripts. Each
//! invocation posts exactly one key-down or key-up event; pairing and
//! timing are up to the caller.

use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgGroup, Parser};
use key_injector::{EventSourceState, InjectorConfig, TapLocation, create_injector_with_config};
use key_protocol::{CharCode, KeyCode, KeyEventRequest};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "keysend", version, about = "Post a system-wide synthetic key event")]
#[command(group(ArgGroup::new("direction").args(["down", "up"])))]
#[command(group(ArgGroup::new("character").args(["char_code", "text"])))]
struct Cli {
    /// Hardware key code (decimal or 0x-prefixed hex)
    #[arg(short, long, value_parser = parse_code, required_unless_present = "request")]
    key: Option<KeyCode>,

    /// Character code attached to the event (decimal or 0x-prefixed hex)
    #[arg(short = 'c', long = "char", value_parser = parse_code)]
    char_code: Option<CharCode>,

    /// Character attached to the event, given literally
    #[arg(short, long)]
    text: Option<String>,

    /// Post a key-down event
    #[arg(long)]
    down: bool,

    /// Post a key-up event
    #[arg(long)]
    up: bool,

    /// Full request as JSON, e.g. {"character_code":97,"key_code":0,"direction":"down"}
    #[arg(long, conflicts_with_all = ["key", "char_code", "text", "down", "up"])]
    request: Option<String>,

    /// Where the event is posted: session, hid, annotated-session
    #[arg(long, default_value = "session")]
    tap: TapLocation,

    /// Event source state: hid-system, combined-session, private
    #[arg(long, default_value = "hid-system")]
    source: EventSourceState,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn to_request(&self) -> anyhow::Result<KeyEventRequest> {
        if let Some(json) = &self.request {
            return serde_json::from_str(json).context("Invalid --request JSON");
        }

        let Some(key_code) = self.key else {
            bail!("--key is required");
        };
        if !self.down && !self.up {
            bail!("one of --down or --up is required");
        }

        let character_code = match (&self.char_code, &self.text) {
            (Some(code), _) => *code,
            (None, Some(text)) => single_utf16_unit(text)?,
            (None, None) => bail!("one of --char or --text is required"),
        };

        Ok(KeyEventRequest::new(character_code, key_code, self.down))
    }

    fn config(&self) -> InjectorConfig {
        InjectorConfig::default()
            .with_tap_location(self.tap)
            .with_source_state(self.source)
    }
}

fn parse_code(s: &str) -> Result<u16, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };
    parsed.map_err(|e| format!("invalid code {s:?}: {e}"))
}

fn single_utf16_unit(text: &str) -> anyhow::Result<CharCode> {
    let mut units = text.encode_utf16();
    match (units.next(), units.next()) {
        (Some(unit), None) => Ok(unit),
        _ => bail!("--text must be exactly one UTF-16 code unit, got {text:?}"),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("keysend={level}").parse()?)
                .add_directive(format!("key_injector={level}").parse()?),
        )
        .init();

    let request = cli.to_request()?;
    let injector = match create_injector_with_config(cli.config()) {
        Ok(injector) => injector,
        Err(e) => {
            error!("Cannot create key injector: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match injector.synthesize(&request) {
        Ok(()) => {
            info!(
                key_code = request.key_code,
                character_code = request.character_code,
                direction = %request.direction,
                "Key event posted via {}",
                injector.name()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Key event not posted: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
