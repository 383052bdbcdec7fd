use remote_helpers::{
    configure, ActionKind, OptionsBag, RemoteError, RemoteHelpers, RemoteIndicatorConfig,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable pointing at a YAML file with indicator defaults
const CONFIG_VAR: &str = "REMOTE_HELPERS_CONFIG";

/// One remote action described in YAML
#[derive(Debug, Deserialize)]
struct CallFile {
    kind: String,
    name: Option<String>,
    value: Option<String>,
    #[serde(default)]
    options: OptionsBag,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: remote-helpers <call.yaml>...");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  remote-helpers save.yaml");
        eprintln!("  REMOTE_HELPERS_ENV=development remote-helpers *.yaml");
        process::exit(1);
    }

    let helpers = match load_helpers() {
        Ok(helpers) => helpers,
        Err(e) => {
            eprintln!("✗ configuration error:");
            eprintln!("  {}", e);
            process::exit(2);
        }
    };

    let mut exit_code = 0;

    for file_path in &args[1..] {
        match decorate_file(&helpers, file_path) {
            Ok(output) => {
                println!("# {}", file_path);
                print!("{}", output);
            }
            Err(e) => {
                eprintln!("✗ {} has errors:", file_path);
                print_error(&e);
                exit_code = 1;
            }
        }
    }

    process::exit(exit_code);
}

fn load_helpers() -> Result<RemoteHelpers, RemoteError> {
    if let Ok(path) = env::var(CONFIG_VAR) {
        configure(RemoteIndicatorConfig::from_file(&path)?)?;
    }
    RemoteHelpers::global()
}

fn decorate_file(helpers: &RemoteHelpers, path: &str) -> Result<String, RemoteError> {
    let content = fs::read_to_string(path)?;
    let file: CallFile = serde_yaml::from_str(&content)?;
    let kind = ActionKind::parse(&file.kind)?;
    let call = helpers.build(kind, file.name, file.value, file.options)?;
    Ok(serde_yaml::to_string(&call)?)
}

fn print_error(error: &RemoteError) {
    match error {
        RemoteError::InvalidOptionType { key, expected } => {
            eprintln!("  Invalid type for option '{}':", key);
            eprintln!("    Expected {}", expected);
        }
        RemoteError::InvalidOptionValue { key, reason } => {
            eprintln!("  Invalid value for option '{}':", key);
            eprintln!("    {}", reason);
        }
        RemoteError::MissingField { kind, field } => {
            eprintln!("  Missing field '{}' for '{}'", field, kind);
        }
        RemoteError::YamlError(msg) => {
            eprintln!("  YAML error:");
            eprintln!("    {}", msg);
        }
        e => {
            eprintln!("  {}", e);
        }
    }
}
