use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use changefeed_config::{ChangeFeedAttribute, TriggerValueType};
use changefeed_resolver::{BindingRequest, StandardBindingProvider, TriggerBindingProvider};
use changefeed_settings::{EnvironmentSettings, LayeredNameResolver, SettingsFile};
use changefeed_trigger::{TriggerPayload, bind_value, try_convert};

/// Changefeed - resolve and check change-feed trigger bindings
#[derive(Parser)]
#[command(name = "changefeed")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve an attribute file into a binding descriptor
  Resolve {
    /// Path to the attribute file (JSON)
    attribute_file: PathBuf,

    /// Settings file with `Values` and `ConnectionStrings` sections
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Declared parameter type (document_list, generic_array, JArray, ...)
    #[arg(long, default_value = "document_list")]
    value_type: TriggerValueType,
  },

  /// Normalize a trigger payload read from stdin
  Convert {
    /// Declared parameter type (document_list, generic_array, JArray, ...)
    #[arg(long, default_value = "document_list")]
    value_type: TriggerValueType,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Resolve {
      attribute_file,
      settings,
      value_type,
    }) => {
      resolve(attribute_file, settings, value_type)?;
    }
    Some(Commands::Convert { value_type }) => {
      convert(value_type)?;
    }
    None => {
      println!("changefeed - use --help to see available commands");
    }
  }

  Ok(())
}

fn resolve(
  attribute_file: PathBuf,
  settings: Option<PathBuf>,
  value_type: TriggerValueType,
) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { resolve_async(attribute_file, settings, value_type).await })
}

async fn resolve_async(
  attribute_file: PathBuf,
  settings: Option<PathBuf>,
  value_type: TriggerValueType,
) -> Result<()> {
  let attribute_content = tokio::fs::read_to_string(&attribute_file)
    .await
    .with_context(|| format!("failed to read attribute file: {}", attribute_file.display()))?;

  let attribute: ChangeFeedAttribute = serde_json::from_str(&attribute_content)
    .with_context(|| format!("failed to parse attribute file: {}", attribute_file.display()))?;

  // Environment overrides the settings file's Values; the file's
  // ConnectionStrings section is the fallback store.
  let settings_file = match settings {
    Some(path) => SettingsFile::load(&path)?,
    None => SettingsFile::default(),
  };
  let name_resolver = LayeredNameResolver::new()
    .with(EnvironmentSettings::from_env())
    .with(settings_file.clone());

  let provider = StandardBindingProvider::new(name_resolver, settings_file);
  let request = BindingRequest::new(attribute, value_type);
  let descriptor = provider
    .try_create(&request)
    .await
    .with_context(|| {
      format!(
        "failed to create binding for {}/{}",
        request.attribute.database_name, request.attribute.collection_name
      )
    })?;

  println!("{}", serde_json::to_string_pretty(&descriptor)?);

  Ok(())
}

fn convert(value_type: TriggerValueType) -> Result<()> {
  let payload = read_payload_from_stdin()?;

  let Some(documents) = try_convert(&payload) else {
    bail!("payload is not a JSON array of documents with string ids");
  };

  eprintln!("Converted {} documents", documents.len());

  let value = bind_value(value_type, documents);
  println!("{}", serde_json::to_string_pretty(&value.to_json())?);

  Ok(())
}

fn read_payload_from_stdin() -> Result<TriggerPayload> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    // No stdin pipe, nothing to convert
    Ok(TriggerPayload::Null)
  } else {
    let mut input = String::new();
    io::stdin()
      .read_to_string(&mut input)
      .context("failed to read payload from stdin")?;

    if input.trim().is_empty() {
      Ok(TriggerPayload::Null)
    } else {
      Ok(TriggerPayload::Text(input))
    }
  }
}
