//! `graph-model`: reads a Graph beta JSON payload, resolves its concrete
//! type through a model family, and prints the re-serialized payload.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graph_beta_abstractions::{Parsable, ParsableFactory, ParseNode, SerializationWriter};
use graph_beta_json::{JsonParseNode, JsonSerializationWriter};
use graph_beta_models::search::SearchAnswerKind;
use graph_beta_models::{BookingPersonKind, EntityKind, ParentLabelDetailsKind, UserSetKind, WebPartKind};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Family {
    Entity,
    UserSet,
    WebPart,
    SearchAnswer,
    BookingPerson,
    LabelDetails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "graph-model", about = "Resolve and re-serialize a Graph beta JSON payload")]
struct Cli {
    /// Model family used to resolve `@odata.type`.
    #[arg(long, value_enum, default_value_t = Family::Entity)]
    family: Family,

    #[arg(long)]
    pretty: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "GRAPH_MODEL_LOG_FORMAT")]
    log_format: LogFormat,

    /// Payload file; stdin when omitted.
    file: Option<PathBuf>,
}

/// Logs go to stderr so stdout carries only the payload.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
            .init(),
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Resolves the payload through `factory`; returns the chosen type name
/// alongside the model.
fn resolve<T: Parsable + 'static>(
    root: &JsonParseNode<'_>,
    factory: ParsableFactory<T>,
    type_name: fn(&T) -> &'static str,
) -> Result<(&'static str, Box<dyn Parsable>)> {
    let root: &dyn ParseNode = root;
    let model = root.get_object_value(factory)?.context("payload is null")?;
    let name = type_name(&model);
    let boxed: Box<dyn Parsable> = Box::new(model);
    Ok((name, boxed))
}

fn resolve_family(family: Family, root: &JsonParseNode<'_>) -> Result<(&'static str, Box<dyn Parsable>)> {
    match family {
        Family::Entity => resolve(root, EntityKind::create_from_discriminator_value, EntityKind::type_name),
        Family::UserSet => resolve(root, UserSetKind::create_from_discriminator_value, UserSetKind::type_name),
        Family::WebPart => resolve(root, WebPartKind::create_from_discriminator_value, WebPartKind::type_name),
        Family::SearchAnswer => resolve(
            root,
            SearchAnswerKind::create_from_discriminator_value,
            SearchAnswerKind::type_name,
        ),
        Family::BookingPerson => resolve(
            root,
            BookingPersonKind::create_from_discriminator_value,
            BookingPersonKind::type_name,
        ),
        Family::LabelDetails => resolve(
            root,
            ParentLabelDetailsKind::create_from_discriminator_value,
            ParentLabelDetailsKind::type_name,
        ),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let input = read_input(cli.file.as_ref())?;
    let root = JsonParseNode::from_slice(&input).context("parsing payload")?;
    let (type_name, model) = resolve_family(cli.family, &root)?;
    tracing::info!(family = ?cli.family, type_name, "resolved payload");

    let mut writer = if cli.pretty {
        JsonSerializationWriter::pretty()
    } else {
        JsonSerializationWriter::new()
    };
    writer.write_object_value("", Some(&*model))?;
    let mut out = writer.get_serialized_content()?;
    out.push(b'\n');
    io::stdout().lock().write_all(&out).context("writing stdout")?;
    Ok(())
}
