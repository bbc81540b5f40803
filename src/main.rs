use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xtream_api::{
    CamelCaseSerializer, Config, Filter, JsonApiSerializer, RawSerializer, Serializer,
    SerializerKind, StandardizedSerializer, StreamDescriptor, XtreamClient,
};

#[derive(Parser, Debug)]
#[command(name = "xtream")]
#[command(about = "Query an Xtream Codes provider and print the response", long_about = None)]
struct Cli {
    /// Output shape: none, camelcase, standardized, jsonapi (default: XTREAM_SERIALIZER)
    #[arg(short, long)]
    serializer: Option<SerializerKind>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// User profile
    Profile,
    /// Server information
    ServerInfo,
    /// Live channel categories
    ChannelCategories,
    /// Movie categories
    MovieCategories,
    /// Show categories
    ShowCategories,
    /// Live channels
    Channels(ListArgs),
    /// Movie listing
    Movies(ListArgs),
    /// Movie detail
    Movie { id: String },
    /// Show listing
    Shows(ListArgs),
    /// Show detail with seasons and episodes
    Show { id: String },
    /// Next programmes of a channel
    ShortEpg {
        channel: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// All programmes of a channel
    FullEpg { channel: String },
    /// Playable URL of a stream
    StreamUrl {
        #[arg(value_enum)]
        kind: StreamKind,
        id: String,
        /// Container extension for movies and episodes
        #[arg(long, default_value = "mp4")]
        extension: String,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    page: Option<usize>,
    #[arg(long)]
    limit: Option<usize>,
}

impl From<ListArgs> for Filter {
    fn from(args: ListArgs) -> Self {
        Filter {
            category_id: args.category,
            page: args.page,
            limit: args.limit,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StreamKind {
    Channel,
    Movie,
    Episode,
}

fn init_tracing(json_logs: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "xtream_api=info,xtream=info".into());

    // stdout carries the response, logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(json_logs.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn to_json<T: Serialize>(output: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(output)?)
}

async fn run<S: Serializer>(config: &Config, serializer: S, command: Command) -> anyhow::Result<()> {
    let client = XtreamClient::from_config(config, serializer)?;

    tracing::info!(
        "Querying {} with the {} serializer",
        client.credentials().server,
        client.serializer_name()
    );

    let output = match command {
        Command::Profile => to_json(client.get_profile().await?)?,
        Command::ServerInfo => to_json(client.get_server_info().await?)?,
        Command::ChannelCategories => to_json(client.get_channel_categories().await?)?,
        Command::MovieCategories => to_json(client.get_movie_categories().await?)?,
        Command::ShowCategories => to_json(client.get_show_categories().await?)?,
        Command::Channels(args) => to_json(client.get_channels(&args.into()).await?)?,
        Command::Movies(args) => to_json(client.get_movies(&args.into()).await?)?,
        Command::Movie { id } => to_json(client.get_movie(&id).await?)?,
        Command::Shows(args) => to_json(client.get_shows(&args.into()).await?)?,
        Command::Show { id } => to_json(client.get_show(&id).await?)?,
        Command::ShortEpg { channel, limit } => to_json(client.get_short_epg(&channel, limit).await?)?,
        Command::FullEpg { channel } => to_json(client.get_full_epg(&channel).await?)?,
        Command::StreamUrl {
            kind,
            id,
            extension,
        } => {
            let stream = match kind {
                StreamKind::Channel => StreamDescriptor::Channel {
                    id,
                    timeshift: None,
                },
                StreamKind::Movie => StreamDescriptor::Movie { id, extension },
                StreamKind::Episode => StreamDescriptor::Episode { id, extension },
            };
            Value::String(client.stream_url(&stream).await?)
        }
    };

    let rendered = serde_json::to_string_pretty(&output).context("Failed to render response")?;
    println!("{}", rendered);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = Config::from_env();
    if let Some(kind) = cli.serializer {
        config.serializer = kind;
    }

    match config.serializer {
        SerializerKind::Raw => run(&config, RawSerializer, cli.command).await,
        SerializerKind::CamelCase => run(&config, CamelCaseSerializer, cli.command).await,
        SerializerKind::Standardized => run(&config, StandardizedSerializer, cli.command).await,
        SerializerKind::JsonApi => run(&config, JsonApiSerializer, cli.command).await,
    }
}
