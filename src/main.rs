use cdc_seed::kafka::TopicManager;
use cdc_seed::{config, event, fixtures, Emitter, Result, SeederConfig};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(name = "cdc-seed")]
#[command(about = "Deterministic IIDR-style CDC sample event producer for Kafka", long_about = None)]
struct Args {
    #[arg(long, value_name = "HOST:PORT", default_value = config::DEFAULT_BROKERS)]
    bootstrap_server: String,

    #[arg(long, value_name = "NAME", default_value = config::DEFAULT_TOPIC)]
    topic: String,

    #[arg(long, help = "Create the topic if it does not exist")]
    create_topic: bool,

    #[arg(short, long, help = "Enable JSON output for logs")]
    json_logs: bool,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.json_logs, args.verbose);

    info!("Starting cdc-seed");

    let config = SeederConfig {
        brokers: args.bootstrap_server,
        topic: args.topic,
        create_topic: args.create_topic,
        ..SeederConfig::default()
    };

    info!(
        brokers = %config.brokers,
        topic = %config.topic,
        create_topic = config.create_topic,
        "Configuration summary"
    );

    if config.create_topic {
        // Provisioning is advisory: the broker may auto-create the topic
        // on first publish, so any failure here is a warning, not an abort.
        let provisioned = match TopicManager::new(&config.brokers) {
            Ok(manager) => {
                manager
                    .ensure_topic(&config.topic, config.partitions, config.replication_factor)
                    .await
            }
            Err(e) => Err(e),
        };
        if let Err(e) = provisioned {
            warn!("Could not create topic '{}': {}", config.topic, e);
        }
    }

    let timestamp = event::run_timestamp();
    let events = fixtures::sample_events(&timestamp);

    let emitter = Emitter::new(config)?;
    emitter.run(&events).await?;

    Ok(())
}

fn init_logging(json: bool, verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("cdc_seed=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cdc_seed=info,warn"))
    };

    let fmt_layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
