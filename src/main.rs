use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use portswitch::config::{validate_layout, Config};
use portswitch::logging::init_tracing;
use portswitch::service::{SwitchApi, SwitchService};
use portswitch::shutdown::{watch_signals, ShutdownCoordinator};
use portswitch::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "portswitch", version, about = "Crossbar port switch control surface")]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the simulated round-trip latency
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,

    /// Disable the configured fault trigger
    #[arg(long)]
    no_fault: bool,

    /// Print the startup configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    if let Some(ms) = cli.latency_ms {
        config.switch.latency_ms = ms;
    }
    if cli.no_fault {
        config.switch.fault_injection = false;
    }

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let service = match SwitchService::new(config.switch.service_options()) {
        Ok(service) => service,
        Err(err) => {
            eprintln!("Invalid Switch Configuration: {}", err);
            std::process::exit(1);
        }
    };

    let initial = rt.block_on(service.get_configuration());
    if let Err(err) = validate_layout(&initial, config.ui.layout_width) {
        eprintln!("Invalid Switch Configuration: {}", err);
        std::process::exit(1);
    }

    if cli.print_config {
        let json =
            serde_json::to_string_pretty(&initial).context("failed to encode configuration")?;
        println!("{}", json);
        return Ok(());
    }

    tracing::info!(
        num_ingress = initial.num_ingress,
        num_egress = initial.num_egress,
        connections = initial.pairing.len(),
        latency_ms = config.switch.latency_ms,
        "Starting control surface"
    );

    let coordinator = ShutdownCoordinator::new();
    rt.spawn(watch_signals(coordinator.handle()));

    runtime::run(&config, service, rt.handle().clone(), coordinator.handle())
        .context("terminal UI failed")?;

    tracing::info!("Control surface closed");
    rt.shutdown_timeout(std::time::Duration::from_millis(500));
    Ok(())
}
