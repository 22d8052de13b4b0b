use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use busstops::config::Config;
use busstops::logging::init_tracing;
use busstops::{
    BusStop, HttpStopsApi, RoutesIntent, RoutesStore, StopsIntent, StopsLoader, StopsStore,
};

/// Look up the stops of a bus route.
#[derive(Debug, Parser)]
#[command(name = "busstops", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Route to load; falls back to `defaults.route` from the config
    #[arg(long)]
    route: Option<String>,

    /// Only list stops with a field containing this text (case-sensitive)
    #[arg(long, default_value = "")]
    search: String,

    /// Stop identifier to show in detail
    #[arg(long)]
    select: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    let routes = RoutesStore::default();
    routes.dispatch(RoutesIntent::SelectRoute(
        cli.route.or_else(|| config.defaults.route.clone()),
    ));

    let api = HttpStopsApi::new(config.api.clone()).context("building API client")?;
    let stops = StopsStore::default();
    let loader = StopsLoader::new(Arc::new(api), Arc::new(routes), stops.clone());

    loader
        .load_stops_from_api(None)
        .await
        .context("loading stops")?;

    stops.dispatch(StopsIntent::FilterStopsByText(cli.search));
    stops.dispatch(StopsIntent::SelectStop(cli.select));

    stops.read(|state| {
        for stop in state.filtered_stops() {
            println!("{}", format_stop(stop));
        }

        if let Some(selected) = &state.selected_stop {
            match state.selected_stop_data() {
                Some(stop) => print_details(stop),
                None => eprintln!("Stop {} is not on this route", selected),
            }
        }
    });

    Ok(())
}

fn format_stop(stop: &BusStop) -> String {
    format!("{:>6}  {}", stop.displaystopid, stop.fullname)
}

fn print_details(stop: &BusStop) {
    println!();
    println!("Stop {}", stop.displaystopid);
    println!("  name:      {}", stop.fullname);
    println!("  localized: {}", stop.fullnamelocalized);
    if !stop.latitude.is_empty() {
        println!("  location:  {}, {}", stop.latitude, stop.longitude);
    }
    for operator in &stop.operators {
        println!("  {}: {}", operator.name, operator.routes.join(", "));
    }
}
