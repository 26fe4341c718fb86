use std::fs::File;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use structopt::StructOpt;
use tracing::{error, info};

use citysuggest_core::gazetteer::{only_country, Gazetteer};
use citysuggest_web::{app, init_logging};

#[derive(StructOpt)]
struct CliArgs {
    #[structopt(long = "cities", parse(from_os_str))]
    cities: PathBuf,
    #[structopt(long = "country", default_value = "GB")]
    country: String,
    #[structopt(long = "addr", default_value = "0.0.0.0:8080")]
    addr: SocketAddr,
    #[structopt(long = "log-level", case_insensitive = true, default_value = "INFO")]
    log_level: tracing::Level,
}

#[tokio::main]
async fn main() {
    let args = CliArgs::from_args();
    init_logging(args.log_level);

    let file = match File::open(&args.cities) {
        Ok(file) => file,
        Err(err) => {
            error!("cannot open cities database {:?}: {}", args.cities, err);
            std::process::exit(1);
        }
    };
    let filters = vec![only_country(&args.country)];
    let gazetteer = match Gazetteer::from_csv(file, &filters) {
        Ok(gazetteer) => Arc::new(gazetteer),
        Err(err) => {
            error!("cannot build gazetteer from {:?}: {}", args.cities, err);
            std::process::exit(1);
        }
    };

    info!(
        "serving suggestions for {} places on {}",
        gazetteer.len(),
        args.addr
    );
    if let Err(err) = axum::Server::bind(&args.addr)
        .serve(app(gazetteer).into_make_service())
        .await
    {
        error!("server failed: {}", err);
        std::process::exit(1);
    }
}
