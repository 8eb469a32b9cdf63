use clap::Parser;
use ratewatch::config::Config;
use ratewatch::domain::ports::RateSource;
use ratewatch::domain::rates::period::Period;
use ratewatch::infrastructure::frankfurter::FrankfurterRateSource;
use ratewatch::interfaces::app::{FetchRequest, FetchResponse, RatewatchApp};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "ratewatch", about = "USD/KRW exchange-rate chart")]
struct Args {
    /// Initial chart granularity (daily, weekly, monthly, yearly)
    #[arg(long, default_value = "daily")]
    period: Period,
}

fn main() -> anyhow::Result<()> {
    // Load env before anything reads it
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let source = FrankfurterRateSource::builder()
        .base_url(config.rate_source.base_url.clone())
        .base_currency(config.rate_source.base_currency.clone())
        .quote_currency(config.rate_source.quote_currency.clone())
        .build();
    let pair_label = source.pair_label();

    info!(pair = %pair_label, "Starting ratewatch");

    // All I/O happens on a background runtime; the UI talks to it over
    // channels so a slow fetch never blocks a frame.
    let (request_tx, request_rx) = crossbeam_channel::unbounded::<FetchRequest>();
    let (response_tx, response_rx) = crossbeam_channel::unbounded();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to build Tokio runtime");

        while let Ok(request) = request_rx.recv() {
            let result = rt
                .block_on(source.fetch_rates(request.range))
                .map_err(|e| format!("{e:#}"));
            let response = FetchResponse {
                period: request.period,
                result,
            };
            if response_tx.send(response).is_err() {
                break;
            }
        }
        info!("Rate fetch worker shutting down");
    });

    let app = RatewatchApp::new(
        args.period,
        pair_label.clone(),
        config.rate_source.quote_currency.clone(),
        request_tx,
        response_rx,
    );

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title(format!("Ratewatch — {pair_label}")),
        ..Default::default()
    };

    eframe::run_native(
        "Ratewatch",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
