// Engine main entry point: builds a view from settings and logs what a
// chart surface would display.
use anyhow::Context;
use engine::config::DashboardSettings;
use engine::state::IndicatorView;
use tracing::{error, info};

const CONFIG_ENV: &str = "FX_DASHBOARD_CONFIG";

fn load_settings() -> anyhow::Result<DashboardSettings> {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => DashboardSettings::load_from_path(&path)
            .with_context(|| format!("failed to load settings from '{}'", path)),
        Err(_) => DashboardSettings::load_default().context("failed to load built-in settings"),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting FX dashboard engine...");

    let settings = load_settings().map_err(|e| {
        error!("Configuration rejected: {:#}", e);
        e
    })?;
    info!(
        version = %settings.version,
        instruments = settings.instruments.len(),
        "Loaded dashboard settings"
    );

    let mut view = IndicatorView::with_system_sources(settings)?;
    let codes: Vec<String> = view.instruments().iter().map(|i| i.code.clone()).collect();

    for code in &codes {
        view.select_instrument(code)?;
        let summary = view.summary();
        info!(
            instrument = %code,
            timeframe = %view.selected_timeframe(),
            points = view.series().len(),
            current_price = summary.current_price,
            percent_change = %format!("{:.3}", summary.percent_change),
            direction = %summary.direction,
            "Series ready"
        );
    }

    for reading in view.indicator_readings() {
        info!(name = %reading.name, value = %reading.value, signal = ?reading.signal, "Indicator reading");
    }

    Ok(())
}
