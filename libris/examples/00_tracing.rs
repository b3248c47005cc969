use libris::Dashboard;
use libris_mock::MockSource;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,libris=trace,libris_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let now = chrono::Utc::now();
    let dash = Dashboard::builder()
        .now(now)
        .timezone(chrono_tz::Europe::Warsaw)
        .load(&MockSource::new(now))
        .await?;

    // Every statistic, each computed once
    let _ = dash.report();
    let _ = dash.report();

    Ok(())
}
