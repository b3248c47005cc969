use libris::Dashboard;
use libris_mock::MockSource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Fixture backend, dated relative to the current instant.
    let now = chrono::Utc::now();
    let source = MockSource::new(now);

    // 2. Load members and books and pin the clock.
    let mut dash = Dashboard::builder().now(now).load(&source).await?;

    // 3. Print the dashboard payload.
    println!("{}", serde_json::to_string_pretty(&dash.report())?);

    // 4. Look a week ahead: only the time windows are recomputed.
    dash.set_now(now + chrono::TimeDelta::days(7));
    println!("chart a week later: {:?}", dash.chart_borrow_counts());
    println!("borrowed in that week: {}", dash.borrowed_last_week());

    Ok(())
}
