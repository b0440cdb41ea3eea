//! `showcase alerts ...` — site-wide alerts, visible to everyone.

use sc_api::ShowcaseApi;

use super::AppState;

pub async fn list(state: &AppState) -> anyhow::Result<()> {
    let alerts = state.client.list_alerts().await?;
    if alerts.is_empty() {
        println!("no active alerts");
        return Ok(());
    }
    for alert in &alerts {
        match alert.message {
            Some(ref message) => println!("{}  {} — {}", alert.id, alert.title, message),
            None => println!("{}  {}", alert.id, alert.title),
        }
    }
    Ok(())
}
