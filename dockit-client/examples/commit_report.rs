use dockit_client::{DocsApiClient, DocsCommitter};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("📝 Committing a report to the docs store\n");

    let base_url =
        std::env::args().nth(1).unwrap_or_else(|| "http://localhost:3030".to_string());

    let api = DocsApiClient::new(&base_url);
    let committer = DocsCommitter::new(api);

    let report = json!({
        "title": "Weekly summary",
        "week": 32,
        "highlights": ["shipped the importer", "fixed the café page"]
    });

    let outcome = committer.commit("reports/weekly.json", &report, "Add weekly summary")?;

    println!("✓ Committed docs/reports/weekly.json");
    println!("  Store replied: {}", outcome);

    Ok(())
}
