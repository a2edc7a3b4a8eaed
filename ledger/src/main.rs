// src/main.rs
//
// Minimal demo binary that wires up the ledger library:
//
// - creates a ledger with the default event configuration
// - records a couple of ticket sales
// - verifies chain integrity
// - dumps the export records as pretty-printed JSON.

use ledger::Ledger;

fn main() {
    // Basic tracing setup.
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "ledger=info".to_string()))
        .init();

    if let Err(err) = run() {
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // For now we use the default config. This can be externalised later.
    let mut ledger = Ledger::new();

    for (buyer, seat) in [("Alice", "12A"), ("Bob", "7C")] {
        let block = ledger
            .append_sale(buyer, seat)
            .map_err(|e| format!("failed to record sale for {buyer}: {e}"))?;
        tracing::info!(index = block.index, hash = %block.hash, buyer, seat, "sale recorded");
    }

    match ledger.first_invalid() {
        None => tracing::info!(blocks = ledger.len(), "chain verified"),
        Some(fault) => tracing::warn!(index = fault.index, kind = ?fault.kind, "chain is tampered"),
    }

    let records = ledger.export_records();
    let json = serde_json::to_string_pretty(&records)
        .map_err(|e| format!("failed to serialize records: {e}"))?;
    println!("{json}");

    Ok(())
}
