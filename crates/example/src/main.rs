//! Example signup CLI.
//!
//! Registers each `name:email[:plan]` argument in a fresh directory, seeded
//! with two `team` accounts so the third `team` signup fills the plan.
//!
//! # Usage
//!
//! ```bash
//! signup <name:email[:plan]>...
//! ```
//!
//! # Example
//!
//! ```bash
//! RUST_LOG=interactor_core=trace signup "Ada:ada@example.com:team" "Bob: BOB@example.com :team"
//! ```

use example::{Directory, PLANS, Signup};
use interactor::execute;
use interactor::interactor_telemetry::{TelemetryConfig, TelemetryFormat};

fn main() {
    let _ = dotenvy::dotenv();

    TelemetryConfig::default()
        .with_format(TelemetryFormat::Compact)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: signup <name:email[:plan]>...");
        eprintln!("Plans: {PLANS}");
        std::process::exit(1);
    }

    let mut directory = Directory::new();
    for (name, email) in [("Seed One", "one@example.com"), ("Seed Two", "two@example.com")] {
        if let Err(err) = execute(&mut Signup::new(&mut directory, name, email, "team")) {
            tracing::error!(%err, "failed to seed directory");
            std::process::exit(1);
        }
    }

    let mut failed = false;
    for arg in &args {
        let mut parts = arg.splitn(3, ':');
        let name = parts.next().unwrap_or_default();
        let email = parts.next().unwrap_or_default();
        let plan = parts.next().unwrap_or_default();

        match execute(&mut Signup::new(&mut directory, name, email, plan)) {
            Ok(account) => tracing::info!(id = account.id, email = %account.email, "signed up"),
            Err(err) => {
                failed = true;
                match err.error_map() {
                    Some(map) => {
                        for (field, messages) in map.iter() {
                            tracing::warn!(input = %arg, field, messages = ?messages, "rejected");
                        }
                    }
                    None => tracing::warn!(input = %arg, %err, "rejected"),
                }
            }
        }
    }

    tracing::info!(accounts = directory.accounts().len(), "done");
    if failed {
        std::process::exit(2);
    }
}
