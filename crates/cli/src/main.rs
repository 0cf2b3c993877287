mod console;

use std::process;

use clap::{Parser, Subcommand};

use orderlens_lookup::{HttpOrderSource, OrderLookupFlow};
use orderlens_notify::Notifier;

use crate::console::{ConsoleHost, ConsolePane};

/// Order lookup console client.
#[derive(Parser)]
#[command(name = "orderlens", version, about = "Order lookup console client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up one order and print its highlighted JSON markup
    Lookup {
        /// Order identifier, sent to the service verbatim
        order_id: String,

        /// Base URL of the order lookup service
        /// (overrides ORDERLENS_BASE_URL; default http://localhost:8081)
        #[arg(long)]
        base_url: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lookup { order_id, base_url } => {
            cmd_lookup(&order_id, base_url.as_deref());
        }
    }
}

/// Run one submission against the service. Success prints the markup
/// fragment on stdout; every failure path surfaces as a banner on
/// stderr and exit code 1.
fn cmd_lookup(order_id: &str, base_url: Option<&str>) {
    let source = match base_url {
        Some(url) => HttpOrderSource::new(url),
        None => HttpOrderSource::from_env(),
    };

    let pane = ConsolePane::new();
    let rendered = pane.rendered_handle();
    let flow = OrderLookupFlow::new(
        Box::new(source),
        Box::new(pane),
        Notifier::new(ConsoleHost),
    );

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    rt.block_on(flow.submit(order_id));

    if !rendered.load(std::sync::atomic::Ordering::SeqCst) {
        process::exit(1);
    }
}
