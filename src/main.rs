mod telemetry;

use clap::Parser;
use mawaqit_api::{AppOptions, Application};
use mawaqit_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};

/// Daily prayer times with desktop notifications.
#[derive(Parser, Debug)]
#[command(name = "mawaqit", version, about)]
struct Cli {
    /// City to look up, paired with --country
    #[arg(long)]
    city: Option<String>,

    /// Country to look up, paired with --city
    #[arg(long)]
    country: Option<String>,

    /// Resolve the location from this machine's position
    #[arg(long)]
    locate: bool,

    /// Ask for notification permission and schedule the next alert
    #[arg(long)]
    notify: bool,

    /// Print today's times and exit instead of staying interactive
    #[arg(long)]
    once: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_subscriber(get_subscriber("warn".into()));

    let context = setup_context();
    let app = Application::new(
        context,
        AppOptions {
            city: cli.city,
            country: cli.country,
            locate: cli.locate,
            notify: cli.notify,
            once: cli.once,
        },
    );
    app.run().await
}
