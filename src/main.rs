use clap::Parser;
use miette::{IntoDiagnostic, Result};
use order_pricing::application::OrderPipeline;
use order_pricing::domain::money::Currency;
use order_pricing::domain::order::CreateOrderRequest;
use order_pricing::domain::ports::{EmailClientBox, PaymentClientBox};
use order_pricing::infrastructure::in_memory::{RecordingEmailClient, SimulatedPaymentClient};
use order_pricing::interfaces::csv::ItemReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Line items CSV file (`sku,qty,unit_price`)
    items: PathBuf,

    /// Customer email address
    #[arg(long)]
    email: String,

    /// Coupon code to apply
    #[arg(long)]
    coupon: Option<String>,

    /// Order currency (USD or EUR)
    #[arg(long, default_value = "USD")]
    currency: Currency,

    /// Only price the order; nothing is charged or sent
    #[arg(long)]
    dry_run: bool,

    /// Make the simulated payment gateway decline with this reason
    #[arg(long)]
    decline: Option<String>,
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let file = File::open(&cli.items).into_diagnostic()?;
    let items = ItemReader::new(file).read_all().into_diagnostic()?;
    let request = CreateOrderRequest {
        user_email: cli.email,
        items,
        coupon_code: cli.coupon,
        currency: cli.currency,
    };

    let payments: PaymentClientBox = match cli.decline.as_deref() {
        Some(reason) => Box::new(SimulatedPaymentClient::declining(Some(reason))),
        None => Box::new(SimulatedPaymentClient::approving()),
    };
    let emails = RecordingEmailClient::new();
    let pipeline = OrderPipeline::new(payments, Box::new(emails.clone()) as EmailClientBox);

    let stdout = io::stdout();
    if cli.dry_run {
        let breakdown = pipeline.quote(&request).into_diagnostic()?;
        serde_json::to_writer_pretty(stdout.lock(), &breakdown).into_diagnostic()?;
        println!();
        return Ok(());
    }

    let created = match pipeline.create_order(request).await {
        Ok(created) => created,
        Err(e) => {
            error!(error = %e, "Order failed");
            return Err(e).into_diagnostic();
        }
    };

    for email in emails.sent().await {
        info!(to = %email.to, subject = %email.subject, "Confirmation sent");
    }

    serde_json::to_writer_pretty(stdout.lock(), &created).into_diagnostic()?;
    println!();

    Ok(())
}
