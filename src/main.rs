use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Instrument};

use cart_store::app_system::{setup_tracing, CartConfig, CartSystem};
use cart_store::domain::ProductId;
use cart_store::messages::UpdateProductAmount;
use cart_store::notify::TracingNotifier;

/// Inspect or change the persisted shopping cart.
#[derive(Debug, Parser)]
#[command(name = "cart_store", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current cart
    Show,
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product's line
    Remove { product_id: ProductId },
    /// Set the quantity of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cli = Cli::parse();
    setup_tracing();

    let config = CartConfig::from_env().map_err(|e| e.to_string())?;
    let system = CartSystem::new(&config).map_err(|e| e.to_string())?;
    let cart = system.notifying(Arc::new(TracingNotifier));

    let span = tracing::info_span!("cart_command", command = ?cli.command);
    async {
        info!("Running cart command");
        match cli.command {
            Command::Show => {}
            Command::Add { product_id } => {
                cart.add_product(product_id).await;
            }
            Command::Remove { product_id } => {
                cart.remove_product(product_id).await;
            }
            Command::Update { product_id, amount } => {
                cart.update_product_amount(UpdateProductAmount { product_id, amount }).await;
            }
        }
    }
    .instrument(span)
    .await;

    let current = cart.cart().await;
    let json = serde_json::to_string_pretty(&current).map_err(|e| e.to_string())?;
    println!("{json}");
    info!(lines = current.len(), total = current.total(), "Cart ready");

    system.shutdown().await?;
    Ok(())
}
