use cart_store::core::ConfigProvider;
use cart_store::utils::{logger, validation::Validate};
use cart_store::{CartStore, CliConfig, FileStore, HttpCatalog, TomlConfig, TracingNotifier};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cart-store")]
#[command(about = "A storefront shopping-cart state manager")]
struct Cli {
    /// Read catalog/storage settings from a TOML file instead of flags.
    #[arg(long)]
    config_file: Option<String>,

    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current cart.
    Show,
    /// Add one unit of a product to the cart.
    Add { product_id: u64 },
    /// Remove a product from the cart.
    Remove { product_id: u64 },
    /// Set the cart quantity of a product.
    Update { product_id: u64, amount: u32 },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.config.verbose);
    tracing::info!("Starting cart-store CLI");
    if cli.config.verbose {
        tracing::debug!("CLI config: {:?}", cli.config);
    }

    let provider: Box<dyn ConfigProvider> = match &cli.config_file {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Box::new(config),
            Err(e) => {
                tracing::error!("Failed to load config file {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        },
        None => {
            if let Err(e) = cli.config.validate() {
                tracing::error!("Configuration validation failed: {}", e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            Box::new(cli.config.clone())
        }
    };

    let catalog = HttpCatalog::new(provider.api_base_url());
    let storage = FileStore::new(provider.data_dir());
    let store = CartStore::new(catalog, TracingNotifier, storage, provider.cart_key());

    match cli.command {
        Command::Show => {}
        Command::Add { product_id } => store.add_product(product_id).await,
        Command::Remove { product_id } => store.remove_product(product_id).await,
        Command::Update { product_id, amount } => {
            store.update_product_amount(product_id, amount).await
        }
    }

    let cart = store.cart();
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }

    let mut total = 0.0;
    println!("{:<6} {:<30} {:>8} {:>10}", "id", "name", "amount", "subtotal");
    for item in &cart {
        let subtotal = item.price * item.amount as f64;
        total += subtotal;
        println!(
            "{:<6} {:<30} {:>8} {:>10.2}",
            item.id, item.name, item.amount, subtotal
        );
    }
    println!("Total: {:.2}", total);
}
