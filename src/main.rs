use clap::Parser;
use pokedex::app::headless;
use pokedex::core::ConfigProvider;
use pokedex::utils::logger;
use pokedex::{CliConfig, Command, PokebuildClient, PokedexError, ViewerConfig};

fn fail(e: &PokedexError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let command = cli.command();
    init_logging(&command, &config, cli.verbose);
    tracing::debug!("Resolved config: {:?}", config);

    let client = match PokebuildClient::new(&config) {
        Ok(client) => client,
        Err(e) => fail(&e),
    };

    let output = match command {
        Command::Browse => {
            run_browser(client, &config);
            return Ok(());
        }
        Command::List => headless::run_list(&client, config.list_limit()).await,
        Command::Show { pokedex_id } => {
            headless::run_show(&client, pokedex_id, config.artwork_base_url()).await
        }
        Command::Search { name } => {
            headless::run_search(&client, &name, config.artwork_base_url()).await
        }
    };

    match output {
        Some(text) => println!("{}", text),
        // the failure itself has already been logged
        None => std::process::exit(2),
    }

    Ok(())
}

fn init_logging(command: &Command, config: &ViewerConfig, verbose: bool) {
    if *command == Command::Browse && cfg!(feature = "tui") {
        let format = config.log_format().unwrap_or_default();
        if let Err(e) =
            logger::init_file_logger(&config.logging.file, verbose, &config.logging.level, format)
        {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    } else {
        logger::init_cli_logger(verbose, &config.logging.level);
    }
}

#[cfg(feature = "tui")]
fn run_browser(client: PokebuildClient, config: &ViewerConfig) {
    tracing::info!("Starting pokedex viewer");
    if let Err(e) = pokedex::ui::run_ui(client, config) {
        fail(&e);
    }
}

#[cfg(not(feature = "tui"))]
fn run_browser(_client: PokebuildClient, _config: &ViewerConfig) {
    eprintln!("❌ Terminal UI not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use: pokedex list | show <id> | search <name>");
    std::process::exit(1);
}
