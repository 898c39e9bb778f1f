use anyhow::{Context, Result};
use poketrack::{
    cli::{Cli, Commands},
    config::CatalogLocation,
    notify::LogNotifier,
    store::Rarity,
    ReferenceCatalog,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("poketrack=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    let location = CatalogLocation::new(cli.catalog);
    // An unreadable catalog is reported and replaced by an empty one
    let catalog = ReferenceCatalog::load_or_empty(location.path(), &mut LogNotifier::new());

    match cli.command {
        Commands::Names => {
            if cli.json {
                print_json(catalog.names_in_order())?;
            } else {
                for name in catalog.names_in_order() {
                    println!("{}", name);
                }
            }
        }

        Commands::Categories => {
            if cli.json {
                print_json(catalog.categories_in_order())?;
            } else {
                for category in catalog.categories_in_order() {
                    println!("{}", category);
                }
            }
        }

        Commands::Show { name } => match catalog.entry(&name) {
            Some(entry) if cli.json => print_json(entry)?,
            Some(entry) => {
                println!("{} ({})\n", entry.name, entry.category);
                for info in &entry.moves {
                    println!("  {:<20} {:>5}  {}", info.move_name, info.value, info.description);
                }
            }
            None => println!("Unknown name: {}", name),
        },

        Commands::Rarities => {
            if cli.json {
                print_json(&Rarity::ALL)?;
            } else {
                for rarity in Rarity::ALL {
                    println!("{}", rarity);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}
