use clap::{Parser, Subcommand};
use photo_gallery::catalog::Catalog;
use photo_gallery::controller::{self, PageController};
use photo_gallery::{config, generate, output};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "photo-gallery")]
#[command(about = "Single-page photo gallery generator")]
#[command(long_about = "\
Single-page photo gallery generator

Renders a hero, a responsive image grid, an about block, feature cards and a
full-screen lightbox into one self-contained index.html. Images are not
copied: every <img> points at the URL in the catalog.

Content structure:

  content/
  ├── catalog.toml     # [[images]] id, url, title, description, category, size
  └── config.toml      # Site texts, features, layout, zoom limits, colours

Both files are optional; missing ones fall back to the built-in defaults.

Run 'photo-gallery gen-config' to generate a documented config.toml.
Set RUST_LOG=debug to trace every state transition on stderr.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery page into the output directory
    Build,
    /// Validate catalog and config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Drive the page controller with an event script and print each transition
    Simulate {
        /// Comma-separated events, e.g. "open:0,next,loaded:2,key:escape"
        #[arg(long)]
        events: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let (catalog, site_config) = load_content(&cli.source)?;
            println!("==> Rendering {} images", catalog.len());
            let report = generate::generate(&catalog, &site_config, &cli.output)?;
            output::print_build_output(&catalog, &report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let (catalog, site_config) = load_content(&cli.source)?;
            let files = output::ContentFiles {
                config: cli.source.join("config.toml").exists(),
                catalog: cli.source.join("catalog.toml").exists(),
            };
            output::print_check_output(&catalog, &site_config, files);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Simulate { events } => {
            let script = controller::parse_script(&events)?;
            let (catalog, site_config) = load_content(&cli.source)?;
            let mut page = PageController::new(catalog, &site_config);
            for (i, event) in script.iter().enumerate() {
                let effects = page.dispatch(event.clone());
                output::print_step(i + 1, Some(event), &effects, &page);
            }
            let effects = page.teardown();
            output::print_step(script.len() + 1, None, &effects, &page);
        }
    }

    Ok(())
}

/// Load the catalog and config from the content directory.
fn load_content(source: &Path) -> Result<(Catalog, config::SiteConfig), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(source)?;
    let site_config = config::load_config(source)?;
    Ok((catalog, site_config))
}
