use clap::{Parser, Subcommand};
use logo_api_proxy::generation::client::{GenerationClient, UiPort};
use logo_api_proxy::generation::download::DirSink;
use logo_api_proxy::prompt::composer::{build_prompt, LogoStyle};
use logo_api_proxy::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logoctl", about = "CLI for the Logo API Proxy", version)]
struct Cli {
    /// Override LOGO_API_URL
    #[arg(global = true, long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the composed generation prompt without sending it
    Prompt {
        /// Project name
        #[arg(long)]
        name: String,
        /// Short project description
        #[arg(long)]
        description: String,
        /// Logo style: minimalist, modern, playful, professional, vintage
        #[arg(long, default_value = "minimalist")]
        style: String,
    },
    /// Generate a logo through the proxy
    Generate {
        /// Project name
        #[arg(long)]
        name: String,
        /// Short project description
        #[arg(long)]
        description: String,
        /// Logo style: minimalist, modern, playful, professional, vintage
        #[arg(long, default_value = "minimalist")]
        style: String,
        /// Also download the image into this directory
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,
    },
    /// Download an already-generated logo image
    Download {
        /// Image URL reported by a previous generate
        #[arg(long)]
        url: String,
        /// Project name the filename is derived from
        #[arg(long)]
        name: String,
        /// Output directory (defaults to the current directory)
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

/// Terminal implementation of the client's UI port.
struct TerminalUi;

impl UiPort for TerminalUi {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            eprintln!("Generating logo...");
        }
    }
    fn show_result(&mut self, url: &str) {
        println!("{}", url);
    }
    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new().expect("Failed to load config");
    if let Some(url) = cli.api_url {
        conf.logo_api_url = url;
    }

    match cli.command {
        Commands::Prompt { name, description, style } => {
            let style: LogoStyle = match style.parse() {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(2);
                }
            };
            println!("{}", build_prompt(name.trim(), description.trim(), style));
            Ok(())
        }
        Commands::Generate { name, description, style, out } => {
            let mut client = GenerationClient::new(conf.logo_api_url.clone(), TerminalUi);
            let url = match client.submit(&name, &description, &style).await {
                Ok(url) => url,
                // The UI port already reported the failure.
                Err(_) => std::process::exit(1),
            };
            if let Some(dir) = out {
                let mut sink = DirSink::new(&dir);
                match client.download(&url, &name, &mut sink).await {
                    Ok(path) => println!("Saved to {}", path.display()),
                    Err(_) => std::process::exit(1),
                }
            }
            Ok(())
        }
        Commands::Download { url, name, dir } => {
            let mut client = GenerationClient::new(conf.logo_api_url.clone(), TerminalUi);
            let mut sink = DirSink::new(&dir);
            match client.download(&url, &name, &mut sink).await {
                Ok(path) => {
                    println!("Saved to {}", path.display());
                    Ok(())
                }
                Err(_) => std::process::exit(1),
            }
        }
    }
}
