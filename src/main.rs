use std::{error::Error, process};

use clap::{Parser, Subcommand, ValueHint};
use log::{debug, error, info, LevelFilter};
use tokio::{fs::File, io::AsyncWriteExt};

use vlcrc::{client::Client, config::Config, protocol::Response};

/// Group name for mutually exclusive logging options.
const ARGS_GROUP_LOGGING: &str = "logging";

/// Command line arguments as parsed by `clap`.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Host of the player's HTTP interface
    #[arg(long, default_value_t = String::from("localhost"), value_hint = ValueHint::Hostname)]
    host: String,

    /// Port of the player's HTTP interface
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Basic auth username
    ///
    /// VLC expects the username to stay empty; this is here for servers
    /// that deviate.
    #[arg(long, default_value_t = String::new())]
    username: String,

    /// Basic auth password, as set with VLC's --http-password
    #[arg(short, long, env = "VLC_HTTP_PASSWORD", hide_env_values = true)]
    password: String,

    /// Suppresses all output except warnings and errors.
    #[arg(short, long, default_value_t = false, group = ARGS_GROUP_LOGGING)]
    quiet: bool,

    /// Enable verbose logging
    ///
    /// Specify twice for trace logging.
    #[arg(short, long, action = clap::ArgAction::Count, group = ARGS_GROUP_LOGGING)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// One subcommand per common player operation.
#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the player status
    Status,
    /// Print the playlist
    Playlist,
    /// Browse a directory on the player's host
    Browse {
        #[arg(value_hint = ValueHint::AnyPath)]
        uri: String,
    },
    /// Add a URI to the playlist and start playing it
    Play {
        #[arg(value_hint = ValueHint::AnyPath)]
        uri: String,
    },
    /// Add a URI to the playlist
    Enqueue {
        #[arg(value_hint = ValueHint::AnyPath)]
        uri: String,
    },
    /// Toggle pause
    Pause,
    /// Force playback to resume
    Resume,
    /// Stop playback
    Stop,
    /// Skip to the next playlist item
    Next,
    /// Skip to the previous playlist item
    Prev,
    /// Seek within the current item (seconds, +/- offsets, percentages)
    Seek { position: String },
    /// Set the volume (0..512, +/- steps, percentages)
    Volume { level: String },
    /// Sort the playlist by id, name, author, random or track
    Sort {
        mode: String,
        /// forward or reverse
        #[arg(default_value_t = String::from("forward"))]
        order: String,
    },
    /// Scrap the whole playlist
    Empty,
    /// Download art for the current item to a file
    Art {
        #[arg(value_hint = ValueHint::FilePath)]
        output: String,
    },
}

/// Initializes the logger facade.
///
/// The logging level is determined as follows, in order of precedence
/// from highest to lowest:
/// 1. Command line arguments
/// 2. `RUST_LOG` environment variable
/// 3. Hard coded default
///
/// # Panics
///
/// Panics when a logger facade is already initialized.
fn init_logger(args: &Args) {
    let mut logger = env_logger::Builder::from_env(
        // Note: if you change the default logging level here, then you should
        // probably also change the verbosity levels below.
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info"),
    );

    if args.quiet || args.verbose > 0 {
        let level = match args.verbose {
            0 => {
                // Quiet and verbose are mutually exclusive, and `verbose` is 0
                // by default. So this arm means: quiet mode.
                LevelFilter::Warn
            }
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };

        // Filter log messages of external crates.
        logger.filter_module(module_path!(), level);
    }

    logger.init();
}

/// Issues the requested operation and prints the result.
async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = Config::with_endpoint(args.host, args.port, args.password);
    config.username = args.username;

    let client = Client::new(&config)?;

    let response = match args.command {
        Command::Status => client.status().await?,
        Command::Playlist => client.playlist().await?,
        Command::Browse { uri } => client.browse(&uri).await?,
        Command::Play { uri } => client.play(&uri).await?,
        Command::Enqueue { uri } => client.enqueue(&uri).await?,
        Command::Pause => client.pause(None).await?,
        Command::Resume => client.resume().await?,
        Command::Stop => client.stop().await?,
        Command::Next => client.next().await?,
        Command::Prev => client.previous().await?,
        Command::Seek { position } => client.seek(position).await?,
        Command::Volume { level } => client.volume(level).await?,
        Command::Sort { mode, order } => client.sort_by(&mode, &order).await?,
        Command::Empty => client.empty().await?,
        Command::Art { output } => {
            let mut response = client.art().await?;

            let mut file = File::create(&output).await?;
            while let Some(chunk) = response.chunk().await? {
                file.write_all(&chunk).await?;
            }
            file.flush().await?;

            info!("wrote art to {output}");
            return Ok(());
        }
    };

    print_response(&response);
    Ok(())
}

/// Prints a resource response: JSON pretty-printed, raw text verbatim.
fn print_response(response: &Response) {
    match response {
        Response::Json(json) => match serde_json::to_string_pretty(json) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{json}"),
        },
        Response::Text(text) => println!("{text}"),
    }
}

/// Main entry point of the application.
#[tokio::main]
async fn main() {
    // `clap` handles our command line arguments and help text.
    let args = Args::parse();
    init_logger(&args);

    // Dump the requested operation before we do anything more. The full
    // argument set is not dumped: it contains the password.
    debug!("command {:?}", args.command);

    if let Err(e) = run(args).await {
        error!("{e}");
        process::exit(1);
    }
}
