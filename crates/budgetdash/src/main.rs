#[cfg(feature = "native")]
use std::path::PathBuf;
#[cfg(feature = "native")]
use std::time::{Duration, Instant};

#[cfg(feature = "native")]
use budgetdash::platform::{FilePreferences, HttpLookupWorker, Preferences};
#[cfg(feature = "native")]
use budgetdash::{App, logging::init_logging};
#[cfg(feature = "native")]
use budgetdash_core::cookies::CookieJar;
#[cfg(feature = "native")]
use budgetdash_core::filters::{FilterKeyMap, MANAGER_ID_KEY};
#[cfg(feature = "native")]
use budgetdash_core::identity::Role;
#[cfg(feature = "native")]
use clap::Parser;

#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(name = "budgetdash")]
#[command(about = "Resolve a dashboard session from its cookies")]
struct Args {
    /// Path to the data directory (default: ~/.budgetdash/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Base URL of the Budget Coder API
    #[arg(short, long, default_value = "http://localhost:8000")]
    api_base: String,

    /// Cookie header file (default: {data_dir}/session.cookies)
    #[arg(short, long)]
    cookie_file: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// How long to wait for the manager-id lookup before giving up. The
/// lookup itself is fire-and-forget; this bound only exists so the CLI
/// terminates.
#[cfg(feature = "native")]
const LOOKUP_WAIT: Duration = Duration::from_secs(5);

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(FilePreferences::default_root);

    init_logging(&data_dir, &args.log_level)?;

    // A missing cookie file is an anonymous session, not an error.
    let cookie_path = args
        .cookie_file
        .unwrap_or_else(|| data_dir.join("session.cookies"));
    let header = std::fs::read_to_string(&cookie_path).unwrap_or_default();
    let jar = CookieJar::parse(header.trim());

    let prefs = FilePreferences::open(data_dir)?;
    let lookup = HttpLookupWorker::new(args.api_base);
    let mut app = App::new(prefs, lookup, FilterKeyMap::default());

    let boot = app.boot(&jar, &[]).clone();
    println!("{}", boot.title);
    println!("role:     {}", boot.identity.role);
    match &boot.identity.username {
        Some(name) => println!("user:     {name} (logout link shown)"),
        None => println!("user:     anonymous (login link shown)"),
    }

    if boot.identity.role == Role::Manager && boot.lookup_sent {
        let deadline = Instant::now() + LOOKUP_WAIT;
        while Instant::now() < deadline {
            if app.poll_lookup() > 0 {
                break;
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    match app.prefs().get(MANAGER_ID_KEY) {
        Some(id) => println!("manager:  {id}"),
        None => println!("manager:  (none)"),
    }

    app.shutdown();
    tracing::info!("session resolved, shutting down");
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in lib.rs
    // This main() exists only to satisfy the binary target requirement
    panic!("This binary requires the 'native' feature. For web, build the WASM target.");
}
