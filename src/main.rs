// Desktop and mobile dev builds may carry a `.env` next to the binary. The
// browser has no process environment, so web builds rely on the bundled
// `assets/config.env` that `LandingConfig::from_env` layers underneath.
#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv()
        && !err.not_found()
    {
        eprintln!("ignoring unreadable .env file: {}", err);
    }
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    if let Err(err) = tracing_subscriber::fmt()
        .with_max_level(nuvia_landing::config::log_level_from_env())
        .with_target(false)
        .try_init()
    {
        eprintln!("failed to initialize logging: {}", err);
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn main() {
    load_dotenv();
    init_logging();
    tracing::info!("launching Nuvia landing page");
    dioxus::launch(nuvia_landing::ui::App);
}
