//! EventDesk frontend - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(any(feature = "desktop", target_arch = "wasm32"))]
fn main() {
    use dioxus::prelude::*;
    use eventdesk_frontend::app::App;

    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    launch(App);
}

#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventdesk_frontend=info,eventdesk_core=info".into()),
        )
        .init();
}

/// Native `cargo run` of the web build: the browser bundle is built and
/// served by the Dioxus CLI, so this binary only starts `dx serve`.
#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() -> std::process::ExitCode {
    use eventdesk_frontend::config::dev_server_rustflags;
    use std::process::{Command, ExitCode};

    let caller_flags = std::env::var("RUSTFLAGS").ok();
    let serve = Command::new("dx")
        .arg("serve")
        .env("RUSTFLAGS", dev_server_rustflags(caller_flags.as_deref()))
        .status();

    match serve {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => ExitCode::from(status.code().and_then(|c| u8::try_from(c).ok()).unwrap_or(1)),
        Err(e) => {
            eprintln!("eventdesk: `dx` not found on PATH ({e}). cargo install dioxus-cli, or run with --features desktop");
            ExitCode::FAILURE
        }
    }
}
