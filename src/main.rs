use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use winit::event_loop::EventLoop;

use prompt3d::app::App;
use prompt3d::auth::{LocalAuth, User};
use prompt3d::cli::Cli;
use prompt3d::config::AppConfig;
use prompt3d::generator::ModelGenerator;
use prompt3d::preview::NoPreview;
use prompt3d::session::Session;

const HEADLESS_USER: &str = "local";

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("prompt3d=info,wgpu_core=warn,wgpu_hal=warn"),
    )
    .init();
}

/// Generate the configured prompt once and print what was built.
fn run_headless(runtime: &tokio::runtime::Runtime, session: Session, prompt: Option<String>) -> Result<()> {
    let prompt = prompt.context("--headless needs a prompt (--prompt or config \"prompt\")")?;
    let id = runtime.block_on(session.generate(&prompt))?;
    let record = session
        .get(id)
        .context("generated record disappeared from the session")?;

    println!("{} [{:?}] {}", id, record.status, record.prompt);
    if let Some(object) = &record.model {
        println!("  {}", object.summary());
        if let Some(bounds) = object.bounds() {
            let extent = bounds.extent();
            println!("  extent {:.2} x {:.2} x {:.2}", extent.x, extent.y, extent.z);
        }
    }
    if !record.image_url.is_empty() {
        println!("  preview {}", record.image_url);
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let auth = Arc::new(LocalAuth::new());
    match config.user.clone() {
        Some(name) => auth.sign_in(User::new(name)),
        // Without a panel there is no way to sign in interactively.
        None if cli.headless || cli.no_ui => auth.sign_in(User::new(HEADLESS_USER)),
        None => auth.finish_loading(),
    }

    let session = Session::new(
        ModelGenerator::new(config.latency),
        auth.clone(),
        Arc::new(NoPreview),
    );
    session.set_options(config.generation);

    if cli.headless {
        return run_headless(&runtime, session, config.prompt.clone());
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config, !cli.no_ui, session, auth, runtime.handle().clone());

    info!("prompt3d starting; Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
