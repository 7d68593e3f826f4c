#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use roster_business::BusinessConfig;
use roster_ui::RosterApp;
use roster_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    // Requests run here; the runtime lives until the window closes.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("roster-io")
        .enable_all()
        .build()
        .map_err(|err| eframe::Error::AppCreation(Box::new(err)))?;

    let config = BusinessConfig::from_env();
    log::info!("Users endpoint: {}", config.users_url());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 820.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Roster",
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let state = State::new(config, handle);
            Ok(Box::new(RosterApp::new(state)))
        }),
    )
}
