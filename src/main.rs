use campusnav::{
    config::NavConfig,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    let config = setup()?;

    let mut app = App::new(config);
    app.run().await
}

fn setup() -> color_eyre::Result<NavConfig> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()?;

    let config = NavConfig::from_env();
    tracing::info!(
        "Starting campusnav (offline: {}, frame interval: {:?})",
        config.offline,
        config.frame_interval
    );
    Ok(config)
}
