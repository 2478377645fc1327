use std::sync::Arc;

use chisel_site::config::{AppState, Config};
use chisel_site::{logger, server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;
    let listener = server::bind(addr)?;
    let state = Arc::new(AppState::new(cfg)?);

    logger::log_server_start(&addr, &state.config);

    tokio::select! {
        result = server::serve(listener, state) => result.map_err(Into::into),
        _ = tokio::signal::ctrl_c() => {
            logger::log_shutdown();
            Ok(())
        }
    }
}
