use clap::Parser;

use pledgeboard::cli::Cli;
use pledgeboard::logging::init_tracing;
use pledgeboard::ui;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // The runtime only carries the dataset fetch; the UI loop stays on the
    // main thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let _enter = runtime.enter();

    ui::runtime::run(cli)?;
    Ok(())
}
