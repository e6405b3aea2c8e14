mod cli_commands;
mod cli_exec;
mod cli_runtime;

#[tokio::main]
async fn main() {
    tabhop::logging::init_logging();
    if let Err(err) = cli_runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
