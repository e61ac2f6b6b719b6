use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = match folio_cli::Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            std::process::exit(folio_cli::EXIT_FAILURE);
        }
    };

    folio_cli::logging::init(&cli.log_level);

    if let Err(err) = folio_cli::apply::run(&cli).await {
        folio_cli::error_view::print(&err);
        std::process::exit(err.exit_code());
    }
}
