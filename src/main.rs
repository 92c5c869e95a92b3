use clap::Parser;
use tplr::cli::Cli;
use tplr::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    if let Err(err) = tplr::render(cli.into_options()) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
