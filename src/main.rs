use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use svconv::cli::{run_convert, Args};
use svconv::formats::Format;

fn main() {
    let args = Args::parse();
    init_logging(&args);

    if args.serve {
        if let Err(err) = run_server(args.port) {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
        return;
    }

    let (from, to) = match (args.from, args.to) {
        (Some(from), Some(to)) => (Format::from(from), Format::from(to)),
        _ => {
            eprintln!("Error: --from and --to are required unless --serve is given.");
            std::process::exit(2);
        }
    };

    if let Err(err) = run_convert(&args, from, to) {
        log::error!("conversion failed: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run_server(port: u16) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(svconv::server::serve(port))
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        LevelFilter::Error
    } else if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
