mod app;
mod command;
mod config;
mod consts;
mod game;
mod util;
mod view;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use std::io::{self, ErrorKind};
use std::num::NonZeroU16;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let opts = match Args::parse(Parser::from_env()) {
        Ok(Args::Run(opts)) => opts,
        Ok(Args::Help) => {
            println!("Usage: wrapsnake [-c <file>] [--cell-size <n>]");
            println!();
            println!("Options:");
            println!("  -c <file>, --config <file>  Read configuration from <file>");
            println!("  --cell-size <n>             Size of each board cell in terminal columns");
            println!("  -h, --help                  Display this help message and exit");
            println!("  -V, --version               Show the program version and exit");
            return ExitCode::SUCCESS;
        }
        Ok(Args::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("wrapsnake: {e}");
            return ExitCode::from(2);
        }
    };
    let app = match build_app(&opts) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("wrapsnake: {e:#}");
            return ExitCode::from(2);
        }
    };
    let terminal = ratatui::init();
    let r = app.run(terminal);
    ratatui::restore();
    io_exit(r)
}

fn build_app(opts: &Options) -> anyhow::Result<App> {
    let (path, allow_missing) = match opts.config {
        Some(ref path) => (path.clone(), false),
        None => (
            Config::default_path().context("could not determine configuration file path")?,
            true,
        ),
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to read configuration from {}", path.display()))?;
    let globals = Globals {
        cell_size: opts.cell_size.unwrap_or_else(|| config.cell_size()),
        styles: config.styles(),
    };
    App::new(&globals).context("cannot set up game board")
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Args {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Options {
    config: Option<PathBuf>,
    cell_size: Option<NonZeroU16>,
}

impl Args {
    fn parse(mut parser: Parser) -> Result<Args, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("cell-size") => opts.cell_size = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Args::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Args::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Args::Run(opts))
    }
}
