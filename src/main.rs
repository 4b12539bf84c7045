mod app;
mod calendar;
mod capture;
mod header;
mod help;
mod jumpto;
mod locale;
mod namedays;
mod namelist;
mod theme;
use crate::app::App;
use crate::capture::InteractionCapture;
use crate::jumpto::YMD_FMT;
use crate::locale::Polish;
use crate::namedays::NameDayTable;
use anyhow::Context;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::io;
use std::path::PathBuf;
use time::{Date, OffsetDateTime};

const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "info"
};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date, log_file } => {
                // Logging goes nowhere unless asked for, as the terminal is
                // occupied by the interface.
                let _logger = log_file.map(init_logging).transpose()?;
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let app = App::new(
                    local_today,
                    today,
                    date.unwrap_or(today),
                    NameDayTable::polish(),
                    Polish,
                )
                .context("date is too close to the end of time")?;
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let _capture = InteractionCapture::acquire(io::stdout())
                        .context("failed to enable mouse capture")?;
                    app.run(&mut terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: imieniny [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Sprawdź, kto obchodzi imieniny w wybranym dniu");
                println!();
                println!("Options:");
                println!("  -h, --help         Display this help message and exit");
                println!("  -V, --version      Show the program version and exit");
                println!("      --log-file <PATH>");
                println!("                     Write diagnostic logs to the given file");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn local_today() -> Option<Date> {
    OffsetDateTime::now_local().ok().map(OffsetDateTime::date)
}

fn init_logging(path: PathBuf) -> anyhow::Result<LoggerHandle> {
    Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)
        .context("invalid log specification")?
        .log_to_file(FileSpec::try_from(&path).context("invalid log file path")?)
        .start()
        .with_context(|| format!("failed to start logging to {}", path.display()))
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
