mod logger;

use std::path::PathBuf;

use clap::{Parser as ClapParser, Subcommand};
use hylinear::{
    codec::{PackedStr, PackedWord},
    config::{ColorMode, Config, LogLevel},
    error::{LinError, LinResult},
    iterate::Nat,
    list::List,
    programs,
    term::{Term, pretty::PrettyTerm, pretty::terminal_width},
};
use log::{debug, info};
use termcolor::ColorChoice;

/// Largest accepted `repeat` count. Each step holds one duplicate of the successor closure.
const MAX_REPEAT: u32 = 1_000_000;

#[derive(ClapParser)]
#[command(name = "hylinear", version, about = "Linear values, bounded iteration and packed strings")]
pub struct Arguments {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Render width, defaults to the terminal width
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Colored output: auto, always or never
    #[arg(long, global = true)]
    color: Option<ColorMode>,

    /// Raise the log level, may be repeated
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pack text into 32-bit words, four code units per word
    Encode { text: String },
    /// Unpack words (hexadecimal with a 0x prefix, or decimal) back into text
    Decode {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Concatenate two strings through their packed form
    Concat { a: String, b: String },
    /// Apply the successor COUNT times, starting from --start
    Repeat {
        #[arg(value_parser = clap::value_parser!(u32).range(..=MAX_REPEAT as i64))]
        count: Option<u32>,
        #[arg(long)]
        start: Option<u32>,
    },
    /// Run an example program, or all of them
    Demo { name: Option<String> },
}

fn parse_word(text: &str) -> LinResult<PackedWord> {
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse(),
    };
    parsed
        .map(PackedWord::from_raw)
        .map_err(|_| LinError::InvalidWord(text.to_string()))
}

fn repeat_count(count: u32) -> LinResult<Nat> {
    if count > MAX_REPEAT {
        return Err(LinError::CountTooLarge {
            count,
            max: MAX_REPEAT,
        });
    }
    Ok(Nat::new(count))
}

fn print_words(s: &PackedStr) {
    for word in s.words() {
        println!("{word}");
    }
}

struct Output {
    width: usize,
    choice: ColorChoice,
}

impl Output {
    fn show(&self, term: &Term) -> LinResult<()> {
        term.pretty_print_with(self.width, self.choice)?;
        println!();
        Ok(())
    }
}

fn load_config(args: &Arguments) -> LinResult<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let Some(width) = args.width {
        config.width = Some(width);
    }
    if let Some(color) = args.color {
        config.color = color;
    }
    config.log_level = config.log_level.raised(args.verbose);
    Ok(config)
}

fn run(args: Arguments) -> LinResult<()> {
    let config = load_config(&args)?;
    log::set_max_level(config.log_level.filter());
    debug!("Effective configuration: {:?}", config);

    let output = Output {
        width: config.width.unwrap_or_else(terminal_width),
        choice: config.color.choice(),
    };

    match args.command {
        Command::Encode { text } => {
            let packed = PackedStr::checked(&text)?;
            info!(
                "Encoded {} code units into {} words",
                packed.len_units(),
                packed.len_words()
            );
            print_words(&packed);
        }
        Command::Decode { words } => {
            let words = words
                .iter()
                .map(|w| parse_word(w))
                .collect::<LinResult<List<PackedWord>>>()?;
            println!("{}", PackedStr::from(words));
        }
        Command::Concat { a, b } => {
            let joined = PackedStr::checked(&a)?.concat(PackedStr::checked(&b)?);
            println!("{joined}");
            print_words(&joined);
        }
        Command::Repeat { count, start } => {
            let count = repeat_count(count.unwrap_or(config.repeat.count))?;
            let start = start.unwrap_or(config.repeat.start);
            info!("Repeating successor {} times from {}", count, start);
            output.show(&programs::count_up(count, start))?;
        }
        Command::Demo { name: Some(name) } => {
            let program =
                programs::find(&name).ok_or_else(|| LinError::UnknownProgram(name.clone()))?;
            output.show(&(program.run)())?;
        }
        Command::Demo { name: None } => {
            for (name, term) in programs::run_all() {
                println!("{name}:");
                output.show(&term)?;
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Arguments::parse();

    // The file may still lower or raise the level once it is loaded.
    let startup = LogLevel::default().raised(args.verbose);
    let choice = args.color.unwrap_or_default().choice();
    if let Err(error) = logger::init(startup.filter(), choice) {
        eprintln!("Failed to install logger: {}", error);
    }

    if let Err(error) = run(args) {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arguments_are_consistent() {
        Arguments::command().debug_assert();
    }

    #[test]
    fn words_parse_as_hex_or_decimal() {
        assert_eq!(parse_word("0x00006f48").unwrap().raw(), 0x6f48);
        assert_eq!(parse_word("0X41").unwrap().raw(), 0x41);
        assert_eq!(parse_word("6711905").unwrap().raw(), 0x0066_6a61);
        assert!(matches!(
            parse_word("0xnope"),
            Err(LinError::InvalidWord(w)) if w == "0xnope"
        ));
        assert!(parse_word("4294967296").is_err());
    }

    #[test]
    fn repeat_count_is_bounded() {
        assert!(Arguments::try_parse_from(["hylinear", "repeat", "4294967295"]).is_err());
        assert!(Arguments::try_parse_from(["hylinear", "repeat", "1000000"]).is_ok());
        assert_eq!(repeat_count(MAX_REPEAT).unwrap(), Nat::new(MAX_REPEAT));
        assert!(matches!(
            repeat_count(u32::MAX),
            Err(LinError::CountTooLarge { count: u32::MAX, max: MAX_REPEAT })
        ));
    }

    #[test]
    fn repeat_start_accepts_full_word_range() {
        let args =
            Arguments::try_parse_from(["hylinear", "repeat", "1", "--start", "4294967295"])
                .unwrap();
        assert!(matches!(
            args.command,
            Command::Repeat {
                count: Some(1),
                start: Some(u32::MAX)
            }
        ));
        assert_eq!(
            programs::count_up(repeat_count(1).unwrap(), u32::MAX),
            Term::num(0)
        );
    }

    #[test]
    fn flags_override_defaults() {
        let args = Arguments::try_parse_from([
            "hylinear", "-vv", "--width", "40", "--color", "never", "repeat", "3",
        ])
        .unwrap();
        let config = load_config(&args).unwrap();
        assert_eq!(config.width, Some(40));
        assert_eq!(config.color, ColorMode::Never);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(matches!(
            args.command,
            Command::Repeat {
                count: Some(3),
                start: None
            }
        ));
    }
}
