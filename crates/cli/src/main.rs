mod config;

use std::io::{self, IsTerminal, Read};

use clap::Parser;
use colored::{control::set_override, Colorize};
use numstyle_core::{
    DecimalSeparatorDisplay, Grouping, Notation, NumberStyle, NumericInput, Precision,
    RoundingRule, SignDisplay,
};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

use crate::config::Config;

const LONG_ABOUT: &str = r#"
nsty formats numbers for humans.

Pass one or more values (or pipe them in, one per line) and a style built
from flags; every value is printed on its own line, formatted accordingly.
Integers and floats are both accepted; NaN and the infinities format as
NaN, Infinity, and -Infinity no matter which options are set.

PRECISION SPECS (-p/--precision):
  fraction:2        exactly two fraction digits        3.14159 -> 3.14
  fraction:2..      at least two (zero-padded)         42 -> 42.00
  fraction:2..4     between two and four               3.14159 -> 3.1416
  significant:3     three significant digits           1234 -> 1230
  significant:2..4  natural count clamped to range
  integer:4         zero-pad the integer part          42 -> 0042
  The short kinds f, s, and i work too: -p f:2

EXAMPLES:
  nsty 42                          Plain formatting
  nsty -g 1234567                  1,234,567
  nsty -p fraction:2 3.14159      3.14
  nsty -n compact 1500             1.5K
  nsty -n scientific 1234          1.234E3
  nsty -s always -- -42            Signs for everything
  nsty --scale 100 -p f:1 0.163   Render a ratio as a percentage: 16.3
  nsty -r to-nearest-or-away-from-zero --round-increment 0.25 3.14159
                                   Quantize to quarters: 3.25
  echo 42 | nsty -p integer:4      Piped input: 0042

CONFIGURATION:
  Settings can come from CLI flags, environment variables, or a config file.
  Precedence: CLI args > Environment vars > Config file > Defaults

  Setting            | CLI flag              | Env var
  -------------------|-----------------------|----------------------
  group_separator    | --group-separator     | NSTY_GROUP_SEPARATOR
  decimal_separator  | -d, --decimal-separator | NSTY_DECIMAL_SEPARATOR
  no_color           | -C, --no-color        | NSTY_NO_COLOR

  Config file location: nsty --config-path
  Generate default config: nsty --config-init

  Note: NO_COLOR env var is also respected (https://no-color.org/)"#;

#[derive(Parser)]
#[command(name = "nsty")]
#[command(version)]
#[command(about = "Format numbers with composable styles")]
#[command(long_about = LONG_ABOUT)]
struct Cli {
    /// Values to format. Prefix negative values with `--`:  nsty -- -42
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    values: Vec<String>,

    /// Precision spec, e.g. fraction:2, significant:3..5, integer:4
    #[arg(long, short = 'p', value_name = "SPEC", value_parser = parse_precision)]
    precision: Option<Precision>,

    /// Group the integer part every three digits
    #[arg(long, short = 'g')]
    group: bool,

    /// Grouping separator (implies --group)
    #[arg(long, value_name = "SEP")]
    group_separator: Option<String>,

    /// Decimal separator character
    #[arg(long, short = 'd', value_name = "SEP")]
    decimal_separator: Option<String>,

    /// Emit the decimal separator even when no fraction digits follow
    #[arg(long)]
    always_decimal_separator: bool,

    /// Notation to use
    #[arg(long, short = 'n', value_enum, value_name = "NOTATION")]
    notation: Option<NotationArg>,

    /// Sign display policy
    #[arg(long, short = 's', value_enum, value_name = "POLICY")]
    sign: Option<SignArg>,

    /// Multiply each value before formatting (e.g. 100 for percentages)
    #[arg(long, value_name = "FACTOR", allow_hyphen_values = true)]
    scale: Option<f64>,

    /// Rounding rule applied before formatting
    #[arg(long, short = 'r', value_enum, value_name = "RULE")]
    round: Option<RoundArg>,

    /// Quantization step for --round (e.g. 0.25 rounds to quarters)
    #[arg(long, value_name = "STEP", allow_hyphen_values = true)]
    round_increment: Option<f64>,

    /// Output one JSON object per value (for scripting/piping)
    #[arg(long, short = 'j')]
    json: bool,

    /// Disable colored output
    #[arg(long, short = 'C')]
    no_color: bool,

    /// Enable verbose logging (use multiple times for more detail)
    ///
    /// -v shows debug messages, -vv shows trace messages, including which
    /// formatting branch handled each value.
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Show config file path
    #[arg(long)]
    config_path: bool,

    /// Generate default config file (see --config-path for location)
    #[arg(long)]
    config_init: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum NotationArg {
    Automatic,
    Compact,
    Scientific,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Automatic => Notation::Automatic,
            NotationArg::Compact => Notation::Compact,
            NotationArg::Scientific => Notation::Scientific,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SignArg {
    Automatic,
    Never,
    Always,
    AlwaysIncludingZero,
}

impl From<SignArg> for SignDisplay {
    fn from(arg: SignArg) -> Self {
        match arg {
            SignArg::Automatic => SignDisplay::Automatic,
            SignArg::Never => SignDisplay::Never,
            SignArg::Always => SignDisplay::Always {
                include_zero: false,
            },
            SignArg::AlwaysIncludingZero => SignDisplay::Always { include_zero: true },
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RoundArg {
    TowardZero,
    AwayFromZero,
    Up,
    Down,
    ToNearestOrEven,
    ToNearestOrAwayFromZero,
}

impl From<RoundArg> for RoundingRule {
    fn from(arg: RoundArg) -> Self {
        match arg {
            RoundArg::TowardZero => RoundingRule::TowardZero,
            RoundArg::AwayFromZero => RoundingRule::AwayFromZero,
            RoundArg::Up => RoundingRule::Up,
            RoundArg::Down => RoundingRule::Down,
            RoundArg::ToNearestOrEven => RoundingRule::ToNearestOrEven,
            RoundArg::ToNearestOrAwayFromZero => RoundingRule::ToNearestOrAwayFromZero,
        }
    }
}

/// Parse a precision spec like `fraction:2`, `significant:3..5`, `integer:4`.
fn parse_precision(spec: &str) -> Result<Precision, String> {
    let (kind, counts) = spec
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:COUNT, got '{spec}'"))?;

    let parse_count = |s: &str| -> Result<usize, String> {
        s.parse()
            .map_err(|_| format!("invalid digit count '{s}' in '{spec}'"))
    };

    let (min, max) = if let Some((lo, hi)) = counts.split_once("..") {
        let min = if lo.is_empty() {
            None
        } else {
            Some(parse_count(lo)?)
        };
        let max = if hi.is_empty() {
            None
        } else {
            Some(parse_count(hi)?)
        };
        (min, max)
    } else {
        let n = parse_count(counts)?;
        (Some(n), Some(n))
    };

    macro_rules! ranged {
        ($ctor:ident) => {
            match (min, max) {
                (Some(lo), Some(hi)) => Precision::$ctor(lo..=hi),
                (Some(lo), None) => Precision::$ctor(lo..),
                (None, Some(hi)) => Precision::$ctor(..=hi),
                (None, None) => Precision::$ctor(..),
            }
        };
    }

    match kind {
        "fraction" | "f" => Ok(ranged!(fraction_range)),
        "significant" | "s" => Ok(ranged!(significant_range)),
        "integer" | "i" => Ok(ranged!(integer_range)),
        other => Err(format!(
            "unknown precision kind '{other}' (use fraction, significant, or integer)"
        )),
    }
}

fn build_style(cli: &Cli, config: &Config) -> NumberStyle {
    let mut style = NumberStyle::new();

    if let Some(precision) = cli.precision {
        style = style.precision(precision);
    }

    if cli.group || cli.group_separator.is_some() {
        let separator = cli
            .group_separator
            .clone()
            .or_else(|| config.group_separator())
            .unwrap_or_else(|| ",".to_string());
        style = style.grouping_with(Grouping::Always, &separator);
    }

    if let Some(separator) = cli
        .decimal_separator
        .clone()
        .or_else(|| config.decimal_separator())
    {
        style = style.decimal_separator(&separator);
    }

    if cli.always_decimal_separator {
        style = style.decimal_separator_display(DecimalSeparatorDisplay::Always);
    }

    if let Some(notation) = cli.notation {
        style = style.notation(notation.into());
    }

    if let Some(sign) = cli.sign {
        style = style.sign(sign.into());
    }

    if let Some(factor) = cli.scale {
        style = style.scale(factor);
    }

    match (cli.round, cli.round_increment) {
        (Some(rule), Some(step)) => style = style.rounded_by(rule.into(), step),
        (Some(rule), None) => style = style.rounded(rule.into()),
        (None, Some(_)) => {
            eprintln!(
                "{}: --round-increment has no effect without --round",
                "warning".yellow().bold()
            );
        }
        (None, None) => {}
    }

    style
}

fn main() {
    let cli = Cli::parse();

    // Handle --config-path
    if cli.config_path {
        match Config::path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!(
                    "{}: Cannot determine config directory",
                    "error".red().bold()
                );
                std::process::exit(1);
            }
        }
        return;
    }

    // Handle --config-init
    if cli.config_init {
        match config::init_config() {
            Ok(path) => println!("Created config file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                std::process::exit(1);
            }
        }
        return;
    }

    // Initialize tracing based on verbosity level
    let level = match cli.verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level != LevelFilter::OFF {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(io::stderr)
            .init();
    }

    let config = Config::load();
    if cli.no_color || config.no_color() {
        set_override(false);
    }

    let style = build_style(&cli, &config);

    let mut values = cli.values.clone();
    if values.is_empty() && !io::stdin().is_terminal() {
        let mut buffer = String::new();
        if io::stdin().read_to_string(&mut buffer).is_ok() {
            values.extend(buffer.split_whitespace().map(str::to_string));
        }
    }

    if values.is_empty() {
        eprintln!(
            "{}: no input (pass a value or pipe one in, see --help)",
            "error".red().bold()
        );
        std::process::exit(2);
    }

    let mut failed = false;
    for raw in &values {
        match raw.parse::<NumericInput>() {
            Ok(input) => {
                tracing::debug!(input = %input, "formatting");
                let formatted = input.format(&style);
                if cli.json {
                    println!(
                        "{}",
                        serde_json::json!({ "input": raw, "output": formatted })
                    );
                } else {
                    println!("{formatted}");
                }
            }
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
