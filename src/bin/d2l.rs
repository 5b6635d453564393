//! frametex CLI - Render CSV tables with inline HTML as LaTeX longtables

#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use frametex::{
    diagnostics::{check_markup, format_diagnostics},
    markup_to_latex_with_diagnostics, to_longtable, ConversionWarning, D2LOptions, DataTable,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "d2l")]
#[command(version)]
#[command(about = "Render CSV tables with inline HTML as LaTeX longtables", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,

    /// Check mode - analyze the cell markup without converting
    #[arg(long)]
    check: bool,

    /// Use colored output (for diagnostics)
    #[arg(long, default_value_t = true)]
    color: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Args, Clone)]
struct ConvertArgs {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Table caption
    #[arg(short, long)]
    caption: Option<String>,

    /// Longtable column format, e.g. 'p{0.2\textwidth}|p{0.8\textwidth}'
    #[arg(long)]
    column_format: Option<String>,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Input is already serialized table markup, not CSV
    #[arg(long)]
    markup: bool,

    /// Print the longtable skeleton with raw cell markup and stop
    #[arg(long, conflicts_with = "markup")]
    skeleton: bool,

    /// Wrap the table in a complete LaTeX document
    #[arg(short = 'f', long)]
    full_document: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Convert a file (default action)
    Convert(ConvertArgs),

    /// Check table markup for potential conversion issues
    Check {
        /// Input file to check
        input: Option<String>,

        /// Input is already serialized table markup, not CSV
        #[arg(long)]
        markup: bool,

        /// CSV field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return match cmd {
            Commands::Convert(args) => run_convert(&args, cli.strict, cli.quiet, cli.color),
            Commands::Check {
                input,
                markup,
                delimiter,
                no_color,
            } => run_check(input.as_deref(), markup, delimiter, !no_color),
            Commands::Info => {
                print_info();
                Ok(())
            }
        };
    }

    if cli.check {
        return run_check(
            cli.convert.input_file.as_deref(),
            cli.convert.markup,
            cli.convert.delimiter,
            cli.color,
        );
    }

    run_convert(&cli.convert, cli.strict, cli.quiet, cli.color)
}

#[cfg(feature = "cli")]
fn run_convert(args: &ConvertArgs, strict: bool, quiet: bool, color: bool) -> io::Result<()> {
    let input = read_input(args.input_file.as_deref())?;

    let options = D2LOptions {
        caption: args.caption.clone(),
        column_format: args.column_format.clone(),
        full_document: args.full_document,
        ..Default::default()
    };

    let markup = if args.markup {
        input
    } else {
        let table = DataTable::from_csv_reader(input.as_bytes(), delimiter_byte(args.delimiter)?)?;
        to_longtable(
            &table,
            options.caption.as_deref(),
            options.column_format.as_deref(),
        )
    };

    if args.skeleton {
        return write_output(args.output.as_deref(), &markup, 0);
    }

    let converted = markup_to_latex_with_diagnostics(&markup, &options)?;

    // Print warnings to stderr (unless quiet mode)
    if !quiet && converted.has_warnings() {
        print_warnings_to_stderr(&converted.warnings, color);
    }

    // Check strict mode
    if strict && converted.has_warnings() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            converted.warnings.len()
        );
        std::process::exit(1);
    }

    write_output(
        args.output.as_deref(),
        &converted.content,
        converted.warnings.len(),
    )
}

#[cfg(feature = "cli")]
fn run_check(path: Option<&str>, markup: bool, delimiter: char, color: bool) -> io::Result<()> {
    let input = read_input(path)?;
    let markup = if markup {
        input
    } else {
        let table = DataTable::from_csv_reader(input.as_bytes(), delimiter_byte(delimiter)?)?;
        to_longtable(&table, None, None)
    };

    let result = check_markup(&markup);
    println!("{}", format_diagnostics(&result, color));

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str, warnings: usize) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            writeln!(file, "{}", content)?;
            if warnings == 0 {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!("⚠ Output written to: {} ({} warning(s))", path, warnings);
            }
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn delimiter_byte(delimiter: char) -> io::Result<u8> {
    u8::try_from(delimiter).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("delimiter '{}' is not a single-byte character", delimiter),
        )
    })
}

/// Print warnings to stderr with optional color coding
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[ConversionWarning], use_color: bool) {
    let (color, reset) = if use_color {
        ("\x1b[33m", "\x1b[0m")
    } else {
        ("", "")
    };

    eprintln!();
    eprintln!("{}Conversion Warnings ({}):{}", color, warnings.len(), reset);
    eprintln!();
    for warning in warnings {
        eprintln!("  {}", warning);
    }
    eprintln!();
}

#[cfg(feature = "cli")]
fn print_info() {
    println!("frametex - CSV/HTML table to LaTeX longtable converter");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Features:");
    println!("  ✓ CSV → LaTeX longtable with booktabs rules");
    println!("  ✓ Inline <b>, <i>, <u>, <p>, <br> in cells");
    println!("  ✓ Nested HTML tables → tabular");
    println!("  ✓ Markup diagnostics");
    println!();
    println!("Required packages:");
    for package in frametex::constants::REQUIRED_PACKAGES {
        println!("  - {}", package);
    }
    println!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install frametex --features cli");
    eprintln!("  d2l [OPTIONS] [INPUT_FILE]");
}
