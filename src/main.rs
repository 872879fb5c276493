use anyhow::{Context, Result};
use clap::Parser;
use rsgen::{CoefficientOrder, FieldConfig, GeneratorConfig, DEFAULT_MAX_ERRORS};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rsgen",
    about = "Print the Reed-Solomon generator polynomial over GF(2^8), one coefficient per line"
)]
struct Cli {
    /// Number of correctable symbol errors t (the generator has degree 2t).
    #[arg(default_value_t = DEFAULT_MAX_ERRORS as i64, allow_negative_numbers = true)]
    max_errors: i64,
    /// Coefficient order of the output.
    #[arg(long, value_enum, default_value_t = CoefficientOrder::LowFirst)]
    order: CoefficientOrder,
    /// Degree-8 generating polynomial (hex with 0x prefix, or decimal).
    #[arg(long, default_value = "0x11D", value_parser = parse_generating_poly)]
    poly: u16,
    /// Primitive element of the field.
    #[arg(long, default_value_t = 2)]
    alpha: u8,
    /// Log table construction and generator derivation to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GeneratorConfig {
        order: cli.order,
        field: FieldConfig {
            generating_poly: cli.poly,
            primitive_element: cli.alpha,
        },
        ..GeneratorConfig::new(cli.max_errors).context("invalid error-correction capability")?
    };

    let generator = config
        .compute()
        .context("failed to derive generator polynomial")?;

    print!("{}", generator.render(config.order));

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_generating_poly(value: &str) -> std::result::Result<u16, String> {
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid generating polynomial '{}': {}", value, e))
}
