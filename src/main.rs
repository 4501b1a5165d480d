use clap::{CommandFactory, FromArgMatches, Parser};
use equation::{
    Equation,
    interpreter::{
        evaluator::{core::CalculationContext, function::core::BUILTIN_FUNCTIONS},
        settings::{NumberFormat, ParseSettings, RenderOptions},
    },
    measure::Unit,
};
use tracing_subscriber::EnvFilter;

/// equation parses and calculates algebraic expressions such as `2x + sin(30)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, e.g. `-v x=5`. May be given more than once.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Unit the trigonometric functions read their argument in.
    #[arg(short, long, value_name = "UNIT", value_parser = parse_unit, default_value = "degree")]
    angle_unit: Unit,

    /// Treats `2x` as an error instead of `2 * x`.
    #[arg(long)]
    no_implicit: bool,

    /// Character separating the integral and fractional part of numbers.
    #[arg(short, long, default_value_t = '.')]
    decimal_separator: char,

    /// Prints the parsed expression instead of its value.
    #[arg(short, long)]
    render: bool,

    /// Spaces around operators when rendering.
    #[arg(short, long, default_value_t = 1)]
    spacing: usize,

    expression: String,
}

fn parse_binding(text: &str) -> Result<(String, f64), String> {
    let (name, value) = text.split_once('=')
                            .ok_or_else(|| format!("expected NAME=VALUE, got '{text}'"))?;
    let value = value.trim()
                     .parse::<f64>()
                     .map_err(|e| format!("invalid value for '{name}': {e}"))?;
    Ok((name.trim().to_string(), value))
}

fn parse_unit(text: &str) -> Result<Unit, String> {
    Unit::parse(text).ok_or_else(|| format!("unknown angle unit '{text}'"))
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr)
                             .with_env_filter(EnvFilter::from_default_env())
                             .init();

    let matches = Args::command().after_help(format!("Built-in functions: {}",
                                                     BUILTIN_FUNCTIONS.join(", ")))
                                 .get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let format = NumberFormat::new(args.decimal_separator);
    let settings = ParseSettings::default().with_implicit_multiplication(!args.no_implicit);

    let equation = Equation::parse_with(&args.expression, &format, &settings).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    if args.render {
        let options = RenderOptions::new(args.spacing).with_number_format(format);
        println!("{}", equation.render(&options));
        return;
    }

    let ctx = args.vars
                  .iter()
                  .fold(CalculationContext::new().with_angle_unit(args.angle_unit),
                        |ctx, (name, value)| ctx.with_variable(name, *value));

    match equation.calculate(&ctx) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
