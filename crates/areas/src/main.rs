use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use shapes::{Config, Policy, Registry, Shape};

const HELP: &str = "\
areas: print the area of each shape

USAGE:
  areas [--strict] [--config FILE | --script FILE | SHAPE...]

FLAGS:
  -h, --help        Prints this message
  --strict          Reject negative or non-finite attributes

OPTIONS:
  --config FILE     TOML file with a [[shapes]] list
  --script FILE     File of `circle(5); square(10);` statements

ARGS:
  SHAPE...          Shapes in script form, e.g. 'circle(5)'
";

/// The two shapes computed when nothing else is given.
const REFERENCE: &str = "circle(5); square(10);";

enum Input {
    Config(PathBuf),
    Script(PathBuf),
    Args(Vec<String>),
}

struct Args {
    strict: bool,
    input: Input,
}

fn parse_args(mut pargs: pico_args::Arguments) -> Result<Option<Args>> {
    if pargs.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let strict = pargs.contains("--strict");
    let config: Option<PathBuf> = pargs.opt_value_from_str("--config")?;
    let script: Option<PathBuf> = pargs.opt_value_from_str("--script")?;
    let free = pargs
        .finish()
        .into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| anyhow::anyhow!("argument {:?} isn't valid UTF-8", arg))
        })
        .collect::<Result<Vec<_>>>()?;
    if let Some(flag) = free.iter().find(|arg| arg.starts_with('-')) {
        bail!("unknown flag `{}`", flag);
    }

    let input = match (config, script, free.is_empty()) {
        (Some(path), None, true) => Input::Config(path),
        (None, Some(path), true) => Input::Script(path),
        (None, None, _) => Input::Args(free),
        _ => bail!("--config, --script and SHAPE arguments are mutually exclusive"),
    };

    Ok(Some(Args { strict, input }))
}

fn compile(text: &str, registry: &Registry) -> Result<Vec<Shape>> {
    shapes::script::compile(text, registry).map_err(|errors| {
        let msg = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        anyhow::anyhow!(msg)
    })
}

fn load(input: &Input, registry: &Registry) -> Result<(Vec<Shape>, bool)> {
    match input {
        Input::Config(path) => {
            let config = Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            Ok((config.shapes, config.strict))
        }
        Input::Script(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read script {}", path.display()))?;
            log::info!("loaded {}", path.display());
            let shapes = compile(&text, registry)
                .with_context(|| format!("failed to compile {}", path.display()))?;
            Ok((shapes, false))
        }
        Input::Args(args) if args.is_empty() => Ok((compile(REFERENCE, registry)?, false)),
        Input::Args(args) => {
            let mut shapes = Vec::new();
            for arg in args {
                shapes.extend(compile(arg, registry).with_context(|| format!("in `{arg}`"))?);
            }
            Ok((shapes, false))
        }
    }
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let registry = Registry::with_builtins();
    let (shapes, strict) = load(&args.input, &registry)?;
    let policy = if args.strict || strict {
        Policy::Reject
    } else {
        Policy::PassThrough
    };

    for shape in shapes {
        let area = shape.checked_area(policy)?;
        log::debug!("{} -> {}", shape, area);
        writeln!(out, "{}\t{}", shape.kind(), area)?;
    }
    Ok(())
}

fn main() {
    let _ = env_logger::try_init();

    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", HELP);
            return;
        }
        Err(e) => {
            eprintln!("error: {:#}\n\n{}", e, HELP);
            std::process::exit(2);
        }
    };

    let stdout = io::stdout();
    if let Err(e) = run(args, &mut stdout.lock()) {
        eprintln!("error: {:?}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Option<Args>> {
        parse_args(pico_args::Arguments::from_vec(
            list.iter().map(Into::into).collect(),
        ))
    }

    #[test]
    fn no_input_uses_reference_shapes() {
        let args = args(&[]).unwrap().unwrap();
        assert!(!args.strict);
        let (shapes, _) = load(&args.input, &Registry::with_builtins()).unwrap();
        assert_eq!(shapes, [shapes::circle(5.0), shapes::square(10.0)]);
    }

    #[test]
    fn shapes_from_arguments() {
        let args = args(&["--strict", "square(2)", "circle(1); circle(2)"]).unwrap().unwrap();
        assert!(args.strict);
        let (shapes, _) = load(&args.input, &Registry::with_builtins()).unwrap();
        assert_eq!(shapes.len(), 3);
    }

    #[test]
    fn inputs_are_exclusive() {
        assert!(args(&["--config", "a.toml", "circle(1)"]).is_err());
        assert!(args(&["--config", "a.toml", "--script", "b.txt"]).is_err());
        assert!(args(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn bad_argument_names_the_argument() {
        let args = args(&["hexagon(1)"]).unwrap().unwrap();
        let err = load(&args.input, &Registry::with_builtins()).unwrap_err();
        assert_eq!(format!("{:#}", err), "in `hexagon(1)`: 0..10: no shape named `hexagon`");
    }

    #[test]
    fn reference_output() {
        let mut out = Vec::new();
        run(args(&[]).unwrap().unwrap(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "circle\t78.53981633974483\nsquare\t100\n"
        );
    }

    #[test]
    fn one_line_per_shape() {
        let mut out = Vec::new();
        run(args(&["square(1)", "circle(0); square(2.5)"]).unwrap().unwrap(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "square\t1\ncircle\t0\nsquare\t6.25\n"
        );
    }

    #[test]
    fn strict_rejects_negative() {
        let mut out = Vec::new();
        let args = args(&["--strict", "square(2)", "circle(-1)"]).unwrap().unwrap();
        let err = run(args, &mut out).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid circle: radius must be finite and non-negative, found -1"
        );
        // shapes before the bad one are still printed
        assert_eq!(String::from_utf8(out).unwrap(), "square\t4\n");
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = args(&["circle(5)", "--foo"]).err().unwrap();
        assert_eq!(err.to_string(), "unknown flag `--foo`");
        assert!(args(&["-x"]).is_err());
    }
}
