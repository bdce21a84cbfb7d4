use build_utils::config::DEFAULT_ENTRY_POINT;

pub const USAGE: &str = "\
Usage: shader-build [OPTIONS]

Compiles every *_vert.glsl, *_frag.glsl and *_comp.glsl file found next to this
executable (recursively) into a sibling .spv file using glslc.

Options:
  -e, --entry-point <NAME>  Shader entry point symbol [default: main]
  -v, --verbose             Log each compiler invocation
      --no-wait             Exit without waiting for Enter
  -V, --version             Print version and exit
  -h, --help                Print this help and exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub entry_point: String,
    pub verbose: bool,
    /// Block on Enter before exiting
    pub wait: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            verbose: false,
            wait: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cli {
    Run(Options),
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("unexpected argument `{0}`")]
    Unexpected(String),
    #[error("`{0}` needs a value")]
    MissingValue(String),
}

/// Parse command-line arguments, program name excluded.
///
/// `--version` and `--help` win as soon as they are seen, even if later
/// arguments would be invalid.
pub fn parse<I, S>(args: I) -> Result<Cli, ArgsError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-V" | "--version" => return Ok(Cli::Version),
            "-h" | "--help" => return Ok(Cli::Help),
            "-v" | "--verbose" => options.verbose = true,
            "--no-wait" => options.wait = false,
            "-e" | "--entry-point" => {
                options.entry_point = match args.next() {
                    Some(value) if !value.is_empty() => value,
                    _ => return Err(ArgsError::MissingValue(arg)),
                };
            }
            _ => match arg.strip_prefix("--entry-point=") {
                Some("") => return Err(ArgsError::MissingValue("--entry-point".to_string())),
                Some(value) => options.entry_point = value.to_string(),
                None => return Err(ArgsError::Unexpected(arg)),
            },
        }
    }

    Ok(Cli::Run(options))
}
