use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use build_utils::{
    BuildSummary, CompilerInvoker, FileLister, ShaderBuild, ShaderBuildConfig, ShaderBuildError,
};

use crate::args::{Cli, Options, USAGE};

mod args;

const SEPARATOR_WIDTH: usize = 50;
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let options = match args::parse(std::env::args().skip(1)) {
        Ok(Cli::Run(options)) => options,
        Ok(Cli::Version) => {
            println!("shader-build {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Ok(Cli::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}\n\n{}", e, USAGE);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    let level = if options.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_module("build_utils", level)
        .filter_module("shader_build", level)
        .init();

    match run(&options) {
        Ok(status) => ExitCode::from(status),
        Err(e) => {
            log::error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: &Options) -> anyhow::Result<u8> {
    let root = scan_root()?;
    log::debug!("Scanning {}", root.display());

    let config = ShaderBuildConfig::new(root).entry_point(options.entry_point.as_str());
    let build = build_utils::shader_build(config);

    let result = report(&mut io::stdout().lock(), &build);
    let status = exit_status(&result);
    if let Err(ShaderBuildError::Io(e)) = result {
        return Err(e).context("failed to write build output");
    }

    if options.wait {
        wait_for_enter()?;
    }

    Ok(status)
}

/// Run the batch between the banner and its closing separator.
fn report<L, C>(
    out: &mut impl Write,
    build: &ShaderBuild<L, C>,
) -> build_utils::Result<BuildSummary>
where
    L: FileLister,
    C: CompilerInvoker,
{
    let separator = "=".repeat(SEPARATOR_WIDTH);
    writeln!(out, "GLSL Compile")?;
    writeln!(out, "{}", separator)?;
    let result = build.run(out);
    writeln!(out, "{}", separator)?;
    result
}

/// 0 when nothing failed; skipped files don't count.
fn exit_status(result: &build_utils::Result<BuildSummary>) -> u8 {
    match result {
        Ok(summary) if !summary.has_failures() => 0,
        _ => 1,
    }
}

/// Directory holding the running executable.
fn scan_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("failed to locate the running executable")?;
    executable_dir(&exe)
}

fn executable_dir(exe: &Path) -> anyhow::Result<PathBuf> {
    // not canonicalize: that yields `\\?\` verbatim paths on Windows
    let exe = std::path::absolute(exe)
        .with_context(|| format!("failed to resolve {}", exe.display()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .with_context(|| format!("{} has no parent directory", exe.display()))
}

fn wait_for_enter() -> anyhow::Result<()> {
    print!("Press Enter to quit...");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(())
}
