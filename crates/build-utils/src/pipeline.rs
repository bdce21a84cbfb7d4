use std::io::Write;
use std::path::Path;

use crate::compiler::{CompileJob, CompilerInvoker};
use crate::config::ShaderBuildConfig;
use crate::discover::FileLister;
use crate::error::{ExitCode, Result, ShaderBuildError};
use crate::stage::classify;

pub const COMPILER_MISSING_MESSAGE: &str =
    "ERROR: glslc not found. Make sure the Vulkan SDK is installed and its bin directory is on PATH.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Compiled,
    /// No stage marker in the file name
    Skipped,
    /// `code` is `None` when the compiler was killed or could not be started
    Failed { code: Option<i32> },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub compiled: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BuildSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Compiled => self.compiled += 1,
            FileOutcome::Skipped => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Probe, discover, then classify and compile each file in turn.
pub struct ShaderBuild<L, C> {
    config: ShaderBuildConfig,
    lister: L,
    compiler: C,
}

impl<L: FileLister, C: CompilerInvoker> ShaderBuild<L, C> {
    pub fn new(config: ShaderBuildConfig, lister: L, compiler: C) -> Self {
        Self {
            config,
            lister,
            compiler,
        }
    }

    pub fn config(&self) -> &ShaderBuildConfig {
        &self.config
    }

    /// Run the whole batch, writing progress lines to `out`.
    ///
    /// Only an unavailable compiler aborts the run. A file that fails to compile is
    /// reported and counted, and the batch moves on to the next one.
    pub fn run(&self, out: &mut impl Write) -> Result<BuildSummary> {
        if let Err(e) = self.compiler.probe() {
            log::debug!("Compiler probe failed: {}", e);
            writeln!(out, "{}", COMPILER_MISSING_MESSAGE)?;
            return Err(e);
        }

        let files = self
            .lister
            .list(&self.config.root_dir, &self.config.source_extension);

        let mut summary = BuildSummary::default();
        for path in &files {
            let outcome = self.process_file(path, out)?;
            summary.record(outcome);
        }

        log::debug!(
            "{} compiled, {} skipped, {} failed",
            summary.compiled,
            summary.skipped,
            summary.failed
        );
        Ok(summary)
    }

    fn process_file(&self, path: &Path, out: &mut impl Write) -> Result<FileOutcome> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let Some(stage) = classify(&file_name) else {
            writeln!(
                out,
                "Warning: cannot determine shader stage for {}, skipping",
                file_name
            )?;
            return Ok(FileOutcome::Skipped);
        };

        let job = CompileJob {
            input: path.to_path_buf(),
            output: self.config.output_path(path),
            stage,
        };
        writeln!(
            out,
            "Compile: {} -> {}",
            job.input.display(),
            job.output.display()
        )?;

        match self.compiler.compile(&job) {
            Ok(()) => Ok(FileOutcome::Compiled),
            Err(ShaderBuildError::CompileFailed { code, .. }) => {
                writeln!(out, "ERROR (code: {}): {}", ExitCode(code), file_name)?;
                Ok(FileOutcome::Failed { code })
            }
            Err(e) => {
                writeln!(out, "ERROR ({}): {}", e, file_name)?;
                Ok(FileOutcome::Failed { code: None })
            }
        }
    }
}
