use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::CompilerConfig;
use crate::error::{Result, ShaderBuildError};
use crate::stage::ShaderStage;

/// One source file ready to be handed to the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stage: ShaderStage,
}

impl CompileJob {
    /// Arguments for a single compiler invocation, program name excluded.
    pub fn args(&self, config: &CompilerConfig) -> Vec<OsString> {
        vec![
            OsString::from(self.stage.flag()),
            self.input.clone().into_os_string(),
            OsString::from("-o"),
            self.output.clone().into_os_string(),
            OsString::from(format!("-fentry-point={}", config.entry_point)),
            OsString::from(format!("--target-env={}", config.target_env)),
        ]
    }
}

/// Runs the external shader compiler.
pub trait CompilerInvoker {
    /// Check that the compiler can be started at all.
    fn probe(&self) -> Result<()>;

    /// Compile one file, blocking until the compiler exits.
    fn compile(&self, job: &CompileJob) -> Result<()>;
}

/// `glslc` from the Vulkan SDK, looked up on `PATH`.
pub struct Glslc {
    config: CompilerConfig,
}

impl Glslc {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }
}

impl CompilerInvoker for Glslc {
    fn probe(&self) -> Result<()> {
        let status = Command::new(&self.config.program)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| ShaderBuildError::CompilerUnavailable {
                program: self.config.program.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(ShaderBuildError::CompilerUnavailable {
                program: self.config.program.clone(),
                reason: format!("`--version` exited with {}", status),
            });
        }

        log::debug!("{} is available", self.config.program);
        Ok(())
    }

    fn compile(&self, job: &CompileJob) -> Result<()> {
        let args = job.args(&self.config);
        log::debug!("Running {} {:?}", self.config.program, args);

        let status = Command::new(&self.config.program)
            .args(&args)
            .status()
            .map_err(|source| ShaderBuildError::Spawn {
                program: self.config.program.clone(),
                path: job.input.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ShaderBuildError::CompileFailed {
                path: job.input.clone(),
                code: status.code(),
            })
        }
    }
}
