//! Finds GLSL shader sources under a directory and compiles each one to SPIR-V
//! with `glslc`, picking the shader stage from a marker in the file name.

pub mod compiler;
pub mod config;
pub mod discover;
pub mod error;
pub mod pipeline;
pub mod stage;

pub use compiler::{CompileJob, CompilerInvoker, Glslc};
pub use config::{CompilerConfig, ShaderBuildConfig};
pub use discover::{FileLister, WalkDirLister};
pub use error::{Result, ShaderBuildError};
pub use pipeline::{BuildSummary, FileOutcome, ShaderBuild, COMPILER_MISSING_MESSAGE};
pub use stage::{classify, ShaderStage, StageRule, STAGE_RULES};

/// Build a pipeline wired to the real filesystem and `glslc`.
pub fn shader_build(config: ShaderBuildConfig) -> ShaderBuild<WalkDirLister, Glslc> {
    let compiler = Glslc::new(config.compiler.clone());
    ShaderBuild::new(config, WalkDirLister, compiler)
}
