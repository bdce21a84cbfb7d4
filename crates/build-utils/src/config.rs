use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_EXTENSION: &str = "glsl";
pub const DEFAULT_OUTPUT_EXTENSION: &str = "spv";
pub const DEFAULT_COMPILER: &str = "glslc";
pub const DEFAULT_ENTRY_POINT: &str = "main";
pub const DEFAULT_TARGET_ENV: &str = "vulkan1.4";

/// Settings handed to the external shader compiler for every file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Program name, resolved through `PATH`
    pub program: String,
    /// Entry point symbol passed as `-fentry-point=<name>`
    pub entry_point: String,
    /// Target environment passed as `--target-env=<env>`
    pub target_env: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_COMPILER.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            target_env: DEFAULT_TARGET_ENV.to_string(),
        }
    }
}

pub struct ShaderBuildConfig {
    /// Root directory to scan recursively
    pub root_dir: PathBuf,
    /// Extension of shader sources, without the dot (e.g. "glsl")
    pub source_extension: String,
    /// Extension of compiled outputs, without the dot (e.g. "spv")
    pub output_extension: String,
    pub compiler: CompilerConfig,
}

impl Default for ShaderBuildConfig {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from("."),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            output_extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            compiler: CompilerConfig::default(),
        }
    }
}

impl ShaderBuildConfig {
    pub fn new<P: Into<PathBuf>>(root_dir: P) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Default::default()
        }
    }

    pub fn entry_point(mut self, name: impl Into<String>) -> Self {
        self.compiler.entry_point = name.into();
        self
    }

    /// Sibling path of `input` with the source extension swapped for the output one.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        input.with_extension(&self.output_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShaderBuildConfig::default();
        assert_eq!(config.source_extension, "glsl");
        assert_eq!(config.output_extension, "spv");
        assert_eq!(config.compiler.program, "glslc");
        assert_eq!(config.compiler.entry_point, "main");
        assert_eq!(config.compiler.target_env, "vulkan1.4");
    }

    #[test]
    fn test_entry_point_override() {
        let config = ShaderBuildConfig::new("shaders").entry_point("vs_main");
        assert_eq!(config.root_dir, PathBuf::from("shaders"));
        assert_eq!(config.compiler.entry_point, "vs_main");
        assert_eq!(config.compiler.target_env, DEFAULT_TARGET_ENV);
    }

    #[test]
    fn test_output_path_same_directory() {
        let config = ShaderBuildConfig::default();
        let output = config.output_path(Path::new("shaders/basic/foo_vert.glsl"));
        assert_eq!(output, PathBuf::from("shaders/basic/foo_vert.spv"));
    }

    #[test]
    fn test_output_path_keeps_inner_dots() {
        let config = ShaderBuildConfig::default();
        let output = config.output_path(Path::new("a.b_frag.glsl"));
        assert_eq!(output, PathBuf::from("a.b_frag.spv"));
    }
}
