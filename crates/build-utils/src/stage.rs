use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        }
    }

    /// Stage selection flag understood by glslc
    pub fn flag(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "-fshader-stage=vertex",
            ShaderStage::Fragment => "-fshader-stage=fragment",
            ShaderStage::Compute => "-fshader-stage=compute",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps a filename marker to the stage it selects.
#[derive(Debug, Clone, Copy)]
pub struct StageRule {
    pub marker: &'static str,
    pub stage: ShaderStage,
}

/// Tested in order; the first marker found in a file name wins.
pub const STAGE_RULES: &[StageRule] = &[
    StageRule {
        marker: "_vert.",
        stage: ShaderStage::Vertex,
    },
    StageRule {
        marker: "_frag.",
        stage: ShaderStage::Fragment,
    },
    StageRule {
        marker: "_comp.",
        stage: ShaderStage::Compute,
    },
];

/// Infer the stage of a shader from its file name.
pub fn classify(file_name: &str) -> Option<ShaderStage> {
    STAGE_RULES
        .iter()
        .find(|rule| file_name.contains(rule.marker))
        .map(|rule| rule.stage)
}
