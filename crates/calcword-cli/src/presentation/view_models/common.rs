use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Compact,
    #[default]
    Standard,
    Verbose,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Svg,
}

impl From<crate::args::OutputFormat> for OutputFormat {
    fn from(format: crate::args::OutputFormat) -> Self {
        match format {
            crate::args::OutputFormat::Plain => Self::Text,
            crate::args::OutputFormat::Json => Self::Json,
            crate::args::OutputFormat::Svg => Self::Svg,
        }
    }
}

/// How a text view should be drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub mode: ViewMode,
    /// ANSI colors allowed (stdout is a terminal)
    pub color: bool,
}

impl ViewOptions {
    pub fn new(mode: ViewMode, color: bool) -> Self {
        Self { mode, color }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
}
