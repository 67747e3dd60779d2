use crate::args::{OutputFormat, ViewModeArgs};
use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewOptions};
use crate::presentation::{ConsoleRenderer, Renderer, ViewMode};
use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub view_mode: ViewMode,
    pub color: bool,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, view_mode: &ViewModeArgs) -> Self {
        let color = matches!(format, OutputFormat::Plain)
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        Self {
            format,
            view_mode: view_mode.resolve(),
            color,
        }
    }

    /// Render a view model using the configured format and view mode
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(
            self.format.into(),
            ViewOptions::new(self.view_mode, self.color),
        );
        renderer.render(view_model)
    }
}
