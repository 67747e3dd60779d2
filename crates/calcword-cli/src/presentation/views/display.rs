use std::fmt;

use calcword_types::Orientation;
use owo_colors::OwoColorize;

use crate::presentation::formatters::{glyph, svg};
use crate::presentation::view_models::{
    CreateView, DisplayPanelViewModel, DisplayViewModel, ViewMode, ViewOptions,
};

impl CreateView for DisplayViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(DisplayView {
            data: self,
            options,
        })
    }

    fn create_svg(&self) -> Option<String> {
        Some(svg::document(&self.panels))
    }
}

pub(crate) fn panel_title(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Normal => "Normal",
        Orientation::UpsideDown => "Upside down",
    }
}

struct DisplayView<'a> {
    data: &'a DisplayViewModel,
    options: ViewOptions,
}

impl<'a> DisplayView<'a> {
    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for panel in &self.data.panels {
            writeln!(f, "{:<12} [{}]", panel_title(panel.orientation), panel.text)?;
        }
        Ok(())
    }

    fn render_panel(&self, f: &mut fmt::Formatter, panel: &DisplayPanelViewModel) -> fmt::Result {
        let title = panel_title(panel.orientation);
        if self.options.color {
            writeln!(f, "{}", title.cyan().bold())?;
        } else {
            writeln!(f, "{}", title)?;
        }
        for line in glyph::panel_lines(panel, self.options.color) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }

    fn render_segments(
        &self,
        f: &mut fmt::Formatter,
        panel: &DisplayPanelViewModel,
    ) -> fmt::Result {
        for (index, cell) in panel.cells.iter().enumerate() {
            if cell.segments.is_blank() && !cell.decimal_dot {
                continue;
            }
            let lit: Vec<String> = cell
                .segments
                .segments()
                .filter(|(_, on)| *on)
                .map(|(segment, _)| segment.to_string())
                .collect();
            write!(f, "  cell {:>2} '{}': {}", index, cell.digit, lit.join(", "))?;
            if cell.decimal_dot {
                write!(f, " + dot")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn render_reading(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let shows_upside_down = self
            .data
            .panels
            .iter()
            .any(|panel| panel.orientation.is_upside_down());
        if shows_upside_down && !self.data.reading.is_empty() {
            writeln!(f)?;
            writeln!(f, "Reads: {}", self.data.reading)?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for DisplayView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.mode == ViewMode::Compact {
            return self.render_compact(f);
        }

        for (i, panel) in self.data.panels.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.render_panel(f, panel)?;
            if self.options.mode == ViewMode::Verbose {
                self.render_segments(f, panel)?;
            }
        }

        if self.options.mode == ViewMode::Verbose {
            writeln!(f)?;
            writeln!(
                f,
                "Value: {:?}  Typed: {:?}  Mode: {}  Width: {}",
                self.data.value, self.data.typed, self.data.mode, self.data.width
            )?;
        }

        self.render_reading(f)
    }
}
