use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{CreateView, GuideViewModel, ViewOptions};

impl CreateView for GuideViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuideView {
            data: self,
            color: options.color,
        })
    }
}

struct GuideView<'a> {
    data: &'a GuideViewModel,
    color: bool,
}

impl<'a> fmt::Display for GuideView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "calcword {} - seven-segment calculator words\n",
            self.data.version
        )?;
        writeln!(f, "Input mode: {}", self.data.mode)?;
        if !self.data.config_exists {
            writeln!(f, "No config file yet (defaults in use)")?;
        }
        writeln!(f)?;
        writeln!(f, "Quick commands:")?;

        let width = self
            .data
            .commands
            .iter()
            .map(|tip| tip.command.chars().count())
            .max()
            .unwrap_or(0);

        for tip in &self.data.commands {
            let padded = format!("{:<width$}", tip.command, width = width);
            if self.color {
                writeln!(f, "  {}  # {}", padded.cyan(), tip.description)?;
            } else {
                writeln!(f, "  {}  # {}", padded, tip.description)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  calcword --help")
    }
}
