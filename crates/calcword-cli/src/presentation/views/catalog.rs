use std::fmt;

use owo_colors::OwoColorize;

use crate::presentation::view_models::{CreateView, ExamplesViewModel, ViewMode, ViewOptions};

impl CreateView for ExamplesViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExamplesView {
            data: self,
            options,
        })
    }
}

struct ExamplesView<'a> {
    data: &'a ExamplesViewModel,
    options: ViewOptions,
}

impl<'a> ExamplesView<'a> {
    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for example in &self.data.examples {
            writeln!(f, "{} ({})", example.word, example.number)?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let word_width = self
            .data
            .examples
            .iter()
            .map(|e| e.word.chars().count())
            .max()
            .unwrap_or(0)
            .max("WORD".len());

        writeln!(f, "Examples ({} mode):", self.data.mode)?;
        writeln!(f, "  {:<width$}  NUMBER", "WORD", width = word_width)?;
        for example in &self.data.examples {
            writeln!(
                f,
                "  {:<width$}  {}",
                example.word,
                example.number,
                width = word_width
            )?;
        }

        if !self.data.resources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Resources:")?;
            for resource in &self.data.resources {
                if self.options.color {
                    writeln!(f, "  {}", resource.title)?;
                    writeln!(f, "    {}", resource.url.cyan())?;
                } else {
                    writeln!(f, "  {}", resource.title)?;
                    writeln!(f, "    {}", resource.url)?;
                }
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for ExamplesView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.options.mode {
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard | ViewMode::Verbose => self.render_table(f),
        }
    }
}
