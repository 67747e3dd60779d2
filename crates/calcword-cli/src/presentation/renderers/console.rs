use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewOptions,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: ViewOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: ViewOptions) -> Self {
        Self { format, options }
    }

    /// Everything the console would print, as one string
    pub fn to_output<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(result)?)),
            OutputFormat::Svg => match result.content.create_svg() {
                Some(svg) => Ok(svg),
                None => {
                    tracing::warn!("no SVG form for this command, printing text");
                    Ok(self.text(result))
                }
            },
            OutputFormat::Text => Ok(self.text(result)),
        }
    }

    fn text<T>(&self, result: &CommandResultViewModel<T>) -> String
    where
        T: Serialize + CreateView,
    {
        let color = self.options.color;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            if color {
                out.push_str(&format!("{} {}\n\n", badge.icon(), badge.label.bold()));
            } else {
                out.push_str(&format!("{} {}\n\n", badge.icon(), badge.label));
            }
        }

        out.push_str(&result.content.create_view(self.options).to_string());

        if !result.tips.is_empty() {
            if color {
                out.push_str(&format!("\n{}\n", "💡 Tips:".yellow().bold()));
            } else {
                out.push_str("\n💡 Tips:\n");
            }
            for tip in &result.tips {
                if color {
                    out.push_str(&format!("  • {}: {}\n", tip.description, tip.command.cyan()));
                } else {
                    out.push_str(&format!("  • {}: {}\n", tip.description, tip.command));
                }
            }
        }

        out
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let output = self.to_output(&result)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::{present_encode, present_spell};
    use crate::presentation::view_models::ViewMode;

    fn renderer(format: OutputFormat) -> ConsoleRenderer {
        ConsoleRenderer::new(format, ViewOptions::new(ViewMode::Standard, false))
    }

    #[test]
    fn test_text_with_tips() {
        let out = renderer(OutputFormat::Text)
            .to_output(&present_encode("hello", "07734".to_string()))
            .unwrap();
        assert_eq!(
            out,
            "hello -> 07734\n\n💡 Tips:\n  • See it on the display: calcword render 07734 --both\n"
        );
    }

    #[test]
    fn test_json_dumps_whole_result() {
        let out = renderer(OutputFormat::Json)
            .to_output(&present_spell("07734"))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["content"]["reading"], "hELLO");
        assert!(json.get("badge").is_none());
    }

    #[test]
    fn test_svg_falls_back_to_text() {
        let out = renderer(OutputFormat::Svg)
            .to_output(&present_spell("07734"))
            .unwrap();
        assert_eq!(out, "07734 -> hELLO\n");
    }
}
