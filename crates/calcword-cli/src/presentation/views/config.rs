use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, ViewOptions,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.data.exists {
            ""
        } else {
            " (not found, using defaults)"
        };
        writeln!(f, "Config file: {}{}", self.data.path, status)?;
        writeln!(f)?;
        writeln!(f, "[display]")?;
        writeln!(f, "width = {}", self.data.width)?;
        writeln!(f, "mode = \"{}\"", self.data.mode)?;

        if !self.data.examples.is_empty() {
            writeln!(f)?;
            writeln!(f, "Extra examples:")?;
            for example in &self.data.examples {
                writeln!(f, "  {}", example.label())?;
            }
        }
        Ok(())
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.data.overwritten {
            "Overwrote"
        } else {
            "Wrote"
        };
        writeln!(f, "{} default config to {}", verb, self.data.path)
    }
}
