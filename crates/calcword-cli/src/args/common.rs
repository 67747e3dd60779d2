use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct ViewModeArgs {
    #[arg(
        long,
        help = "One line of text instead of segment art",
        group = "view_mode"
    )]
    pub compact: bool,

    #[arg(long, help = "Also list the lit segments of every cell", group = "view_mode")]
    pub verbose: bool,
}

impl ViewModeArgs {
    pub fn resolve(&self) -> crate::presentation::ViewMode {
        use crate::presentation::ViewMode;

        if self.compact {
            ViewMode::Compact
        } else if self.verbose {
            ViewMode::Verbose
        } else {
            ViewMode::default()
        }
    }
}
