pub mod cmd {
    pub const RENDER: &str = "calcword render <value>";
    pub const RENDER_BOTH: &str = "calcword render <value> --both";
    pub const SPELL: &str = "calcword spell <value>";
    pub const ENCODE: &str = "calcword encode <word>";
    pub const EXAMPLES: &str = "calcword examples";
    pub const TUI: &str = "calcword tui";
    pub const TUI_LETTERS: &str = "calcword tui --mode letters";
    pub const CONFIG_SHOW: &str = "calcword config show";
    pub const CONFIG_INIT: &str = "calcword config init";
}
