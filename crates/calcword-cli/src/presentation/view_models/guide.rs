use calcword_types::InputMode;
use serde::Serialize;

use super::result::Tip;

/// Shown when `calcword` runs without a command
#[derive(Debug, Clone, Serialize)]
pub struct GuideViewModel {
    pub version: String,
    pub mode: InputMode,
    pub config_exists: bool,
    pub commands: Vec<Tip>,
}
