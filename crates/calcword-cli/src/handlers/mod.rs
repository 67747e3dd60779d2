mod context;

pub mod config;
pub mod encode;
pub mod examples;
pub mod render;
pub mod spell;
pub mod tui;

pub use context::HandlerContext;
