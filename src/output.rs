//! # Output Styling
//!
//! Decides whether user-facing output may use color and emoji. The decision is
//! made once from `--color` and then carried in [`OutputConfig`]: it picks the
//! `dialoguer` theme for terminal prompts, the emoji in front of status lines,
//! and whether headings are bold.
//!
//! With `--color=auto` the usual conventions apply, in this order:
//! `NO_COLOR` (any value) turns color off, `CLICOLOR=0` turns it off,
//! `CLICOLOR_FORCE` (non-empty, not `0`) turns it on, `TERM=dumb` turns it
//! off. Otherwise color follows whether stdout supports it.

use std::env;
use std::fmt;
use std::str::FromStr;

use console::style;

/// Value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => write!(f, "auto"),
            ColorChoice::Always => write!(f, "always"),
            ColorChoice::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(format!(
                "unknown color mode '{}' (expected auto, always or never)",
                other
            )),
        }
    }
}

/// Resolved styling for one run.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Resolve a color choice against the process environment and stdout.
    pub fn resolve(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => auto_color(
                |key| env::var_os(key).map(|v| v.to_string_lossy().into_owned()),
                console::Term::stdout().features().colors_supported(),
            ),
        };

        Self { use_color }
    }
}

/// The `auto` decision, given an environment lookup and what the terminal
/// reports.
fn auto_color<F>(var: F, terminal_supports_color: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let equals = |key: &str, expected: &str| var(key).is_some_and(|v| v == expected);

    if var("NO_COLOR").is_some() || equals("CLICOLOR", "0") {
        false
    } else if var("CLICOLOR_FORCE").is_some_and(|v| !v.is_empty() && v != "0") {
        true
    } else if equals("TERM", "dumb") {
        false
    } else {
        terminal_supports_color
    }
}

/// Returns the emoji when colors are enabled, the plain alternative otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// Render a section heading, bold when colors are enabled.
///
/// Styling is forced either way so the result does not depend on what
/// `console` thinks of the current stdout.
pub fn heading(config: &OutputConfig, text: &str) -> String {
    style(text)
        .bold()
        .force_styling(config.use_color)
        .to_string()
}
