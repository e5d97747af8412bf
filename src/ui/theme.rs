use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles keyed by what the text says about a snippet
#[derive(Debug, Clone)]
pub struct Theme {
    /// A write landed: stored or deleted
    pub changed: Style,
    /// Nothing under that name, or the command failed
    pub missing: Style,
    /// Search summary line
    pub summary: Style,
    /// Icon in front of the search summary
    pub accent: Style,
    /// Field labels such as "Retrieved snippet:"
    pub label: Style,
    /// The "(hidden)" marker
    pub hidden: Style,
    /// Empty results and secondary detail
    pub quiet: Style,
}

impl Theme {
    /// Colors only when stdout is a terminal
    pub fn detect() -> Self {
        if !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            changed: Style::new().green().bold(),
            missing: Style::new().red().bold(),
            summary: Style::new().cyan().bold(),
            accent: Style::new().blue(),
            label: Style::new().dimmed(),
            hidden: Style::new().yellow().italic(),
            quiet: Style::new().bright_black(),
        }
    }

    pub fn plain() -> Self {
        Self {
            changed: Style::new(),
            missing: Style::new(),
            summary: Style::new(),
            accent: Style::new(),
            label: Style::new(),
            hidden: Style::new(),
            quiet: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
