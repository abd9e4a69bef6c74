use dioxus::prelude::*;

/// Theme families available in the application.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeFamily {
    /// Navy and brass; has dark and light variants.
    #[default]
    Harbor,
    /// Light-only, for the front desk's bright lobby screens.
    Linen,
}

/// All available theme families in display order.
pub const ALL_FAMILIES: &[ThemeFamily] = &[ThemeFamily::Harbor, ThemeFamily::Linen];

impl ThemeFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeFamily::Harbor => "harbor",
            ThemeFamily::Linen => "linen",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeFamily::Harbor => "Harbor",
            ThemeFamily::Linen => "Linen",
        }
    }

    /// Parse a family key string, falling back to Harbor.
    pub fn from_key(s: &str) -> Self {
        match s {
            "linen" => ThemeFamily::Linen,
            _ => ThemeFamily::Harbor,
        }
    }

    /// The family after this one in `ALL_FAMILIES`, wrapping around.
    pub fn next(&self) -> Self {
        let idx = ALL_FAMILIES.iter().position(|f| f == self).unwrap_or(0);
        ALL_FAMILIES[(idx + 1) % ALL_FAMILIES.len()]
    }

    pub fn has_dark(&self) -> bool {
        matches!(self, ThemeFamily::Harbor)
    }

    /// Inverse of [`resolve`](Self::resolve): the family and dark flag
    /// behind a `data-theme` value. Unknown values mean the default theme.
    pub fn from_resolved(theme: &str) -> (Self, bool) {
        match theme {
            "harbor-light" => (ThemeFamily::Harbor, false),
            "linen" => (ThemeFamily::Linen, false),
            _ => (ThemeFamily::Harbor, true),
        }
    }

    /// Resolve to the CSS `data-theme` attribute value.
    pub fn resolve(&self, is_dark: bool) -> &'static str {
        match (self, is_dark) {
            (ThemeFamily::Harbor, true) => "harbor",
            (ThemeFamily::Harbor, false) => "harbor-light",
            (ThemeFamily::Linen, _) => "linen",
        }
    }
}

/// Theme selection shared through context.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub family: Signal<ThemeFamily>,
    pub is_dark: Signal<bool>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            family: Signal::new(ThemeFamily::default()),
            is_dark: Signal::new(true),
        }
    }

    /// Flip dark/light and apply the result.
    pub fn toggle_dark(&mut self) {
        let next = !*self.is_dark.read();
        self.is_dark.set(next);
        self.apply();
    }

    /// Switch to the next family and apply it.
    pub fn cycle_family(&mut self) {
        let next = self.family.read().next();
        self.family.set(next);
        self.apply();
    }

    /// Adopt a theme already on the page (from the cookie) without
    /// writing it back.
    pub fn restore(&mut self, theme: &str) {
        let (family, is_dark) = ThemeFamily::from_resolved(theme);
        self.family.set(family);
        self.is_dark.set(is_dark);
    }

    pub fn apply(&self) {
        let theme = self.family.read().resolve(*self.is_dark.read());
        set_theme(theme);
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply the persisted theme cookie to the document root on startup and
/// sync the context's [`ThemeState`] with it.
#[component]
pub fn ThemeSeed() -> Element {
    let mut state = use_context::<ThemeState>();

    use_future(move || async move {
        let stored = document::eval(
            r#"
            var match = document.cookie.match(/(?:^|;\s*)theme=([^;]*)/);
            var theme = match ? match[1] : 'harbor';
            document.documentElement.setAttribute('data-theme', theme);
            return theme;
            "#,
        )
        .join::<String>()
        .await;

        if let Ok(theme) = stored {
            state.restore(&theme);
        }
    });

    rsx! {}
}

/// Set the active theme, persisting it to a cookie.
pub fn set_theme(theme: &str) {
    document::eval(&format!(
        r#"
        (function() {{
            document.cookie = 'theme={theme};path=/;max-age=2592000;SameSite=Lax';
            document.documentElement.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    ));
}
