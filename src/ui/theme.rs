//! Theme state shared by every page.

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// In-memory theme store. Changes last for the session only.
#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    mode: ThemeMode,
    dirty: bool,
}

impl ThemeStore {
    pub fn new(dark: bool) -> Self {
        Self {
            mode: if dark { ThemeMode::Dark } else { ThemeMode::Light },
            dirty: true,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn set(&mut self, mode: ThemeMode) {
        if self.mode != mode {
            self.mode = mode;
            self.dirty = true;
            tracing::debug!("Theme set to {}", mode.name());
        }
    }

    pub fn toggle(&mut self) {
        let next = match self.mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set(next);
    }

    /// Push the theme to egui if the mode changed since the last call.
    pub fn apply(&mut self, ctx: &egui::Context) {
        if !self.dirty {
            return;
        }
        let theme = match self.mode {
            ThemeMode::Light => egui::Theme::Light,
            ThemeMode::Dark => egui::Theme::Dark,
        };
        ctx.set_theme(theme);
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut store = ThemeStore::new(false);
        assert_eq!(store.mode(), ThemeMode::Light);
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Dark);
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_apply_clears_dirty() {
        let ctx = egui::Context::default();
        let mut store = ThemeStore::new(false);
        store.apply(&ctx);
        assert!(!store.dirty);
        assert!(!ctx.style().visuals.dark_mode);

        store.set(ThemeMode::Light);
        assert!(!store.dirty);
        store.set(ThemeMode::Dark);
        assert!(store.dirty);
        store.apply(&ctx);
        assert!(ctx.style().visuals.dark_mode);
    }
}
