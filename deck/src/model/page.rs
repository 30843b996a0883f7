//! Page-level state: the active language and theme.

use std::fmt;
use std::sync::Arc;

use super::{ApplyTheme, Language, Theme};
use crate::catalog::{Catalog, LocalizedContent};

/// Sole owner of the page's language and theme.
///
/// Components receive the current values plus a setter; nothing else
/// mutates them. The theme applier is injected so the root-scope write can
/// be observed in tests.
#[derive(Clone)]
pub struct PageController {
    language: Language,
    theme: Theme,
    applier: Arc<dyn ApplyTheme>,
}

impl PageController {
    /// Mount the page: store the initial state and apply the initial theme once.
    pub fn new(language: Language, theme: Theme, applier: impl ApplyTheme) -> Self {
        applier.apply(theme);
        Self {
            language,
            theme,
            applier: Arc::new(applier),
        }
    }

    /// Active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to the other language. Never touches the root scope.
    pub fn toggle_language(&mut self) {
        self.set_language(self.language.toggled());
    }

    /// Set the language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Switch to the other theme and apply it.
    pub fn toggle_theme(&mut self) {
        self.set_theme(self.theme.toggled());
    }

    /// Set the theme, applying it only when it actually changes.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme == theme {
            return;
        }
        self.theme = theme;
        self.applier.apply(theme);
    }

    /// Copy for the active language, looked up fresh on every call.
    pub fn content<'c>(&self, catalog: &'c Catalog) -> &'c LocalizedContent {
        catalog.get(self.language)
    }
}

impl fmt::Debug for PageController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageController")
            .field("language", &self.language)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;
    use crate::model::{NoopTheme, THEME_ATTRIBUTE};

    /// Stand-in for the document root: a bag of attributes.
    #[derive(Default)]
    struct RootScope {
        attributes: Mutex<BTreeMap<String, String>>,
        writes: Mutex<Vec<Theme>>,
    }

    fn applier(root: &Arc<RootScope>) -> impl ApplyTheme {
        let root = Arc::clone(root);
        move |theme: Theme| {
            root.attributes
                .lock()
                .unwrap()
                .insert(THEME_ATTRIBUTE.to_string(), theme.as_str().to_string());
            root.writes.lock().unwrap().push(theme);
        }
    }

    fn root_with_lang_attribute() -> Arc<RootScope> {
        let root = Arc::new(RootScope::default());
        root.attributes
            .lock()
            .unwrap()
            .insert("lang".into(), "en".into());
        root
    }

    #[test]
    fn mount_applies_initial_theme_once() {
        let root = root_with_lang_attribute();
        let page = PageController::new(Language::En, Theme::Dark, applier(&root));

        assert_eq!(page.theme(), Theme::Dark);
        assert_eq!(*root.writes.lock().unwrap(), vec![Theme::Dark]);
    }

    #[test]
    fn theme_toggle_propagates_to_root_attribute_only() {
        let root = root_with_lang_attribute();
        let mut page = PageController::new(Language::En, Theme::Dark, applier(&root));

        page.toggle_theme();

        let attributes = root.attributes.lock().unwrap().clone();
        let expected = BTreeMap::from([
            ("class".to_string(), "light".to_string()),
            ("lang".to_string(), "en".to_string()),
        ]);
        assert_eq!(attributes, expected);
        assert_eq!(*root.writes.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn setting_same_theme_is_not_reapplied() {
        let root = root_with_lang_attribute();
        let mut page = PageController::new(Language::En, Theme::Light, applier(&root));

        page.set_theme(Theme::Light);
        page.set_theme(Theme::Light);

        assert_eq!(root.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn language_changes_do_not_touch_the_root_scope() {
        let root = root_with_lang_attribute();
        let mut page = PageController::new(Language::En, Theme::Dark, applier(&root));

        page.toggle_language();
        assert_eq!(page.language(), Language::De);
        page.toggle_language();
        assert_eq!(page.language(), Language::En);

        assert_eq!(root.writes.lock().unwrap().len(), 1);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut page = PageController::new(Language::De, Theme::Light, NoopTheme);
        page.toggle_theme();
        page.toggle_theme();
        page.toggle_language();
        page.toggle_language();
        assert_eq!((page.language(), page.theme()), (Language::De, Theme::Light));
    }

    #[test]
    fn content_follows_the_active_language() {
        let catalog = Catalog::embedded().expect("embedded catalog");
        let mut page = PageController::new(Language::En, Theme::Dark, NoopTheme);

        assert_eq!(page.content(&catalog).hero.headline, "Application 2024");
        page.toggle_language();
        assert_eq!(page.content(&catalog).hero.headline, "Bewerbung 2024");
    }
}
