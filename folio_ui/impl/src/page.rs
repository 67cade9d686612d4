use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use folio_models::{
    contact::ContactField,
    navigation::{NavElement, ACTIVE_CLASS},
};
use folio_ui_contracts::{
    contact::{Banner, ContactFormView},
    navigation::NavigationView,
    output::{OutputView, OUTPUT_ELEMENT_ID},
};

/// The state of a single element of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// The value of an input element.
    pub value: String,
    pub text: String,
    pub hidden: bool,
    pub classes: BTreeSet<String>,
}

/// An in-memory page, addressed by element id.
///
/// Clones share the same state.
#[derive(Debug, Clone)]
pub struct HeadlessPage(Arc<RwLock<BTreeMap<String, Element>>>);

impl HeadlessPage {
    /// Creates an empty page without any elements.
    pub fn empty() -> Self {
        Self(Default::default())
    }

    /// Creates the portfolio page with the contact form, its error slots, the
    /// navigation and the smoke test output.
    ///
    /// The banners are created when they are first shown.
    pub fn portfolio() -> Self {
        let ids = ContactField::ALL
            .into_iter()
            .flat_map(|field| [field.input_id(), field.error_id()])
            .chain([
                NavElement::Toggle.element_id(),
                NavElement::Menu.element_id(),
                OUTPUT_ELEMENT_ID,
            ]);

        Self(Arc::new(RwLock::new(
            ids.map(|id| (id.to_owned(), Element::default())).collect(),
        )))
    }

    pub fn element(&self, id: &str) -> Option<Element> {
        self.read().get(id).cloned()
    }

    pub fn field(&self, field: ContactField) -> String {
        self.read_field(field)
    }

    pub fn error(&self, field: ContactField) -> String {
        self.text(field.error_id())
    }

    /// Returns the text of `banner` if it is currently visible.
    pub fn visible_banner(&self, banner: Banner) -> Option<String> {
        self.element(banner.element_id())
            .filter(|element| !element.hidden)
            .map(|element| element.text)
    }

    fn text(&self, id: &str) -> String {
        self.read()
            .get(id)
            .map(|element| element.text.clone())
            .unwrap_or_default()
    }

    fn update(&self, id: &str, f: impl FnOnce(&mut Element)) {
        f(self.write().entry(id.to_owned()).or_default());
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Element>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Element>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HeadlessPage {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl ContactFormView for HeadlessPage {
    fn read_field(&self, field: ContactField) -> String {
        self.read()
            .get(field.input_id())
            .map(|element| element.value.clone())
            .unwrap_or_default()
    }

    fn write_field(&self, field: ContactField, value: &str) {
        self.update(field.input_id(), |element| element.value = value.into());
    }

    fn set_error(&self, field: ContactField, text: &str) {
        self.update(field.error_id(), |element| element.text = text.into());
    }

    fn clear_errors(&self) {
        let mut elements = self.write();
        for field in ContactField::ALL {
            if let Some(element) = elements.get_mut(field.error_id()) {
                element.text.clear();
            }
        }
    }

    fn show_banner(&self, banner: Banner, text: &str) {
        self.update(banner.element_id(), |element| {
            element.text = text.into();
            element.hidden = false;
        });
    }

    fn hide_banner(&self, banner: Banner) {
        if let Some(element) = self.write().get_mut(banner.element_id()) {
            element.hidden = true;
        }
    }
}

impl NavigationView for HeadlessPage {
    fn has_class(&self, element: NavElement, class: &str) -> bool {
        self.read()
            .get(element.element_id())
            .is_some_and(|element| element.classes.contains(class))
    }

    fn set_class(&self, element: NavElement, class: &str, enabled: bool) {
        self.update(element.element_id(), |element| {
            if enabled {
                element.classes.insert(class.into());
            } else {
                element.classes.remove(class);
            }
        });
    }
}

impl OutputView for HeadlessPage {
    fn set_output(&self, text: &str) {
        self.update(OUTPUT_ELEMENT_ID, |element| element.text = text.into());
    }

    fn output(&self) -> String {
        self.text(OUTPUT_ELEMENT_ID)
    }
}

/// Renders the visible state of the portfolio page.
impl fmt::Display for HeadlessPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "contact form:")?;
        for field in ContactField::ALL {
            write!(f, "  {:<8} {:?}", field.input_id(), self.field(field))?;
            let error = self.error(field);
            if !error.is_empty() {
                write!(f, "  ! {error}")?;
            }
            writeln!(f)?;
        }
        for banner in [Banner::Success, Banner::Failure] {
            if let Some(text) = self.visible_banner(banner) {
                writeln!(f, "  [{}] {text}", banner.element_id())?;
            }
        }

        let open = self.has_class(NavElement::Menu, ACTIVE_CLASS);
        writeln!(f, "navigation: {}", if open { "open" } else { "closed" })?;

        let output = self.output();
        if !output.is_empty() {
            writeln!(f, "output: {output}")?;
        }
        Ok(())
    }
}
