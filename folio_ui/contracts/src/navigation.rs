use folio_models::navigation::NavElement;

pub trait NavigationView: Clone + Send + Sync + 'static {
    fn has_class(&self, element: NavElement, class: &str) -> bool;

    /// Adds `class` to `element` if `enabled`, otherwise removes it.
    fn set_class(&self, element: NavElement, class: &str, enabled: bool);
}
