use folio_core_navigation_contracts::NavigationFeatureService;
use folio_di::Build;
use folio_models::navigation::{ClickTarget, NavElement, ACTIVE_CLASS};
use folio_ui_contracts::navigation::NavigationView;
use folio_utils::trace_instrument;
use tracing::debug;

const NAV_ELEMENTS: [NavElement; 2] = [NavElement::Toggle, NavElement::Menu];

#[derive(Debug, Clone, Build)]
pub struct NavigationFeatureServiceImpl<View> {
    view: View,
}

impl<View: NavigationView> NavigationFeatureService for NavigationFeatureServiceImpl<View> {
    #[trace_instrument(skip(self))]
    fn click(&self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Toggle => self.flip(),
            ClickTarget::Link => self.close(),
            ClickTarget::Outside if self.is_open() => self.close(),
            ClickTarget::Outside | ClickTarget::Menu => return self.is_open(),
        }

        let open = self.is_open();
        debug!(%target, open, "navigation menu updated");
        open
    }

    fn is_open(&self) -> bool {
        self.view.has_class(NavElement::Menu, ACTIVE_CLASS)
    }
}

impl<View: NavigationView> NavigationFeatureServiceImpl<View> {
    /// Flips the active class of each element on its own.
    fn flip(&self) {
        for element in NAV_ELEMENTS {
            let active = self.view.has_class(element, ACTIVE_CLASS);
            self.view.set_class(element, ACTIVE_CLASS, !active);
        }
    }

    fn close(&self) {
        for element in NAV_ELEMENTS {
            self.view.set_class(element, ACTIVE_CLASS, false);
        }
    }
}
