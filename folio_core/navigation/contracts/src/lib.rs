use folio_models::navigation::ClickTarget;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait NavigationFeatureService: Send + Sync + 'static {
    /// Handles a click on the page. Returns whether the menu is open afterwards.
    fn click(&self, target: ClickTarget) -> bool;

    fn is_open(&self) -> bool;
}

#[cfg(feature = "mock")]
impl MockNavigationFeatureService {
    pub fn with_click(mut self, target: ClickTarget, open: bool) -> Self {
        self.expect_click()
            .once()
            .with(mockall::predicate::eq(target))
            .return_const(open);
        self
    }

    pub fn with_is_open(mut self, open: bool) -> Self {
        self.expect_is_open().once().return_const(open);
        self
    }
}
