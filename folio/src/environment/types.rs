use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_core_navigation_impl::NavigationFeatureServiceImpl;
use folio_core_smoke_impl::SmokeFeatureServiceImpl;
use folio_extern_impl::{contact::ContactApiServiceImpl, smoke::SmokeApiServiceImpl};
use folio_shared_impl::scheduler::TokioSchedulerService;
use folio_ui_impl::page::HeadlessPage;

use crate::page::PageController;

// UI
pub type Page = HeadlessPage;
pub type Controller = PageController<Page, ContactFeature, NavigationFeature, SmokeFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Page, Scheduler, ContactApi>;
pub type NavigationFeature = NavigationFeatureServiceImpl<Page>;
pub type SmokeFeature = SmokeFeatureServiceImpl<Page, SmokeApi>;

// Extern
pub type ContactApi = ContactApiServiceImpl;
pub type SmokeApi = SmokeApiServiceImpl;

// Shared
pub type Scheduler = TokioSchedulerService;
