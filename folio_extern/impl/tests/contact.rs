use std::path::Path;

use folio_config::{ContactConfig, DEFAULT_CONFIG_PATH};
use folio_di::{provider, Provide};
use folio_extern_contracts::contact::{ContactApiError, ContactApiService};
use folio_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};
use folio_models::contact::{ContactForm, ContactMessage};
use folio_testing::contact::{CONTACT_ROUTE, REJECT_DETAIL};
use url::Url;

#[tokio::test]
async fn submit_ok() {
    let (sut, base_url) = make_sut(folio_testing::contact::router()).await;

    sut.submit(&message("Hi")).await.unwrap();

    let received = reqwest::get(base_url.join(CONTACT_ROUTE).unwrap())
        .await
        .unwrap()
        .json::<Vec<ContactForm>>()
        .await
        .unwrap();
    assert_eq!(
        received,
        [ContactForm {
            name: "John Smith".into(),
            email: "john@example.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }]
    );
}

#[tokio::test]
async fn submit_rejected() {
    let (sut, _) = make_sut(folio_testing::contact::router()).await;

    let result = sut.submit(&message("rejected")).await;

    match result {
        Err(ContactApiError::Rejected { status, detail }) => {
            assert_eq!(status, 400);
            assert_eq!(detail.as_deref(), Some(REJECT_DETAIL));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn submit_not_found() {
    let (sut, _) = make_sut(axum::Router::new()).await;

    let result = sut.submit(&message("Hi")).await;

    match result {
        Err(ContactApiError::Rejected { status, detail }) => {
            assert_eq!(status, 404);
            assert_eq!(detail, None);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[tokio::test]
async fn submit_unreachable() {
    let sut = build_sut("http://127.0.0.1:1/".parse().unwrap());

    let result = sut.submit(&message("Hi")).await;

    assert!(matches!(result, Err(ContactApiError::Other(_))), "{result:?}");
}

fn message(subject: &str) -> ContactMessage {
    ContactForm {
        name: "John Smith".into(),
        email: "john@example.com".into(),
        subject: subject.into(),
        message: "Hello".into(),
    }
    .validate()
    .unwrap()
}

async fn make_sut(router: axum::Router) -> (ContactApiServiceImpl, Url) {
    let addr = folio_testing::spawn(router).await.unwrap();
    let base_url: Url = format!("http://{addr}/").parse().unwrap();
    (build_sut(base_url.clone()), base_url)
}

fn build_sut(base_url: Url) -> ContactApiServiceImpl {
    let paths = vec![Path::new(DEFAULT_CONFIG_PATH)];
    let base_url_override = format!("contact.base_url = \"{base_url}\"");
    let config =
        folio_config::load_with_override(&paths, &[base_url_override.as_str()]).unwrap();

    let ContactConfig { base_url, .. } = config.contact;

    provider! {
        Provider { contact_api_service_config: ContactApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        contact_api_service_config: ContactApiServiceConfig::new(&base_url).unwrap(),
    };

    provider.provide()
}
