use std::time::Duration;

use anyhow::anyhow;
use folio_core_contact_contracts::{
    ContactFeatureService, ContactSubmitError, ContactSubmitted, FAILED_MESSAGE,
    RECORDED_MESSAGE, SENT_MESSAGE,
};
use folio_extern_contracts::contact::{ContactApiError, MockContactApiService};
use folio_models::contact::{
    ContactField, ContactFieldError, ContactForm, ContactMessage, ContactSubmissionMode,
};
use folio_shared_contracts::scheduler::MockSchedulerService;
use folio_shared_impl::scheduler::TokioSchedulerService;
use folio_ui_contracts::contact::{Banner, ContactFormView};
use folio_ui_impl::page::HeadlessPage;
use folio_utils::assert_matches;
use pretty_assertions::assert_eq;

use crate::{
    ContactFeatureConfig, ContactFeatureServiceImpl, ERRORS_SLOT, FAILURE_BANNER_SLOT,
    SUCCESS_BANNER_SLOT,
};

type Sut = ContactFeatureServiceImpl<HeadlessPage, TokioSchedulerService, MockContactApiService>;

const TTL: Duration = Duration::from_millis(3000);

fn make_sut(mode: ContactSubmissionMode, contact_api: MockContactApiService) -> (Sut, HeadlessPage) {
    let page = HeadlessPage::portfolio();
    let sut = ContactFeatureServiceImpl {
        view: page.clone(),
        scheduler: TokioSchedulerService::default(),
        contact_api,
        config: ContactFeatureConfig {
            mode,
            message_ttl: TTL,
        },
    };
    (sut, page)
}

fn fill(page: &HeadlessPage, form: &ContactForm) {
    for field in ContactField::ALL {
        page.write_field(field, form.get(field));
    }
}

fn john() -> ContactForm {
    ContactForm {
        name: "John Smith".into(),
        email: "john@example.com".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
    }
}

fn john_message() -> ContactMessage {
    john().validate().unwrap()
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn invalid_shows_errors_until_ttl() {
    // Arrange
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, MockContactApiService::new());
    fill(
        &page,
        &ContactForm {
            name: "Bob".into(),
            email: "bob@example".into(),
            ..john()
        },
    );

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Invalid(ref errors)) if errors.len() == 2
    );
    assert_eq!(
        page.error(ContactField::Name),
        "Name must be at least 6 characters long."
    );
    assert_eq!(
        page.error(ContactField::Email),
        "Please enter a valid email address."
    );
    assert_eq!(page.error(ContactField::Subject), "");
    assert_eq!(page.field(ContactField::Name), "Bob");

    sleep_ms(2999).await;
    assert_eq!(page.error(ContactField::Email), "Please enter a valid email address.");

    sleep_ms(2).await;
    assert_eq!(page.error(ContactField::Name), "");
    assert_eq!(page.error(ContactField::Email), "");
}

#[tokio::test(start_paused = true)]
async fn name_with_digits() {
    // Arrange
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, MockContactApiService::new());
    fill(
        &page,
        &ContactForm {
            name: "Bob12345".into(),
            ..john()
        },
    );

    // Act
    let result = sut.submit().await;

    // Assert
    match result {
        Err(ContactSubmitError::Invalid(errors)) => {
            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                [(ContactField::Name, ContactFieldError::NameContainsDigits)]
            );
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert_eq!(
        page.error(ContactField::Name),
        "Name should not contain numbers."
    );
}

#[tokio::test(start_paused = true)]
async fn sent() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(john_message(), Ok(()));
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, contact_api);
    fill(&page, &john());

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Ok(ContactSubmitted::Sent));
    assert_eq!(page.read_form(), ContactForm::default());
    assert_eq!(
        page.visible_banner(Banner::Success).as_deref(),
        Some(SENT_MESSAGE)
    );
    assert_eq!(page.visible_banner(Banner::Failure), None);

    sleep_ms(2999).await;
    assert!(page.visible_banner(Banner::Success).is_some());

    sleep_ms(2).await;
    assert_eq!(page.visible_banner(Banner::Success), None);
}

#[tokio::test(start_paused = true)]
async fn sends_trimmed_values() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(john_message(), Ok(()));
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, contact_api);
    fill(
        &page,
        &ContactForm {
            name: "  John Smith ".into(),
            email: " john@example.com\t".into(),
            subject: "\nHi".into(),
            message: "Hello   ".into(),
        },
    );

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Ok(ContactSubmitted::Sent));
}

#[tokio::test(start_paused = true)]
async fn network_failure_keeps_fields() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(
        john_message(),
        Err(ContactApiError::Other(anyhow!("connection refused"))),
    );
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, contact_api);
    fill(&page, &john());

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
    assert_eq!(page.read_form(), john());
    assert_eq!(
        page.visible_banner(Banner::Failure).as_deref(),
        Some(FAILED_MESSAGE)
    );
    assert_eq!(page.visible_banner(Banner::Success), None);

    sleep_ms(2999).await;
    assert!(page.visible_banner(Banner::Failure).is_some());

    sleep_ms(2).await;
    assert_eq!(page.visible_banner(Banner::Failure), None);
    assert_eq!(page.read_form(), john());
}

#[tokio::test(start_paused = true)]
async fn rejected() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(
        john_message(),
        Err(ContactApiError::Rejected {
            status: 422,
            detail: Some("Invalid email".into()),
        }),
    );
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, contact_api);
    fill(&page, &john());

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(
        result,
        Err(ContactSubmitError::Rejected { status: 422, ref detail }) if detail.as_deref() == Some("Invalid email")
    );
    assert_eq!(page.read_form(), john());
    assert_eq!(
        page.visible_banner(Banner::Failure).as_deref(),
        Some(FAILED_MESSAGE)
    );
}

#[tokio::test(start_paused = true)]
async fn local_mode_records() {
    // Arrange
    let (sut, page) = make_sut(ContactSubmissionMode::Local, MockContactApiService::new());
    fill(&page, &john());

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Ok(ContactSubmitted::Recorded));
    assert_eq!(page.read_form(), ContactForm::default());
    assert_eq!(
        page.visible_banner(Banner::Success).as_deref(),
        Some(RECORDED_MESSAGE)
    );

    sleep_ms(3001).await;
    assert_eq!(page.visible_banner(Banner::Success), None);
}

#[tokio::test(start_paused = true)]
async fn submit_clears_previous_errors() {
    // Arrange
    let contact_api = MockContactApiService::new().with_submit(john_message(), Ok(()));
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, contact_api);
    fill(
        &page,
        &ContactForm {
            subject: " ".into(),
            ..john()
        },
    );
    assert_matches!(sut.submit().await, Err(ContactSubmitError::Invalid(_)));
    assert_eq!(page.error(ContactField::Subject), "Subject cannot be empty.");

    // Act
    page.write_field(ContactField::Subject, "Hi");
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Ok(ContactSubmitted::Sent));
    assert_eq!(page.error(ContactField::Subject), "");
}

#[tokio::test(start_paused = true)]
async fn resubmit_restarts_error_ttl() {
    // Arrange
    let (sut, page) = make_sut(ContactSubmissionMode::Remote, MockContactApiService::new());
    fill(
        &page,
        &ContactForm {
            message: String::new(),
            ..john()
        },
    );
    assert_matches!(sut.submit().await, Err(ContactSubmitError::Invalid(_)));

    // Act
    sleep_ms(2000).await;
    assert_matches!(sut.submit().await, Err(ContactSubmitError::Invalid(_)));

    // Assert
    sleep_ms(1500).await;
    assert_eq!(page.error(ContactField::Message), "Message cannot be empty.");

    sleep_ms(1501).await;
    assert_eq!(page.error(ContactField::Message), "");
}

#[tokio::test]
async fn failure_banner_uses_configured_ttl() {
    // Arrange
    let ttl = Duration::from_millis(1500);
    let page = HeadlessPage::portfolio();
    fill(&page, &john());

    let sut = ContactFeatureServiceImpl {
        view: page.clone(),
        scheduler: MockSchedulerService::new()
            .with_cancel(FAILURE_BANNER_SLOT, false)
            .with_schedule_now(FAILURE_BANNER_SLOT, ttl),
        contact_api: MockContactApiService::new().with_submit(
            john_message(),
            Err(ContactApiError::Other(anyhow!("timeout"))),
        ),
        config: ContactFeatureConfig {
            mode: ContactSubmissionMode::Remote,
            message_ttl: ttl,
        },
    };

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Other(_)));
    assert!(page.element(Banner::Failure.element_id()).unwrap().hidden);
}

#[tokio::test]
async fn pending_banner_hide_is_cancelled_before_showing() {
    // Arrange
    let page = HeadlessPage::portfolio();
    fill(&page, &john());

    let mut scheduler = MockSchedulerService::new();
    let view = page.clone();
    scheduler
        .expect_cancel()
        .once()
        .with(mockall::predicate::eq(SUCCESS_BANNER_SLOT))
        .returning(move |_| {
            assert_eq!(view.visible_banner(Banner::Success), None);
            true
        });
    let view = page.clone();
    scheduler
        .expect_schedule()
        .once()
        .withf(move |slot, _, _| {
            *slot == SUCCESS_BANNER_SLOT && view.visible_banner(Banner::Success).is_some()
        })
        .return_const(());

    let sut = ContactFeatureServiceImpl {
        view: page.clone(),
        scheduler,
        contact_api: MockContactApiService::new().with_submit(john_message(), Ok(())),
        config: ContactFeatureConfig {
            mode: ContactSubmissionMode::Remote,
            message_ttl: TTL,
        },
    };

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Ok(ContactSubmitted::Sent));
    assert_eq!(
        page.visible_banner(Banner::Success).as_deref(),
        Some(SENT_MESSAGE)
    );
}

#[tokio::test]
async fn pending_error_clear_is_cancelled_before_showing() {
    // Arrange
    let page = HeadlessPage::portfolio();
    fill(
        &page,
        &ContactForm {
            subject: String::new(),
            ..john()
        },
    );

    let mut scheduler = MockSchedulerService::new();
    let view = page.clone();
    scheduler
        .expect_cancel()
        .once()
        .with(mockall::predicate::eq(ERRORS_SLOT))
        .returning(move |_| {
            assert_eq!(view.error(ContactField::Subject), "");
            true
        });
    scheduler
        .expect_schedule()
        .once()
        .withf(|slot, delay, _| *slot == ERRORS_SLOT && *delay == TTL)
        .return_const(());

    let sut = ContactFeatureServiceImpl {
        view: page.clone(),
        scheduler,
        contact_api: MockContactApiService::new(),
        config: ContactFeatureConfig {
            mode: ContactSubmissionMode::Remote,
            message_ttl: TTL,
        },
    };

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Err(ContactSubmitError::Invalid(_)));
    assert_eq!(page.error(ContactField::Subject), "Subject cannot be empty.");
}
