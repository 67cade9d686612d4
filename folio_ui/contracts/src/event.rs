use std::{future::Future, str::FromStr};

use folio_models::{
    contact::ContactField,
    navigation::{ClickTarget, UnknownClickTarget},
    smoke::{SmokeMethod, UnknownSmokeMethod},
};
use thiserror::Error;

/// Something the visitor did on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The visitor typed `value` into a contact form field.
    Input { field: ContactField, value: String },
    /// The contact form was submitted.
    Submit,
    Click(ClickTarget),
    /// One of the smoke test buttons was pressed.
    Smoke(SmokeMethod),
}

pub trait EventSource: Send {
    /// Waits for the next event. Returns `None` once the source is exhausted.
    fn next_event(
        &mut self,
    ) -> impl Future<Output = Result<Option<PageEvent>, EventSourceError>> + Send;
}

#[derive(Debug, Error)]
pub enum EventSourceError {
    /// The event could not be understood. The source can still be polled.
    #[error(transparent)]
    Parse(#[from] ParsePageEventError),
    #[error("Failed to read event: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePageEventError {
    #[error("Empty event")]
    Empty,
    #[error("Unknown event {0:?}")]
    UnknownEvent(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    ClickTarget(#[from] UnknownClickTarget),
    #[error(transparent)]
    SmokeMethod(#[from] UnknownSmokeMethod),
}

/// Parses the textual event form used by line based sources:
///
/// - `<field> <value>` where field is one of `name`, `email`, `subject`, `message`
/// - `submit`
/// - `click <toggle|menu|link|outside>`
/// - `smoke <get|post|put|patch>`
impl FromStr for PageEvent {
    type Err = ParsePageEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (command, rest) = s
            .split_once(char::is_whitespace)
            .unwrap_or((s.trim_end(), ""));
        let argument = || {
            Some(rest.trim())
                .filter(|x| !x.is_empty())
                .ok_or(ParsePageEventError::MissingArgument(command_argument(command)))
        };

        match command {
            "" => Err(ParsePageEventError::Empty),
            "submit" => Ok(Self::Submit),
            "click" => Ok(Self::Click(argument()?.parse()?)),
            "smoke" => Ok(Self::Smoke(argument()?.parse()?)),
            _ => ContactField::from_input_id(command)
                .map(|field| Self::Input {
                    field,
                    value: rest.trim_end_matches(['\r', '\n']).into(),
                })
                .ok_or_else(|| ParsePageEventError::UnknownEvent(command.into())),
        }
    }
}

fn command_argument(command: &str) -> &'static str {
    match command {
        "click" => "click target",
        "smoke" => "smoke test method",
        _ => "argument",
    }
}
