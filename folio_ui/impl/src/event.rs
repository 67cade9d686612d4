use folio_ui_contracts::event::{EventSource, EventSourceError, PageEvent};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, Lines},
    sync::mpsc,
};
use tracing::debug;

/// Reads one textual event per line, skipping blank lines and `#` comments.
#[derive(Debug)]
pub struct LineEventSource<R> {
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin> LineEventSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: AsyncBufRead + Unpin + Send> EventSource for LineEventSource<R> {
    async fn next_event(&mut self) -> Result<Option<PageEvent>, EventSourceError> {
        while let Some(line) = self.lines.next_line().await? {
            let line = line.trim_start();
            if line.trim_end().is_empty() || line.starts_with('#') {
                continue;
            }
            debug!(line, "read event");
            return Ok(Some(line.parse()?));
        }
        Ok(None)
    }
}

/// Receives events sent through a [`ChannelEventSender`].
#[derive(Debug)]
pub struct ChannelEventSource(mpsc::UnboundedReceiver<PageEvent>);

#[derive(Debug, Clone)]
pub struct ChannelEventSender(mpsc::UnboundedSender<PageEvent>);

pub fn channel() -> (ChannelEventSender, ChannelEventSource) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ChannelEventSender(tx), ChannelEventSource(rx))
}

impl ChannelEventSender {
    /// Sends `event`. Returns `false` if the source has been dropped.
    pub fn send(&self, event: PageEvent) -> bool {
        self.0.send(event).is_ok()
    }
}

impl EventSource for ChannelEventSource {
    async fn next_event(&mut self) -> Result<Option<PageEvent>, EventSourceError> {
        Ok(self.0.recv().await)
    }
}
