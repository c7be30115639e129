use crate::submit::completion::SubmitCompletion;
use crate::submit::http;
use crate::submit::request::SubmitRequest;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Runs submissions off the page's event loop. Each request gets its own
/// worker thread; completions queue on a channel and are drained between
/// events, so handler logic after the suspension point runs on the single
/// UI thread, one completion at a time.
pub struct SubmitExecutor {
    completion_tx: Sender<SubmitCompletion>,
    completion_rx: Receiver<SubmitCompletion>,
}

impl SubmitExecutor {
    pub fn new() -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmitCompletion>();
        Self {
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, request: SubmitRequest) {
        let completion_tx = self.completion_tx.clone();
        std::thread::spawn(move || {
            let completion = http::send(&request);
            let _ = completion_tx.send(completion);
        });
    }

    /// Completions that have arrived since the last drain, in arrival order.
    pub fn drain_ready(&self) -> Vec<SubmitCompletion> {
        let mut out = Vec::<SubmitCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }

    #[cfg(test)]
    pub(crate) fn inject(&self, completion: SubmitCompletion) {
        let _ = self.completion_tx.send(completion);
    }
}

impl Default for SubmitExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitExecutor;
    use crate::submit::completion::SubmitCompletion;

    #[test]
    fn drain_is_empty_without_completions() {
        let executor = SubmitExecutor::new();
        assert!(executor.drain_ready().is_empty());
    }

    #[test]
    fn drain_returns_completions_in_arrival_order() {
        let executor = SubmitExecutor::new();
        for origin in ["rating-1", "rating-2"] {
            executor.inject(SubmitCompletion {
                handler: origin.into(),
                origin: origin.into(),
                status: Some(200),
                body: String::new(),
                value: None,
                error: None,
            });
        }

        let drained = executor.drain_ready();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].origin.as_str(), "rating-1");
        assert_eq!(drained[1].origin.as_str(), "rating-2");
        assert!(executor.drain_ready().is_empty());
    }
}
