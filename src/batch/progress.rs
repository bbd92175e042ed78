use std::sync::mpsc;

/// Progress after one pair has been written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Pairs finished so far, including the one that triggered this event.
    pub completed: u64,
    /// Pairs in the whole run.
    pub total: u64,
    /// `100 * completed / total`, integer division.
    pub percent: u32,
}

impl Progress {
    /// Build a progress value. `total` must be non-zero.
    pub fn new(completed: u64, total: u64) -> Self {
        let percent = (completed.saturating_mul(100) / total.max(1)).min(100) as u32;
        Self {
            completed,
            total,
            percent,
        }
    }

    /// True once every pair is done.
    pub fn is_done(&self) -> bool {
        self.completed >= self.total
    }
}

/// Receiver of progress events. Delivery is fire-and-forget.
pub trait ProgressSink {
    /// Called once after each pair completes, in run order.
    fn progress(&mut self, p: Progress);
}

impl<F: FnMut(Progress)> ProgressSink for F {
    fn progress(&mut self, p: Progress) {
        self(p)
    }
}

/// Forwards events over a channel. Events are dropped once the receiver has hung up.
#[derive(Clone, Debug)]
pub struct ChannelProgress(pub mpsc::Sender<Progress>);

impl ChannelProgress {
    /// Create a sink together with the receiving end.
    pub fn channel() -> (Self, mpsc::Receiver<Progress>) {
        let (tx, rx) = mpsc::channel();
        (Self(tx), rx)
    }
}

impl ProgressSink for ChannelProgress {
    fn progress(&mut self, p: Progress) {
        let _ = self.0.send(p);
    }
}

/// Sink that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn progress(&mut self, _p: Progress) {}
}

/// In-memory sink for tests and debugging.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProgress {
    events: Vec<Progress>,
}

impl InMemoryProgress {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured events.
    pub fn events(&self) -> &[Progress] {
        &self.events
    }

    /// Captured percentages in order.
    pub fn percents(&self) -> Vec<u32> {
        self.events.iter().map(|p| p.percent).collect()
    }
}

impl ProgressSink for InMemoryProgress {
    fn progress(&mut self, p: Progress) {
        self.events.push(p);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/progress.rs"]
mod tests;
