use queue::Queue;
use crate::*;

/// Receives the feedback a session produces. Implementations are handed to the session when it
/// starts; nothing is looked up globally.
///
pub trait DisplaySink
{
    /// Cadence of the last half repetition, with the indicator fill level in percent.
    fn show_cadence(&mut self, cadence: Cadence, fill: u8);

    fn show_progress(&mut self, progress: Progress);
}

impl<T: DisplaySink + ?Sized> DisplaySink for &mut T {
    fn show_cadence(&mut self, cadence: Cadence, fill: u8) {
        (**self).show_cadence(cadence, fill)
    }

    fn show_progress(&mut self, progress: Progress) {
        (**self).show_progress(progress)
    }
}

/// A single display update, for handing updates over to whoever owns the actual display.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUpdate
{
    Cadence { cadence: Cadence, fill: u8 },
    Progress(Progress),
}

impl DisplayUpdate
{
    /// Forward this update to a sink.
    ///
    pub fn apply<S: DisplaySink + ?Sized>(self, sink: &mut S) {
        match self {
            DisplayUpdate::Cadence { cadence, fill } => sink.show_cadence(cadence, fill),
            DisplayUpdate::Progress(progress) => sink.show_progress(progress),
        }
    }
}

/// Buffers updates in a fixed size queue so a UI loop can pick them up later, in the order they
/// were produced. When the queue overflows the oldest update is dropped, newer state wins.
///
pub struct QueuedDisplay<const SIZE: usize>
{
    queue: Queue<DisplayUpdate, SIZE>,

    /// Updates lost to overflow since construction.
    evicted: usize,
}

impl<const SIZE: usize> QueuedDisplay<SIZE>
{
    pub const fn new() -> Self {
        QueuedDisplay { queue: Queue::new(), evicted: 0 }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn evicted(&self) -> usize {
        self.evicted
    }

    /// Take pending updates, oldest first.
    ///
    pub fn drain(&mut self) -> impl Iterator<Item = DisplayUpdate> + '_ {
        &mut self.queue
    }

    /// Apply every pending update to `sink`, oldest first.
    ///
    pub fn flush_into<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) {
        for update in &mut self.queue {
            update.apply(sink);
        }
    }

    fn push(&mut self, update: DisplayUpdate) {
        if let Some(dropped) = self.queue.push_evicting(update) {
            self.evicted += 1;
            log::warn!("display queue full, dropped {:?}", dropped);
        }
    }
}

impl<const SIZE: usize> Default for QueuedDisplay<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> DisplaySink for QueuedDisplay<SIZE> {
    fn show_cadence(&mut self, cadence: Cadence, fill: u8) {
        self.push(DisplayUpdate::Cadence { cadence, fill });
    }

    fn show_progress(&mut self, progress: Progress) {
        self.push(DisplayUpdate::Progress(progress));
    }
}

/// Sends updates to another thread over an mpsc channel, which delivers them in order.
///
#[cfg(feature = "std")]
pub struct ChannelDisplay
{
    tx: std::sync::mpsc::Sender<DisplayUpdate>,
}

#[cfg(feature = "std")]
impl ChannelDisplay
{
    pub fn new(tx: std::sync::mpsc::Sender<DisplayUpdate>) -> Self {
        ChannelDisplay { tx }
    }

    /// Sink plus the receiving end for the display thread.
    ///
    pub fn channel() -> (Self, std::sync::mpsc::Receiver<DisplayUpdate>) {
        let (tx, rx) = std::sync::mpsc::channel();
        (ChannelDisplay { tx }, rx)
    }

    fn send(&self, update: DisplayUpdate) {
        // A closed receiver means the display went away; the session keeps counting regardless.
        if self.tx.send(update).is_err() {
            log::debug!("display receiver gone, dropped {:?}", update);
        }
    }
}

#[cfg(feature = "std")]
impl DisplaySink for ChannelDisplay {
    fn show_cadence(&mut self, cadence: Cadence, fill: u8) {
        self.send(DisplayUpdate::Cadence { cadence, fill });
    }

    fn show_progress(&mut self, progress: Progress) {
        self.send(DisplayUpdate::Progress(progress));
    }
}
