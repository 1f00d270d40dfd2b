use core::cell::Cell;

/// Monotonic millisecond time source used to time edges.
///
pub trait Clock
{
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Clock that only moves when told to. Used with recorded timestamps and in tests.
///
#[derive(Debug, Default)]
pub struct ManualClock
{
    now: Cell<u64>,
}

impl ManualClock
{
    pub const fn new(start_ms: u64) -> Self {
        ManualClock { now: Cell::new(start_ms) }
    }

    /// Jump to `now_ms`. Moving backwards is ignored to keep the clock monotonic.
    ///
    pub fn set(&self, now_ms: u64) {
        if now_ms >= self.now.get() {
            self.now.set(now_ms);
        } else {
            log::warn!("ignoring clock step backwards ({} -> {} ms)", self.now.get(), now_ms);
        }
    }

    pub fn advance(&self, delta_ms: u64) {
        self.now.set(self.now.get().saturating_add(delta_ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Wall time since construction, backed by `std::time::Instant`.
///
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct MonotonicClock
{
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock
{
    pub fn new() -> Self {
        MonotonicClock { origin: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
