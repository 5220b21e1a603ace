use gloo_timers::callback::Interval;

/// Source of recurring callbacks. Dropping the returned handle cancels them.
pub trait Schedule {
    type Handle;

    fn every<F>(&self, period_ms: u32, on_tick: F) -> Self::Handle
    where
        F: FnMut() + 'static;
}

/// Browser timers via `setInterval`.
#[derive(Clone, Copy, Default)]
pub struct IntervalSchedule;

impl Schedule for IntervalSchedule {
    type Handle = Interval;

    fn every<F>(&self, period_ms: u32, on_tick: F) -> Interval
    where
        F: FnMut() + 'static,
    {
        Interval::new(period_ms, on_tick)
    }
}

/// Owned recurring timer. The schedule is cancelled on `stop()` and on drop,
/// so a ticker can never outlive the component that holds it.
pub struct Ticker<S: Schedule = IntervalSchedule> {
    schedule: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl Ticker {
    pub fn new(period_ms: u32) -> Self {
        Self::with_schedule(IntervalSchedule, period_ms)
    }
}

impl<S: Schedule> Ticker<S> {
    pub fn with_schedule(schedule: S, period_ms: u32) -> Self {
        Self { schedule, period_ms, handle: None }
    }

    /// Starts calling `on_tick` every period. Restarting replaces the previous schedule.
    pub fn start<F>(&mut self, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        self.stop();
        self.handle = Some(self.schedule.every(self.period_ms, on_tick));
    }

    pub fn stop(&mut self) {
        self.handle = None;
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

impl<S: Schedule> Drop for Ticker<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
