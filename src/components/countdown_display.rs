use std::rc::Rc;

use log::{debug, info};
use yew::prelude::*;

use crate::config;
use crate::countdown::CountdownState;
use crate::ticker::{IntervalSchedule, Schedule, Ticker};

pub enum CountdownAction {
    Tick,
}

impl Reducible for CountdownState {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CountdownAction::Tick => {
                let next = self.tick();
                if next == *self {
                    // Plateau, keep the same value so nothing re-renders
                    return self;
                }
                if next.is_expired() {
                    info!("Offer countdown reached {}", next);
                }
                Rc::new(next)
            }
        }
    }
}

/// Starts ticking into `dispatch` and returns the teardown that stops it.
fn run_countdown<S, D>(schedule: S, dispatch: D) -> impl FnOnce() + 'static
where
    S: Schedule + 'static,
    S::Handle: 'static,
    D: Fn(CountdownAction) + 'static,
{
    let mut ticker = Ticker::with_schedule(schedule, config::TICK_INTERVAL_MS);
    debug!("Starting offer countdown, ticking every {}ms", ticker.period_ms());
    ticker.start(move || dispatch(CountdownAction::Tick));

    move || {
        if ticker.is_running() {
            debug!("Stopping offer countdown");
        }
        ticker.stop();
    }
}

#[function_component(CountdownDisplay)]
pub fn countdown_display() -> Html {
    let remaining = use_reducer(CountdownState::default);

    // One ticker per mounted countdown, stopped when it unmounts
    {
        let dispatcher = remaining.dispatcher();
        use_effect_with_deps(
            move |_| run_countdown(IntervalSchedule, move |action| dispatcher.dispatch(action)),
            (),
        );
    }

    html! {
        <div class="countdown" role="timer" aria-label={(*remaining).to_string()}>
            {
                remaining.fields().into_iter().map(|(label, value)| {
                    html! {
                        <div class="countdown-tile" key={label}>
                            <div class="countdown-value">{value}</div>
                            <div class="countdown-label">{label}</div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ticker::testing::ManualSchedule;

    #[test]
    fn test_reduce_ticks_once() {
        let state = Rc::new(CountdownState::default());
        let next = state.reduce(CountdownAction::Tick);
        assert_eq!(*next, CountdownState::new(2, 59, 58));
    }

    #[test]
    fn test_reduce_at_zero_returns_same_rc() {
        let state = Rc::new(CountdownState::ZERO);
        let next = state.clone().reduce(CountdownAction::Tick);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_teardown_stops_the_countdown() {
        let schedule = ManualSchedule::default();
        let shown = Rc::new(RefCell::new(CountdownState::default()));

        let teardown = {
            let shown = shown.clone();
            run_countdown(schedule.clone(), move |action| {
                let next = Rc::new(*shown.borrow()).reduce(action);
                *shown.borrow_mut() = *next;
            })
        };

        for _ in 0..61 {
            schedule.fire();
        }
        assert_eq!(shown.borrow().to_string(), "02 : 58 : 58");

        teardown();
        assert_eq!(schedule.live(), 0);
        for _ in 0..10 {
            schedule.fire();
        }
        assert_eq!(shown.borrow().to_string(), "02 : 58 : 58");
    }
}
