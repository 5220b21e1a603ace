use log::Level;

use crate::countdown::CountdownState;

pub const CHECKOUT_URL: &str = "https://pay.kiwify.com.br/A804HYQ";

/// Element id of the final offer section, target of every "scroll to offer" button.
pub const OFFER_ANCHOR_ID: &str = "offer";

pub const TICK_INTERVAL_MS: u32 = 1000;

pub const COUNTDOWN_START: CountdownState = CountdownState::new(2, 59, 59);

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
