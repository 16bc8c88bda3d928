//! Shared application state.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};

pub struct AppStateInner {
    pub clock: Box<dyn Clock>,
}

pub type AppState = Arc<AppStateInner>;

pub fn build_state() -> AppState {
    build_state_with_clock(SystemClock)
}

pub fn build_state_with_clock(clock: impl Clock + 'static) -> AppState {
    Arc::new(AppStateInner { clock: Box::new(clock) })
}
