use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys;
use yew::prelude::*;

use crate::utils::dom::{self, EventListener};

/// Trailing-edge debounce over scroll offsets. Every reading pushes the
/// deadline back by `wait_ms`; the offset released is the last one recorded.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailingDebounce {
    wait_ms: u32,
    pending: Option<Pending>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Pending {
    offset: f64,
    deadline: f64,
}

impl TrailingDebounce {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    /// Records a reading taken at `now` (milliseconds).
    pub fn record(&mut self, offset: f64, now: f64) {
        self.pending = Some(Pending {
            offset,
            deadline: now + f64::from(self.wait_ms),
        });
    }

    pub fn deadline(&self) -> Option<f64> {
        self.pending.map(|p| p.deadline)
    }

    /// Releases the pending offset once its quiet period has elapsed.
    pub fn poll(&mut self, now: f64) -> Option<f64> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.offset)
            }
            _ => None,
        }
    }

    /// Releases the pending offset regardless of the deadline.
    pub fn flush(&mut self) -> Option<f64> {
        self.pending.take().map(|p| p.offset)
    }
}

/// Reports the vertical scroll offset once on mount and then at most once
/// per quiet period of `wait_ms`, with the last offset of a burst winning.
///
/// `on_settle` is captured on mount; pass a callback built from a stable
/// dispatcher or setter.
#[hook]
pub fn use_debounced_scroll(wait_ms: u32, on_settle: Callback<f64>) {
    use_effect_with_deps(
        move |wait_ms| {
            let wait_ms = *wait_ms;
            let debounce = Rc::new(RefCell::new(TrailingDebounce::new(wait_ms)));
            let timer: Rc<RefCell<Option<Timeout>>> = Rc::default();
            on_settle.emit(dom::scroll_y());

            let listener = dom::window().and_then(|window| {
                let debounce = debounce.clone();
                let timer = timer.clone();
                EventListener::new(&window, "scroll", move |_| {
                    debounce.borrow_mut().record(dom::scroll_y(), js_sys::Date::now());
                    let debounce = debounce.clone();
                    let on_settle = on_settle.clone();
                    // dropping the previous timeout cancels it
                    *timer.borrow_mut() = Some(Timeout::new(wait_ms, move || {
                        // timers may fire a tick early relative to Date.now()
                        let mut debounce = debounce.borrow_mut();
                        let settled = debounce
                            .poll(js_sys::Date::now())
                            .or_else(|| debounce.flush());
                        if let Some(offset) = settled {
                            on_settle.emit(offset);
                        }
                    }));
                })
            });
            if let Err(e) = &listener {
                log::debug!("scroll tracking inactive: {}", e);
            }

            move || {
                drop(listener);
                timer.borrow_mut().take();
            }
        },
        wait_ms,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_offset_in_a_burst_wins() {
        let mut debounce = TrailingDebounce::new(50);
        debounce.record(120.0, 0.0);
        debounce.record(260.0, 10.0);
        debounce.record(40.0, 30.0);

        assert_eq!(debounce.poll(60.0), None);
        assert_eq!(debounce.poll(80.0), Some(40.0));
        assert_eq!(debounce.poll(500.0), None);
    }

    #[test]
    fn each_reading_pushes_the_deadline_back() {
        let mut debounce = TrailingDebounce::new(50);
        debounce.record(1.0, 0.0);
        assert_eq!(debounce.deadline(), Some(50.0));
        debounce.record(2.0, 45.0);
        assert_eq!(debounce.deadline(), Some(95.0));
    }

    #[test]
    fn flush_empties_the_slot() {
        let mut debounce = TrailingDebounce::new(50);
        assert_eq!(debounce.flush(), None);
        debounce.record(300.0, 0.0);
        assert_eq!(debounce.flush(), Some(300.0));
        assert_eq!(debounce.deadline(), None);
    }
}
