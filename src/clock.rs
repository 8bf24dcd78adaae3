use chrono::{Local, NaiveDateTime};

use crate::domain::Clock;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(test)]
pub use fixed::FixedClock;

#[cfg(test)]
mod fixed {
    use std::cell::Cell;

    use chrono::{NaiveDateTime, TimeDelta};

    use crate::domain::Clock;

    /// Clock that only moves when told to.
    #[derive(Debug)]
    pub struct FixedClock {
        now: Cell<NaiveDateTime>,
    }

    impl FixedClock {
        pub fn new(now: NaiveDateTime) -> Self {
            Self {
                now: Cell::new(now),
            }
        }

        pub fn advance(&self, delta: TimeDelta) {
            self.now.set(self.now.get() + delta);
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.now.get()
        }
    }

    impl Clock for &FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.now.get()
        }
    }
}
