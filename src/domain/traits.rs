use chrono::NaiveDateTime;
use futures::Stream;

use crate::domain::Error;

/// Source of the lines typed at the prompt.
pub trait InputStream {
    type Lines: Stream<Item = Result<String, Error>> + Unpin;
    fn lines(&mut self) -> Self::Lines;
}

/// Wall clock used to stamp transactions and to decide what "today" is.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
