use std::pin::Pin;

use futures::stream::{self, Stream};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::domain::{Error, traits::InputStream};

/// Turns any async reader (stdin in production) into a stream of lines.
pub struct LineReader<R: AsyncRead + Unpin> {
    lines: Option<Lines<BufReader<R>>>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: Some(BufReader::new(reader).lines()),
        }
    }
}

impl<R: AsyncRead + Unpin + Send + 'static> InputStream for LineReader<R> {
    type Lines = Pin<Box<dyn Stream<Item = Result<String, Error>> + Send>>;

    fn lines(&mut self) -> Self::Lines {
        let lines = match self.lines.take() {
            Some(l) => l,
            // Already consumed; nothing left to read.
            None => return Box::pin(stream::empty()),
        };

        Box::pin(stream::unfold(lines, |mut lines| async move {
            match lines.next_line().await {
                Ok(Some(line)) => Some((Ok(line), lines)),
                Ok(None) => None,
                Err(e) => Some((Err(Error::from(e)), lines)),
            }
        }))
    }
}
