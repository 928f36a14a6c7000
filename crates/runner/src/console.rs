use std::io::{self, Stdout, Write};

use tally_ports::{LineSink, SinkResult};

/// Line sink over a byte writer, one `\n`-terminated line per call
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> SinkResult<()> {
        writeln!(self.out, "{}", line)?;
        Ok(())
    }
}
