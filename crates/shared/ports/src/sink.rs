use crate::error::SinkResult;

/// Port for the text presenter
///
/// Reports write human-readable lines here, one call per line, in output
/// order. The console implementation lives in the runner; `Vec<String>`
/// collects lines for tests.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> SinkResult<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> SinkResult<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn write_line(&mut self, line: &str) -> SinkResult<()> {
        (**self).write_line(line)
    }
}
