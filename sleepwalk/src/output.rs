//! Output sink for step lines.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use sleepwalk_core::WorkloadResult;

/// Shared, line-oriented writer.
///
/// Clones write to the same underlying writer, so the runner and the task
/// it spawns emit into one ordered stream. Every line is flushed
/// immediately.
pub struct StepOutput<W> {
    writer: Rc<RefCell<W>>,
}

impl<W: Write> StepOutput<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Rc::new(RefCell::new(writer)),
        }
    }

    /// Write `line` followed by a newline, then flush.
    pub fn write_line(&self, line: &str) -> WorkloadResult<()> {
        let mut writer = self.writer.borrow_mut();
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }
}

impl StepOutput<io::Stdout> {
    /// Output to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StepOutput<Vec<u8>> {
    /// Output captured in memory.
    pub fn in_memory() -> Self {
        Self::new(Vec::new())
    }

    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.writer.borrow())
            .lines()
            .map(str::to_owned)
            .collect()
    }
}

impl<W> Clone for StepOutput<W> {
    fn clone(&self) -> Self {
        Self {
            writer: Rc::clone(&self.writer),
        }
    }
}
