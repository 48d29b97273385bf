use std::path::Path;

/// Where a split run currently is. `Done` and `Failed` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitPhase {
    Validating,
    Loading,
    /// Writing the given 1-based part.
    Writing(usize),
    Done,
    Failed,
}

/// Observer for a running split.
///
/// `start` fires once the part count is known, `file_written` with the path
/// of every part that reached disk, `chunk_written` right after it, and `yield_now` right after it so a cooperative
/// UI loop can repaint before the next write. All hooks run on the caller's
/// thread and must return promptly.
pub trait ProgressSink {
    fn start(&mut self, total: usize) {
        let _ = total;
    }

    fn file_written(&mut self, ordinal: usize, path: &Path) {
        let _ = (ordinal, path);
    }

    fn chunk_written(&mut self, completed: usize, total: usize);

    fn yield_now(&mut self) {}

    fn phase(&mut self, phase: SplitPhase) {
        let _ = phase;
    }
}

/// Plain `(completed, total)` callbacks; `start` is reported as `(0, total)`.
impl<F> ProgressSink for F
where
    F: FnMut(usize, usize),
{
    fn start(&mut self, total: usize) {
        self(0, total);
    }

    fn chunk_written(&mut self, completed: usize, total: usize) {
        self(completed, total);
    }
}

pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn chunk_written(&mut self, _completed: usize, _total: usize) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_see_start_as_zero() {
        let mut seen = Vec::new();
        {
            let mut sink = |c: usize, t: usize| seen.push((c, t));
            sink.start(2);
            sink.chunk_written(1, 2);
            sink.yield_now();
            sink.chunk_written(2, 2);
        }
        assert_eq!(seen, vec![(0, 2), (1, 2), (2, 2)]);
    }
}
