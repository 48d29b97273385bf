use std::num::NonZeroUsize;

/// Half-open row interval `[start, end)` assigned to one output part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkSpan {
    /// 0-based position in the plan.
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

impl ChunkSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 1-based number used in output file names and progress reports.
    pub fn ordinal(&self) -> usize {
        self.index + 1
    }
}

/// Contiguous fixed-size partition of `total_rows` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkPlan {
    total_rows: usize,
    rows_per_file: NonZeroUsize,
}

impl ChunkPlan {
    pub fn new(total_rows: usize, rows_per_file: NonZeroUsize) -> Self {
        Self {
            total_rows,
            rows_per_file,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// ceil(total_rows / rows_per_file); zero when there are no rows.
    pub fn chunk_count(&self) -> usize {
        self.total_rows.div_ceil(self.rows_per_file.get())
    }

    pub fn span(&self, index: usize) -> Option<ChunkSpan> {
        if index >= self.chunk_count() {
            return None;
        }
        let step = self.rows_per_file.get();
        let start = index * step;
        let end = (start + step).min(self.total_rows);
        Some(ChunkSpan { index, start, end })
    }

    pub fn spans(&self) -> impl Iterator<Item = ChunkSpan> + '_ {
        (0..self.chunk_count()).filter_map(|i| self.span(i))
    }
}
