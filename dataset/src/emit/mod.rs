//! Per-format dataset emitters. Each accumulates rows in capture order
//! and writes one file at flush time, then clears its buffer for the
//! next run.

use crate::common::*;
use crate::row::DatasetRow;

pub use boxmap::*;
mod boxmap;

pub use cornermap::*;
mod cornermap;

pub use tabular::*;
mod tabular;

pub trait RowEmitter {
    fn append(&mut self, row: &DatasetRow);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Writes the accumulated rows to a file under `dir` and clears the
    /// buffer. Returns the written file path.
    fn flush(&mut self, dir: &Path) -> Result<PathBuf>;
}
