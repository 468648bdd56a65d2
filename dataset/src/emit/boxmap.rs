use super::RowEmitter;
use crate::{common::*, row::DatasetRow};

pub const BOX_MAP_FILE: &str = "ml_dataset.json";

/// Maps each filename to its box-form `[x, y, w, h]` region.
#[derive(Debug, Default)]
pub struct BoxMapEmitter {
    regions: IndexMap<String, [f64; 4]>,
}

impl BoxMapEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &IndexMap<String, [f64; 4]> {
        &self.regions
    }
}

impl RowEmitter for BoxMapEmitter {
    fn append(&mut self, row: &DatasetRow) {
        self.regions
            .insert(row.filename.clone(), row.box_region.to_array());
    }

    fn len(&self) -> usize {
        self.regions.len()
    }

    fn flush(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(BOX_MAP_FILE);
        let writer = BufWriter::new(
            File::create(&path).with_context(|| format!("cannot create '{}'", path.display()))?,
        );
        serde_json::to_writer_pretty(writer, &self.regions)?;
        self.regions.clear();
        Ok(path)
    }
}
