use super::RowEmitter;
use crate::{common::*, row::DatasetRow};

pub const CORNER_MAP_FILE: &str = "region_dataset.json";

/// Maps each filename to its corner-form `[x_min, y_min, x_max, y_max]`
/// region. Written independently from the box map file.
#[derive(Debug, Default)]
pub struct CornerMapEmitter {
    regions: IndexMap<String, [f64; 4]>,
}

impl CornerMapEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn regions(&self) -> &IndexMap<String, [f64; 4]> {
        &self.regions
    }
}

impl RowEmitter for CornerMapEmitter {
    fn append(&mut self, row: &DatasetRow) {
        self.regions
            .insert(row.filename.clone(), row.corner_region.to_array());
    }

    fn len(&self) -> usize {
        self.regions.len()
    }

    fn flush(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CORNER_MAP_FILE);
        let writer = BufWriter::new(
            File::create(&path).with_context(|| format!("cannot create '{}'", path.display()))?,
        );
        serde_json::to_writer_pretty(writer, &self.regions)?;
        self.regions.clear();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::test_support::{sample_row, temp_output_dir};

    #[test]
    fn corner_map_and_box_map_share_geometry() -> Result<()> {
        let row = sample_row(1, "widget");
        let mut emitter = CornerMapEmitter::new();
        emitter.append(&row);

        let corners = emitter.regions().get("img_0001.png").unwrap();
        assert_eq!(corners, &[0.25, 0.25, 0.5, 0.5]);

        let dir = temp_output_dir("cornermap");
        let path = emitter.flush(&dir)?;
        assert_eq!(path.file_name().unwrap(), CORNER_MAP_FILE);
        assert!(emitter.is_empty());
        Ok(())
    }
}
