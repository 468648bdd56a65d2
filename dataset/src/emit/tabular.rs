use super::RowEmitter;
use crate::{common::*, row::DatasetRow};

pub const TABULAR_FILE: &str = "automl_dataset.csv";

/// AutoML-style delimited rows, one per capture:
/// `partition,filename,label,x_min,y_min,,,x_max,y_max`. The two blank
/// fields keep the 4-corner polygon column convention.
#[derive(Debug, Default)]
pub struct TabularEmitter {
    rows: Vec<DatasetRow>,
}

impl TabularEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }
}

impl RowEmitter for TabularEmitter {
    fn append(&mut self, row: &DatasetRow) {
        self.rows.push(row.clone());
    }

    fn len(&self) -> usize {
        self.rows.len()
    }

    fn flush(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(TABULAR_FILE);
        let writer = BufWriter::new(
            File::create(&path).with_context(|| format!("cannot create '{}'", path.display()))?,
        );
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        for row in &self.rows {
            let corners = row.corner_region;
            writer.write_record([
                row.partition.to_string(),
                row.filename.clone(),
                row.label.clone(),
                corners.x_min().to_string(),
                corners.y_min().to_string(),
                String::new(),
                String::new(),
                corners.x_max().to_string(),
                corners.y_max().to_string(),
            ])?;
        }
        writer.flush()?;

        self.rows.clear();
        Ok(path)
    }
}
