use crate::common::*;
use bbox::{PixelSize, RatioBox, RatioCorners};

/// Dataset split assignment, decided downstream of the capture core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Partition {
    Unassigned,
    Train,
    Validation,
    Test,
}

impl Default for Partition {
    fn default() -> Self {
        Self::Unassigned
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Unassigned => "UNASSIGNED",
            Self::Train => "TRAIN",
            Self::Validation => "VALIDATION",
            Self::Test => "TEST",
        };
        f.write_str(text)
    }
}

/// Marks rows whose perturbation retry budget ran out before the subject
/// fit entirely inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    InFrame,
    BestEffort,
}

/// One labeled capture. Both geometry forms are derived once from the
/// same pixel rect, so every emitter describes the same box.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRow {
    pub filename: String,
    pub label: String,
    pub corner_region: RatioCorners,
    pub box_region: RatioBox,
    pub image_size: PixelSize<u32>,
    pub partition: Partition,
    pub quality: Quality,
}
