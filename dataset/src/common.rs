pub use anyhow::{Context as _, Result};
pub use indexmap::IndexMap;
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt,
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};
