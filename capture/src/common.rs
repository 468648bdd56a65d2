pub use anyhow::{ensure, Context as _, Result};
pub use itertools::iproduct;
pub use log::{info, warn};
pub use nalgebra::{Point3, Vector3};
pub use noisy_float::prelude::*;
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    path::{Path, PathBuf},
    sync::atomic::{self, AtomicBool},
};
