//! Viewpoint sampling and labeled capture orchestration around an
//! external renderer.
//!
//! The capture loop photographs each subject from a deterministic set
//! of sphere viewpoints, jitters every camera pose within bounded
//! randomness until the subject fits inside the frame, and hands the
//! normalized region of each accepted frame to the dataset emitters.

mod common;

pub mod config;
pub use config::*;

pub mod perturb;
pub use perturb::*;

pub mod run;
pub use run::*;

pub mod scene;
pub use scene::*;

pub mod sphere;
pub use sphere::*;
