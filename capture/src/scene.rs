//! Contracts with the excluded rendering collaborators. The scene owns
//! camera and subject state; the capture core only writes poses and
//! reads projections through these traits.

use crate::common::*;
use bbox::PixelRect;

/// Camera placement pushed to the rendering collaborator. The euler
/// offset is an incremental per-axis rotation in degrees, applied on
/// top of the look-at orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Point3<f64>,
    pub look_at: Point3<f64>,
    pub euler_offset: Vector3<f64>,
}

impl CameraPose {
    pub fn aimed(position: Point3<f64>, look_at: Point3<f64>) -> Self {
        Self {
            position,
            look_at,
            euler_offset: Vector3::zeros(),
        }
    }
}

/// Renderer/projector collaborator.
pub trait Scene {
    /// Rebuilds the pool of capture targets for a run. Called once at
    /// run start, before any subject is activated.
    fn reset_subjects(&mut self, subjects: &[&str]) -> Result<()>;

    fn activate_subject(&mut self, subject: &str) -> Result<()>;

    fn deactivate_subject(&mut self, subject: &str) -> Result<()>;

    /// Switches the environment variant (e.g. skybox index).
    fn set_environment(&mut self, index: usize) -> Result<()>;

    fn set_camera_pose(&mut self, pose: &CameraPose) -> Result<()>;

    /// The subject's on-screen rectangle under the current camera
    /// state, in pixel space of the render target. `None` when the
    /// projector cannot produce a rectangle.
    fn project_subject(&self, subject: &str) -> Option<PixelRect<f64>>;
}

/// Screenshot collaborator. The render target resolution is configured
/// externally to match the dataset image size.
pub trait FrameSink {
    /// Writes the current frame to a file under `dir` and returns its
    /// filename.
    fn capture_frame(&mut self, dir: &Path) -> Result<String>;
}
