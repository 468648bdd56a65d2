//! Capture run configuration format.

use crate::common::*;
use bbox::PixelSize;

/// Policy for captures whose retry budget ran out while the subject was
/// still partially out of frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExhaustedPolicy {
    /// Emit the row but mark it best-effort.
    KeepFlagged,
    /// Drop the row; the frame file is still written.
    Discard,
}

impl Default for ExhaustedPolicy {
    fn default() -> Self {
        Self::KeepFlagged
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JitterInit {
    /// Uniform offset range along the view axis, in world units.
    pub distance_range: R64,
    /// Per-axis uniform euler offset ranges, in degrees.
    pub rotation_range: [R64; 3],
    pub max_attempts: usize,
    #[serde(default)]
    pub exhausted_policy: ExhaustedPolicy,
}

impl JitterInit {
    pub fn build(self) -> Result<Jitter> {
        let Self {
            distance_range,
            rotation_range,
            max_attempts,
            exhausted_policy,
        } = self;

        ensure!(distance_range >= 0.0, "distance_range must be non-negative");
        for range in &rotation_range {
            ensure!(*range >= 0.0, "rotation_range must be non-negative");
        }

        Ok(Jitter {
            distance_range: distance_range.raw(),
            rotation_range: Vector3::new(
                rotation_range[0].raw(),
                rotation_range[1].raw(),
                rotation_range[2].raw(),
            ),
            max_attempts,
            exhausted_policy,
        })
    }
}

impl Default for JitterInit {
    fn default() -> Self {
        Self {
            distance_range: r64(3.0),
            rotation_range: [r64(10.0), r64(10.0), r64(180.0)],
            max_attempts: 5,
            exhausted_policy: ExhaustedPolicy::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Jitter {
    pub distance_range: f64,
    pub rotation_range: Vector3<f64>,
    pub max_attempts: usize,
    pub exhausted_policy: ExhaustedPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfigInit {
    pub viewpoints_per_subject: usize,
    pub radius: R64,
    pub image_width: u32,
    pub image_height: u32,
    /// Number of environment variants (e.g. skyboxes) to cycle through.
    #[serde(default)]
    pub environment_variants: usize,
    /// When set, every viewpoint is captured once per variant.
    #[serde(default)]
    pub capture_per_variant: bool,
    #[serde(default)]
    pub jitter: JitterInit,
    pub output_dir: PathBuf,
}

impl CaptureConfigInit {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = std::fs::read_to_string(path)?;
        let init = json5::from_str(&text)?;
        Ok(init)
    }

    pub fn build(self) -> Result<CaptureConfig> {
        let Self {
            viewpoints_per_subject,
            radius,
            image_width,
            image_height,
            environment_variants,
            capture_per_variant,
            jitter,
            output_dir,
        } = self;

        ensure!(radius > 0.0, "radius must be positive");
        let image_size = PixelSize::try_new(image_width, image_height)?;

        Ok(CaptureConfig {
            viewpoints_per_subject,
            radius: radius.raw(),
            image_size,
            environment_variants,
            capture_per_variant,
            jitter: jitter.build()?,
            output_dir,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub viewpoints_per_subject: usize,
    pub radius: f64,
    pub image_size: PixelSize<u32>,
    pub environment_variants: usize,
    pub capture_per_variant: bool,
    pub jitter: Jitter,
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json5_config() -> Result<()> {
        let text = r#"{
            viewpoints_per_subject: 300,
            radius: 5.0,
            image_width: 512,
            image_height: 512,
            environment_variants: 3,
            capture_per_variant: true,
            jitter: {
                distance_range: 3.0,
                rotation_range: [10.0, 10.0, 180.0],
                max_attempts: 5,
            },
            output_dir: "dataset",
        }"#;

        let init: CaptureConfigInit = json5::from_str(text)?;
        let config = init.build()?;
        assert_eq!(config.viewpoints_per_subject, 300);
        assert_eq!(config.image_size.w(), 512);
        assert_eq!(config.jitter.max_attempts, 5);
        assert_eq!(config.jitter.exhausted_policy, ExhaustedPolicy::KeepFlagged);
        Ok(())
    }

    #[test]
    fn rejects_negative_jitter_ranges() {
        let init = JitterInit {
            distance_range: r64(-1.0),
            ..JitterInit::default()
        };
        assert!(init.build().is_err());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let init = CaptureConfigInit {
            viewpoints_per_subject: 4,
            radius: r64(0.0),
            image_width: 512,
            image_height: 512,
            environment_variants: 0,
            capture_per_variant: false,
            jitter: JitterInit::default(),
            output_dir: "dataset".into(),
        };
        assert!(init.build().is_err());
    }
}
