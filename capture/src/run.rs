//! The capture orchestrator: subjects × viewpoints × environment
//! variants, strictly sequential. The camera pose is a single shared
//! mutable resource, so captures never overlap.

use crate::{
    common::*,
    config::{CaptureConfig, ExhaustedPolicy},
    perturb::place_with_jitter,
    scene::{FrameSink, Scene},
    sphere,
};
use dataset::{
    BoxMapEmitter, CornerMapEmitter, DatasetRow, Partition, Quality, RowEmitter, TabularEmitter,
};

/// One object to photograph. The name doubles as the class label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
}

impl Subject {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub images_captured: usize,
    pub rows_emitted: usize,
    pub dataset_files: Vec<PathBuf>,
}

pub struct CaptureSession<S, F>
where
    S: Scene,
    F: FrameSink,
{
    scene: S,
    frames: F,
    emitters: Vec<Box<dyn RowEmitter>>,
    config: CaptureConfig,
    rng: StdRng,
}

impl<S, F> CaptureSession<S, F>
where
    S: Scene,
    F: FrameSink,
{
    /// Builds a session with the three standard emitters (box map,
    /// AutoML tabular, corner map).
    pub fn new(scene: S, frames: F, config: CaptureConfig) -> Self {
        let emitters: Vec<Box<dyn RowEmitter>> = vec![
            Box::new(BoxMapEmitter::new()),
            Box::new(TabularEmitter::new()),
            Box::new(CornerMapEmitter::new()),
        ];
        Self::with_emitters(scene, frames, config, emitters)
    }

    pub fn with_emitters(
        scene: S,
        frames: F,
        config: CaptureConfig,
        emitters: Vec<Box<dyn RowEmitter>>,
    ) -> Self {
        Self {
            scene,
            frames,
            emitters,
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Captures every subject from every sphere viewpoint, then flushes
    /// all emitters.
    ///
    /// Missing configuration (no subjects, zero viewpoints, a subject
    /// that cannot be activated) is logged and skipped. IO failures
    /// propagate; files flushed before the failure remain on disk.
    pub fn run(&mut self, subjects: &[Subject]) -> Result<RunSummary> {
        self.run_with_cancel(subjects, &AtomicBool::new(false))
    }

    /// Same as [`run`](Self::run), but stops between subjects once
    /// `cancel` is set. Rows for subjects already completed stay valid
    /// and are flushed; nothing written earlier is rolled back.
    pub fn run_with_cancel(
        &mut self,
        subjects: &[Subject],
        cancel: &AtomicBool,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        if subjects.is_empty() {
            warn!("no subjects to capture, skipping run");
            return Ok(summary);
        }
        if self.config.viewpoints_per_subject == 0 {
            warn!("zero viewpoints per subject, skipping run");
            return Ok(summary);
        }

        let names: Vec<_> = subjects.iter().map(|subject| subject.name.as_str()).collect();
        if let Err(err) = self.scene.reset_subjects(&names) {
            warn!("cannot prepare capture targets, skipping run: {:#}", err);
            return Ok(summary);
        }

        for subject in subjects {
            if cancel.load(atomic::Ordering::Relaxed) {
                warn!("capture run cancelled, flushing completed subjects");
                break;
            }
            if let Err(err) = self.scene.activate_subject(&subject.name) {
                warn!("cannot activate subject '{}', skipping: {:#}", subject.name, err);
                continue;
            }
            self.capture_subject(subject, &mut summary)?;
            self.scene.deactivate_subject(&subject.name)?;
        }

        for emitter in &mut self.emitters {
            summary.dataset_files.push(emitter.flush(&self.config.output_dir)?);
        }

        info!(
            "captured {} images, emitted {} label rows",
            summary.images_captured, summary.rows_emitted
        );
        Ok(summary)
    }

    fn capture_subject(&mut self, subject: &Subject, summary: &mut RunSummary) -> Result<()> {
        let viewpoints = sphere::viewpoints(
            self.config.viewpoints_per_subject,
            self.config.radius,
            Point3::origin(),
        )?;

        let variants: Vec<Option<usize>> =
            if self.config.capture_per_variant && self.config.environment_variants > 0 {
                (0..self.config.environment_variants).map(Some).collect()
            } else {
                vec![None]
            };

        for (variant, viewpoint) in iproduct!(&variants, &viewpoints) {
            if let Some(index) = *variant {
                self.scene.set_environment(index)?;
            }

            let placement = place_with_jitter(
                &mut self.scene,
                &subject.name,
                viewpoint,
                &self.config.jitter,
                self.config.image_size,
                &mut self.rng,
            )?;

            // the frame is captured on any outcome; only rows with
            // geometry reach the emitters
            let filename = self.frames.capture_frame(&self.config.output_dir)?;
            summary.images_captured += 1;

            let (corner_region, box_region) = match placement.region {
                Some(region) => region,
                None => {
                    warn!(
                        "no projection for subject '{}' after {} attempts, dropping row for '{}'",
                        subject.name, placement.attempts_used, filename
                    );
                    continue;
                }
            };

            if !placement.accepted
                && self.config.jitter.exhausted_policy == ExhaustedPolicy::Discard
            {
                info!(
                    "retry budget exhausted for subject '{}', discarding row for '{}'",
                    subject.name, filename
                );
                continue;
            }

            let row = DatasetRow {
                filename,
                label: subject.name.clone(),
                corner_region,
                box_region,
                image_size: self.config.image_size,
                partition: Partition::Unassigned,
                quality: if placement.accepted {
                    Quality::InFrame
                } else {
                    Quality::BestEffort
                },
            };
            for emitter in &mut self.emitters {
                emitter.append(&row);
            }
            summary.rows_emitted += 1;
        }

        Ok(())
    }
}
