//! Bounded-randomness camera placement. Each attempt rebuilds the pose
//! from the nominal viewpoint, so jitter never accumulates across
//! attempts and the look-at orientation cannot drift.

use crate::{
    common::*,
    config::Jitter,
    scene::{CameraPose, Scene},
    sphere::Viewpoint,
};
use bbox::{PixelSize, RatioBox, RatioCorners};

/// Outcome of the jittered placement loop for one viewpoint.
///
/// Retry exhaustion is a normal outcome, not an error: `accepted` is
/// false and `region` holds whatever the last projection produced. The
/// caller's policy decides whether to keep the capture.
#[derive(Debug, Clone)]
pub struct Placement {
    pub accepted: bool,
    pub attempts_used: usize,
    pub region: Option<(RatioCorners, RatioBox)>,
}

pub fn place_with_jitter<S, R>(
    scene: &mut S,
    subject: &str,
    nominal: &Viewpoint,
    jitter: &Jitter,
    image_size: PixelSize<u32>,
    rng: &mut R,
) -> Result<Placement>
where
    S: Scene + ?Sized,
    R: Rng + ?Sized,
{
    let aim = nominal.look_at - nominal.position;
    ensure!(
        aim.norm() > 0.0,
        "viewpoint coincides with its look-at target"
    );
    let view_axis = aim.normalize();

    // nominal pose first, so a best-effort region exists even with a
    // zero attempt budget
    scene.set_camera_pose(&CameraPose::aimed(nominal.position, nominal.look_at))?;
    let mut region = scene
        .project_subject(subject)
        .map(|rect| (rect.ratio_corners(&image_size), rect.ratio_box(&image_size)));

    let mut accepted = false;
    let mut attempts_used = 0;

    while attempts_used < jitter.max_attempts {
        attempts_used += 1;

        let distance_offset =
            rng.gen_range(-jitter.distance_range..=jitter.distance_range);
        let euler_offset = Vector3::new(
            rng.gen_range(-jitter.rotation_range.x..=jitter.rotation_range.x),
            rng.gen_range(-jitter.rotation_range.y..=jitter.rotation_range.y),
            rng.gen_range(-jitter.rotation_range.z..=jitter.rotation_range.z),
        );

        let pose = CameraPose {
            position: nominal.position + view_axis * distance_offset,
            look_at: nominal.look_at,
            euler_offset,
        };
        scene.set_camera_pose(&pose)?;

        // an unavailable projection burns the attempt
        let rect = match scene.project_subject(subject) {
            Some(rect) => rect,
            None => continue,
        };

        let corners = rect.ratio_corners(&image_size);
        let inside = corners.fully_inside_frame();
        region = Some((corners, rect.ratio_box(&image_size)));

        if inside {
            accepted = true;
            break;
        }
    }

    Ok(Placement {
        accepted,
        attempts_used,
        region,
    })
}
