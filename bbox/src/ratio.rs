use crate::{common::*, PixelRect, PixelSize};

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Corner-form region normalized to the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioCorners {
    pub(crate) x_min: f64,
    pub(crate) y_min: f64,
    pub(crate) x_max: f64,
    pub(crate) y_max: f64,
}

impl RatioCorners {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "min corner must not exceed max corner"
        );
        let values = [x_min, y_min, x_max, y_max];
        ensure!(
            values.iter().all(|&v| (0.0..=1.0).contains(&v)),
            "corner coordinates must lie in [0, 1]"
        );
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn w(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn h(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }

    /// True when the whole region sits strictly inside the open frame,
    /// so no corner required clamping.
    pub fn fully_inside_frame(&self) -> bool {
        self.x_min > 0.0 && self.y_min > 0.0 && self.x_max < 1.0 && self.y_max < 1.0
    }
}

/// Box-form region normalized to the unit square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBox {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) w: f64,
    pub(crate) h: f64,
}

impl RatioBox {
    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<Self> {
        let values = [x, y, w, h];
        ensure!(
            values.iter().all(|&v| (0.0..=1.0).contains(&v)),
            "box coordinates must lie in [0, 1]"
        );
        Ok(Self { x, y, w, h })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn h(&self) -> f64 {
        self.h
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.x, self.y, self.w, self.h]
    }
}

impl<T> PixelRect<T>
where
    T: Copy + ToPrimitive,
{
    /// Normalizes to corner form. The max corner is computed from the
    /// unclamped `x + w` / `y + h` sums, then each of the four values
    /// clamps to [0, 1] independently, so a partially off-screen rect
    /// keeps its visible extent instead of collapsing.
    pub fn ratio_corners<U>(&self, size: &PixelSize<U>) -> RatioCorners
    where
        U: Copy + ToPrimitive,
    {
        let PixelRect { x, y, w, h } = self.cast::<f64>();
        let PixelSize { w: iw, h: ih } = size.cast::<f64>();

        RatioCorners {
            x_min: clamp_unit(x / iw),
            y_min: clamp_unit(y / ih),
            x_max: clamp_unit((x + w) / iw),
            y_max: clamp_unit((y + h) / ih),
        }
    }

    /// Normalizes to box form; each axis divides by its own image dimension.
    pub fn ratio_box<U>(&self, size: &PixelSize<U>) -> RatioBox
    where
        U: Copy + ToPrimitive,
    {
        let PixelRect { x, y, w, h } = self.cast::<f64>();
        let PixelSize { w: iw, h: ih } = size.cast::<f64>();

        RatioBox {
            x: clamp_unit(x / iw),
            y: clamp_unit(y / ih),
            w: clamp_unit(w / iw),
            h: clamp_unit(h / ih),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn unit_range(values: [f64; 4]) -> bool {
        values.iter().all(|&v| (0.0..=1.0).contains(&v))
    }

    #[test]
    fn normalized_values_stay_in_unit_range() -> Result<()> {
        let size = PixelSize::try_new(512u32, 256)?;
        let rects = [
            PixelRect::try_new(-100.0, -50.0, 30.0, 30.0)?,
            PixelRect::try_new(0.0, 0.0, 0.0, 0.0)?,
            PixelRect::try_new(480.0, 240.0, 200.0, 200.0)?,
            PixelRect::try_new(1000.0, 1000.0, 10.0, 10.0)?,
        ];

        for rect in rects {
            assert!(unit_range(rect.ratio_corners(&size).to_array()));
            assert!(unit_range(rect.ratio_box(&size).to_array()));
        }
        Ok(())
    }

    #[test]
    fn in_bounds_rect_is_undistorted() -> Result<()> {
        let size = PixelSize::try_new(512u32, 256)?;
        let rect = PixelRect::try_new(32.0, 48.0, 100.0, 60.0)?;

        let corners = rect.ratio_corners(&size);
        let ratio_box = rect.ratio_box(&size);

        assert_abs_diff_eq!(corners.w(), ratio_box.w(), epsilon = 1e-9);
        assert_abs_diff_eq!(corners.h(), ratio_box.h(), epsilon = 1e-9);
        assert_abs_diff_eq!(corners.x_min(), ratio_box.x(), epsilon = 1e-9);
        assert_abs_diff_eq!(corners.y_min(), ratio_box.y(), epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn edge_straddling_rect_clamps_corners_independently() -> Result<()> {
        let size = PixelSize::try_new(512u32, 512)?;
        let rect = PixelRect::try_new(400.0, 500.0, 150.0, 50.0)?;

        let corners = rect.ratio_corners(&size);
        assert_abs_diff_eq!(corners.x_min(), 400.0 / 512.0, epsilon = 1e-9);
        assert_abs_diff_eq!(corners.y_min(), 500.0 / 512.0, epsilon = 1e-9);
        assert_abs_diff_eq!(corners.x_max(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(corners.y_max(), 1.0, epsilon = 1e-9);

        let ratio_box = rect.ratio_box(&size);
        assert_abs_diff_eq!(ratio_box.x(), 0.78125, epsilon = 1e-4);
        assert_abs_diff_eq!(ratio_box.y(), 0.9765625, epsilon = 1e-4);
        assert_abs_diff_eq!(ratio_box.w(), 0.29296875, epsilon = 1e-4);
        assert_abs_diff_eq!(ratio_box.h(), 0.09765625, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn strict_inside_frame_test_rejects_touching_borders() -> Result<()> {
        let inside = RatioCorners::try_new(0.1, 0.1, 0.9, 0.9)?;
        assert!(inside.fully_inside_frame());

        let touching_left = RatioCorners::try_new(0.0, 0.1, 0.9, 0.9)?;
        assert!(!touching_left.fully_inside_frame());

        let touching_bottom = RatioCorners::try_new(0.1, 0.1, 0.9, 1.0)?;
        assert!(!touching_bottom.fully_inside_frame());
        Ok(())
    }

    #[test]
    fn rejects_inverted_corners() {
        assert!(RatioCorners::try_new(0.5, 0.1, 0.4, 0.9).is_err());
        assert!(RatioCorners::try_new(0.1, 0.9, 0.4, 0.5).is_err());
        assert!(RatioBox::try_new(0.1, 0.1, 1.5, 0.5).is_err());
    }
}
