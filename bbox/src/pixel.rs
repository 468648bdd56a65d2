use crate::common::*;

/// Raw subject rectangle in pixel space, as reported by a projector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect<T> {
    pub(crate) x: T,
    pub(crate) y: T,
    pub(crate) w: T,
    pub(crate) h: T,
}

impl<T> PixelRect<T>
where
    T: Copy + Num + PartialOrd,
{
    pub fn try_new(x: T, y: T, w: T, h: T) -> Result<Self> {
        ensure!(
            w >= T::zero() && h >= T::zero(),
            "w and h must be non-negative"
        );
        Ok(Self { x, y, w, h })
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }

    /// Corner coordinates `[x_min, y_min, x_max, y_max]`.
    pub fn corners(&self) -> [T; 4] {
        let Self { x, y, w, h } = *self;
        [x, y, x + w, y + h]
    }
}

impl<T> PixelRect<T> {
    pub fn try_cast<V>(self) -> Option<PixelRect<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(PixelRect {
            x: V::from(self.x)?,
            y: V::from(self.y)?,
            w: V::from(self.w)?,
            h: V::from(self.h)?,
        })
    }

    pub fn cast<V>(self) -> PixelRect<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}

/// Render target dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelSize<T> {
    pub(crate) w: T,
    pub(crate) h: T,
}

impl<T> PixelSize<T>
where
    T: Copy + Num + PartialOrd,
{
    pub fn try_new(w: T, h: T) -> Result<Self> {
        ensure!(
            w > T::zero() && h > T::zero(),
            "image dimensions must be positive"
        );
        Ok(Self { w, h })
    }

    pub fn w(&self) -> T {
        self.w
    }

    pub fn h(&self) -> T {
        self.h
    }
}

impl<T> PixelSize<T> {
    pub fn try_cast<V>(self) -> Option<PixelSize<V>>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        Some(PixelSize {
            w: V::from(self.w)?,
            h: V::from(self.h)?,
        })
    }

    pub fn cast<V>(self) -> PixelSize<V>
    where
        T: ToPrimitive,
        V: NumCast,
    {
        self.try_cast().unwrap()
    }
}
