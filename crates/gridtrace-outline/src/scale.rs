//! Grid-to-output coordinate mapping.

use gridtrace_core::{MapPoint, OutlineError, Vertex};

/// Multiplies grid coordinates by a fixed integer factor.
///
/// Output is `i64`; every `i32` cell corner times every `u32` factor fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateMapper {
    scale: u32,
}

impl CoordinateMapper {
    /// A mapper with the given factor.
    ///
    /// # Errors
    ///
    /// [`OutlineError::InvalidScale`] if `scale` is zero.
    pub fn new(scale: u32) -> Result<Self, OutlineError> {
        if scale == 0 {
            return Err(OutlineError::InvalidScale { scale });
        }
        Ok(Self { scale })
    }

    /// A mapper scaling by `1 << bits`.
    ///
    /// # Errors
    ///
    /// [`OutlineError::InvalidShift`] if `bits >= 32`.
    pub fn from_shift(bits: u32) -> Result<Self, OutlineError> {
        let scale = 1u32
            .checked_shl(bits)
            .ok_or(OutlineError::InvalidShift { bits })?;
        Ok(Self { scale })
    }

    /// The 1:1 mapper.
    pub const fn identity() -> Self {
        Self { scale: 1 }
    }

    /// The factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Scale a single vertex.
    pub fn map_vertex(&self, vertex: Vertex) -> MapPoint {
        let s = i64::from(self.scale);
        MapPoint::new(vertex.x * s, vertex.z * s)
    }

    /// Scale a whole path, preserving order.
    pub fn map_path(&self, path: &[Vertex]) -> Vec<MapPoint> {
        path.iter().map(|&v| self.map_vertex(v)).collect()
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridtrace_core::{Cell, Heading};

    #[test]
    fn zero_scale_is_rejected() {
        assert_eq!(
            CoordinateMapper::new(0),
            Err(OutlineError::InvalidScale { scale: 0 })
        );
    }

    #[test]
    fn shift_matches_multiplication() {
        let shifted = CoordinateMapper::from_shift(8).unwrap();
        assert_eq!(shifted, CoordinateMapper::new(256).unwrap());
        assert_eq!(CoordinateMapper::from_shift(0).unwrap().scale(), 1);
        assert_eq!(CoordinateMapper::from_shift(31).unwrap().scale(), 1 << 31);
        assert_eq!(
            CoordinateMapper::from_shift(32),
            Err(OutlineError::InvalidShift { bits: 32 })
        );
    }

    #[test]
    fn maps_negative_coordinates() {
        let m = CoordinateMapper::new(16).unwrap();
        assert_eq!(m.map_vertex(Vertex::new(-2, 3)), MapPoint::new(-32, 48));
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let m = CoordinateMapper::new(u32::MAX).unwrap();
        let far = Vertex::of_cell(Cell::new(i32::MAX, i32::MIN)).step(Heading::East);
        let p = m.map_vertex(far);
        assert_eq!(p.x, (i64::from(i32::MAX) + 1) * i64::from(u32::MAX));
        assert_eq!(p.z, i64::from(i32::MIN) * i64::from(u32::MAX));
    }

    #[test]
    fn map_path_preserves_order() {
        let m = CoordinateMapper::new(2).unwrap();
        let path = [Vertex::new(0, 0), Vertex::new(1, 0), Vertex::new(1, 1)];
        assert_eq!(
            m.map_path(&path),
            vec![MapPoint::new(0, 0), MapPoint::new(2, 0), MapPoint::new(2, 2)]
        );
        assert_eq!(CoordinateMapper::default().map_path(&path).len(), 3);
    }
}
