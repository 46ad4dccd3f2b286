//! Scattering pieces into the staging border around the target area.

use std::ops::Range;

use rand::Rng;

use crate::geometry::BoardGeometry;

/// The four border bands around the target area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagingZone {
    Top,
    Right,
    Bottom,
    Left,
}

impl StagingZone {
    /// Pieces are dealt round-robin over the four sides by id.
    pub fn for_piece(id: u32) -> Self {
        match id % 4 {
            0 => StagingZone::Top,
            1 => StagingZone::Right,
            2 => StagingZone::Bottom,
            _ => StagingZone::Left,
        }
    }

    /// Ranges the top-left corner of a `w`x`h` piece may be drawn from.
    /// A band thinner than the piece collapses to its starting edge.
    pub fn band(self, geo: &BoardGeometry, w: f64, h: f64) -> (Range<f64>, Range<f64>) {
        let target = geo.target_area();
        let full_x = 0.0..geo.total_width - w;
        let full_y = 0.0..geo.total_height - h;
        match self {
            StagingZone::Top => (full_x, 0.0..(target.y - h).max(0.0)),
            StagingZone::Right => (
                target.right()..target.right().max(geo.total_width - w),
                full_y,
            ),
            StagingZone::Bottom => (
                full_x,
                target.bottom()..target.bottom().max(geo.total_height - h),
            ),
            StagingZone::Left => (0.0..(target.x - w).max(0.0), full_y),
        }
    }
}

/// Pick a start position for piece `id` with an image of `w`x`h`.
pub fn scatter<R: Rng + ?Sized>(
    geo: &BoardGeometry,
    id: u32,
    w: f64,
    h: f64,
    rng: &mut R,
) -> (f64, f64) {
    let (xs, ys) = StagingZone::for_piece(id).band(geo, w, h);
    let x = sample(rng, xs).clamp(0.0, (geo.total_width - w).max(0.0));
    let y = sample(rng, ys).clamp(0.0, (geo.total_height - h).max(0.0));
    (x, y)
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: Range<f64>) -> f64 {
    if range.start < range.end {
        rng.random_range(range)
    } else {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn geo() -> BoardGeometry {
        BoardGeometry::new(800.0, 600.0, 3, 4, 1.5)
    }

    #[test]
    fn zones_rotate_by_id() {
        let zones: Vec<_> = (0..6).map(StagingZone::for_piece).collect();
        assert_eq!(
            zones,
            [
                StagingZone::Top,
                StagingZone::Right,
                StagingZone::Bottom,
                StagingZone::Left,
                StagingZone::Top,
                StagingZone::Right,
            ]
        );
    }

    #[test]
    fn scattered_pieces_stay_in_their_band() {
        let g = geo();
        let target = g.target_area();
        let mut rng = Pcg32::seed_from_u64(7);
        let (w, h) = (100.0, 80.0);
        for id in 0..200 {
            let (x, y) = scatter(&g, id, w, h, &mut rng);
            assert!(x >= 0.0 && x + w <= g.total_width, "x out of canvas: {x}");
            assert!(y >= 0.0 && y + h <= g.total_height, "y out of canvas: {y}");
            match StagingZone::for_piece(id) {
                StagingZone::Top => assert!(y + h <= target.y),
                StagingZone::Right => assert!(x >= target.right()),
                StagingZone::Bottom => assert!(y >= target.bottom()),
                StagingZone::Left => assert!(x + w <= target.x),
            }
        }
    }

    #[test]
    fn thin_band_collapses_to_its_edge() {
        let g = geo();
        let mut rng = Pcg32::seed_from_u64(1);
        // 180 tall does not fit in the 150 high top band.
        let (_, y) = scatter(&g, 0, 100.0, 180.0, &mut rng);
        assert_eq!(y, 0.0);
        // 250 wide does not fit in the 200 wide left band.
        let (x, _) = scatter(&g, 3, 250.0, 100.0, &mut rng);
        assert_eq!(x, 0.0);
    }

    #[test]
    fn oversized_right_piece_is_kept_on_canvas() {
        let g = geo();
        let mut rng = Pcg32::seed_from_u64(3);
        let (x, _) = scatter(&g, 1, 250.0, 100.0, &mut rng);
        assert_eq!(x, g.total_width - 250.0);
    }

    #[test]
    fn same_seed_same_layout() {
        let g = geo();
        let a: Vec<_> = {
            let mut rng = Pcg32::seed_from_u64(42);
            (0..12).map(|id| scatter(&g, id, 90.0, 90.0, &mut rng)).collect()
        };
        let b: Vec<_> = {
            let mut rng = Pcg32::seed_from_u64(42);
            (0..12).map(|id| scatter(&g, id, 90.0, 90.0, &mut rng)).collect()
        };
        assert_eq!(a, b);
    }
}
