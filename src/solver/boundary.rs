use crate::field::Field;

/// Field type for boundary condition dispatch.
/// Pressure and divergence use `Density`: plain mirroring, no sign flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Density,
    VelocityX,
    VelocityY,
}

impl FieldType {
    fn flips_x(self) -> bool {
        self == FieldType::VelocityX
    }

    fn flips_y(self) -> bool {
        self == FieldType::VelocityY
    }
}

/// Solid-wall boundary conditions on all four sides.
///   - `FieldType::Density`: Neumann (copy neighbor) at every wall
///   - `FieldType::VelocityX`: negate at left/right walls (no penetration)
///   - `FieldType::VelocityY`: negate at top/bottom walls (no penetration)
/// Corners take the mean of their two edge neighbors.
pub fn set_bnd(field_type: FieldType, x: &mut Field) {
    let n = x.grid_size();
    let sx = if field_type.flips_x() { -1.0 } else { 1.0 };
    let sy = if field_type.flips_y() { -1.0 } else { 1.0 };

    for k in 1..=n {
        x.put(0, k, sx * x.at(1, k));
        x.put(n + 1, k, sx * x.at(n, k));
        x.put(k, 0, sy * x.at(k, 1));
        x.put(k, n + 1, sy * x.at(k, n));
    }

    x.put(0, 0, 0.5 * (x.at(0, 1) + x.at(1, 0)));
    x.put(n + 1, 0, 0.5 * (x.at(n, 0) + x.at(n + 1, 1)));
    x.put(0, n + 1, 0.5 * (x.at(0, n) + x.at(1, n + 1)));
    x.put(n + 1, n + 1, 0.5 * (x.at(n, n + 1) + x.at(n + 1, n)));
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: usize = 8;

    fn ramp() -> Field {
        let mut f = Field::new(N);
        for x in 0..N {
            for y in 0..N {
                f.set(x, y, (x * N + y) as f64 + 1.0).unwrap();
            }
        }
        f
    }

    #[test]
    fn test_set_bnd_density_copies_neighbor() {
        let mut f = ramp();
        set_bnd(FieldType::Density, &mut f);
        for k in 1..=N {
            assert_eq!(f.at(0, k), f.at(1, k), "left ghost should copy column 1");
            assert_eq!(f.at(N + 1, k), f.at(N, k), "right ghost should copy column N");
            assert_eq!(f.at(k, 0), f.at(k, 1), "bottom ghost should copy row 1");
            assert_eq!(f.at(k, N + 1), f.at(k, N), "top ghost should copy row N");
        }
    }

    #[test]
    fn test_set_bnd_vx_reflects_side_walls() {
        let mut f = ramp();
        set_bnd(FieldType::VelocityX, &mut f);
        for k in 1..=N {
            assert_eq!(f.at(0, k), -f.at(1, k), "vx should negate at left wall, row {}", k);
            assert_eq!(f.at(N + 1, k), -f.at(N, k), "vx should negate at right wall, row {}", k);
            assert_eq!(f.at(k, 0), f.at(k, 1), "vx should mirror at bottom wall");
            assert_eq!(f.at(k, N + 1), f.at(k, N), "vx should mirror at top wall");
        }
    }

    #[test]
    fn test_set_bnd_vy_reflects_floor_and_ceiling() {
        let mut f = ramp();
        set_bnd(FieldType::VelocityY, &mut f);
        for k in 1..=N {
            assert_eq!(f.at(k, 0), -f.at(k, 1), "vy should negate at bottom wall");
            assert_eq!(f.at(k, N + 1), -f.at(k, N), "vy should negate at top wall");
            assert_eq!(f.at(0, k), f.at(1, k), "vy should mirror at left wall");
        }
    }

    #[test]
    fn test_corners_average_edges() {
        let mut f = ramp();
        set_bnd(FieldType::VelocityX, &mut f);
        assert_eq!(f.at(0, 0), 0.5 * (f.at(0, 1) + f.at(1, 0)));
        assert_eq!(f.at(N + 1, 0), 0.5 * (f.at(N, 0) + f.at(N + 1, 1)));
        assert_eq!(f.at(0, N + 1), 0.5 * (f.at(0, N) + f.at(1, N + 1)));
        assert_eq!(f.at(N + 1, N + 1), 0.5 * (f.at(N, N + 1) + f.at(N + 1, N)));
    }

    #[test]
    fn test_set_bnd_leaves_interior() {
        let mut f = ramp();
        let before: Vec<f64> = f.interior().collect();
        set_bnd(FieldType::VelocityY, &mut f);
        let after: Vec<f64> = f.interior().collect();
        assert_eq!(before, after);
    }
}
