/// WGS84 position, degrees. Longitude first, matching GeoJSON coordinate
/// order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl LonLat {
    pub const fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }
}

/// One linear ring. GeoJSON closes rings by repeating the first position;
/// the containment test tolerates both closed and unclosed rings.
pub type Ring = Vec<LonLat>;

/// Polygon with optional interior rings. The first ring is the exterior,
/// the rest are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub rings: Vec<Ring>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Polygon),
    MultiPolygon(Vec<Polygon>),
}

/// Axis-aligned bounds in lon/lat degrees, used only as a rejection test
/// before the exact containment check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min: LonLat,
    pub max: LonLat,
}

impl BBox {
    pub fn contains(&self, p: LonLat) -> bool {
        p.lon_deg >= self.min.lon_deg
            && p.lon_deg <= self.max.lon_deg
            && p.lat_deg >= self.min.lat_deg
            && p.lat_deg <= self.max.lat_deg
    }

    /// Bounds of every vertex in the geometry. `None` when the geometry has
    /// no vertices at all.
    pub fn of_geometry(geometry: &Geometry) -> Option<Self> {
        let mut bounds: Option<Self> = None;
        for polygon in geometry.polygons() {
            for ring in &polygon.rings {
                for &p in ring {
                    bounds = Some(match bounds {
                        None => BBox { min: p, max: p },
                        Some(b) => BBox {
                            min: LonLat::new(
                                b.min.lon_deg.min(p.lon_deg),
                                b.min.lat_deg.min(p.lat_deg),
                            ),
                            max: LonLat::new(
                                b.max.lon_deg.max(p.lon_deg),
                                b.max.lat_deg.max(p.lat_deg),
                            ),
                        },
                    });
                }
            }
        }
        bounds
    }
}

impl Polygon {
    /// Even-odd containment over all rings, so points inside a hole are
    /// outside the polygon. Points exactly on an edge may land on either
    /// side; tract borders share edges, so a boundary click resolves to one
    /// of the adjacent tracts either way.
    pub fn contains(&self, p: LonLat) -> bool {
        self.rings
            .iter()
            .fold(false, |inside, ring| inside ^ ring_crossings_odd(ring, p))
    }
}

impl Geometry {
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Geometry::Polygon(polygon) => std::slice::from_ref(polygon),
            Geometry::MultiPolygon(polygons) => polygons,
        }
    }

    pub fn contains(&self, p: LonLat) -> bool {
        self.polygons().iter().any(|polygon| polygon.contains(p))
    }
}

/// Ray cast east from `p`, true when the crossing count is odd. Degenerate
/// rings (fewer than three vertices) contain nothing.
fn ring_crossings_odd(ring: &[LonLat], p: LonLat) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[j];
        if (a.lat_deg > p.lat_deg) != (b.lat_deg > p.lat_deg) {
            let t = (p.lat_deg - a.lat_deg) / (b.lat_deg - a.lat_deg);
            if p.lon_deg < a.lon_deg + t * (b.lon_deg - a.lon_deg) {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Ring {
        vec![
            LonLat::new(min, min),
            LonLat::new(max, min),
            LonLat::new(max, max),
            LonLat::new(min, max),
            LonLat::new(min, min),
        ]
    }

    #[test]
    fn point_in_simple_polygon() {
        let polygon = Polygon {
            rings: vec![square(0.0, 4.0)],
        };
        assert!(polygon.contains(LonLat::new(2.0, 2.0)));
        assert!(!polygon.contains(LonLat::new(5.0, 2.0)));
        assert!(!polygon.contains(LonLat::new(2.0, -1.0)));
    }

    #[test]
    fn hole_excludes_interior_points() {
        let polygon = Polygon {
            rings: vec![square(0.0, 4.0), square(1.0, 3.0)],
        };
        assert!(polygon.contains(LonLat::new(0.5, 0.5)));
        assert!(!polygon.contains(LonLat::new(2.0, 2.0)));
    }

    #[test]
    fn unclosed_ring_still_contains() {
        let mut ring = square(0.0, 4.0);
        ring.pop();
        let polygon = Polygon { rings: vec![ring] };
        assert!(polygon.contains(LonLat::new(2.0, 2.0)));
    }

    #[test]
    fn multipolygon_checks_every_part() {
        let geometry = Geometry::MultiPolygon(vec![
            Polygon {
                rings: vec![square(0.0, 1.0)],
            },
            Polygon {
                rings: vec![square(10.0, 11.0)],
            },
        ]);
        assert!(geometry.contains(LonLat::new(0.5, 0.5)));
        assert!(geometry.contains(LonLat::new(10.5, 10.5)));
        assert!(!geometry.contains(LonLat::new(5.0, 5.0)));
    }

    #[test]
    fn bbox_spans_all_parts() {
        let geometry = Geometry::MultiPolygon(vec![
            Polygon {
                rings: vec![square(0.0, 1.0)],
            },
            Polygon {
                rings: vec![square(10.0, 11.0)],
            },
        ]);
        let bounds = BBox::of_geometry(&geometry).unwrap();
        assert_eq!(bounds.min, LonLat::new(0.0, 0.0));
        assert_eq!(bounds.max, LonLat::new(11.0, 11.0));
        assert!(bounds.contains(LonLat::new(5.0, 5.0)));
        assert!(!bounds.contains(LonLat::new(12.0, 5.0)));
    }

    #[test]
    fn degenerate_ring_contains_nothing() {
        let polygon = Polygon {
            rings: vec![vec![LonLat::new(0.0, 0.0), LonLat::new(1.0, 1.0)]],
        };
        assert!(!polygon.contains(LonLat::new(0.5, 0.5)));
    }
}
