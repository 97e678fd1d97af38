use glam::DVec2;

/// Tolerance for an intersection landing on the edge it was computed for.
const EDGE_EPS: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: DVec2,
    pub b: DVec2,
}

impl Segment {
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self { a, b }
    }

    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }
}

/// Clips screen-space segments to the surface rectangle [0, w] × [0, h].
#[derive(Debug, Clone, Copy)]
pub struct LineClipper {
    width: f64,
    height: f64,
}

impl LineClipper {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x <= self.width && p.y <= self.height
    }

    /// The visible part of `a → b`, or `None` if nothing of it is visible.
    ///
    /// Inside endpoints are kept exactly; outside ones are replaced by the
    /// edge crossing nearest to them along the segment.
    pub fn clip(&self, a: DVec2, b: DVec2) -> Option<Segment> {
        let a_in = self.contains(a);
        let b_in = self.contains(b);
        if a_in && b_in {
            return Some(Segment::new(a, b));
        }

        let mut hits: Vec<(f64, DVec2)> = Vec::with_capacity(6);
        if a_in {
            hits.push((0.0, a));
        }
        if b_in {
            hits.push((1.0, b));
        }

        let d = b - a;
        // Only exactly parallel edges are skipped; any nonzero slope gives a
        // finite t.
        if d.x != 0.0 {
            for x in [0.0, self.width] {
                let t = (x - a.x) / d.x;
                let y = a.y + t * d.y;
                if (0.0..=1.0).contains(&t) && y >= -EDGE_EPS && y <= self.height + EDGE_EPS {
                    hits.push((t, DVec2::new(x, y.clamp(0.0, self.height))));
                }
            }
        }
        if d.y != 0.0 {
            for y in [0.0, self.height] {
                let t = (y - a.y) / d.y;
                let x = a.x + t * d.x;
                if (0.0..=1.0).contains(&t) && x >= -EDGE_EPS && x <= self.width + EDGE_EPS {
                    hits.push((t, DVec2::new(x.clamp(0.0, self.width), y)));
                }
            }
        }

        let first = hits.iter().copied().min_by(|l, r| l.0.total_cmp(&r.0))?;
        let last = hits.iter().copied().max_by(|l, r| l.0.total_cmp(&r.0))?;
        if first.1 == last.1 {
            // Touches a corner or grazes an edge at a single point.
            return None;
        }
        Some(Segment::new(first.1, last.1))
    }
}
