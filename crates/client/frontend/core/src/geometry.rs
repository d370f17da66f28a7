//! Edge trimming so lines stop at node borders and leave room for arrowheads.

use glam::DVec2;

/// Node and arrowhead dimensions used when drawing edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeStyle {
    pub node_radius: f64,
    pub marker_width: f64,
    pub marker_height: f64,
    pub scale: f64,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            node_radius: 10.0,
            marker_width: 4.0,
            marker_height: 8.0,
            scale: 2.0,
        }
    }
}

impl EdgeStyle {
    pub fn circle_radius(&self) -> f64 {
        self.node_radius * self.scale
    }

    pub fn source_clearance(&self) -> f64 {
        self.circle_radius()
    }

    pub fn destination_clearance(&self) -> f64 {
        self.circle_radius() + self.marker_width * self.scale
    }

    /// Trims the edge between two node centres with this style's clearances.
    pub fn resolve(&self, from: DVec2, to: DVec2) -> Option<EdgeSegment> {
        resolve_edge(from, to, self.source_clearance(), self.destination_clearance())
    }

    /// Tip and the two base corners of the arrowhead drawn past `segment.to`.
    pub fn arrowhead(&self, segment: &EdgeSegment) -> Option<[DVec2; 3]> {
        let direction = (segment.to - segment.from).try_normalize()?;
        let tip = segment.to + direction * (self.marker_width * self.scale);
        let half_base = direction.perp() * (self.marker_height * self.scale / 2.0);
        Some([tip, segment.to + half_base, segment.to - half_base])
    }
}

/// The visible part of an edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeSegment {
    pub from: DVec2,
    pub to: DVec2,
}

/// Moves `from` forward by `source_clearance` and `to` back by
/// `destination_clearance` along the edge direction.
///
/// Returns `None` for coincident endpoints. When the nodes are too close for
/// both clearances the segment would flip; in that case the line starts at the
/// untouched `from` and the destination retreat shrinks in proportion to the
/// overlap.
pub fn resolve_edge(
    from: DVec2,
    to: DVec2,
    source_clearance: f64,
    destination_clearance: f64,
) -> Option<EdgeSegment> {
    let direction = to - from;
    let length = direction.length();
    if length == 0.0 {
        return None;
    }

    let normal = direction / length;
    let trimmed_from = from + normal * source_clearance;
    let trimmed_to = to - normal * destination_clearance;

    if !is_inverted(normal, trimmed_from, trimmed_to) {
        return Some(EdgeSegment {
            from: trimmed_from,
            to: trimmed_to,
        });
    }

    let shrink =
        1.0 - trimmed_from.distance(trimmed_to) / (source_clearance + destination_clearance);
    Some(EdgeSegment {
        from,
        to: to - normal * (shrink * destination_clearance),
    })
}

fn is_inverted(normal: DVec2, from: DVec2, to: DVec2) -> bool {
    (normal.x > 0.0 && from.x > to.x)
        || (normal.x < 0.0 && from.x < to.x)
        || (normal.y > 0.0 && from.y > to.y)
        || (normal.y < 0.0 && from.y < to.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: DVec2, b: DVec2) -> bool {
        a.distance(b) < EPSILON
    }

    #[test]
    fn coincident_endpoints_have_no_segment() {
        let p = DVec2::new(3.0, 4.0);
        assert_eq!(resolve_edge(p, p, 20.0, 28.0), None);
    }

    #[test]
    fn long_edge_is_trimmed_at_both_ends() {
        let segment = resolve_edge(DVec2::ZERO, DVec2::new(100.0, 0.0), 20.0, 28.0).unwrap();
        assert!(close(segment.from, DVec2::new(20.0, 0.0)));
        assert!(close(segment.to, DVec2::new(72.0, 0.0)));
    }

    #[test]
    fn diagonal_edge_keeps_its_direction() {
        let segment = resolve_edge(DVec2::ZERO, DVec2::new(30.0, 40.0), 5.0, 10.0).unwrap();
        assert!(close(segment.from, DVec2::new(3.0, 4.0)));
        assert!(close(segment.to, DVec2::new(24.0, 32.0)));
    }

    #[test]
    fn short_edge_shrinks_destination_retreat() {
        let segment = resolve_edge(DVec2::ZERO, DVec2::new(10.0, 0.0), 20.0, 28.0).unwrap();
        // trimmed points are 38 apart, so the retreat keeps 1 - 38/48 of 28
        assert!(close(segment.from, DVec2::ZERO));
        assert!(close(segment.to, DVec2::new(10.0 - 28.0 * 10.0 / 48.0, 0.0)));
    }

    #[test]
    fn inversion_is_detected_against_negative_direction() {
        let segment = resolve_edge(DVec2::new(0.0, 10.0), DVec2::ZERO, 20.0, 28.0).unwrap();
        assert!(close(segment.from, DVec2::new(0.0, 10.0)));
        assert!(segment.to.y > 0.0 && segment.to.y < 10.0);
    }

    #[test]
    fn arrowhead_tip_touches_destination_border() {
        let style = EdgeStyle::default();
        let segment = style.resolve(DVec2::ZERO, DVec2::new(100.0, 0.0)).unwrap();
        let [tip, left, right] = style.arrowhead(&segment).unwrap();

        assert!(close(tip, DVec2::new(80.0, 0.0)));
        assert!(close(left, DVec2::new(72.0, 8.0)));
        assert!(close(right, DVec2::new(72.0, -8.0)));
    }

    #[test]
    fn default_style_matches_renderer_constants() {
        let style = EdgeStyle::default();
        assert_eq!(style.source_clearance(), 20.0);
        assert_eq!(style.destination_clearance(), 28.0);
        assert!(style.resolve(DVec2::ONE, DVec2::ONE).is_none());
    }
}
