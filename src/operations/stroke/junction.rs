use crate::geometry::Line;
use crate::math::POINT_TOLERANCE;

/// Every line meeting `line` at its end point, oriented to start there.
///
/// The first entry is `line` itself, reversed. When the junction lies on a
/// tile edge, the far point of each line found so far is mirrored across
/// that edge and added as a virtual neighbor standing in for the adjacent
/// tile. Mirrors found at one edge are mirrored again at the next, so a
/// junction on a tile corner sees all four quadrants.
#[must_use]
pub fn find_junction_neighbors(line: &Line, lines: &[Line], tile_edges: &[Line]) -> Vec<Line> {
    let joint = line.end;
    let mut found = vec![line.reversed()];

    for candidate in lines {
        if candidate.same_as(line) {
            continue;
        }
        if candidate.has_endpoint(&joint) {
            found.push(candidate.oriented_from(&joint));
        }
    }

    for edge in tile_edges {
        if edge.distance_to(&joint) >= POINT_TOLERANCE {
            continue;
        }
        let mirrored: Vec<Line> = found
            .iter()
            .map(|neighbor| Line::new(joint, edge.reflect(&neighbor.end)))
            .collect();
        for candidate in mirrored {
            if !found.iter().any(|f| f.same_as(&candidate)) {
                found.push(candidate);
            }
        }
    }

    found
}
