use crate::view::Position;
use ahash::AHashMap;

/// Recenters a computed layout by pulling every node left by `fraction` of
/// the maximum x.
///
/// The layout pass always starts roots flush at `x = 0`, so wide diagrams
/// drift rightward as they grow; removing a fixed share of the span keeps
/// the framing consistent regardless of how far the tree reaches.
pub fn shift_left(
    mut positions: AHashMap<String, Position>,
    fraction: f32,
) -> AHashMap<String, Position> {
    let max_x = positions
        .values()
        .map(|p| p.x)
        .fold(f32::NEG_INFINITY, f32::max);
    if !max_x.is_finite() || max_x <= 0.0 {
        return positions;
    }

    let offset = max_x * fraction;
    for position in positions.values_mut() {
        position.x -= offset;
    }
    positions
}
