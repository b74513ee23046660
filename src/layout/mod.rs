mod shift;

pub use shift::shift_left;

use crate::view::Position;
use crate::visibility::VisibleGraph;
use ahash::{AHashMap, AHashSet};

/// Spacing configuration for the tree layout.
///
/// Deeper levels get additional horizontal padding so long chains do not
/// collide with wide shallow branches, and subtrees with many descendants
/// reserve proportionally more vertical room.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Base x advance from a parent to its children.
    pub horizontal_pad: f32,
    /// Extra x advance per nesting level.
    pub level_pad: f32,
    /// Minimum vertical slot per sibling subtree.
    pub vertical_pad: f32,
    /// Additional slot height per direct child of a sibling subtree.
    pub extra_spacing: f32,
    /// Minimum gap between consecutive root subtrees.
    pub root_gap: f32,
    /// Fraction of the maximum x removed by the shift pass.
    pub shift_fraction: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_pad: 260.0,
            level_pad: 40.0,
            vertical_pad: 120.0,
            extra_spacing: 28.0,
            root_gap: 160.0,
            shift_fraction: 0.2,
        }
    }
}

/// Aggregate extent of a laid-out subtree, reported up the recursion so
/// ancestors can reserve the right amount of space.
#[derive(Debug, Clone, Copy, Default)]
struct Subtree {
    width: f32,
    height: f32,
    child_count: usize,
}

/// Assigns coordinates to every visible node.
///
/// Roots start at `x = 0` and are stacked top to bottom, each beginning
/// immediately after the height consumed by the previous root's subtree
/// plus a minimum gap. Children are placed depth-first to the right of
/// their parent, siblings stacked in edge-insertion order with each sibling
/// slot sized to its subtree. A node reachable from several visible parents
/// takes the position assigned by whichever parent is processed last.
pub fn layout(visible: &VisibleGraph, config: &LayoutConfig) -> AHashMap<String, Position> {
    if visible.nodes.is_empty() {
        return AHashMap::new();
    }

    let mut children: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &visible.edges {
        children
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let has_incoming: AHashSet<&str> =
        visible.edges.iter().map(|e| e.target.as_str()).collect();

    let mut walker = TreeWalker {
        children: &children,
        config,
        positions: AHashMap::with_capacity(visible.nodes.len()),
        on_stack: AHashSet::new(),
    };

    let mut y = 0.0_f32;
    for root in visible
        .nodes
        .iter()
        .filter(|n| n.depth == 0 || !has_incoming.contains(n.id.as_str()))
    {
        let subtree = walker.position_node(root.id.as_str(), 0.0, y, 0);
        y += subtree.height.max(config.vertical_pad) + config.root_gap;
    }

    walker.positions
}

struct TreeWalker<'a> {
    children: &'a AHashMap<&'a str, Vec<&'a str>>,
    config: &'a LayoutConfig,
    positions: AHashMap<String, Position>,
    on_stack: AHashSet<&'a str>,
}

impl<'a> TreeWalker<'a> {
    fn position_node(&mut self, node_id: &'a str, x: f32, y: f32, level: u32) -> Subtree {
        self.positions.insert(node_id.to_string(), Position { x, y });

        let Some(children) = self.children.get(node_id) else {
            return Subtree::default();
        };

        // Back-edges to a node still being laid out are skipped; the node
        // already has its position from its tree parent.
        self.on_stack.insert(node_id);

        let child_x = x + self.config.horizontal_pad + level as f32 * self.config.level_pad;
        let mut cursor = y;
        let mut height = 0.0_f32;
        let mut width = 0.0_f32;
        let mut placed = 0_usize;

        for &child in children.iter() {
            if self.on_stack.contains(child) {
                continue;
            }
            let subtree = self.position_node(child, child_x, cursor, level + 1);
            let slot = (self.config.vertical_pad
                + subtree.child_count as f32 * self.config.extra_spacing)
                .max(subtree.height);
            cursor += slot;
            height += slot;
            width = width.max(subtree.width);
            placed += 1;
        }

        self.on_stack.remove(node_id);

        Subtree {
            width: width + self.config.horizontal_pad,
            height,
            child_count: placed,
        }
    }
}
