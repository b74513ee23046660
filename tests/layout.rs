//! Tests for the tree layout engine and the shift post-processor.
mod common;
use common::*;
use tejun::prelude::*;

fn raw_positions(
    graph: &GraphDefinition,
    expanded: &ExpansionState,
) -> AHashMap<String, Position> {
    layout(&resolve(graph, expanded), &LayoutConfig::default())
}

#[test]
fn chain_x_increases_monotonically() {
    let graph = chain_graph();
    let view = compute_view(
        &graph,
        &ExpansionState::from_ids(["A", "B", "C"]),
        &LayoutConfig::default(),
    );

    let x = |id: &str| view.nodes.iter().find(|n| n.id == id).unwrap().position.x;
    assert!(x("A") < x("B"));
    assert!(x("B") < x("C"));
    assert!(x("C") < x("D"));
}

#[test]
fn level_padding_grows_with_depth() {
    let graph = chain_graph();
    let positions = raw_positions(&graph, &ExpansionState::from_ids(["A", "B", "C"]));

    let gap_ab = positions["B"].x - positions["A"].x;
    let gap_bc = positions["C"].x - positions["B"].x;
    let gap_cd = positions["D"].x - positions["C"].x;
    assert!(gap_ab < gap_bc);
    assert!(gap_bc < gap_cd);
}

#[test]
fn roots_start_flush_at_zero_before_shift() {
    let graph = decision_graph();
    let positions = raw_positions(&graph, &ExpansionState::from_ids(["A"]));

    assert_eq!(positions["A"].x, 0.0);
    assert_eq!(positions["A"].y, 0.0);
}

#[test]
fn shift_removes_a_fixed_share_of_the_span() {
    let graph = chain_graph();
    let expanded = ExpansionState::from_ids(["A", "B", "C"]);
    let config = LayoutConfig::default();

    let raw = layout(&resolve(&graph, &expanded), &config);
    let max_x = raw.values().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let shifted = shift_left(raw.clone(), config.shift_fraction);

    for (id, position) in &raw {
        let expected = position.x - max_x * config.shift_fraction;
        assert!((shifted[id].x - expected).abs() < 1e-3);
        assert_eq!(shifted[id].y, position.y);
    }
}

#[test]
fn shift_is_a_noop_for_single_node_layouts() {
    let graph = decision_graph();
    let positions = raw_positions(&graph, &ExpansionState::new());
    let shifted = shift_left(positions.clone(), 0.2);

    assert_eq!(shifted["A"], positions["A"]);
}

#[test]
fn sibling_subtrees_occupy_disjoint_vertical_bands() {
    let graph = GraphDefinition {
        nodes: vec![
            node("A", "A", 0),
            node("B", "B", 1),
            node("C", "C", 1),
            node("b1", "b1", 2),
            node("b2", "b2", 2),
            node("b3", "b3", 2),
            node("c1", "c1", 2),
            node("c2", "c2", 2),
        ],
        edges: vec![
            edge("e1", "A", "B"),
            edge("e2", "A", "C"),
            edge("e3", "B", "b1"),
            edge("e4", "B", "b2"),
            edge("e5", "B", "b3"),
            edge("e6", "C", "c1"),
            edge("e7", "C", "c2"),
        ],
    };
    let positions = raw_positions(&graph, &ExpansionState::from_ids(["A", "B", "C"]));

    let band = |ids: &[&str]| {
        let ys: Vec<f32> = ids.iter().map(|id| positions[*id].y).collect();
        (
            ys.iter().cloned().fold(f32::INFINITY, f32::min),
            ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max),
        )
    };
    let (_, b_max) = band(&["B", "b1", "b2", "b3"]);
    let (c_min, _) = band(&["C", "c1", "c2"]);

    assert!(b_max < c_min);
}

#[test]
fn second_root_starts_below_first_subtree() {
    let mut graph = decision_graph();
    graph.nodes.push(node("R2", "Second root", 0));
    graph.nodes.push(node("R2c", "Child", 1));
    graph.edges.push(edge("e3", "R2", "R2c"));

    let positions = raw_positions(&graph, &ExpansionState::from_ids(["A", "R2"]));
    let first_max_y = ["A", "B", "C"]
        .iter()
        .map(|id| positions[*id].y)
        .fold(f32::NEG_INFINITY, f32::max);

    assert!(positions["R2"].y > first_max_y);
    assert_eq!(positions["R2"].x, 0.0);
}

#[test]
fn multi_parent_node_takes_last_parents_position() {
    let graph = diamond_graph();
    let positions = raw_positions(&graph, &ExpansionState::from_ids(["A", "B", "C"]));

    // B is processed first, C last; D keeps the slot assigned under C.
    assert_eq!(positions["D"].y, positions["C"].y);
    assert!(positions["D"].y > positions["B"].y);
}

#[test]
fn cyclic_visible_subgraph_still_lays_out() {
    let graph = cyclic_graph();
    let positions = raw_positions(&graph, &ExpansionState::from_ids(["A", "B"]));

    assert_eq!(positions.len(), 2);
    assert!(positions["B"].x > positions["A"].x);
}

#[test]
fn empty_graph_produces_an_empty_position_map() {
    let positions = raw_positions(&GraphDefinition::default(), &ExpansionState::new());
    assert!(positions.is_empty());
}

#[test]
fn pipeline_output_is_deterministic() {
    let graph = stepwise_graph();
    let expanded = default_expansion(&graph);
    let config = LayoutConfig::default();

    let first = compute_view(&graph, &expanded, &config);
    let second = compute_view(&graph, &expanded, &config);
    assert_eq!(first, second);
}

#[test]
fn toggling_away_and_back_restores_the_view() {
    let graph = stepwise_graph();
    let mut engine = DiagramEngine::new(graph);

    let before = engine.compute();
    engine.toggle_expand("check");
    let after = engine.toggle_expand("check");

    assert_eq!(before, after);
}
