//! Tests for the JavaScript surface. Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use ugraph_wasm::wasm::JsGraph;
use ugraph_wasm::UnGraph;

fn labels(items: &[&str]) -> Array {
    items.iter().map(|s| JsValue::from_str(s)).collect()
}

fn triangle_with_tail() -> JsGraph {
    let mut g = JsGraph::new(labels(&["a", "b", "c", "d"])).unwrap();
    g.add_edge("a", "b", 1.0).unwrap();
    g.add_edge("b", "c", 2.0).unwrap();
    g.add_edge("c", "a", 3.0).unwrap();
    g.add_edge("c", "d", 4.0).unwrap();
    g
}

#[wasm_bindgen_test]
fn test_construct_and_count() {
    let g = triangle_with_tail();
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.index_of("c").unwrap(), 2);
    assert_eq!(g.label_of(3).unwrap(), "d");
}

#[wasm_bindgen_test]
fn test_constructor_rejects_bad_labels() {
    assert!(JsGraph::new(labels(&["a", "a"])).is_err());

    let mixed = Array::new();
    mixed.push(&JsValue::from_str("a"));
    mixed.push(&JsValue::from_f64(1.0));
    assert!(JsGraph::new(mixed).is_err());
}

#[wasm_bindgen_test]
fn test_add_edge_validation() {
    let mut g = JsGraph::new(labels(&["a", "b"])).unwrap();
    assert!(g.add_edge("a", "b", -1.0).is_err());
    assert!(g.add_edge("a", "b", 1.5).is_err());
    assert!(g.add_edge("a", "b", 9_007_199_254_740_992.0).is_err());
    assert!(g.add_edge("a", "b", 1e19).is_err());
    assert!(g.add_edge("a", "b", f64::INFINITY).is_err());
    assert!(g.add_edge("a", "z", 1.0).is_err());
    assert!(g.add_edge_by_index(0, 9, 1.0).is_err());
    assert_eq!(g.edge_count(), 0);

    let mut strict = JsGraph::strict(labels(&["a", "b"])).unwrap();
    assert!(strict.add_edge("a", "a", 1.0).is_err());
}

#[wasm_bindgen_test]
fn test_algorithms_return_plain_data() {
    let g = triangle_with_tail();

    let order: Vec<String> = serde_wasm_bindgen::from_value(g.bfs("a").unwrap()).unwrap();
    assert_eq!(order, vec!["a", "b", "c", "d"]);

    let cut: Vec<String> =
        serde_wasm_bindgen::from_value(g.articulation_points("a").unwrap()).unwrap();
    assert_eq!(cut, vec!["c"]);

    let bridges: Vec<(String, String)> =
        serde_wasm_bindgen::from_value(g.bridges("d").unwrap()).unwrap();
    assert_eq!(bridges, vec![("c".to_string(), "d".to_string())]);

    assert!(g.dijkstra("a").unwrap().is_object());
    assert!(g.prim("a").unwrap().is_object());
    assert!(g.dfs("nope").is_err());
}

#[wasm_bindgen_test]
fn test_wraps_native_graph() {
    let mut native = UnGraph::new(["x", "y"]).unwrap();
    native.add_edge(0, 1, 5).unwrap();

    let g = JsGraph::from(native);
    assert_eq!(g.graph().edge_count(), 1);

    let matrix: Vec<Vec<Option<i64>>> =
        serde_wasm_bindgen::from_value(g.adjacency_matrix().unwrap()).unwrap();
    assert_eq!(matrix, vec![vec![Some(0), Some(5)], vec![Some(5), Some(0)]]);
}
