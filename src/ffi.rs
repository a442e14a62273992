use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Direction, KeyedGraph};

/// Opaque graph handle over `u64` vertex values
pub struct FfiGraph {
    graph: KeyedGraph<u64, f64>,
}

/// Opaque handle to a finished run
pub struct FfiResult {
    result: ShortestPathResult<f64>,
}

#[no_mangle]
pub extern "C" fn sssp_graph_new(directed: bool) -> *mut FfiGraph {
    let direction = if directed {
        Direction::Directed
    } else {
        Direction::Undirected
    };
    Box::into_raw(Box::new(FfiGraph {
        graph: KeyedGraph::new(direction),
    }))
}

/// Returns the vertex index for `value`
#[no_mangle]
pub extern "C" fn sssp_graph_add_vertex(g: *mut FfiGraph, value: u64) -> usize {
    unsafe { &mut *g }.graph.add_vertex(value).index()
}

#[no_mangle]
pub extern "C" fn sssp_graph_add_edge(g: *mut FfiGraph, from: u64, to: u64, weight: f64) {
    unsafe { &mut *g }.graph.add_edge(from, to, weight)
}

#[no_mangle]
pub extern "C" fn sssp_graph_remove_edge(g: *mut FfiGraph, from: u64, to: u64) -> bool {
    unsafe { &mut *g }.graph.remove_edge(&from, &to)
}

#[no_mangle]
pub extern "C" fn sssp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

/// Runs Dijkstra from `source`; returns null if no vertex holds `source`
#[no_mangle]
pub extern "C" fn sssp_dijkstra(g: *const FfiGraph, source: u64) -> *mut FfiResult {
    let graph = unsafe { &(*g).graph };
    match Dijkstra::new().compute_shortest_paths(graph, &source) {
        Ok(result) => Box::into_raw(Box::new(FfiResult { result })),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Distance to the vertex holding `target`, `INFINITY` if unreached or unknown
#[no_mangle]
pub extern "C" fn sssp_result_distance(
    g: *const FfiGraph,
    res: *const FfiResult,
    target: u64,
) -> f64 {
    let graph = unsafe { &(*g).graph };
    let result = unsafe { &(*res).result };
    graph
        .get_vertex(&target)
        .map(|vertex| result.shortest_distance(vertex))
        .unwrap_or(f64::INFINITY)
}

/// Writes the path to `target` as vertex values into `out`
///
/// Returns the full path length; at most `capacity` values are written. A
/// return of 0 means `target` is unreached.
#[no_mangle]
pub extern "C" fn sssp_result_path(
    g: *const FfiGraph,
    res: *const FfiResult,
    target: u64,
    out: *mut u64,
    capacity: usize,
) -> usize {
    let graph = unsafe { &(*g).graph };
    let result = unsafe { &(*res).result };

    let path: Vec<u64> = match graph.get_vertex(&target) {
        Some(vertex) => result.path_values(graph, vertex).into_iter().copied().collect(),
        None => return 0,
    };

    if !out.is_null() {
        let written = path.len().min(capacity);
        unsafe {
            std::ptr::copy_nonoverlapping(path.as_ptr(), out, written);
        }
    }
    path.len()
}

#[no_mangle]
pub extern "C" fn sssp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            drop(Box::from_raw(res));
        }
    }
}
