use std::collections::HashMap;

use mlc_sssp::graph::{Graph, Network};
use mlc_sssp::{AllPairs, Discipline, Mlc, ShortestPathAlgorithm, ShortestPathResult};

// Cardinal moves cost 10, diagonal moves 14, so sums stay exact
const DIRECTIONS: [(i32, i32, f64); 8] = [
    (0, -1, 10.0), (1, 0, 10.0), (0, 1, 10.0), (-1, 0, 10.0),
    (1, -1, 14.0), (1, 1, 14.0), (-1, 1, 14.0), (-1, -1, 14.0),
];

// Builds a grid where every walkable cell links to its walkable neighbours
fn create_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> Network<f64> {
    let mut walls = vec![vec![false; width]; height];
    for &(x, y) in blocked {
        walls[y][x] = true;
    }

    let mut edges = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if walls[y][x] {
                continue;
            }
            for (dx, dy, cost) in DIRECTIONS {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !walls[ny][nx] {
                    edges.push((y * width + x, ny * width + nx, cost));
                }
            }
        }
    }

    Network::from_edges(width * height, &edges).unwrap()
}

fn has_link(graph: &Network<f64>, from: usize, to: usize) -> bool {
    graph.outgoing_edges(from).any(|(head, _)| head == to)
}

fn assert_valid_path(graph: &Network<f64>, path: &[usize], source: usize, target: usize) {
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    for pair in path.windows(2) {
        assert!(has_link(graph, pair[0], pair[1]), "Path should only use existing links");
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_grid(10, 10, &[]);
    let source = 0; // (0,0)
    let target = 99; // (9,9)

    for discipline in Discipline::ALL {
        let mlc = Mlc::new(discipline);
        let result: ShortestPathResult<f64> = mlc.compute_shortest_paths(&graph, source).unwrap();

        // Nine diagonal steps
        assert_eq!(result.distance(target), Some(126.0), "{}", discipline);

        let path = <Mlc as ShortestPathAlgorithm<f64, Network<f64>>>::get_path(&mlc, &result, target)
            .expect("path exists");
        assert_eq!(path.len(), 10);
        assert_valid_path(&graph, &path, source, target);
    }
}

#[test]
fn test_path_finding_with_obstacles() {
    // Wall along column 5, open at rows 8 and 9
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_grid(10, 10, &wall);
    let source = 0;
    let target = 99;

    for discipline in Discipline::ALL {
        let result: ShortestPathResult<f64> =
            Mlc::new(discipline).compute_shortest_paths(&graph, source).unwrap();

        assert_eq!(result.distance(target), Some(144.0), "{}", discipline);

        let path = result.path(target).expect("path around the wall");
        assert_valid_path(&graph, &path, source, target);
        assert!(path.iter().all(|&v| !wall.contains(&(v % 10, v / 10))));

        // Wall cells have no links and stay unreached
        assert!(!result.is_reachable(5));
        assert_eq!(result.path(5), None);
    }
}

#[test]
fn test_enclosed_cell_is_unreachable() {
    let ring = [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)];
    let graph = create_grid(5, 5, &ring);
    let inside = 2 * 5 + 2;

    let result: ShortestPathResult<f64> = Mlc::deque().compute_shortest_paths(&graph, 0).unwrap();
    assert!(result.distances[inside].is_infinite());
    assert_eq!(result.predecessors[inside], None);
    assert_eq!(result.path(inside), None);

    let from_inside: ShortestPathResult<f64> = Mlc::fifo().compute_shortest_paths(&graph, inside).unwrap();
    assert_eq!(from_inside.stats.scans, 1);
    assert!((0..graph.node_count()).filter(|&v| v != inside).all(|v| !from_inside.is_reachable(v)));
}

#[test]
fn test_city_pathfinding() {
    let width = 25;
    let height = 18;

    let buildings = [
        (3, 3), (4, 3), (5, 3),
        (3, 4), (4, 4), (5, 4),
        (3, 5), (4, 5), (5, 5),
        (10, 10), (11, 10), (12, 10),
        (10, 11), (11, 11), (12, 11),
        (10, 12), (11, 12), (12, 12),
    ];
    let graph = create_grid(width, height, &buildings);

    let locations = HashMap::from([
        ("home", (0, 0)),
        ("work", (20, 15)),
        ("gym", (15, 8)),
        ("park", (8, 12)),
    ]);

    let all_pairs: AllPairs<f64> = mlc_sssp::compute_all_pairs(&graph, "deq").unwrap();

    for (from_name, &(fx, fy)) in &locations {
        let source = fy * width + fx;
        let single: ShortestPathResult<f64> = Mlc::dijkstra_heap().compute_shortest_paths(&graph, source).unwrap();

        for (to_name, &(tx, ty)) in &locations {
            if from_name == to_name {
                continue;
            }
            let target = ty * width + tx;

            assert!(
                all_pairs.distance(source, target).is_some(),
                "Should find a path from {} to {}",
                from_name,
                to_name
            );
            assert_eq!(all_pairs.distance(source, target), single.distance(target));

            let path = all_pairs
                .path(source, target)
                .unwrap_or_else(|| panic!("Should construct a path from {} to {}", from_name, to_name));
            assert_valid_path(&graph, &path, source, target);

            // The path's link lengths add up to the reported distance
            let walked: f64 = path
                .windows(2)
                .map(|pair| {
                    graph
                        .outgoing_edges(pair[0])
                        .filter(|&(head, _)| head == pair[1])
                        .map(|(_, len)| len)
                        .fold(f64::INFINITY, f64::min)
                })
                .sum();
            assert_eq!(Some(walked), all_pairs.distance(source, target));
        }
    }
}
