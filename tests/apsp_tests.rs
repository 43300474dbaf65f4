use mlc_sssp::graph::generators::{generate_grid, generate_random};
use mlc_sssp::graph::{Graph, Network};
use mlc_sssp::{compute_all_pairs, AllPairs, AllPairsShortestPaths, ApspConfig, Discipline, Error, Method};

fn small_network() -> Network<f64> {
    Network::from_edges(
        4,
        &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 5.0), (2, 3, 1.0), (1, 3, 10.0)],
    )
    .unwrap()
}

fn all_pairs(graph: &Network<f64>, config: ApspConfig) -> AllPairs<f64> {
    AllPairsShortestPaths::new(config).run(graph).unwrap()
}

#[test]
fn test_small_network_all_methods() {
    let graph = small_network();
    for method in ["dij", "deq", "fifo"] {
        let result: AllPairs<f64> = compute_all_pairs(&graph, method).unwrap();
        assert_eq!(result.node_count(), 4);
        assert_eq!(result.distance_row(0), &[0.0, 1.0, 3.0, 4.0]);
        assert_eq!(result.predecessor_row(0), &[None, Some(0), Some(1), Some(2)]);
        assert_eq!(result.distance(1, 3), Some(3.0));
        assert_eq!(result.predecessor(1, 3), Some(2));
        assert_eq!(result.distance(3, 0), None);
        assert_eq!(result.path(0, 3), Some(vec![0, 1, 2, 3]));
        assert_eq!(result.path(3, 0), None);
    }
}

#[test]
fn test_diagonal_is_zero_without_predecessor() {
    let graph = generate_random(40, 3.0, 25, 1).unwrap();
    let result = all_pairs(&graph, ApspConfig::default());
    for s in 0..graph.node_count() {
        assert_eq!(result.distance(s, s), Some(0.0));
        assert_eq!(result.predecessor(s, s), None);
        assert_eq!(result.path(s, s), Some(vec![s]));
    }
}

#[test]
fn test_every_discipline_gives_identical_matrices() {
    for seed in 0..5_u64 {
        let graph = generate_random(45, 3.5, 60, 0xA95B_0000 + seed).unwrap();
        let reference = all_pairs(&graph, ApspConfig::new(Method::Fifo).with_discipline(Discipline::PlainFifo));

        for discipline in Discipline::ALL {
            let result = all_pairs(&graph, ApspConfig::new(Method::Deque).with_discipline(discipline));
            for s in 0..graph.node_count() {
                assert_eq!(
                    result.distance_row(s),
                    reference.distance_row(s),
                    "{} differs from source {} (seed {})",
                    discipline,
                    s,
                    seed
                );
            }
            assert_eq!(result.discipline(), discipline);
        }
    }
}

#[test]
fn test_no_link_can_be_relaxed_after_all_pairs() {
    let graph = generate_grid(6, 6, 9, 21).unwrap();
    for method in [Method::Dijkstra, Method::Deque, Method::Fifo] {
        let result = all_pairs(&graph, ApspConfig::new(method));
        for s in 0..graph.node_count() {
            let row = result.distance_row(s);
            for link in graph.links() {
                assert!(row[link.destination] <= row[link.origin] + link.length);
            }
        }
    }
}

#[test]
fn test_unreachable_pairs_keep_sentinel() {
    // Two components: 0 -> 1 and 2 <-> 3
    let graph = Network::from_edges(4, &[(0, 1, 2.0), (2, 3, 1.0), (3, 2, 1.0)]).unwrap();
    let result = all_pairs(&graph, ApspConfig::new(Method::Dijkstra));

    assert!(result.distance_row(0)[2].is_infinite());
    assert!(result.distance_row(1)[0].is_infinite());
    assert_eq!(result.distance(0, 3), None);
    assert_eq!(result.predecessor(0, 3), None);
    assert_eq!(result.distance(3, 2), Some(1.0));
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = generate_random(60, 4.0, 100, 77).unwrap();
    for method in ["dij", "deq", "fifo"] {
        let first: AllPairs<f64> = compute_all_pairs(&graph, method).unwrap();
        let second: AllPairs<f64> = compute_all_pairs(&graph, method).unwrap();
        assert_eq!(first, second, "{}", method);
    }
}

#[test]
fn test_parallel_rows_match_sequential() {
    let graph = generate_random(70, 4.0, 100, 5).unwrap();
    for discipline in Discipline::ALL {
        let config = ApspConfig::new(Method::Deque).with_discipline(discipline);
        let sequential = all_pairs(&graph, config.clone());
        let parallel = all_pairs(&graph, config.with_parallel(true));
        assert_eq!(sequential, parallel, "{}", discipline);
    }
}

#[test]
fn test_method_names_match_by_prefix_ignoring_case() {
    assert_eq!("dij".parse::<Method>().unwrap(), Method::Dijkstra);
    assert_eq!("Dijkstra".parse::<Method>().unwrap(), Method::Dijkstra);
    assert_eq!("DEQUE".parse::<Method>().unwrap(), Method::Deque);
    assert_eq!("fifo".parse::<Method>().unwrap(), Method::Fifo);
    assert_eq!("FW".parse::<Method>().unwrap(), Method::FloydWarshall);
    assert!(matches!("fi".parse::<Method>(), Err(Error::Config(_))));
    assert!(matches!("".parse::<Method>(), Err(Error::Config(_))));
}

#[test]
fn test_unknown_method_is_a_config_error() {
    let graph = small_network();
    let outcome: mlc_sssp::Result<AllPairs<f64>> = compute_all_pairs(&graph, "bogus");
    assert!(matches!(outcome, Err(Error::Config(_))));
}

#[test]
fn test_floyd_warshall_is_reported_as_not_implemented() {
    let graph = small_network();
    let outcome: mlc_sssp::Result<AllPairs<f64>> = compute_all_pairs(&graph, "fw");
    assert!(matches!(outcome, Err(Error::NotImplemented(_))));
}

#[test]
fn test_negative_length_is_rejected_before_computing() {
    let graph = Network::from_edges(3, &[(0, 1, 1.0), (1, 2, -4.0)]).unwrap();
    let outcome: mlc_sssp::Result<AllPairs<f64>> = compute_all_pairs(&graph, "deq");
    match outcome {
        Err(Error::NegativeLength { link, length }) => {
            assert_eq!(link, 1);
            assert_eq!(length, -4.0);
        }
        other => panic!("expected a negative length error, got {:?}", other),
    }
    assert!(graph.validate_non_negative().is_err());
}

#[test]
fn test_nan_length_is_rejected_before_computing() {
    // Without the check the NaN link would never relax and node 1 would look unreachable
    let graph = Network::from_edges(2, &[(0, 1, f64::NAN)]).unwrap();
    for method in ["dij", "deq", "fifo"] {
        let outcome: mlc_sssp::Result<AllPairs<f64>> = compute_all_pairs(&graph, method);
        assert!(
            matches!(outcome, Err(Error::NegativeLength { link: 0, .. })),
            "{}",
            method
        );
    }
}

#[test]
#[should_panic]
fn test_distance_row_out_of_range_panics() {
    let graph = small_network();
    let result = all_pairs(&graph, ApspConfig::default());
    assert_eq!(result.distance(5, 0), None);
    let _ = result.distance_row(5);
}

#[test]
fn test_config_resolves_disciplines() {
    assert_eq!(ApspConfig::new(Method::Dijkstra).resolve_discipline().unwrap(), Discipline::Heap);
    assert_eq!(ApspConfig::new(Method::Deque).resolve_discipline().unwrap(), Discipline::Deque);
    assert_eq!(ApspConfig::new(Method::Fifo).resolve_discipline().unwrap(), Discipline::Fifo);
    assert_eq!(
        ApspConfig::new(Method::Dijkstra)
            .with_discipline(Discipline::MinLabel)
            .resolve_discipline()
            .unwrap(),
        Discipline::MinLabel
    );
    assert!(ApspConfig::new(Method::FloydWarshall).resolve_discipline().is_err());

    let config = ApspConfig::from_method_name("deq").unwrap();
    assert!(config.check_lengths);
    assert!(!config.parallel);
}

#[test]
fn test_empty_network() {
    let graph: Network<f64> = Network::from_edges(0, &[]).unwrap();
    let result = all_pairs(&graph, ApspConfig::default().with_parallel(true));
    assert_eq!(result.node_count(), 0);
    assert_eq!(result.rows().count(), 0);
    assert_eq!(result.distance(0, 0), None);
}

#[test]
fn test_stats_sum_over_sources() {
    let graph = small_network();
    let result = all_pairs(&graph, ApspConfig::new(Method::Dijkstra).with_discipline(Discipline::MinLabel));
    // Sources 0..3 reach 4, 3, 2 and 1 nodes
    assert_eq!(result.stats().scans, 10);
    assert_eq!(result.stats().stale_pops, 0);
}

#[test]
fn test_discipline_names_round_trip() {
    for discipline in Discipline::ALL {
        assert_eq!(discipline.name().parse::<Discipline>().unwrap(), discipline);
        assert_eq!(discipline.to_string(), discipline.name());
    }
    assert!(matches!("stack".parse::<Discipline>(), Err(Error::Config(_))));
    assert!(Discipline::Heap.is_label_setting());
    assert!(!Discipline::Deque.is_label_setting());
}
