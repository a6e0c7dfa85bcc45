use approx::assert_relative_eq;
use std::fs;
use stitching_core::synthetic::{grouped_confidences, grouped_matches, image_names};
use stitching_core::{GraphEdges, MatchRecord, PairwiseMatch};
use stitching_pipeline::{
    DiagnosticsError, DiagnosticsOutcome, SubsetInput, Subsetter, SubsetterConfig, run_subset,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn drops_unmatched_image() {
    init_logger();
    let names = image_names(4);
    let features: Vec<String> = (0..4).map(|i| format!("features-{i}")).collect();
    let matches = grouped_matches(&[0, 0, 0, 1], 1.0, 0.0);

    let output = Subsetter::default()
        .subset(&names, &features, &matches)
        .unwrap();

    assert_eq!(output.kept_indices, vec![0, 1, 2]);
    assert_eq!(output.removed_indices, vec![3]);
    assert_eq!(output.img_names, names[..3].to_vec());
    assert_eq!(output.features, features[..3].to_vec());
    assert_eq!(output.pairwise_matches.len(), 9);
    assert!(matches!(output.diagnostics, DiagnosticsOutcome::Disabled));
}

#[test]
fn reduced_matches_follow_new_image_order() {
    init_logger();
    // Group 1 = {1, 3, 4} wins; 0 and 2 are dropped.
    let group_of = [0, 1, 0, 1, 1];
    let names = image_names(5);
    let matches = grouped_matches(&group_of, 2.0, 0.0);

    let output = Subsetter::default()
        .subset(&names, &names, &matches)
        .unwrap();
    let keep = &output.kept_indices;
    assert_eq!(keep, &vec![1, 3, 4]);

    let k = keep.len();
    for (i, &ki) in keep.iter().enumerate() {
        for (j, &kj) in keep.iter().enumerate() {
            let record = &output.pairwise_matches[i * k + j];
            let original = &matches[ki * 5 + kj];
            assert_eq!(record.num_matches, original.num_matches);
            assert_relative_eq!(record.confidence(), original.confidence());
            assert_eq!(record.src_img_idx, Some(i));
            assert_eq!(record.dst_img_idx, Some(j));
        }
    }
}

#[test]
fn fully_connected_set_is_untouched() {
    let names = image_names(4);
    let features = vec![10u32, 11, 12, 13];
    let confidences = grouped_confidences(&[0; 4], 3.0, 0.0);

    let output = Subsetter::default()
        .subset(&names, &features, &confidences)
        .unwrap();
    assert!(output.is_unchanged());
    assert_eq!(output.img_names, names);
    assert_eq!(output.features, features);
    assert_eq!(output.pairwise_matches, confidences);
}

#[test]
fn lower_threshold_keeps_weak_links() {
    let names = image_names(3);
    let features = vec![(); 3];
    let matches = grouped_matches(&[0, 0, 1], 2.0, 0.4);

    let strict = Subsetter::default()
        .subset(&names, &features, &matches)
        .unwrap();
    assert_eq!(strict.kept_indices, vec![0, 1]);

    let relaxed = Subsetter::new(SubsetterConfig::with_threshold(0.3))
        .unwrap()
        .subset(&names, &features, &matches)
        .unwrap();
    assert_eq!(relaxed.kept_indices, vec![0, 1, 2]);
}

#[test]
fn writes_graph_of_full_set() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.dot");
    let config = SubsetterConfig {
        matches_graph_dot_file: Some(path.clone()),
        ..Default::default()
    };

    let names = image_names(3);
    let output = Subsetter::new(config)
        .unwrap()
        .subset(&names, &[(); 3], &grouped_matches(&[0, 0, 1], 2.0, 0.0))
        .unwrap();

    assert_eq!(output.num_images(), 2);
    let written = output.diagnostics.into_result().unwrap();
    assert_eq!(written, Some(path.clone()));

    let dot = fs::read_to_string(&path).unwrap();
    assert!(dot.starts_with("graph matches_graph{\n"));
    // The dropped image still appears in the diagnostics graph.
    assert!(dot.contains("\"img02.jpg\";"));
    assert!(dot.contains("\"img00.jpg\" -- \"img01.jpg\"[label=\"Nm=1, Ni=1, C=2\"];"));
}

#[test]
fn spanning_forest_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forest.dot");
    let config = SubsetterConfig {
        matches_graph_dot_file: Some(path.clone()),
        graph_edges: GraphEdges::SpanningForest,
        ..Default::default()
    };

    Subsetter::new(config)
        .unwrap()
        .subset(&image_names(4), &[(); 4], &grouped_confidences(&[0; 4], 2.0, 0.0))
        .unwrap();
    let dot = fs::read_to_string(&path).unwrap();
    assert_eq!(dot.matches(" -- ").count(), 3);
}

#[test]
fn unwritable_graph_destination_keeps_result() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("matches.dot");
    let config = SubsetterConfig {
        matches_graph_dot_file: Some(path.clone()),
        ..Default::default()
    };

    let names = image_names(4);
    let output = Subsetter::new(config)
        .unwrap()
        .subset(&names, &[(); 4], &grouped_matches(&[0, 0, 0, 1], 1.0, 0.0))
        .unwrap();

    assert_eq!(output.kept_indices, vec![0, 1, 2]);
    assert_eq!(output.pairwise_matches.len(), 9);
    assert!(output.diagnostics.is_failed());
    match output.diagnostics.into_result() {
        Err(DiagnosticsError::Write { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected write failure, got {other:?}"),
    }
    assert!(!path.exists());
}

#[test]
fn report_surfaces_diagnostics_failure() {
    let dir = tempfile::tempdir().unwrap();
    let config = SubsetterConfig {
        matches_graph_dot_file: Some(dir.path().join("missing").join("g.dot")),
        ..Default::default()
    };
    let input = SubsetInput {
        img_names: image_names(2),
        features: vec![serde_json::Value::Null; 2],
        pairwise_matches: vec![PairwiseMatch::with_confidence(0.0); 4],
    };

    let report = run_subset(&input, &config).unwrap();
    assert_eq!(report.kept_indices, vec![0]);
    assert_eq!(report.removed_indices, vec![1]);
    assert!(report.matches_graph.is_none());
    assert!(
        report
            .diagnostics_error
            .as_deref()
            .is_some_and(|e| e.contains("g.dot"))
    );
}
