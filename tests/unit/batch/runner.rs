use super::*;
use crate::batch::progress::InMemoryProgress;
use crate::foundation::geom::Placement;
use crate::test_support::*;

fn fixture(dir: &Path) -> (PathBuf, PathBuf, PathBuf) {
    let bg = dir.join("a.png");
    write_png(&bg, &solid(300, 200, [0, 0, 0, 255]));
    let w = dir.join("w.png");
    write_png(&w, &solid(10, 10, [255, 0, 0, 255]));
    let w2 = dir.join("w2.jpg");
    write_jpeg(&w2, 16, 8, [0, 255, 0]);
    (bg, w, w2)
}

#[test]
fn example_batch_writes_pairs_and_reports_progress() {
    let dir = scratch_dir("runner_example_batch");
    let (bg, w, w2) = fixture(&dir);
    let out_dir = dir.join("out");

    let session = BatchSession::new(vec![bg], vec![w, w2]);
    let request = BatchRequest::new(
        &out_dir,
        Placement::new(10, 10, 50, 50).with_resize_rate(2.0),
    );
    let mut runner = BatchRunner::new();
    let mut sink = InMemoryProgress::new();

    let report = runner.run(&session, &request, &mut sink).unwrap();

    assert_eq!(runner.state(), RunState::Completed);
    assert_eq!(
        report.real,
        Some(RealRect {
            top: 20,
            left: 20,
            width: 100,
            height: 100
        })
    );
    assert_eq!(
        report.outputs,
        vec![out_dir.join("a_w.png"), out_dir.join("a_w2.png")]
    );
    assert_eq!(sink.percents(), vec![50, 100]);
    assert_eq!(sorted_file_names(&out_dir), vec!["a_w.png", "a_w2.png"]);

    let out = decode(&out_dir.join("a_w.png")).unwrap();
    assert_eq!(out.dimensions(), (300, 200));
    assert_eq!(out.get_pixel(19, 19).0, [0, 0, 0, 255]);
    assert_eq!(out.get_pixel(20, 20).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(119, 119).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(120, 120).0, [0, 0, 0, 255]);
}

#[test]
fn empty_watermarks_are_rejected_without_side_effects() {
    let dir = scratch_dir("runner_empty_watermarks");
    let (bg, _, _) = fixture(&dir);
    let out_dir = dir.join("out");

    let session = BatchSession::new(vec![bg], vec![]);
    let request = BatchRequest::new(&out_dir, Placement::new(0, 0, 5, 5));
    let mut runner = BatchRunner::new();
    let mut sink = InMemoryProgress::new();

    let err = runner.run(&session, &request, &mut sink).unwrap_err();

    assert!(matches!(err, WmError::EmptyInputSet(InputSet::Watermarks)));
    assert_eq!(runner.state(), RunState::Idle);
    assert!(sink.events().is_empty());
    assert!(!out_dir.exists());
}

#[test]
fn empty_backgrounds_are_rejected() {
    let dir = scratch_dir("runner_empty_backgrounds");
    let (_, w, _) = fixture(&dir);

    let session = BatchSession::new(vec![], vec![w]);
    let request = BatchRequest::new(dir.join("out"), Placement::new(0, 0, 5, 5));
    let mut runner = BatchRunner::new();

    let err = runner
        .run(&session, &request, &mut InMemoryProgress::new())
        .unwrap_err();
    assert!(matches!(err, WmError::EmptyInputSet(InputSet::Backgrounds)));
    assert_eq!(runner.state(), RunState::Idle);
}

#[test]
fn file_in_place_of_out_dir_is_a_conflict() {
    let dir = scratch_dir("runner_dir_conflict");
    let (bg, w, _) = fixture(&dir);
    let not_a_dir = dir.join("out");
    std::fs::write(&not_a_dir, b"x").unwrap();

    let session = BatchSession::new(vec![bg], vec![w]);
    let request = BatchRequest::new(&not_a_dir, Placement::new(0, 0, 5, 5));
    let mut runner = BatchRunner::new();

    let err = runner
        .run(&session, &request, &mut InMemoryProgress::new())
        .unwrap_err();
    assert!(matches!(err, WmError::DirectoryConflict { path } if path == not_a_dir));
    assert_eq!(runner.state(), RunState::Idle);
}

#[test]
fn degenerate_placement_is_rejected_before_io() {
    let dir = scratch_dir("runner_degenerate_placement");
    let missing = dir.join("missing.png");

    let session = BatchSession::new(vec![missing.clone()], vec![missing]);
    let request = BatchRequest::new(dir.join("out"), Placement::new(0, 0, 0, 5));
    let mut runner = BatchRunner::new();

    let err = runner
        .run(&session, &request, &mut InMemoryProgress::new())
        .unwrap_err();
    assert!(matches!(err, WmError::InvalidPlacement(_)));
    assert_eq!(runner.state(), RunState::Idle);
    assert!(!dir.join("out").exists());
}

#[test]
fn first_failure_aborts_remaining_pairs() {
    let dir = scratch_dir("runner_abort");
    let (bg, w, w2) = fixture(&dir);
    let bad = dir.join("bad.png");
    write_garbage(&bad);
    let out_dir = dir.join("out");

    let session = BatchSession::new(vec![bg.clone(), bg], vec![w, bad, w2]);
    let request = BatchRequest::new(&out_dir, Placement::new(0, 0, 4, 4));
    let mut runner = BatchRunner::new();
    let mut sink = InMemoryProgress::new();

    let err = runner.run(&session, &request, &mut sink).unwrap_err();

    assert!(matches!(err, WmError::UnsupportedFormat { .. }));
    assert_eq!(runner.state(), RunState::Failed);
    assert_eq!(sink.percents(), vec![16]);
    assert_eq!(sorted_file_names(&out_dir), vec!["a_w.png"]);
}

#[test]
fn missing_background_is_a_read_error() {
    let dir = scratch_dir("runner_missing_background");
    let (_, w, _) = fixture(&dir);

    let session = BatchSession::new(vec![dir.join("gone.png")], vec![w]);
    let request = BatchRequest::new(dir.join("out"), Placement::new(0, 0, 4, 4));
    let mut runner = BatchRunner::new();

    let err = runner
        .run(&session, &request, &mut InMemoryProgress::new())
        .unwrap_err();
    assert!(matches!(err, WmError::FileRead { .. }));
    assert_eq!(runner.state(), RunState::Failed);
}

#[test]
fn out_dir_with_parents_is_created() {
    let dir = scratch_dir("runner_nested_out_dir");
    let nested = dir.join("x").join("y").join("z");

    ensure_out_dir(&nested).unwrap();
    assert!(nested.is_dir());
    ensure_out_dir(&nested).unwrap();
}

#[test]
fn runner_can_be_reused_after_failure() {
    let dir = scratch_dir("runner_reuse");
    let (bg, w, _) = fixture(&dir);
    let out_dir = dir.join("out");
    let mut runner = BatchRunner::new();

    let bad = BatchSession::new(vec![dir.join("gone.png")], vec![w.clone()]);
    let request = BatchRequest::new(&out_dir, Placement::new(0, 0, 4, 4));
    assert!(
        runner
            .run(&bad, &request, &mut InMemoryProgress::new())
            .is_err()
    );
    assert_eq!(runner.state(), RunState::Failed);

    let good = BatchSession::new(vec![bg], vec![w]);
    let report = runner
        .run(&good, &request, &mut InMemoryProgress::new())
        .unwrap();
    assert_eq!(report.total_pairs, 1);
    assert_eq!(runner.state(), RunState::Completed);
}
