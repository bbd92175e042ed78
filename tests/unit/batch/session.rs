use super::*;

#[test]
fn pairs_iterate_backgrounds_outer() {
    let session = BatchSession::new(
        vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
        vec![PathBuf::from("w1.png"), PathBuf::from("w2.png")],
    );

    let pairs: Vec<(String, String)> = session
        .pairs()
        .map(|(b, w)| (b.display().to_string(), w.display().to_string()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("a.png".into(), "w1.png".into()),
            ("a.png".into(), "w2.png".into()),
            ("b.png".into(), "w1.png".into()),
            ("b.png".into(), "w2.png".into()),
        ]
    );
    assert_eq!(session.total_pairs(), 4);
}

#[test]
fn empty_side_means_no_pairs() {
    let session = BatchSession::new(vec![PathBuf::from("a.png")], vec![]);
    assert_eq!(session.total_pairs(), 0);
    assert_eq!(session.pairs().count(), 0);
    assert_eq!(BatchSession::default().total_pairs(), 0);
}
