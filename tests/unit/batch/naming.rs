use super::*;

#[test]
fn stem_strips_only_the_last_extension() {
    assert_eq!(stem_before_last_dot(Path::new("/imgs/a.png")), "a");
    assert_eq!(stem_before_last_dot(Path::new("photo.final.jpg")), "photo.final");
    assert_eq!(stem_before_last_dot(Path::new("noext")), "noext");
    assert_eq!(stem_before_last_dot(Path::new("dir.d/noext")), "noext");
    assert_eq!(stem_before_last_dot(Path::new(".hidden")), "");
}

#[test]
fn output_names_join_both_stems() {
    assert_eq!(
        output_file_name(Path::new("/bg/a.png"), Path::new("/wm/w2.jpg")),
        "a_w2.png"
    );
    assert_eq!(
        output_path(Path::new("out"), Path::new("x/b.gif"), Path::new("y/logo")),
        Path::new("out").join("b_logo.png")
    );
}

#[test]
fn same_stems_collide() {
    let a = output_file_name(Path::new("one/a.png"), Path::new("w.png"));
    let b = output_file_name(Path::new("two/a.jpg"), Path::new("w.gif"));
    assert_eq!(a, b);
}
