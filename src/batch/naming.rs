use std::path::{Path, PathBuf};

/// File name with everything from its last `.` removed.
///
/// A name without a dot is returned whole. Unlike [`Path::file_stem`], a leading-dot name such as
/// `.hidden` yields an empty stem.
pub fn stem_before_last_dot(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

/// `{stem(background)}_{stem(watermark)}.png`.
pub fn output_file_name(background: &Path, watermark: &Path) -> String {
    format!(
        "{}_{}.png",
        stem_before_last_dot(background),
        stem_before_last_dot(watermark)
    )
}

/// Output path for one pair inside `out_dir`.
pub fn output_path(out_dir: &Path, background: &Path, watermark: &Path) -> PathBuf {
    out_dir.join(output_file_name(background, watermark))
}

#[cfg(test)]
#[path = "../../tests/unit/batch/naming.rs"]
mod tests;
