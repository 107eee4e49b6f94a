use std::path::{Path, PathBuf};

/// Where a track's audio file is expected: "<album artist> - <title>.mp3".
pub fn track_file(dir: &Path, album_artist: &str, title: &str) -> PathBuf {
    dir.join(format!("{album_artist} - {title}.mp3"))
}

/// MP3 files directly inside `dir` (not recursive), sorted.
pub fn scan_mp3s(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut out = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_mp3(&path) {
            out.push(path);
        }
    }

    out.sort();
    Ok(out)
}

fn is_mp3(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("mp3"))
        .unwrap_or(false)
}
