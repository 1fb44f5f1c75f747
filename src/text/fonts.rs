use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::CoverwallResult;

/// Read raw font bytes from an explicit TTF/OTF path.
pub fn load_font_bytes(path: &Path) -> CoverwallResult<Vec<u8>> {
    std::fs::read(path)
        .with_context(|| format!("read font bytes from '{}'", path.display()))
        .map_err(Into::into)
}

/// Search the standard OS font directories for a usable font face.
///
/// Returns the first `.ttf`/`.otf`/`.ttc` file found (directories walked in
/// sorted order for stability), or `None` when the host has no discoverable
/// fonts. Coverwall never falls back to this implicitly: the hosting surface
/// decides whether discovery is acceptable.
pub fn locate_system_font() -> Option<PathBuf> {
    let mut roots: Vec<PathBuf> = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/System/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Ok(home) = std::env::var("HOME") {
        roots.push(Path::new(&home).join(".fonts"));
        roots.push(Path::new(&home).join(".local/share/fonts"));
        roots.push(Path::new(&home).join("Library/Fonts"));
    }

    for root in roots {
        if let Some(found) = first_font_under(&root, 0) {
            return Some(found);
        }
    }
    None
}

fn first_font_under(dir: &Path, depth: usize) -> Option<PathBuf> {
    // Font trees are shallow; cap the walk so a symlink cycle cannot hang us.
    if depth > 4 {
        return None;
    }
    let rd = std::fs::read_dir(dir).ok()?;

    let mut entries: Vec<PathBuf> = rd.flatten().map(|e| e.path()).collect();
    entries.sort();

    for path in &entries {
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext == "ttf" || ext == "otf" || ext == "ttc" {
            return Some(path.clone());
        }
    }
    for path in &entries {
        if path.is_dir()
            && let Some(found) = first_font_under(path, depth + 1)
        {
            return Some(found);
        }
    }
    None
}
