// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for building and inspecting directory trees in tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Writes `content` to `relative` under `root`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Reads every regular file under `root` into a map of `/`-joined relative path to content.
#[allow(dead_code)]
pub fn read_tree(root: &Path) -> BTreeMap<String, String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_str().unwrap().to_string())
                .collect::<Vec<_>>()
                .join("/");
            (relative, fs::read_to_string(entry.path()).unwrap())
        })
        .collect()
}

/// Base64 encodes `text` with the standard alphabet.
#[allow(dead_code)]
pub fn b64(text: &str) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine};
    STANDARD.encode(text)
}
