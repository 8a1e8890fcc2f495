//! Test helpers for writing request files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use tourline_core::Waypoint;

use crate::sequence::SequenceRequest;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A temporary directory with a `request.json` path inside it.
pub(super) fn request_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let request_path = root.join("request.json");
    (tmp, request_path)
}

pub(super) fn write_request(path: &Utf8Path, waypoints: Vec<Waypoint>) {
    let request = SequenceRequest { waypoints };
    let payload = serde_json::to_string_pretty(&request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
