//! Replace a file in one step so readers never see a half-written profile.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use cap_std::fs::{Dir, OpenOptions};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Write `contents` to `file_name` in `dir` via a sibling temp file and a
/// rename.
///
/// On failure the temp file is removed and any previous `file_name` is left
/// as it was.
pub(super) fn replace_file(dir: &Dir, file_name: &str, contents: &str) -> io::Result<()> {
    let tmp_name = format!(
        ".{file_name}.tmp.{}.{}",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    let written =
        write_new(dir, &tmp_name, contents).and_then(|()| rename_over(dir, &tmp_name, file_name));
    if let Err(err) = written {
        if dir.remove_file(&tmp_name).is_err() {
            // Temp file may never have been created.
        }
        return Err(err);
    }

    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is best effort.
    }
    Ok(())
}

fn write_new(dir: &Dir, name: &str, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(name, &options)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}

#[cfg(windows)]
fn rename_over(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    match dir.remove_file(to) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(from, dir, to)
}

#[cfg(not(windows))]
fn rename_over(dir: &Dir, from: &str, to: &str) -> io::Result<()> {
    dir.rename(from, dir, to)
}
