// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The Node.js preload script and its on-disk copy.
//!
//! The script tries, in order: `global-agent`, an `undici` `ProxyAgent`, and
//! finally patching `http.request`/`https.request` to send absolute-URL
//! requests to the proxy with a `Host` header. If none can be loaded it logs
//! a notice and leaves proxying to the environment variables.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::InjectError;

/// File name of the generated script inside the temp directory.
pub const INIT_FILE_NAME: &str = "proxywrap-init.js";

/// Script content, identical on every run.
pub const INIT_SCRIPT: &str = include_str!("proxywrap-init.js");

/// Writes [`INIT_SCRIPT`] to `dir/`[`INIT_FILE_NAME`] and returns the path.
///
/// The content goes to a sibling temp file first and is then renamed over the
/// target, so concurrent launches never observe a partial script. The file
/// is left in place after the run.
///
/// # Errors
///
/// Returns `InjectError::WriteFailed` if the file cannot be created, written,
/// or moved into place.
pub fn write_init_script(dir: &Path) -> Result<PathBuf, InjectError> {
    let path = dir.join(INIT_FILE_NAME);
    let failed = |source: std::io::Error| InjectError::WriteFailed {
        path: path.clone(),
        source,
    };

    let mut file = NamedTempFile::new_in(dir).map_err(failed)?;
    file.write_all(INIT_SCRIPT.as_bytes()).map_err(failed)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(failed)?;
    }

    file.persist(&path).map_err(|e| failed(e.error))?;
    Ok(path)
}
