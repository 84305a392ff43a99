use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "dialclean";
const STOP_LIST_FILENAME: &str = "stoplist.csv";

/// Default persisted location: `$XDG_DATA_HOME/dialclean/stoplist.csv`,
/// with the usual `~/.local/share` fallback. The app directory is created
/// (mode 0700 on unix) the first time it is asked for.
pub fn stop_list_path() -> Result<PathBuf> {
    let base = match env::var_os("XDG_DATA_HOME") {
        Some(dir) => {
            let path = PathBuf::from(dir);
            if path.as_os_str().is_empty() {
                return Err(StoreError::InvalidDataPath(path));
            }
            path
        }
        None => dirs::home_dir()
            .ok_or(StoreError::MissingHomeDir)?
            .join(".local")
            .join("share"),
    };

    let dir = base.join(APP_DIR);
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
    }

    Ok(dir.join(STOP_LIST_FILENAME))
}

pub fn stop_list_path_in(dir: &Path) -> PathBuf {
    dir.join(STOP_LIST_FILENAME)
}

/// Resolves the persisted stop-list location: an explicit path wins over the
/// default data-dir file.
pub fn resolve_stop_list_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(path)),
        Some(path) => Ok(path),
        None => stop_list_path(),
    }
}
