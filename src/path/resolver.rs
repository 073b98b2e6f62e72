use crate::core::env::EnvVarManager;
use std::ffi::{CString, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Returns whether the current user may execute `path`, as reported by
/// `access(2)` with `X_OK`. Relative paths resolve against the working
/// directory.
pub fn is_executable(path: &Path) -> bool {
    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), libc::X_OK) == 0 }
}

/// Resolves a command token to an executable path.
///
/// The token itself is tried first. Failing that, each `PATH` entry is
/// tried left to right as `dir + "/" + name`; the first executable
/// candidate wins. Without `PATH` there is no search at all.
///
/// A bare name that is executable in the working directory comes back as
/// `./name`, so spawning it never falls into a second `PATH` lookup.
pub fn resolve(name: &str, env: &EnvVarManager) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let direct = Path::new(name);
    if is_executable(direct) {
        log::debug!("{} is directly executable", name);
        if name.contains('/') {
            return Some(direct.to_path_buf());
        }
        return Some(Path::new(".").join(name));
    }

    let search_path = env.get_os("PATH")?;
    let found = search_path
        .as_bytes()
        .split(|&b| b == b':')
        .map(|dir| {
            let mut candidate = OsStr::from_bytes(dir).to_os_string();
            candidate.push("/");
            candidate.push(name);
            PathBuf::from(candidate)
        })
        .find(|candidate| is_executable(candidate));

    match &found {
        Some(path) => log::debug!("resolved {} to {}", name, path.display()),
        None => log::debug!("{} not found in PATH={}", name, search_path.to_string_lossy()),
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn write_file(path: &Path, mode: u32) {
        fs::write(path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    fn path_env(dirs: &[&Path]) -> EnvVarManager {
        let joined: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
        EnvVarManager::from_pairs([("PATH", joined.join(":"))])
    }

    #[test]
    fn test_resolves_ls_from_bin() {
        if !is_executable(Path::new("/bin/ls")) {
            return;
        }
        let env = EnvVarManager::from_pairs([("PATH", "/bin:/usr/bin")]);
        assert_eq!(resolve("ls", &env), Some(PathBuf::from("/bin/ls")));
    }

    #[test]
    fn test_first_match_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_file(&first.path().join("tool"), 0o755);
        write_file(&second.path().join("tool"), 0o755);

        let env = path_env(&[first.path(), second.path()]);
        assert_eq!(resolve("tool", &env), Some(first.path().join("tool")));
    }

    #[test]
    fn test_skips_non_executable_candidates() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_file(&first.path().join("tool"), 0o644);
        write_file(&second.path().join("tool"), 0o755);

        let env = path_env(&[first.path(), second.path()]);
        assert_eq!(resolve("tool", &env), Some(second.path().join("tool")));
    }

    #[test]
    fn test_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let env = path_env(&[dir.path()]);
        assert_eq!(resolve("definitely-not-a-command-1234", &env), None);
    }

    #[test]
    fn test_unset_path_fails_search() {
        let env = EnvVarManager::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(resolve("sh", &env), None);
    }

    #[test]
    fn test_direct_path_bypasses_search() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("tool");
        write_file(&tool, 0o755);

        let env = EnvVarManager::from_pairs(Vec::<(String, String)>::new());
        let name = tool.to_str().unwrap();
        assert_eq!(resolve(name, &env), Some(tool.clone()));
    }

    #[test]
    fn test_bare_name_in_working_directory() {
        let _guard = crate::testutil::CwdGuard::new();
        let cwd = tempfile::tempdir().unwrap();
        write_file(&cwd.path().join("local-tool"), 0o755);
        std::env::set_current_dir(cwd.path()).unwrap();

        let env = EnvVarManager::from_pairs([("PATH", "/nonexistent")]);
        let found = resolve("local-tool", &env);
        assert_eq!(found, Some(PathBuf::from("./local-tool")));
        assert!(is_executable(&found.unwrap()));
    }

    #[test]
    fn test_non_unicode_path_entries() {
        let dir = tempfile::tempdir().unwrap();
        let odd = dir.path().join(OsStr::from_bytes(b"bin\xff"));
        fs::create_dir(&odd).unwrap();
        write_file(&odd.join("tool"), 0o755);

        let mut search = odd.clone().into_os_string();
        search.push(":/nonexistent");
        let env = EnvVarManager::from_pairs([("PATH", search)]);
        assert_eq!(resolve("tool", &env), Some(odd.join("tool")));
    }

    #[test]
    fn test_empty_component_is_rooted() {
        if !is_executable(Path::new("/bin/sh")) {
            return;
        }
        let _guard = crate::testutil::lock_current_dir();
        let cwd = tempfile::tempdir().unwrap();
        let previous = std::env::current_dir().unwrap();
        std::env::set_current_dir(cwd.path()).unwrap();

        // Empty entries degenerate to "/" + name.
        let env = EnvVarManager::from_pairs([("PATH", "::/nonexistent")]);
        let found = resolve("bin/sh", &env);
        std::env::set_current_dir(previous).unwrap();

        assert_eq!(found, Some(PathBuf::from("/bin/sh")));
    }

    #[test]
    fn test_non_executable_direct_path() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("data.txt");
        write_file(&data, 0o644);
        assert!(!is_executable(&data));
        assert!(!is_executable(Path::new("nul\0byte")));
    }
}
