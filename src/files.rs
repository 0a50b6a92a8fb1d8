//! Path enumeration and path mutation helpers.
//!
//! Most functions take the primary path as an `Option` and treat `None` as
//! "nothing to do": an empty listing, absent timestamps, or a no-op. Missing
//! preconditions fail with [`UtilError::NotFound`] or
//! [`UtilError::AlreadyExists`] instead of failing silently.
//!
//! None of these helpers lock anything. `copy`, `move_path` and `delete`
//! check, then act; concurrent callers on the same path can race.

use crate::datetimes;
use crate::errors::{Result, UtilError};
use crate::models::{PathTimes, PrefixSuffix};
use chrono::NaiveDateTime;
use filetime::FileTime;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Separates a file name from its suffix.
pub const FILE_NAME_DELIMITER: char = '.';

/// Filter that accepts every path.
pub fn any_path(_: &Path) -> bool {
    true
}

/// Lists the entries under `root`, excluding `root` itself.
///
/// Without `recursive` only direct children are listed. With it, a
/// directory's children (sorted by file name) are listed together, then each
/// child directory is descended into in the same order. A directory therefore
/// always precedes its contents. Symlinks are listed but not followed.
///
/// An absent or missing `root` lists nothing.
pub fn get_paths<P, F>(root: Option<P>, recursive: bool, path_filter: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    let Some(root) = root else {
        return Ok(Vec::new());
    };
    let root = root.as_ref();
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    collect_children(root, recursive, &path_filter, &mut paths)?;
    Ok(paths)
}

fn collect_children<F>(
    dir: &Path,
    recursive: bool,
    path_filter: &F,
    paths: &mut Vec<PathBuf>,
) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    let mut subdirs = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| UtilError::walk(dir, err))?;
        if recursive && entry.file_type().is_dir() {
            subdirs.push(entry.path().to_path_buf());
        }
        if path_filter(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    for subdir in subdirs {
        collect_children(&subdir, recursive, path_filter, paths)?;
    }
    Ok(())
}

/// [`get_paths`] restricted to regular files.
pub fn get_files<P, F>(root: Option<P>, recursive: bool, path_filter: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    get_paths(root, recursive, |p| p.is_file() && path_filter(p))
}

/// [`get_paths`] restricted to directories.
pub fn get_dirs<P, F>(root: Option<P>, recursive: bool, path_filter: F) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    F: Fn(&Path) -> bool,
{
    get_paths(root, recursive, |p| p.is_dir() && path_filter(p))
}

/// Fails with [`UtilError::NotFound`] when `path` does not exist.
pub fn check_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(UtilError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Fails with [`UtilError::AlreadyExists`] when `path` exists.
pub fn check_not_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(UtilError::AlreadyExists(path.to_path_buf()));
    }
    Ok(())
}

/// Fails unless `path` is a directory with no entries.
pub fn check_empty(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(UtilError::NotDirectory(path.to_path_buf()));
    }
    let mut entries = fs::read_dir(path).map_err(|err| UtilError::io(path, err))?;
    if entries.next().is_some() {
        return Err(UtilError::NotEmpty(path.to_path_buf()));
    }
    Ok(())
}

/// Creates every missing ancestor of `path`. Does nothing if the parent exists.
pub fn make_parent_dir(path: impl AsRef<Path>) -> Result<()> {
    let Some(parent) = path.as_ref().parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() || parent.exists() {
        return Ok(());
    }
    debug!(path = %parent.display(), "creating parent directories");
    fs::create_dir_all(parent).map_err(|err| UtilError::io(parent, err))
}

/// Copies a file, or a whole directory tree, from `src` to a new path `dst`.
///
/// File contents, permissions and access/modification times are preserved.
/// A no-op when either path is absent.
pub fn copy<S, D>(src: Option<S>, dst: Option<D>) -> Result<()>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let (Some(src), Some(dst)) = (src, dst) else {
        trace!("copy skipped: absent path");
        return Ok(());
    };
    let (src, dst) = (src.as_ref(), dst.as_ref());
    check_exists(src)?;
    check_not_exists(dst)?;
    make_parent_dir(dst)?;

    debug!(src = %src.display(), dst = %dst.display(), "copying");
    if src.is_file() {
        copy_file_with_metadata(src, dst)
    } else {
        copy_tree(src, dst)
    }
}

/// Relocates `src` to a new path `dst`.
///
/// Uses a rename; if the rename fails (for example across filesystems) the
/// path is copied and the source deleted. A no-op when either path is absent.
pub fn move_path<S, D>(src: Option<S>, dst: Option<D>) -> Result<()>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let (Some(src), Some(dst)) = (src, dst) else {
        trace!("move skipped: absent path");
        return Ok(());
    };
    let (src, dst) = (src.as_ref(), dst.as_ref());
    check_exists(src)?;
    check_not_exists(dst)?;
    make_parent_dir(dst)?;

    debug!(src = %src.display(), dst = %dst.display(), "moving");
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(err) => {
            debug!(error = %err, "rename failed, falling back to copy and delete");
            copy(Some(src), Some(dst))?;
            remove_entry(src)
        }
    }
}

/// Removes the file or directory tree at `target`. A no-op when absent.
pub fn delete<P: AsRef<Path>>(target: Option<P>) -> Result<()> {
    let Some(target) = target else {
        trace!("delete skipped: absent path");
        return Ok(());
    };
    let target = target.as_ref();
    check_exists(target)?;
    debug!(path = %target.display(), "deleting");
    remove_entry(target)
}

/// Removes everything under `root` while keeping `root` itself.
///
/// A no-op when `root` is absent or does not exist.
pub fn clear_dir<P: AsRef<Path>>(root: Option<P>) -> Result<()> {
    let Some(root) = root else {
        return Ok(());
    };
    let root = root.as_ref();
    if !root.exists() {
        return Ok(());
    }

    let paths = get_paths(Some(root), true, any_path)?;
    debug!(path = %root.display(), entries = paths.len(), "clearing directory");
    // Listing puts a directory before its contents; reversed, contents go first.
    for path in paths.iter().rev() {
        let meta = fs::symlink_metadata(path).map_err(|err| UtilError::io(path, err))?;
        if meta.is_dir() {
            fs::remove_dir(path).map_err(|err| UtilError::io(path, err))?;
        } else {
            fs::remove_file(path).map_err(|err| UtilError::io(path, err))?;
        }
    }
    Ok(())
}

/// Reads the created, updated and accessed timestamps of `path`.
///
/// All three are `None` when `path` is absent or does not exist.
pub fn get_times<P: AsRef<Path>>(path: Option<P>) -> Result<PathTimes> {
    let Some(path) = path else {
        return Ok(PathTimes::none());
    };
    let path = path.as_ref();
    if !path.exists() {
        return Ok(PathTimes::none());
    }

    let meta = fs::metadata(path).map_err(|err| UtilError::io(path, err))?;
    Ok(PathTimes {
        created: created_time(&meta).and_then(datetimes::from_file_time),
        updated: datetimes::from_file_time(FileTime::from_last_modification_time(&meta)),
        accessed: datetimes::from_file_time(FileTime::from_last_access_time(&meta)),
    })
}

pub fn get_created<P: AsRef<Path>>(path: Option<P>) -> Result<Option<NaiveDateTime>> {
    Ok(get_times(path)?.created)
}

pub fn get_updated<P: AsRef<Path>>(path: Option<P>) -> Result<Option<NaiveDateTime>> {
    Ok(get_times(path)?.updated)
}

pub fn get_accessed<P: AsRef<Path>>(path: Option<P>) -> Result<Option<NaiveDateTime>> {
    Ok(get_times(path)?.accessed)
}

/// Overwrites the modification and access times of `path`.
///
/// An absent `updated` or `accessed` keeps the current value; both are
/// always written together. A no-op when `path` is absent or missing.
pub fn modify_times<P: AsRef<Path>>(
    path: Option<P>,
    updated: Option<NaiveDateTime>,
    accessed: Option<NaiveDateTime>,
) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let path = path.as_ref();
    if !path.exists() {
        return Ok(());
    }

    let current = get_times(Some(path))?;
    let updated = updated.or(current.updated);
    let accessed = accessed.or(current.accessed);
    let (Some(updated), Some(accessed)) = (
        updated.as_ref().and_then(datetimes::to_file_time),
        accessed.as_ref().and_then(datetimes::to_file_time),
    ) else {
        trace!(path = %path.display(), "modify_times skipped: unresolved timestamp");
        return Ok(());
    };

    debug!(path = %path.display(), "setting file times");
    filetime::set_file_times(path, accessed, updated).map_err(|err| UtilError::io(path, err))
}

/// Splits the last segment of `path` into a name and a suffix.
///
/// The split happens at the last [`FILE_NAME_DELIMITER`]. Names that start or
/// end with the delimiter, or lack it, are returned whole without a suffix.
pub fn get_prefix_suffix<P: AsRef<Path>>(path: Option<P>) -> Option<PrefixSuffix> {
    let basename = basename(path?.as_ref());

    match basename.rfind(FILE_NAME_DELIMITER) {
        Some(idx) if idx > 0 && idx + FILE_NAME_DELIMITER.len_utf8() < basename.len() => {
            let suffix = basename[idx + FILE_NAME_DELIMITER.len_utf8()..].to_string();
            Some(PrefixSuffix::new(&basename[..idx], Some(suffix)))
        }
        _ => Some(PrefixSuffix::whole(basename)),
    }
}

pub fn get_prefix<P: AsRef<Path>>(path: Option<P>) -> Option<String> {
    get_prefix_suffix(path).map(|split| split.prefix)
}

pub fn get_suffix<P: AsRef<Path>>(path: Option<P>) -> Option<String> {
    get_prefix_suffix(path).and_then(|split| split.suffix)
}

/// Last path segment. Unlike `Path::file_name`, a trailing `..` is kept.
fn basename(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match path.components().next_back() {
        Some(Component::ParentDir) => "..".to_string(),
        _ => String::new(),
    }
}

fn remove_entry(path: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(path).map_err(|err| UtilError::io(path, err))?;
    if meta.is_dir() {
        fs::remove_dir_all(path).map_err(|err| UtilError::io(path, err))
    } else {
        fs::remove_file(path).map_err(|err| UtilError::io(path, err))
    }
}

fn copy_file_with_metadata(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|err| UtilError::io(src, err))?;
    let meta = fs::metadata(src).map_err(|err| UtilError::io(src, err))?;
    apply_metadata(&meta, dst)
}

fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir(dst).map_err(|err| UtilError::io(dst, err))?;

    let mut dirs = vec![(src.to_path_buf(), dst.to_path_buf())];
    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| UtilError::walk(src, err))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| {
                UtilError::io(
                    entry.path(),
                    io::Error::new(io::ErrorKind::InvalidInput, "entry escapes source root"),
                )
            })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|err| UtilError::io(&target, err))?;
            dirs.push((entry.into_path(), target));
        } else {
            copy_file_with_metadata(entry.path(), &target)?;
        }
    }

    // Directory times are applied last; writing their contents bumps them.
    for (src_dir, dst_dir) in dirs.iter().rev() {
        let meta = fs::metadata(src_dir).map_err(|err| UtilError::io(src_dir, err))?;
        apply_metadata(&meta, dst_dir)?;
    }
    Ok(())
}

fn apply_metadata(meta: &Metadata, dst: &Path) -> Result<()> {
    fs::set_permissions(dst, meta.permissions()).map_err(|err| UtilError::io(dst, err))?;
    filetime::set_file_times(
        dst,
        FileTime::from_last_access_time(meta),
        FileTime::from_last_modification_time(meta),
    )
    .map_err(|err| UtilError::io(dst, err))
}

fn created_time(meta: &Metadata) -> Option<FileTime> {
    FileTime::from_creation_time(meta).or_else(|| change_time(meta))
}

#[cfg(unix)]
fn change_time(meta: &Metadata) -> Option<FileTime> {
    use std::os::unix::fs::MetadataExt;
    Some(FileTime::from_unix_time(meta.ctime(), meta.ctime_nsec() as u32))
}

#[cfg(not(unix))]
fn change_time(_: &Metadata) -> Option<FileTime> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local, NaiveDate};
    use tempfile::TempDir;

    /// Builds the fixture tree used by the listing tests:
    ///
    /// ```text
    /// root/.d/  root/.f  root/d/  root/f  root/f.txt
    /// ```
    /// with the same five entries repeated inside `.d` and `d`.
    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        populate(tmp.path());
        populate(&tmp.path().join(".d"));
        populate(&tmp.path().join("d"));
        tmp
    }

    fn populate(dir: &Path) {
        fs::create_dir_all(dir.join(".d")).unwrap();
        fs::create_dir_all(dir.join("d")).unwrap();
        fs::write(dir.join(".f"), ".f").unwrap();
        fs::write(dir.join("f"), "f").unwrap();
        fs::write(dir.join("f.txt"), "f.txt").unwrap();
    }

    fn rel(root: &Path, paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn is_hidden(p: &Path) -> bool {
        p.file_name()
            .map(|n| n.to_string_lossy().starts_with('.'))
            .unwrap_or(false)
    }

    #[test]
    fn get_paths_absent_root_is_empty() {
        assert!(get_paths(None::<&Path>, true, any_path).unwrap().is_empty());
    }

    #[test]
    fn get_paths_missing_root_is_empty() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing/xyz");
        assert!(get_paths(Some(&missing), false, any_path).unwrap().is_empty());
        assert!(get_paths(Some(&missing), true, any_path).unwrap().is_empty());
        assert!(get_files(Some(&missing), true, any_path).unwrap().is_empty());
        assert!(get_dirs(Some(&missing), true, any_path).unwrap().is_empty());
    }

    #[test]
    fn get_paths_lists_direct_children_sorted() {
        let tmp = fixture();
        let paths = get_paths(Some(tmp.path()), false, any_path).unwrap();
        assert_eq!(rel(tmp.path(), &paths), [".d", ".f", "d", "f", "f.txt"]);
    }

    #[test]
    fn get_paths_recursive_lists_siblings_before_descending() {
        let tmp = fixture();
        let paths = get_paths(Some(tmp.path()), true, any_path).unwrap();
        assert_eq!(
            rel(tmp.path(), &paths),
            [
                ".d", ".f", "d", "f", "f.txt", ".d/.d", ".d/.f", ".d/d", ".d/f", ".d/f.txt",
                "d/.d", "d/.f", "d/d", "d/f", "d/f.txt",
            ]
        );
    }

    #[test]
    fn get_paths_recursive_descends_depth_first_per_directory() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("a/x")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("a/x/deep"), "").unwrap();
        fs::write(root.join("a/y"), "").unwrap();
        fs::write(root.join("b/z"), "").unwrap();
        fs::write(root.join("c"), "").unwrap();

        let paths = get_paths(Some(root), true, any_path).unwrap();
        assert_eq!(
            rel(root, &paths),
            ["a", "b", "c", "a/x", "a/y", "a/x/deep", "b/z"]
        );
    }

    #[test]
    fn get_paths_recursive_filter() {
        let tmp = fixture();
        let paths = get_paths(Some(tmp.path()), true, is_hidden).unwrap();
        assert_eq!(
            rel(tmp.path(), &paths),
            [".d", ".f", ".d/.d", ".d/.f", "d/.d", "d/.f"]
        );
    }

    #[test]
    fn get_files_and_dirs_non_recursive() {
        let tmp = fixture();
        let files = get_files(Some(tmp.path()), false, any_path).unwrap();
        assert_eq!(rel(tmp.path(), &files), [".f", "f", "f.txt"]);
        let dirs = get_dirs(Some(tmp.path()), false, any_path).unwrap();
        assert_eq!(rel(tmp.path(), &dirs), [".d", "d"]);
    }

    #[test]
    fn get_files_and_dirs_recursive_filter() {
        let tmp = fixture();
        let files = get_files(Some(tmp.path()), true, is_hidden).unwrap();
        assert_eq!(rel(tmp.path(), &files), [".f", ".d/.f", "d/.f"]);
        let dirs = get_dirs(Some(tmp.path()), true, is_hidden).unwrap();
        assert_eq!(rel(tmp.path(), &dirs), [".d", ".d/.d", "d/.d"]);
    }

    #[test]
    fn check_exists_and_not_exists() {
        let tmp = fixture();
        check_exists(tmp.path()).unwrap();
        check_not_exists(tmp.path().join("missing")).unwrap();

        let missing = tmp.path().join("missing");
        let err = check_exists(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            format!("Target path is not found. Path: {}", missing.display())
        );

        let err = check_not_exists(tmp.path()).unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(
            err.to_string(),
            format!("Target path is already exists. Path: {}", tmp.path().display())
        );
    }

    #[test]
    fn check_empty_variants() {
        let tmp = fixture();
        let empty = tmp.path().join("d/d");
        check_empty(&empty).unwrap();

        let file = tmp.path().join("f");
        let err = check_empty(&file).unwrap_err();
        assert!(matches!(err, UtilError::NotDirectory(_)));
        assert_eq!(
            err.to_string(),
            format!("Target path is not a directory. Path: {}", file.display())
        );

        let err = check_empty(tmp.path()).unwrap_err();
        assert!(matches!(err, UtilError::NotEmpty(_)));
        assert_eq!(
            err.to_string(),
            format!("Target directory is not empty. Path: {}", tmp.path().display())
        );
    }

    #[test]
    fn make_parent_dir_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("a/b");
        let target = parent.join("test.txt");

        make_parent_dir(&target).unwrap();
        make_parent_dir(&target).unwrap();

        assert!(parent.is_dir());
        assert!(!target.exists());
        assert!(get_paths(Some(&parent), false, any_path).unwrap().is_empty());
    }

    #[test]
    fn copy_tree_reproduces_structure() {
        let src = fixture();
        let tmp = TempDir::new().unwrap();
        let dst = tmp.path().join("nested/dst");

        copy(Some(src.path()), Some(&dst)).unwrap();

        let src_paths = get_paths(Some(src.path()), true, any_path).unwrap();
        let dst_paths = get_paths(Some(&dst), true, any_path).unwrap();
        assert_eq!(rel(src.path(), &src_paths), rel(&dst, &dst_paths));
        assert_eq!(fs::read_to_string(dst.join("d/f.txt")).unwrap(), "f.txt");
    }

    #[test]
    fn copy_file_preserves_modification_time() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.txt");
        let dst = tmp.path().join("dst.txt");
        fs::write(&src, "hello").unwrap();
        filetime::set_file_mtime(&src, FileTime::from_unix_time(1_700_000_000, 0)).unwrap();

        copy(Some(&src), Some(&dst)).unwrap();

        assert_eq!(fs::read_to_string(&dst).unwrap(), "hello");
        let meta = fs::metadata(&dst).unwrap();
        assert_eq!(
            FileTime::from_last_modification_time(&meta),
            FileTime::from_unix_time(1_700_000_000, 0)
        );
    }

    #[test]
    fn copy_checks_preconditions() {
        let tmp = fixture();
        let missing = tmp.path().join("missing");
        let err = copy(Some(&missing), Some(tmp.path().join("x"))).unwrap_err();
        assert!(err.is_not_found());

        let err = copy(Some(tmp.path().join("f")), Some(tmp.path().join("f.txt"))).unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(fs::read_to_string(tmp.path().join("f.txt")).unwrap(), "f.txt");
    }

    #[test]
    fn copy_with_absent_path_is_noop() {
        let tmp = fixture();
        copy(None::<&Path>, Some(tmp.path().join("x"))).unwrap();
        copy(Some(tmp.path()), None::<&Path>).unwrap();
        assert!(!tmp.path().join("x").exists());
    }

    #[test]
    fn move_relocates_tree() {
        let fixture = fixture();
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        let dst = tmp.path().join("deep/dst");
        copy(Some(fixture.path()), Some(&src)).unwrap();

        move_path(Some(&src), Some(&dst)).unwrap();

        assert!(!src.exists());
        let expected = get_paths(Some(fixture.path()), true, any_path).unwrap();
        let moved = get_paths(Some(&dst), true, any_path).unwrap();
        assert_eq!(rel(fixture.path(), &expected), rel(&dst, &moved));
    }

    #[test]
    fn move_refuses_existing_destination() {
        let tmp = fixture();
        let err = move_path(Some(tmp.path().join("f")), Some(tmp.path().join("d"))).unwrap_err();
        assert!(err.is_already_exists());
        assert!(tmp.path().join("f").exists());
    }

    #[test]
    fn delete_file_and_dir() {
        let tmp = fixture();
        let file = tmp.path().join("f");
        let dir = tmp.path().join("d");

        delete(Some(&file)).unwrap();
        delete(Some(&dir)).unwrap();

        assert!(!file.exists());
        assert!(!dir.exists());
        assert!(delete(Some(&file)).unwrap_err().is_not_found());
        delete(None::<&Path>).unwrap();
    }

    #[test]
    fn clear_dir_keeps_root() {
        let tmp = fixture();
        clear_dir(Some(tmp.path())).unwrap();
        assert!(tmp.path().is_dir());
        assert!(get_paths(Some(tmp.path()), true, any_path).unwrap().is_empty());

        clear_dir(Some(tmp.path().join("missing"))).unwrap();
        clear_dir(None::<&Path>).unwrap();
    }

    #[test]
    fn get_times_absent_or_missing() {
        assert_eq!(get_times(None::<&Path>).unwrap(), PathTimes::none());
        let tmp = TempDir::new().unwrap();
        assert_eq!(get_times(Some(tmp.path().join("missing"))).unwrap(), PathTimes::none());
    }

    #[test]
    fn modify_times_round_trip() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("test");
        fs::write(&target, "").unwrap();

        let base = NaiveDate::from_ymd_opt(2021, 3, 10)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        let updated = base - Duration::weeks(1);
        let accessed = base - Duration::weeks(2);

        modify_times(Some(&target), Some(updated), Some(accessed)).unwrap();

        assert_eq!(get_updated(Some(&target)).unwrap(), Some(updated));
        assert_eq!(get_accessed(Some(&target)).unwrap(), Some(accessed));
        let created = get_created(Some(&target)).unwrap().unwrap();
        assert!(created + Duration::hours(1) > Local::now().naive_local());
    }

    #[test]
    fn modify_times_keeps_current_value_when_absent() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("test");
        fs::write(&target, "").unwrap();

        let first = NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        modify_times(Some(&target), Some(first), Some(first)).unwrap();

        let accessed = first + Duration::days(3);
        modify_times(Some(&target), None, Some(accessed)).unwrap();

        assert_eq!(get_updated(Some(&target)).unwrap(), Some(first));
        assert_eq!(get_accessed(Some(&target)).unwrap(), Some(accessed));
        modify_times(None::<&Path>, Some(first), None).unwrap();
    }

    #[test]
    fn prefix_suffix_basic() {
        assert_eq!(get_prefix(Some("dir/test.txt")).as_deref(), Some("test"));
        assert_eq!(get_suffix(Some("dir/test.txt")).as_deref(), Some("txt"));
        assert_eq!(
            get_prefix_suffix(Some("archive.tar.gz")),
            Some(PrefixSuffix::new("archive.tar", Some("gz".to_string())))
        );
    }

    #[test]
    fn prefix_suffix_never_splits_edges() {
        assert_eq!(get_prefix_suffix(Some("test")), Some(PrefixSuffix::whole("test")));
        assert_eq!(get_prefix_suffix(Some(".test")), Some(PrefixSuffix::whole(".test")));
        assert_eq!(get_prefix_suffix(Some("test.")), Some(PrefixSuffix::whole("test.")));
        assert_eq!(get_suffix(Some("a/.test")), None);
        assert_eq!(get_prefix_suffix(None::<&str>), None);
    }

    #[test]
    fn prefix_suffix_keeps_parent_dir_segment() {
        assert_eq!(get_prefix_suffix(Some("a/b/..")), Some(PrefixSuffix::whole("..")));
        assert_eq!(get_prefix(Some("..")).as_deref(), Some(".."));
        assert_eq!(get_suffix(Some("a/..")), None);
    }

    #[test]
    fn prefix_suffix_reconstructs_name() {
        let split = get_prefix_suffix(Some("テスト.md")).unwrap();
        let suffix = split.suffix.unwrap();
        assert_eq!(format!("{}{FILE_NAME_DELIMITER}{}", split.prefix, suffix), "テスト.md");
    }
}
