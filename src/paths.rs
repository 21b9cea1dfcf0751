use std::path::{Path, PathBuf};

/// The project root anchors relative input/output paths from the
/// configuration. Config files live two levels below it, e.g.
/// `<root>/resources/config.yaml`.
fn project_root(config_path: &Path) -> &Path {
    config_path
        .parent()
        .and_then(Path::parent)
        .unwrap_or(Path::new("."))
}

fn config_dir(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or(Path::new("."))
}

/// Resolves the input PDF path. An explicit override is used verbatim. A
/// relative config default is tried against the project root first, then
/// against the config file's own directory (older layouts kept inputs next
/// to the config). When neither candidate exists the project-root candidate
/// is still returned; the caller owns the final existence check.
pub fn resolve_input(
    explicit: Option<&str>,
    config_default: Option<&str>,
    config_path: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    let default = Path::new(config_default?);
    if default.is_absolute() {
        return Some(default.to_path_buf());
    }

    let standard = project_root(config_path).join(default);
    if standard.exists() {
        return Some(standard);
    }

    let fallback = config_dir(config_path).join(default);
    if fallback.exists() {
        return Some(fallback);
    }

    Some(standard)
}

/// Resolves the output PDF path. An explicit override is used verbatim with
/// no suffix; a config default is anchored at the project root when relative
/// and gets `suffix` inserted before its extension, so outputs from this
/// tool are distinguishable from siblings writing to the same name.
pub fn resolve_output(
    explicit: Option<&str>,
    config_default: Option<&str>,
    config_path: &Path,
    suffix: &str,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    let default = Path::new(config_default?);
    let base = if default.is_absolute() {
        default.to_path_buf()
    } else {
        project_root(config_path).join(default)
    };

    Some(with_suffix(&base, suffix))
}

/// Resolves the cover Markdown path. An explicit override is used verbatim;
/// unlike input/output resolution, no project-root rewriting is applied. A
/// config default resolves against the config file's own directory.
pub fn resolve_cover(
    explicit: Option<&str>,
    config_default: Option<&str>,
    config_path: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    Some(config_dir(config_path).join(config_default?))
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}
