use std::path::{Path, PathBuf};

/// File extensions, in lower case, that are treated as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "bmp"];

/// The images of one source, destined for one array named `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// The final component of the source path.
    pub name: String,

    /// The images, in the order they are written.
    pub files: Vec<PathBuf>,
}

// ----------------------------------------------------------------------------

/// Returns `true` if `path` has an image extension, ignoring case.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Lists the images in `source`.
///
/// A directory contributes its immediate children, sorted by path. A file
/// contributes itself. Anything else contributes nothing.
pub fn list_images(source: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if source.is_dir() {
        match std::fs::read_dir(source) {
            Ok(entries) => files.extend(
                entries.filter_map(|e| e.ok()).map(|e| e.path()).filter(|p| p.is_file())
            ),
            Err(e) => log::warn!("Couldn't list {}: {}", source.display(), e),
        }
        files.sort();
    } else if source.is_file() {
        files.push(source.to_owned());
    }
    files.retain(|p| is_image_file(p));
    files
}

/// The dataset name for `source`: its final path component.
pub fn dataset_name(source: &Path) -> Option<String> {
    let name = match source.file_name() {
        Some(name) => name.to_owned(),
        None => source.canonicalize().ok()?.file_name()?.to_owned(),
    };
    Some(name.to_string_lossy().into_owned())
}

/// Collects the images of each source into a `Dataset`.
///
/// Sources without images are dropped with a warning. The result is in the
/// order of `sources` and may be empty.
pub fn map_sources(sources: &[PathBuf]) -> Vec<Dataset> {
    let mut datasets = Vec::new();
    for src in sources {
        let files = list_images(src);
        if files.is_empty() {
            log::warn!("Source {} has 0 files! Ignoring it...", src.display());
            continue;
        }
        let Some(name) = dataset_name(src) else {
            log::warn!("Source {} has no usable name! Ignoring it...", src.display());
            continue;
        };
        log::debug!("Added {} files from {}: {:?}", files.len(), src.display(), files);
        datasets.push(Dataset {name, files});
    }
    datasets
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn extensions() {
        for yes in ["a.jpg", "a.JPEG", "dir/b.Png", "c.bmp", "x.tar.png"] {
            assert!(is_image_file(Path::new(yes)), "{yes}");
        }
        for no in ["a.gif", "a.tiff", "png", "a.png.txt", "noext", ".png"] {
            assert!(!is_image_file(Path::new(no)), "{no}");
        }
    }

    #[test]
    fn directory_listing() {
        let dir = tempfile::tempdir().unwrap();
        let b = touch(dir.path(), "b.png");
        let a = touch(dir.path(), "a.JPG");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("nested.png")).unwrap();
        touch(&dir.path().join("nested.png"), "deep.png");
        assert_eq!(list_images(dir.path()), vec![a, b]);
    }

    #[test]
    fn single_file() {
        let dir = tempfile::tempdir().unwrap();
        let img = touch(dir.path(), "one.bmp");
        let txt = touch(dir.path(), "one.txt");
        assert_eq!(list_images(&img), vec![img.clone()]);
        assert!(list_images(&txt).is_empty());
        assert!(list_images(&dir.path().join("missing")).is_empty());
    }

    #[test]
    fn mapping() {
        let root = tempfile::tempdir().unwrap();
        let cats = root.path().join("cats");
        let empty = root.path().join("empty");
        fs::create_dir(&cats).unwrap();
        fs::create_dir(&empty).unwrap();
        touch(&cats, "1.png");
        touch(&cats, "2.png");
        touch(&empty, "readme.md");
        let single = touch(root.path(), "lone.jpg");

        let datasets = map_sources(&[empty, cats.clone(), single.clone()]);
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].name, "cats");
        assert_eq!(datasets[0].files, vec![cats.join("1.png"), cats.join("2.png")]);
        assert_eq!(datasets[1].name, "lone.jpg");
        assert_eq!(datasets[1].files, vec![single]);
    }

    #[test]
    fn nothing_found() {
        let root = tempfile::tempdir().unwrap();
        assert!(map_sources(&[root.path().to_owned(), root.path().join("nope")]).is_empty());
    }

    #[test]
    fn names() {
        assert_eq!(dataset_name(Path::new("data/cats")), Some("cats".into()));
        assert_eq!(dataset_name(Path::new("data/cats/")), Some("cats".into()));
        assert!(dataset_name(Path::new(".")).is_some());
    }
}
