use std::path;

/// Walk from `dir` up through its ancestors looking for `name`.
pub fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

/// Whether `dir` names the same directory as `root`.
///
/// Relative paths are taken from the current directory. Purely lexical; nothing
/// is read from disk.
pub fn resolves_to_root(root: &path::Path, dir: &path::Path) -> bool {
    resolve(root) == resolve(dir)
}

fn resolve(path: &path::Path) -> path::PathBuf {
    let absolute = path::absolute(path).unwrap_or_else(|_| path.to_owned());
    normalize_abs(&absolute)
}

/// Whether `link` is a site path: starts with `/`.
pub fn is_site_path(link: &str) -> bool {
    link.starts_with('/')
}

fn normalize_abs(path: &path::Path) -> path::PathBuf {
    let mut normalized = path::PathBuf::new();
    for component in path.components() {
        match component {
            path::Component::CurDir => {}
            path::Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", "_notesite.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/config/_notesite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", "_notesite.yml").unwrap();
        let expected = path::Path::new("tests/fixtures/config/_notesite.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual = find_project_file("tests/fixtures/", "_notesite.yml")
            .unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }

    #[test]
    fn relative_dirs_naming_root() {
        let root = path::Path::new("docs");
        assert!(resolves_to_root(root, &root.join(".")));
        assert!(resolves_to_root(root, &root.join("./")));
        assert!(resolves_to_root(root, &root.join("dist/..")));
        assert!(resolves_to_root(root, &root.join("../docs")));
    }

    #[test]
    fn relative_dirs_elsewhere() {
        let root = path::Path::new("docs");
        assert!(!resolves_to_root(root, &root.join("../dist")));
        assert!(!resolves_to_root(root, &root.join("dist")));
        assert!(!resolves_to_root(root, &root.join("./.vitepress/dist")));
        assert!(!resolves_to_root(root, &root.join("../../docs")));
    }

    #[test]
    #[cfg(unix)]
    fn absolute_dirs() {
        let root = path::Path::new("/srv/notes");
        assert!(resolves_to_root(root, &root.join("/srv/notes")));
        assert!(resolves_to_root(root, &root.join("/srv/notes/")));
        assert!(resolves_to_root(root, &root.join("/srv/notes/dist/..")));
        assert!(resolves_to_root(root, &root.join("../notes")));
        assert!(!resolves_to_root(root, &root.join("/srv/dist")));
        assert!(!resolves_to_root(root, &root.join("../dist")));
    }

    #[test]
    fn site_paths() {
        assert!(is_site_path("/"));
        assert!(is_site_path("/Tool/"));
        assert!(!is_site_path("Tool/"));
        assert!(!is_site_path(""));
    }
}
