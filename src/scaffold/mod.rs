pub mod flutter;

use tracing::info;

use crate::error::FilesystemError;
use crate::fs::Filesystem;
use crate::layout::{DirectorySpec, Entry, FileSpec, ProjectLayout};

/// Realizes a [`ProjectLayout`] against a [`Filesystem`].
pub struct Scaffolder<F> {
    fs: F,
}

impl<F: Filesystem> Scaffolder<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn ensure_directory(&mut self, dir: &DirectorySpec) -> Result<(), FilesystemError> {
        self.fs.ensure_directory(dir.path())
    }

    pub fn ensure_empty_file(&mut self, file: &FileSpec) -> Result<(), FilesystemError> {
        self.fs.ensure_empty_file(file.path())
    }

    /// Apply every entry in declared order, stopping at the first failure.
    pub fn run_layout(&mut self, layout: &ProjectLayout) -> Result<(), FilesystemError> {
        debug_assert!(
            layout.undeclared_parents().is_empty(),
            "layout declares a file before its parent directory"
        );
        let mut directories = 0usize;
        let mut files = 0usize;
        for entry in layout.entries() {
            match &entry {
                Entry::Directory(dir) => {
                    self.ensure_directory(dir)?;
                    directories += 1;
                }
                Entry::File(file) => {
                    self.ensure_empty_file(file)?;
                    files += 1;
                }
            }
        }
        info!(directories, files, "layout ensured");
        Ok(())
    }

    pub fn into_inner(self) -> F {
        self.fs
    }
}

/// Ensure the mobile client skeleton exists.
pub fn install<F: Filesystem>(fs: F) -> Result<F, FilesystemError> {
    let mut scaffolder = Scaffolder::new(fs);
    scaffolder.run_layout(&flutter::LAYOUT)?;
    Ok(scaffolder.into_inner())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io;

    use camino::{Utf8Path, Utf8PathBuf};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Node {
        Dir,
        File(String),
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Dir(Utf8PathBuf),
        File(Utf8PathBuf),
    }

    /// In-memory tree that records every primitive call.
    #[derive(Debug, Default)]
    struct RecordingFs {
        nodes: BTreeMap<Utf8PathBuf, Node>,
        calls: Vec<Call>,
    }

    impl RecordingFs {
        fn with_file(mut self, path: &str, contents: &str) -> Self {
            let path = Utf8PathBuf::from(path);
            for ancestor in path.ancestors().skip(1) {
                if !ancestor.as_str().is_empty() {
                    self.nodes.insert(ancestor.to_owned(), Node::Dir);
                }
            }
            self.nodes.insert(path, Node::File(contents.to_owned()));
            self
        }

        fn is_dir(&self, path: &Utf8Path) -> bool {
            self.nodes.get(path) == Some(&Node::Dir)
        }
    }

    impl Filesystem for RecordingFs {
        fn ensure_directory(&mut self, path: &Utf8Path) -> Result<(), FilesystemError> {
            self.calls.push(Call::Dir(path.to_owned()));
            let mut ancestors: Vec<&Utf8Path> = path.ancestors().collect();
            ancestors.reverse();
            for ancestor in ancestors.into_iter().filter(|a| !a.as_str().is_empty()) {
                match self.nodes.get(ancestor) {
                    Some(Node::Dir) => {}
                    Some(Node::File(_)) => {
                        return Err(FilesystemError::NotADirectory {
                            path: ancestor.to_owned(),
                        });
                    }
                    None => {
                        self.nodes.insert(ancestor.to_owned(), Node::Dir);
                    }
                }
            }
            Ok(())
        }

        fn ensure_empty_file(&mut self, path: &Utf8Path) -> Result<(), FilesystemError> {
            self.calls.push(Call::File(path.to_owned()));
            if self.nodes.contains_key(path) {
                return Ok(());
            }
            let parent = path.parent().unwrap_or(Utf8Path::new(""));
            if !parent.as_str().is_empty() && !self.is_dir(parent) {
                return Err(FilesystemError::CreateFile {
                    path: path.to_owned(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                });
            }
            self.nodes.insert(path.to_owned(), Node::File(String::new()));
            Ok(())
        }
    }

    #[test]
    fn parents_are_ensured_before_files() {
        let fs = install(RecordingFs::default()).unwrap();

        let mut seen_dirs: Vec<&Utf8Path> = Vec::new();
        for call in &fs.calls {
            match call {
                Call::Dir(path) => seen_dirs.push(path),
                Call::File(path) => {
                    let parent = path.parent().unwrap();
                    assert!(
                        seen_dirs.iter().any(|dir| dir.starts_with(parent)),
                        "{path} requested before its parent"
                    );
                }
            }
        }
    }

    #[test]
    fn every_entry_exists_with_its_kind() {
        let fs = install(RecordingFs::default()).unwrap();

        for entry in flutter::LAYOUT.entries() {
            let node = fs.nodes.get(entry.path());
            match entry {
                Entry::Directory(_) => assert_eq!(node, Some(&Node::Dir)),
                Entry::File(_) => assert_eq!(node, Some(&Node::File(String::new()))),
            }
        }
    }

    #[test]
    fn second_run_changes_nothing() {
        let once = install(RecordingFs::default()).unwrap();
        let snapshot = once.nodes.clone();
        let twice = install(once).unwrap();

        assert_eq!(twice.nodes, snapshot);
    }

    #[test]
    fn existing_content_is_kept() {
        let seeded = RecordingFs::default().with_file("lib/main.dart", "void main() {}\n");
        let fs = install(seeded).unwrap();

        assert_eq!(
            fs.nodes.get(Utf8Path::new("lib/main.dart")),
            Some(&Node::File("void main() {}\n".to_owned()))
        );
        assert_eq!(
            fs.nodes.get(Utf8Path::new("lib/app/app.dart")),
            Some(&Node::File(String::new()))
        );
    }

    #[test]
    fn collision_aborts_the_run() {
        let seeded = RecordingFs::default().with_file("lib/core", "");
        let mut scaffolder = Scaffolder::new(seeded);

        let err = scaffolder.run_layout(&flutter::LAYOUT).unwrap_err();
        assert!(matches!(err, FilesystemError::NotADirectory { ref path } if path == "lib/core"));

        let fs = scaffolder.into_inner();
        assert!(matches!(fs.calls.last(), Some(Call::Dir(path)) if path == "lib/core"));
        assert!(!fs.nodes.contains_key(Utf8Path::new("lib/features")));
    }

    #[test]
    fn runs_against_the_host_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        std::fs::create_dir_all(root.join("lib/app")).unwrap();
        std::fs::write(root.join("lib/app/theme.dart"), "// theme\n").unwrap();

        install(crate::fs::LocalFs::new(root.clone())).unwrap();
        install(crate::fs::LocalFs::new(root.clone())).unwrap();

        assert_eq!(
            std::fs::read_to_string(root.join("lib/app/theme.dart")).unwrap(),
            "// theme\n"
        );
        assert_eq!(std::fs::metadata(root.join("lib/main.dart")).unwrap().len(), 0);
        assert!(root.join("lib/features/kyc/models").is_dir());
    }
}
