use camino::{Utf8Path, Utf8PathBuf};

/// One directory of a layout and the empty files that live directly inside it.
///
/// Paths are written with `/` separators and converted segment by segment,
/// so the host separator ends up on disk.
#[derive(Debug, Clone, Copy)]
pub struct Group {
    pub dir: &'static str,
    pub files: &'static [&'static str],
}

impl Group {
    pub const fn new(dir: &'static str, files: &'static [&'static str]) -> Self {
        Self { dir, files }
    }
}

/// Fixed, ordered tree of directories and empty files.
#[derive(Debug, Clone, Copy)]
pub struct ProjectLayout {
    groups: &'static [Group],
}

impl ProjectLayout {
    pub const fn new(groups: &'static [Group]) -> Self {
        Self { groups }
    }

    /// Every entry in declaration order: a group's directory first, then its files.
    /// A directory already declared by an earlier group is not repeated.
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.groups.iter().enumerate().flat_map(move |(idx, group)| {
            let repeated = self.groups[..idx]
                .iter()
                .any(|earlier| earlier.dir == group.dir);
            let directory = (!repeated).then(|| Entry::Directory(DirectorySpec::new(group.dir)));
            directory.into_iter().chain(
                group
                    .files
                    .iter()
                    .map(move |name| Entry::File(FileSpec::new(group.dir, name))),
            )
        })
    }

    /// Files whose parent is not covered by an earlier directory entry.
    pub fn undeclared_parents(&self) -> Vec<FileSpec> {
        let mut declared: Vec<Utf8PathBuf> = Vec::new();
        let mut missing = Vec::new();
        for entry in self.entries() {
            match entry {
                Entry::Directory(dir) => declared.push(dir.path),
                Entry::File(file) => {
                    let covered = file.parent().is_some_and(|parent| {
                        declared.iter().any(|dir| dir.starts_with(parent))
                    });
                    if !covered {
                        missing.push(file);
                    }
                }
            }
        }
        missing
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySpec {
    path: Utf8PathBuf,
}

impl DirectorySpec {
    pub fn new(relative: &str) -> Self {
        Self {
            path: segments(relative),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    path: Utf8PathBuf,
}

impl FileSpec {
    pub fn new(dir: &str, name: &str) -> Self {
        Self {
            path: segments(dir).join(name),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn parent(&self) -> Option<&Utf8Path> {
        self.path.parent().filter(|parent| !parent.as_str().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(DirectorySpec),
    File(FileSpec),
}

impl Entry {
    pub fn path(&self) -> &Utf8Path {
        match self {
            Entry::Directory(dir) => dir.path(),
            Entry::File(file) => file.path(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Directory(_) => "directory",
            Entry::File(_) => "file",
        }
    }

    /// Path as shown to users; directories carry a trailing `/`.
    pub fn display_path(&self) -> String {
        match self {
            Entry::Directory(dir) => format!("{}/", dir.path()),
            Entry::File(file) => file.path().to_string(),
        }
    }
}

fn segments(relative: &str) -> Utf8PathBuf {
    relative.split('/').filter(|segment| !segment.is_empty()).collect()
}
