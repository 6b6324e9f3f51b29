use std::path::{Path, PathBuf};

use crate::totals::{file_stats, group_digits};

/// What a node stands for on disk. Tagged at insertion so an empty directory
/// could never be mistaken for a file if one were ever inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

#[derive(Debug)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub children: Vec<Node>,
}

/// Root of the rendered hierarchy. Children keep first-discovered order;
/// callers wanting sorted output sort the file list before building.
#[derive(Debug, Default)]
pub struct DirTree {
    children: Vec<Node>,
}

impl DirTree {
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Builds the nested structure from a flat list of relative file paths. Every
/// intermediate segment becomes a directory node, the final segment a file
/// node; `a/b/c.txt` yields `a -> b -> c.txt`.
pub fn build_tree(files: &[PathBuf]) -> DirTree {
    let mut tree = DirTree::default();
    for file in files {
        let segments: Vec<String> = file
            .components()
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect();
        insert(&mut tree.children, &segments);
    }
    tree
}

fn insert(children: &mut Vec<Node>, segments: &[String]) {
    let Some((segment, rest)) = segments.split_first() else {
        return;
    };
    let kind = if rest.is_empty() {
        NodeKind::File
    } else {
        NodeKind::Directory
    };
    let index = match children.iter().position(|node| node.name == *segment) {
        Some(index) => index,
        None => {
            children.push(Node {
                name: segment.clone(),
                kind,
                children: Vec::new(),
            });
            children.len() - 1
        }
    };
    insert(&mut children[index].children, rest);
}

/// Renders the tree one line per node, with `|-- ` glyphs and `` `-- `` for
/// the last sibling. When `show_info` is set, names are left-justified into
/// the `info_padding` column and nodes that resolve to a regular file under
/// `root` get a ` (N bytes, L lines, C chars)` annotation, read fresh from
/// disk at render time.
pub fn render_tree(tree: &DirTree, show_info: bool, info_padding: usize, root: &Path) -> String {
    let mut rendered = String::new();
    render_children(
        tree.children(),
        "",
        root,
        show_info,
        info_padding,
        &mut rendered,
    );
    rendered
}

fn render_children(
    children: &[Node],
    prefix: &str,
    fs_path: &Path,
    show_info: bool,
    info_padding: usize,
    out: &mut String,
) {
    let count = children.len();
    for (i, node) in children.iter().enumerate() {
        let child_path = fs_path.join(&node.name);
        let info = if show_info {
            annotation(&child_path)
        } else {
            String::new()
        };
        let (glyph, continuation) = if i == count - 1 {
            ("`-- ", "    ")
        } else {
            ("|-- ", "|   ")
        };
        let width = info_padding.saturating_sub(prefix.chars().count() + 4);
        out.push_str(&format!(
            "{prefix}{glyph}{name:<width$}{info}\n",
            name = node.name
        ));
        if !node.children.is_empty() {
            let child_prefix = format!("{prefix}{continuation}");
            render_children(
                &node.children,
                &child_prefix,
                &child_path,
                show_info,
                info_padding,
                out,
            );
        }
    }
}

fn annotation(path: &Path) -> String {
    match file_stats(path) {
        Some(stats) => format!(
            " ({} bytes, {} lines, {} chars)",
            group_digits(stats.size),
            stats.lines,
            stats.chars
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn paths(paths: &[&str]) -> Vec<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        fs::write(path, contents).expect("failed to write fixture file");
    }

    #[test]
    fn builds_nested_structure_with_kinds() {
        let tree = build_tree(&paths(&["a.txt", "sub/b.txt"]));
        let children = tree.children();
        assert_eq!(children.len(), 2);

        assert_eq!(children[0].name, "a.txt");
        assert_eq!(children[0].kind, NodeKind::File);
        assert!(children[0].children.is_empty());

        assert_eq!(children[1].name, "sub");
        assert_eq!(children[1].kind, NodeKind::Directory);
        assert_eq!(children[1].children.len(), 1);
        assert_eq!(children[1].children[0].name, "b.txt");
        assert_eq!(children[1].children[0].kind, NodeKind::File);
    }

    #[test]
    fn shared_prefixes_merge_into_one_directory() {
        let tree = build_tree(&paths(&["src/a.rs", "src/b.rs"]));
        let children = tree.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].children.len(), 2);
        assert_eq!(children[0].children[0].name, "a.rs");
        assert_eq!(children[0].children[1].name, "b.rs");
    }

    #[test]
    fn children_keep_first_discovered_order() {
        let tree = build_tree(&paths(&["z.txt", "a.txt", "m/x.txt"]));
        let names: Vec<&str> = tree.children().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["z.txt", "a.txt", "m"]);
    }

    #[test]
    fn renders_glyphs_without_info() {
        let tree = build_tree(&paths(&["a.txt", "sub/b.txt"]));
        let rendered = render_tree(&tree, false, 0, Path::new("."));
        assert_eq!(rendered, "|-- a.txt\n`-- sub\n    `-- b.txt\n");
    }

    #[test]
    fn continuation_prefixes_track_sibling_position() {
        let tree = build_tree(&paths(&["a/b/c.txt", "a/d.txt"]));
        let rendered = render_tree(&tree, false, 0, Path::new("."));
        assert_eq!(
            rendered,
            "`-- a\n    |-- b\n    |   `-- c.txt\n    `-- d.txt\n"
        );
    }

    #[test]
    fn leaf_lines_match_selected_file_count() {
        let files = paths(&["a.txt", "sub/b.txt", "sub/deep/c.txt", "d.txt"]);
        let tree = build_tree(&files);
        let rendered = render_tree(&tree, false, 0, Path::new("."));

        for file in &files {
            let basename = file
                .file_name()
                .expect("fixture path has a basename")
                .to_string_lossy();
            let matches = rendered
                .lines()
                .filter(|line| line.ends_with(basename.as_ref()))
                .count();
            assert_eq!(matches, 1, "expected exactly one leaf line for {basename}");
        }
        // One line per node: four files plus two directories.
        assert_eq!(rendered.lines().count(), 6);
    }

    #[test]
    fn info_annotations_align_into_one_column() {
        let dir = tempdir().expect("failed to create temp dir");
        write_file(&dir.path().join("a.txt"), "hi");
        write_file(&dir.path().join("sub/b.txt"), "x\ny\n");

        let files = paths(&["a.txt", "sub/b.txt"]);
        let tree = build_tree(&files);
        let rendered = render_tree(&tree, true, 17, dir.path());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "|-- a.txt         (2 bytes, 1 lines, 2 chars)");
        assert_eq!(lines[1], "`-- sub          ");
        assert_eq!(lines[2], "    `-- b.txt     (4 bytes, 2 lines, 4 chars)");

        let offsets: Vec<usize> = lines
            .iter()
            .filter(|line| line.contains('('))
            .map(|line| line.find('(').expect("annotation missing"))
            .collect();
        assert_eq!(offsets, vec![18, 18]);
    }

    #[test]
    fn info_annotation_uses_the_scan_root_not_the_cwd() {
        let dir = tempdir().expect("failed to create temp dir");
        write_file(&dir.path().join("a.txt"), "hi");

        let tree = build_tree(&paths(&["a.txt"]));
        let rendered = render_tree(&tree, true, 13, dir.path());
        assert!(rendered.contains("(2 bytes, 1 lines, 2 chars)"));
    }
}
