use std::collections::VecDeque;
use std::fmt;

use super::node::{InodeId, NodeKind};
use super::FileSystem;

/// A node matched by `find`, with its absolute path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub path: String,
    pub kind: NodeKind,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.kind)
    }
}

fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

impl FileSystem {
    /// Nodes of the subtree rooted at the current directory, in breadth-first
    /// first-child/next-sibling order.
    ///
    /// Visiting a node queues its first child, then its next sibling. The
    /// starting directory's own siblings are left out.
    fn walk_from_current_dir(&self) -> Vec<InodeId> {
        let mut visited = Vec::new();
        // Each entry carries the (parent, index) slot it was reached through
        let mut queue: VecDeque<(InodeId, Option<(InodeId, usize)>)> = VecDeque::new();
        queue.push_back((self.cwd, None));

        while let Some((inode, slot)) = queue.pop_front() {
            let Some(node) = self.inodes.get(&inode) else { continue };
            visited.push(inode);

            if let Some(&first) = node.children().first() {
                queue.push_back((first, Some((inode, 0))));
            }
            if let Some((parent, index)) = slot {
                let next = self.inodes.get(&parent).and_then(|p| p.children().get(index + 1));
                if let Some(&next) = next {
                    queue.push_back((next, Some((parent, index + 1))));
                }
            }
        }

        visited
    }

    fn collect_hits(&self, matches: impl Fn(&str) -> bool) -> Vec<SearchHit> {
        self.walk_from_current_dir()
            .into_iter()
            .filter_map(|inode| {
                let node = self.inodes.get(&inode)?;
                matches(&node.name).then(|| SearchHit {
                    path: self.path_of(inode),
                    kind: node.kind(),
                })
            })
            .collect()
    }

    /// Case-sensitive substring search on node names
    pub fn find(&self, pattern: &str) -> Vec<SearchHit> {
        self.collect_hits(|name| name.contains(pattern))
    }

    /// Like `find`, with ASCII letters folded to lowercase on both sides
    pub fn find_case_insensitive(&self, pattern: &str) -> Vec<SearchHit> {
        let pattern = pattern.to_ascii_lowercase();
        self.collect_hits(|name| name.to_ascii_lowercase().contains(&pattern))
    }

    /// Names (not paths) of files whose content contains `needle`
    pub fn grep(&self, needle: &str) -> Vec<String> {
        self.walk_from_current_dir()
            .into_iter()
            .filter_map(|inode| self.inodes.get(&inode))
            .filter(|node| node.data().is_some_and(|data| contains_bytes(data, needle.as_bytes())))
            .map(|node| node.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(hits: &[SearchHit]) -> Vec<&str> {
        hits.iter().map(|hit| hit.path.as_str()).collect()
    }

    #[test]
    fn test_contains_bytes() {
        assert!(contains_bytes(b"hello world", b"lo w"));
        assert!(!contains_bytes(b"hello", b"world"));
        assert!(!contains_bytes(b"lo", b"long"));
        assert!(contains_bytes(b"", b""));
    }

    #[test]
    fn test_find_reports_absolute_path_and_kind() {
        let mut fs = FileSystem::default();
        fs.mkdir("/docs").unwrap();
        fs.touch("/docs/a.txt", "hello").unwrap();

        let hits = fs.find("a");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].to_string(), "/docs/a.txt (file)");
    }

    #[test]
    fn test_find_no_matches() {
        let mut fs = FileSystem::default();
        fs.mkdir("/docs").unwrap();
        assert!(fs.find("zzz").is_empty());
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let mut fs = FileSystem::default();
        fs.touch("/README", "").unwrap();
        assert!(fs.find("readme").is_empty());
        assert_eq!(paths(&fs.find("READ")), vec!["/README"]);
    }

    #[test]
    fn test_find_case_insensitive() {
        let mut fs = FileSystem::default();
        fs.touch("/README", "").unwrap();
        fs.mkdir("/ReadMore").unwrap();

        let hits = fs.find_case_insensitive("rEaD");
        assert_eq!(paths(&hits), vec!["/ReadMore", "/README"]);
        assert_eq!(hits[0].kind, NodeKind::Directory);
    }

    #[test]
    fn test_find_breadth_first_sibling_order() {
        let mut fs = FileSystem::default();
        fs.mkdir("/a").unwrap();
        fs.mkdir("/b").unwrap();
        fs.touch("/a/x1", "").unwrap();
        fs.touch("/b/x2", "").unwrap();
        fs.touch("/x3", "").unwrap();

        // Root children are [x3, b, a]; x2 is queued while visiting b, before a is visited.
        assert_eq!(paths(&fs.find("x")), vec!["/x3", "/b/x2", "/a/x1"]);
    }

    #[test]
    fn test_find_scopes_to_current_dir_subtree() {
        let mut fs = FileSystem::default();
        fs.mkdir("/a").unwrap();
        fs.mkdir("/b").unwrap();
        fs.touch("/a/match-a", "").unwrap();
        fs.touch("/b/match-b", "").unwrap();

        fs.cd("/b").unwrap();
        assert_eq!(paths(&fs.find("match")), vec!["/b/match-b"]);
    }

    #[test]
    fn test_find_includes_symlinks() {
        let mut fs = FileSystem::default();
        fs.touch("/target", "").unwrap();
        fs.create_symlink("/target", "target-link").unwrap();

        let hits = fs.find("link");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].to_string(), "/target-link (symlink)");
    }

    #[test]
    fn test_grep_reports_file_names() {
        let mut fs = FileSystem::default();
        fs.mkdir("/docs").unwrap();
        fs.touch("/docs/a.txt", "hello").unwrap();
        fs.touch("/docs/b.txt", "goodbye").unwrap();
        fs.touch("/c.txt", "say hello again").unwrap();

        assert_eq!(fs.grep("hello"), vec!["c.txt".to_string(), "a.txt".to_string()]);
        assert!(fs.grep("absent").is_empty());
    }

    #[test]
    fn test_grep_skips_directories_and_symlinks() {
        let mut fs = FileSystem::default();
        fs.mkdir("/hello").unwrap();
        fs.touch("/file", "").unwrap();
        fs.create_symlink("/file", "hello-link").unwrap();

        assert_eq!(fs.grep(""), vec!["file".to_string()]);
        assert!(fs.grep("hello").is_empty());
    }
}
