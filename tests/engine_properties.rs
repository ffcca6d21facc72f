use std::io::Cursor;

use memfs::filesystem::NodeKind;
use memfs::shell::Shell;
use memfs::{FileSystem, FsError};

#[test]
fn test_mkdir_cd_pwd() {
    let mut fs = FileSystem::new();
    fs.mkdir("/home").unwrap();
    fs.cd("/home").unwrap();
    fs.mkdir("user").unwrap();
    fs.cd("user").unwrap();
    assert_eq!(fs.pwd(), "/home/user");

    fs.cd("..").unwrap();
    assert_eq!(fs.pwd(), "/home");
}

#[test]
fn test_file_and_directory_share_a_name() {
    let mut fs = FileSystem::new();
    let file = fs.touch("/data", "bytes").unwrap();
    let dir = fs.mkdir("/data").unwrap();

    assert_ne!(file, dir);
    assert_eq!(fs.resolve("/data").unwrap(), dir);
    assert_eq!(fs.get(dir).unwrap().kind(), NodeKind::Directory);
}

#[test]
fn test_rm_then_resolve_fails() {
    let mut fs = FileSystem::new();
    fs.touch("/tmp.txt", "x").unwrap();
    fs.rm("/tmp.txt").unwrap();
    assert!(matches!(fs.resolve("/tmp.txt"), Err(FsError::PathNotFound(_))));
}

#[test]
fn test_rmdir_releases_every_descendant() {
    let mut fs = FileSystem::new();
    fs.mkdir("/keep").unwrap();
    fs.mkdir("/tree").unwrap();
    fs.mkdir("/tree/a").unwrap();
    fs.mkdir("/tree/a/b").unwrap();
    fs.touch("/tree/a/b/leaf", "leaf").unwrap();
    fs.touch("/tree/top", "").unwrap();
    assert_eq!(fs.node_count(), 7);

    let removed = fs.rmdir("/tree").unwrap();
    assert_eq!(removed, 5);
    assert_eq!(fs.node_count(), 2);
    assert!(fs.resolve("/keep").is_ok());
}

#[test]
fn test_mv_into_directory() {
    let mut fs = FileSystem::new();
    fs.mkdir("/a").unwrap();
    fs.mkdir("/b").unwrap();
    fs.touch("/a/x", "payload").unwrap();

    fs.mv("/a/x", "/b").unwrap();
    assert_eq!(fs.cat("/b/x").unwrap(), b"payload");
    assert!(fs.resolve("/a/x").is_err());
}

#[test]
fn test_mv_into_own_descendant_is_rejected() {
    let mut fs = FileSystem::new();
    fs.mkdir("/a").unwrap();
    fs.mkdir("/a/b").unwrap();

    let err = fs.mv("/a", "/a/b").unwrap_err();
    assert!(matches!(err, FsError::CircularMove { .. }));
    assert!(fs.resolve("/a/b").is_ok());
    assert_eq!(fs.node_count(), 3);
}

#[test]
fn test_cp_is_independent() {
    let mut fs = FileSystem::new();
    fs.mkdir("/src").unwrap();
    fs.touch("/src/f", "original").unwrap();

    fs.cp("/src", "/dst").unwrap();
    fs.write("/dst/f", "changed").unwrap();
    fs.rm("/src/f").unwrap();

    assert_eq!(fs.cat("/dst/f").unwrap(), b"changed");
    assert!(fs.resolve("/src/f").is_err());
}

#[test]
fn test_save_concatenates_in_traversal_order() {
    let mut fs = FileSystem::new();
    fs.mkdir("/d").unwrap();
    fs.touch("/d/one", "1").unwrap();
    fs.touch("/two", "2").unwrap();

    let mut out = Vec::new();
    fs.save(&mut out).unwrap();
    assert_eq!(out, b"2\n1\n");
}

#[test]
fn test_load_replaces_content() {
    let mut fs = FileSystem::new();
    fs.touch("/f", "X").unwrap();
    fs.mkdir("/dir").unwrap();

    fs.load(&mut Cursor::new(b"Y".to_vec()), "/f").unwrap();
    assert_eq!(fs.cat("/f").unwrap(), b"Y");

    let err = fs.load(&mut Cursor::new(b"Y".to_vec()), "/dir").unwrap_err();
    assert!(matches!(err, FsError::InvalidTarget(_)));
}

#[test]
fn test_find_and_grep_example() {
    let mut fs = FileSystem::new();
    fs.mkdir("/docs").unwrap();
    fs.touch("/docs/a.txt", "hello").unwrap();

    let hits = fs.find("a");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].to_string(), "/docs/a.txt (file)");
    assert_eq!(fs.grep("hello"), vec!["a.txt".to_string()]);
}

#[test]
fn test_failed_operations_leave_tree_unchanged() {
    let mut fs = FileSystem::new();
    fs.mkdir("/a").unwrap();
    fs.touch("/a/f", "data").unwrap();
    let before = fs.node_count();

    assert!(fs.mkdir("/missing/dir").is_err());
    assert!(fs.touch("/a/f/inner", "").is_err());
    assert!(fs.rm("/a").is_err());
    assert!(fs.rmdir("/").is_err());
    assert!(fs.mv("/a", "/a").is_err());
    assert!(fs.cp("/nothing", "/a").is_err());
    assert!(fs.create_symlink("/nothing", "l").is_err());
    assert!(fs.rename("/a/f", "..").is_err());

    assert_eq!(fs.node_count(), before);
    assert_eq!(fs.cat("/a/f").unwrap(), b"data");
}

#[test]
fn test_shell_session_end_to_end() {
    let script = "\
mkdir /docs
touch /docs/a.txt hello
find a
grep hello
chmod /docs/a.txt 600
mv /docs/a.txt /docs/b.txt
ls
cd /docs
ls
exit
";
    let mut shell = Shell::new(FileSystem::new(), "");
    let mut output = Vec::new();
    shell.run(Cursor::new(script.as_bytes()), &mut output, false).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("/docs/a.txt (file)\n"));
    assert!(output.contains("File: a.txt contains the specified content.\n"));
    assert!(output.contains("[DIR] docs\n"));
    assert!(output.contains("[FILE] b.txt\n"));

    let fs = shell.into_filesystem();
    assert_eq!(fs.stat("/docs/b.txt").unwrap().permissions, 0o600);
}
