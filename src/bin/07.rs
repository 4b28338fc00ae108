#![doc = include_str!("../puzzles/07.md")]

use std::fmt;

use advent_of_code_2022::{debugln, helpers::parse, Error, Result};
use index_vec::IndexVec;

const SMALL_DIR_MAX_SIZE: u64 = 100_000;
const TOTAL_DISK_SPACE: u64 = 70_000_000;
const REQUIRED_FREE_SPACE: u64 = 30_000_000;

index_vec::define_index_type! {
    /// Position of a [`Node`] in its [`FileSystem`].
    struct NodeId = u32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File {
        name: String,
        size: u64,
    },
    Dir {
        name: String,
        /// `None` only for the root.
        parent: Option<NodeId>,
        /// In the order they were listed.
        children: Vec<NodeId>,
    },
}

impl Node {
    fn dir(name: String, parent: Option<NodeId>) -> Self {
        Self::Dir {
            name,
            parent,
            children: Vec::new(),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Dir { name, .. } => name,
        }
    }

    fn is_dir(&self) -> bool {
        matches!(self, Self::Dir { .. })
    }
}

/// A directory tree rebuilt from a terminal transcript.
///
/// Nodes live in one flat arena. Directories own their children through
/// [`NodeId`]s and point back at their parent the same way.
#[derive(Debug, Clone)]
struct FileSystem {
    nodes: IndexVec<NodeId, Node>,
}

impl FileSystem {
    fn new() -> Self {
        let mut nodes = IndexVec::new();
        nodes.push(Node::dir("/".to_owned(), None));
        Self { nodes }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id) {
            Node::Dir { parent, .. } => *parent,
            Node::File { .. } => None,
        }
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.node(id) {
            Node::Dir { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    /// Finds the subdirectory `name` directly under `dir`.
    pub fn child_dir(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.children(dir).iter().copied().find(|&child| {
            let node = self.node(child);
            node.is_dir() && node.name() == name
        })
    }

    fn add_child(&mut self, dir: NodeId, child: Node) -> NodeId {
        let id = self.nodes.push(child);
        match &mut self.nodes[dir] {
            Node::Dir { children, .. } => children.push(id),
            Node::File { .. } => unreachable!("cursor always points at a directory"),
        }
        id
    }

    /// Size of a file, or the sum of everything below a directory.
    pub fn total_size(&self, id: NodeId) -> u64 {
        match self.node(id) {
            Node::File { size, .. } => *size,
            Node::Dir { children, .. } => children.iter().map(|&c| self.total_size(c)).sum(),
        }
    }

    /// Returns the total size of every directory, the root included, in one
    /// post-order pass. The root comes last.
    pub fn directory_sizes(&self) -> Vec<(NodeId, u64)> {
        fn visit(fs: &FileSystem, id: NodeId, sizes: &mut Vec<(NodeId, u64)>) -> u64 {
            match fs.node(id) {
                Node::File { size, .. } => *size,
                Node::Dir { children, .. } => {
                    let total = children.iter().map(|&c| visit(fs, c, sizes)).sum();
                    sizes.push((id, total));
                    total
                }
            }
        }

        let mut sizes = Vec::new();
        visit(self, self.root(), &mut sizes);
        sizes
    }

    /// Replays a transcript of `cd` and `ls` commands.
    pub fn from_transcript(input: &str) -> Result<Self> {
        let mut fs = Self::new();
        let mut cwd = fs.root();

        for (index, line) in input.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            match parse::parse_line(index, line, TranscriptLine::parser())? {
                TranscriptLine::Cd(CdTarget::Root) => cwd = fs.root(),
                TranscriptLine::Cd(CdTarget::Parent) => {
                    cwd = fs.parent(cwd).ok_or(Error::NoParentDirectory)?;
                }
                TranscriptLine::Cd(CdTarget::Child(name)) => {
                    cwd = fs
                        .child_dir(cwd, &name)
                        .ok_or_else(|| Error::UnknownDirectory(name))?;
                }
                TranscriptLine::Ls => {}
                TranscriptLine::Dir { name } => {
                    fs.add_child(cwd, Node::dir(name, Some(cwd)));
                }
                TranscriptLine::File { name, size } => {
                    fs.add_child(cwd, Node::File { name, size });
                }
            }
        }

        debugln!("{}", fs.pretty_print());
        Ok(fs)
    }

    pub fn pretty_print(&self) -> FsPrinter<'_> {
        FsPrinter { fs: self }
    }
}

/// Where a `cd` command goes.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CdTarget {
    Root,
    Parent,
    Child(String),
}

/// One line of the transcript: a command or a line of `ls` output.
#[derive(Debug, Clone, PartialEq, Eq)]
enum TranscriptLine {
    Cd(CdTarget),
    Ls,
    Dir { name: String },
    File { name: String, size: u64 },
}

/// Sums the sizes of all directories no larger than `max_size`.
///
/// Nested directories each count on their own, so a file can contribute to
/// the sum more than once.
fn sum_of_small_dirs(fs: &FileSystem, max_size: u64) -> u64 {
    fs.directory_sizes()
        .into_iter()
        .map(|(_, size)| size)
        .filter(|&size| size <= max_size)
        .sum()
}

/// Finds the size of the smallest directory that, once deleted, leaves at
/// least `required_free` bytes free on a disk of `capacity` bytes.
fn smallest_dir_to_delete(fs: &FileSystem, capacity: u64, required_free: u64) -> Result<u64> {
    let sizes = fs.directory_sizes();
    debugln!("directory sizes: {sizes:?}");

    let used = fs.total_size(fs.root());
    let free = capacity
        .checked_sub(used)
        .ok_or(Error::DiskOverfull { used, capacity })?;
    let needed = required_free.saturating_sub(free);
    debugln!("used: {used}, free: {free}, needed: {needed}");

    sizes
        .into_iter()
        .map(|(_, size)| size)
        .filter(|&size| size >= needed)
        .min()
        .ok_or(Error::NoCandidate { needed })
}

pub fn part_one(input: &str) -> Result<u64> {
    let fs = FileSystem::from_transcript(input)?;
    Ok(sum_of_small_dirs(&fs, SMALL_DIR_MAX_SIZE))
}

pub fn part_two(input: &str) -> Result<u64> {
    let fs = FileSystem::from_transcript(input)?;
    smallest_dir_to_delete(&fs, TOTAL_DISK_SPACE, REQUIRED_FREE_SPACE)
}

fn main() {
    let input = &advent_of_code_2022::read_input(7);
    advent_of_code_2022::solve!(1, part_one, input);
    advent_of_code_2022::solve!(2, part_two, input);
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{parser::char::string, *};
    }

    use c::{ParseError, Parser, Stream};

    fn name<Input>() -> impl Parser<Input, Output = String>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::many1(c::satisfy(|c: char| !c.is_whitespace()))
    }

    impl From<String> for CdTarget {
        fn from(target: String) -> Self {
            match target.as_str() {
                "/" => Self::Root,
                ".." => Self::Parent,
                _ => Self::Child(target),
            }
        }
    }

    impl TranscriptLine {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "$ cd a"
            let cd = (c::attempt(c::string("$ cd ")), name())
                .map(|(_, target)| Self::Cd(CdTarget::from(target)));

            // "$ ls"
            let ls = c::attempt(c::string("$ ls")).map(|_| Self::Ls);

            // "dir a"
            let dir = (c::attempt(c::string("dir ")), name()).map(|(_, name)| Self::Dir { name });

            // "123 a"
            let file = (parse::decimal_integer(), c::token(' '), name())
                .map(|(size, _, name)| Self::File { name, size });

            c::choice((cd, ls, dir, file))
        }
    }
}

/// Renders the tree as an indented listing, one node per line.
struct FsPrinter<'a> {
    fs: &'a FileSystem,
}

impl FsPrinter<'_> {
    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, level: usize) -> fmt::Result {
        let indent = level * 2;
        match self.fs.node(id) {
            Node::File { name, size } => {
                writeln!(f, "{:indent$}- {name} (file, size={size})", "")
            }
            Node::Dir { name, children, .. } => {
                writeln!(f, "{:indent$}- {name} (dir)", "")?;
                for &child in children {
                    self.write_node(f, child, level + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for FsPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.fs.root(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> FileSystem {
        let input = advent_of_code_2022::read_file("examples", 7);
        FileSystem::from_transcript(&input).unwrap()
    }

    #[track_caller]
    fn resolve(fs: &FileSystem, path: &[&str]) -> NodeId {
        path.iter().fold(fs.root(), |dir, name| {
            fs.child_dir(dir, name)
                .unwrap_or_else(|| panic!("no directory {name}"))
        })
    }

    fn child_names(fs: &FileSystem, dir: NodeId) -> Vec<&str> {
        fs.children(dir)
            .iter()
            .map(|&child| fs.node(child).name())
            .collect()
    }

    #[test]
    fn test_part_one() {
        let input = advent_of_code_2022::read_file("examples", 7);
        assert_eq!(part_one(&input).ok(), Some(95437));
    }

    #[test]
    fn test_part_two() {
        let input = advent_of_code_2022::read_file("examples", 7);
        assert_eq!(part_two(&input).ok(), Some(24933642));
    }

    #[test]
    fn test_example_sizes() {
        let fs = example();
        assert_eq!(fs.total_size(fs.root()), 48381165);
        assert_eq!(fs.total_size(resolve(&fs, &["a"])), 94853);
        assert_eq!(fs.total_size(resolve(&fs, &["a", "e"])), 584);
        assert_eq!(fs.total_size(resolve(&fs, &["d"])), 24933642);
    }

    #[test]
    fn test_directory_sizes_match_children() {
        let fs = example();
        let sizes = fs.directory_sizes();
        assert_eq!(sizes.len(), 4);
        assert_eq!(sizes.last(), Some(&(fs.root(), 48381165)));

        for (dir, size) in sizes {
            let from_children: u64 = fs.children(dir).iter().map(|&c| fs.total_size(c)).sum();
            assert_eq!(size, from_children);
            assert_eq!(size, fs.total_size(dir));
        }
    }

    #[test]
    fn test_listing_round_trip() {
        let fs = example();
        assert_eq!(child_names(&fs, fs.root()), ["a", "b.txt", "c.dat", "d"]);
        assert_eq!(child_names(&fs, resolve(&fs, &["a"])), ["e", "f", "g", "h.lst"]);
        assert_eq!(child_names(&fs, resolve(&fs, &["a", "e"])), ["i"]);
        assert_eq!(
            child_names(&fs, resolve(&fs, &["d"])),
            ["j", "d.log", "d.ext", "k"]
        );
    }

    #[test]
    fn test_parents() {
        let fs = example();
        let a = resolve(&fs, &["a"]);
        let e = resolve(&fs, &["a", "e"]);
        assert_eq!(fs.parent(e), Some(a));
        assert_eq!(fs.parent(a), Some(fs.root()));
        assert_eq!(fs.parent(fs.root()), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let fs = FileSystem::from_transcript(
            "\
$ cd /
$ ls
dir x
$ cd x
$ ls
100000 big
",
        )
        .unwrap();
        // Both `x` and the root weigh exactly the threshold.
        assert_eq!(sum_of_small_dirs(&fs, 100_000), 200_000);
        assert_eq!(sum_of_small_dirs(&fs, 99_999), 0);
    }

    #[test]
    fn test_cd_up_from_root_fails() {
        let result = FileSystem::from_transcript("$ cd /\n$ cd ..\n");
        assert!(matches!(result, Err(Error::NoParentDirectory)));
    }

    #[test]
    fn test_cd_into_unknown_dir_fails() {
        let result = FileSystem::from_transcript("$ cd /\n$ ls\n12 a\n$ cd a\n");
        assert!(matches!(result, Err(Error::UnknownDirectory(name)) if name == "a"));
    }

    #[test]
    fn test_cd_root_from_anywhere() {
        let fs = FileSystem::from_transcript(
            "\
$ ls
dir a
$ cd a
$ ls
dir b
$ cd b
$ cd /
$ ls
5 top
",
        )
        .unwrap();
        assert_eq!(child_names(&fs, fs.root()), ["a", "top"]);
    }

    #[test]
    fn test_malformed_line_fails() {
        let result = FileSystem::from_transcript("$ cd /\n$ ls\nnot a listing\n");
        assert!(matches!(result, Err(Error::Parse { line: 3, .. })));

        let result = FileSystem::from_transcript("$ rm -rf /\n");
        assert!(matches!(result, Err(Error::Parse { line: 1, .. })));
    }

    #[test]
    fn test_no_candidate() {
        let fs = FileSystem::from_transcript("$ ls\n5 a\n").unwrap();
        let result = smallest_dir_to_delete(&fs, 10, 100);
        assert!(matches!(result, Err(Error::NoCandidate { needed: 95 })));
    }

    #[test]
    fn test_disk_overfull() {
        let fs = FileSystem::from_transcript("$ ls\n50 a\n").unwrap();
        let result = smallest_dir_to_delete(&fs, 10, 5);
        assert!(matches!(
            result,
            Err(Error::DiskOverfull {
                used: 50,
                capacity: 10
            })
        ));
    }

    #[test]
    fn test_already_enough_space() {
        let fs = FileSystem::from_transcript("$ ls\ndir a\n$ cd a\n$ ls\n5 b\n").unwrap();
        assert_eq!(smallest_dir_to_delete(&fs, 100, 10).ok(), Some(5));
    }

    #[test]
    fn test_pretty_print() {
        let fs = FileSystem::from_transcript("$ ls\ndir a\n3 b\n$ cd a\n$ ls\n4 c\n").unwrap();
        assert_eq!(
            fs.pretty_print().to_string(),
            "\
- / (dir)
  - a (dir)
    - c (file, size=4)
  - b (file, size=3)
"
        );
    }

    #[test]
    fn test_transcript_lines() {
        let parse = |line| parse::from_str(line, TranscriptLine::parser()).ok();
        assert_eq!(parse("$ cd /"), Some(TranscriptLine::Cd(CdTarget::Root)));
        assert_eq!(parse("$ cd .."), Some(TranscriptLine::Cd(CdTarget::Parent)));
        assert_eq!(
            parse("$ cd abc"),
            Some(TranscriptLine::Cd(CdTarget::Child("abc".into())))
        );
        assert_eq!(parse("$ ls"), Some(TranscriptLine::Ls));
        assert_eq!(
            parse("dir e"),
            Some(TranscriptLine::Dir { name: "e".into() })
        );
        assert_eq!(
            parse("62596 h.lst"),
            Some(TranscriptLine::File {
                name: "h.lst".into(),
                size: 62596
            })
        );
        assert_eq!(parse("$ ls -la"), None);
    }
}
