//! Composite: files and directories share the `Entry` trait, so a directory
//! can hold either and size/listing recurse without caring which is which.

use crate::error::{PatternError, Result};
use std::fmt;
use std::io::Write;

pub trait Entry {
    fn name(&self) -> &str;
    fn size(&self) -> u64;
    fn print_list(&self, prefix: &str, out: &mut dyn Write) -> Result<()>;

    /// Only containers accept children.
    fn add(&mut self, _entry: Box<dyn Entry>) -> Result<&mut dyn Entry> {
        Err(PatternError::FileTreatment(self.name().to_string()))
    }
}

impl fmt::Display for dyn Entry + '_ {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.size())
    }
}

#[derive(Debug, Clone)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        File {
            name: name.into(),
            size,
        }
    }
}

impl Entry for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn print_list(&self, prefix: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{prefix}/{}", self as &dyn Entry)?;
        Ok(())
    }
}

pub struct Directory {
    name: String,
    entries: Vec<Box<dyn Entry>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Directory {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder-style add for assembling trees inline.
    pub fn with(mut self, entry: impl Entry + 'static) -> Self {
        self.entries.push(Box::new(entry));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = &(dyn Entry + 'static)> {
        self.entries.iter().map(|entry| entry.as_ref())
    }
}

impl Entry for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.entries.iter().map(|entry| entry.size()).sum()
    }

    fn print_list(&self, prefix: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{prefix}/{}", self as &dyn Entry)?;
        let child_prefix = format!("{prefix}/{}", self.name);
        for entry in &self.entries {
            entry.print_list(&child_prefix, out)?;
        }
        Ok(())
    }

    fn add(&mut self, entry: Box<dyn Entry>) -> Result<&mut dyn Entry> {
        self.entries.push(entry);
        Ok(self)
    }
}

/// The sample tree: root with bin, tmp and usr (holding two user homes).
pub fn sample_tree() -> Directory {
    let yuki = Directory::new("yuki")
        .with(File::new("diary.html", 100))
        .with(File::new("composite.rs", 200));
    let hanako = Directory::new("hanako").with(File::new("memo.tex", 300));
    let tomura = Directory::new("tomura")
        .with(File::new("game.doc", 400))
        .with(File::new("junk.mail", 500));

    Directory::new("root")
        .with(
            Directory::new("bin")
                .with(File::new("vi", 10000))
                .with(File::new("latex", 20000)),
        )
        .with(Directory::new("tmp"))
        .with(Directory::new("usr").with(yuki).with(hanako).with(tomura))
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut root = sample_tree();
    root.print_list("", out)?;

    writeln!(out)?;
    let mut file = File::new("readme.txt", 42);
    match file.add(Box::new(File::new("nested.txt", 1))) {
        Ok(_) => writeln!(out, "added to a file?")?,
        Err(err) => writeln!(out, "{err}")?,
    }

    root.add(Box::new(file))?;
    writeln!(out, "root is now {} bytes", root.size())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(entry: &dyn Entry) -> String {
        let mut out = Vec::new();
        entry.print_list("", &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_size_sums_recursively() {
        let tree = sample_tree();
        assert_eq!(tree.size(), 31500);
        let usr = tree.entries().find(|e| e.name() == "usr").unwrap();
        assert_eq!(usr.size(), 1500);
    }

    #[test]
    fn test_empty_directory_is_zero() {
        assert_eq!(Directory::new("tmp").size(), 0);
    }

    #[test]
    fn test_print_list_depth_first() {
        let tree = Directory::new("root")
            .with(Directory::new("bin").with(File::new("vi", 10)))
            .with(File::new("a.txt", 5));
        assert_eq!(
            listing(&tree),
            "/root (15)\n/root/bin (10)\n/root/bin/vi (10)\n/root/a.txt (5)\n"
        );
    }

    #[test]
    fn test_file_rejects_children() {
        let mut file = File::new("vi", 10);
        let err = file.add(Box::new(File::new("x", 1))).err().unwrap();
        assert!(matches!(err, PatternError::FileTreatment(name) if name == "vi"));
    }

    #[test]
    fn test_directory_add_chains() {
        let mut dir = Directory::new("d");
        dir.add(Box::new(Directory::new("sub")))
            .unwrap()
            .add(Box::new(File::new("f", 3)))
            .unwrap();
        // Chaining returns the same directory, so both land at the top level.
        assert_eq!(dir.entries().count(), 2);
        assert_eq!(dir.size(), 3);
    }

    #[test]
    fn test_display_for_entry() {
        let file = File::new("memo.tex", 300);
        assert_eq!((&file as &dyn Entry).to_string(), "memo.tex (300)");
    }

    #[test]
    fn test_demo_output_tail() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("/root (31500)\n/root/bin (30000)\n/root/bin/vi (10000)\n"));
        assert!(text.contains("/root/usr/yuki/diary.html (100)\n"));
        assert!(text.contains("cannot add an entry to 'readme.txt'"));
        assert!(text.ends_with("root is now 31542 bytes\n"));
    }
}
