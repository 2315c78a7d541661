//! Iterator: walk a collection through a cursor without touching its storage.
//!
//! `Aggregate` hands out a fresh `Cursor`; callers only ever see `has_next`
//! and `next`, so the bookshelf is free to change how it keeps its books.

use crate::config::IteratorConfig;
use crate::error::{PatternError, Result};
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Forward-only traversal state over a fixed sequence.
pub trait Cursor {
    type Item;

    /// True iff an unvisited element remains. Never moves the cursor.
    fn has_next(&self) -> bool;

    /// Returns the element under the cursor and advances by one.
    ///
    /// Calling this once `has_next` is false fails with
    /// [`PatternError::OutOfRange`] and leaves the cursor where it is.
    fn next(&mut self) -> Result<Self::Item>;
}

/// A collection that can produce cursors over itself.
pub trait Aggregate {
    type Item;
    type Iter<'a>: Cursor<Item = &'a Self::Item>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Iter<'_>;
}

/// Cursor over a borrowed slice.
#[derive(Debug, Clone)]
pub struct SliceCursor<'a, T> {
    items: &'a [T],
    index: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        SliceCursor { items, index: 0 }
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.index < self.items.len()
    }

    fn next(&mut self) -> Result<&'a T> {
        let item = self
            .items
            .get(self.index)
            .ok_or_else(|| PatternError::out_of_range(self.index, self.items.len()))?;
        self.index += 1;
        Ok(item)
    }
}

/// Drives any [`Cursor`] as a std iterator so it works in `for` loops.
pub struct CursorIter<C>(C);

impl<C: Cursor> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        CursorIter(cursor)
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0.has_next() {
            Cursor::next(&mut self.0).ok()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
}

impl Book {
    pub fn new(name: impl Into<String>) -> Self {
        Book { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Default, Clone)]
pub struct Bookshelf {
    books: Vec<Book>,
}

impl Bookshelf {
    pub fn new(books: Vec<Book>) -> Self {
        Bookshelf { books }
    }

    pub fn append_book(&mut self, book: Book) {
        self.books.push(book);
    }

    pub fn get(&self, index: usize) -> Result<&Book> {
        self.books
            .get(index)
            .ok_or_else(|| PatternError::out_of_range(index, self.books.len()))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl FromIterator<Book> for Bookshelf {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        Bookshelf::new(iter.into_iter().collect())
    }
}

impl Aggregate for Bookshelf {
    type Item = Book;
    type Iter<'a> = SliceCursor<'a, Book>;

    fn cursor(&self) -> SliceCursor<'_, Book> {
        SliceCursor::new(&self.books)
    }
}

/// Writes every book name using nothing but the cursor protocol.
pub fn demo(config: &IteratorConfig, out: &mut dyn Write) -> Result<()> {
    let shelf: Bookshelf = config.books.iter().map(Book::new).collect();
    debug!(books = shelf.len(), "bookshelf filled");

    let mut cursor = shelf.cursor();
    while cursor.has_next() {
        let book = cursor.next()?;
        writeln!(out, "{}", book)?;
    }
    Ok(())
}
