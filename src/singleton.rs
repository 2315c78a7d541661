//! Singleton: one process-wide instance behind an accessor.
//!
//! `Singleton` cannot be built from outside this module (its field is
//! private) and `try_new` refuses at runtime as well. `TicketMaker` is the
//! plain module-level static form; `Triple` bounds the instance count at
//! three instead of one.

use crate::error::{PatternError, Result};
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use tracing::debug;

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    /// Direct construction is always refused.
    pub fn try_new() -> Result<Self> {
        Err(PatternError::Instantiation("Singleton"))
    }

    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            debug!("creating the singleton instance");
            Singleton { _private: () }
        })
    }
}

/// Hands out increasing ticket numbers, starting at 1000.
pub struct TicketMaker {
    next: AtomicU64,
}

pub static TICKET_MAKER: TicketMaker = TicketMaker {
    next: AtomicU64::new(1000),
};

impl TicketMaker {
    pub fn next_ticket_number(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// One of exactly three instances.
#[derive(Debug, PartialEq, Eq)]
pub struct Triple {
    id: usize,
}

lazy_static::lazy_static! {
    static ref TRIPLES: [Triple; 3] = {
        debug!("creating the three triples");
        [Triple { id: 0 }, Triple { id: 1 }, Triple { id: 2 }]
    };
}

impl Triple {
    pub fn instance(id: usize) -> Result<&'static Triple> {
        TRIPLES
            .get(id)
            .ok_or_else(|| PatternError::out_of_range(id, TRIPLES.len()))
    }

    pub fn id(&self) -> usize {
        self.id
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let a = Singleton::instance();
    let b = Singleton::instance();
    if std::ptr::eq(a, b) {
        writeln!(out, "a and b are identical.")?;
    }

    match Singleton::try_new() {
        Ok(_) => writeln!(out, "constructed a second singleton")?,
        Err(err) => writeln!(out, "direct construction refused: {err}")?,
    }

    for _ in 0..3 {
        writeln!(out, "ticket {}", TICKET_MAKER.next_ticket_number())?;
    }

    for id in 0..3 {
        let triple = Triple::instance(id)?;
        let shared = std::ptr::eq(triple, Triple::instance(id)?);
        writeln!(out, "triple {} shared: {shared}", triple.id())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_identity() {
        let first = Singleton::instance();
        for _ in 0..5 {
            assert!(std::ptr::eq(first, Singleton::instance()));
        }
    }

    #[test]
    fn test_direct_construction_fails() {
        for _ in 0..3 {
            assert!(matches!(
                Singleton::try_new(),
                Err(PatternError::Instantiation("Singleton"))
            ));
        }
    }

    #[test]
    fn test_tickets_increase() {
        // Other tests may draw tickets concurrently; only ordering is stable.
        let first = TICKET_MAKER.next_ticket_number();
        let second = TICKET_MAKER.next_ticket_number();
        assert!(first >= 1000);
        assert!(second > first);
    }

    #[test]
    fn test_triples_are_fixed() {
        for id in 0..3 {
            let triple = Triple::instance(id).unwrap();
            assert_eq!(triple.id(), id);
            assert!(std::ptr::eq(triple, Triple::instance(id).unwrap()));
        }
        assert!(matches!(
            Triple::instance(3),
            Err(PatternError::OutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_demo_reports_identity_and_refusal() {
        let mut out = Vec::new();
        demo(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("a and b are identical.\n"));
        assert!(text.contains("direct construction refused: Singleton cannot be instantiated"));
        assert_eq!(text.lines().filter(|l| l.starts_with("ticket ")).count(), 3);
        assert!(text.ends_with("triple 0 shared: true\ntriple 1 shared: true\ntriple 2 shared: true\n"));
        assert!(!text.contains("0x"));
    }
}
