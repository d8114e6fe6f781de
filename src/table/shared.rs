//! Shared handle for a process-wide flag table
//!
//! Readers take an `Arc` snapshot and never hold the lock while reading.
//! Re-parsing builds a complete new table first and then swaps it in, so a
//! reader sees either the old table or the new one.

use super::ParsedArgs;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Swappable holder for the current [`ParsedArgs`]
#[derive(Debug, Default)]
pub struct SharedArgs {
    current: RwLock<Arc<ParsedArgs>>,
}

impl SharedArgs {
    /// Wrap an already parsed table
    #[must_use]
    #[inline]
    pub fn new(parsed: ParsedArgs) -> Self {
        Self {
            current: RwLock::new(Arc::new(parsed)),
        }
    }

    /// Parse arguments into a new handle
    #[inline]
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ParsedArgs::parse(args))
    }

    /// The table as of now
    ///
    /// The snapshot stays valid and unchanged across later re-parses.
    #[must_use]
    #[inline]
    pub fn snapshot(&self) -> Arc<ParsedArgs> {
        // Writers only swap the whole Arc, so a poisoned lock still holds a
        // complete table.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the current table with a freshly parsed one
    pub fn reparse<I, S>(&self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace(ParsedArgs::parse(args));
    }

    /// Replace the current table
    pub fn replace(&self, parsed: ParsedArgs) {
        let next = Arc::new(parsed);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        debug!("Replaced shared flag table ({} flags)", guard.table.len());
    }
}

impl From<ParsedArgs> for SharedArgs {
    #[inline]
    fn from(parsed: ParsedArgs) -> Self {
        Self::new(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn snapshot_survives_reparse() {
        let shared = SharedArgs::parse(["-ADC=1"]);
        let before = shared.snapshot();

        shared.reparse(["-noADC"]);
        let after = shared.snapshot();

        assert!(before.get_bool_arg("-ADC", false));
        assert!(!after.get_bool_arg("-ADC", true));
    }

    #[test]
    fn concurrent_readers_see_whole_tables() {
        let shared = Arc::new(SharedArgs::parse(["-a=1", "-b=1"]));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let snapshot = shared.snapshot();
                        let a = snapshot.get_int_arg("-a", -1);
                        let b = snapshot.get_int_arg("-b", -1);
                        assert_eq!(a, b);
                    }
                })
            })
            .collect();

        for round in 2..50 {
            let value = round.to_string();
            shared.reparse([format!("-a={value}"), format!("-b={value}")]);
        }

        for reader in readers {
            assert!(reader.join().is_ok());
        }
    }
}
