use anyhow::Result;

use crate::common::{FilterError, FilterResult};
use crate::modes::{FileEnumerator, FileRecord, FilterPattern, MatchSet};
use crate::log_info;

/// Called every time the matches changed. It carries no payload:
/// the subscriber should read the engine again.
pub type Listener = Box<dyn FnMut() + Send>;

/// Returned by [`FilterEngine::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// A scan requested to the engine and not applied yet.
///
/// It holds the compiled pattern and the generation the engine gave it.
/// Only the latest issued ticket can be applied.
#[derive(Debug)]
pub struct ScanTicket {
    pattern: FilterPattern,
    generation: u64,
}

impl ScanTicket {
    pub fn pattern(&self) -> &FilterPattern {
        &self.pattern
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to an applied scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The matches were replaced. Holds their number.
    Applied(usize),
    /// A newer scan was requested meanwhile, the result was discarded.
    Stale,
}

/// Owns the current filter pattern and the matching files.
///
/// The pattern and its matches are always replaced together.
/// A pattern which can't be compiled changes nothing: the last valid
/// pattern and its matches stay in place.
///
/// Scans may be split in two steps for hosts which enumerate the files
/// asynchronously: [`FilterEngine::prepare_scan`] then [`FilterEngine::apply_scan`].
/// Every new request supersedes the previous ones, even if they complete later.
#[derive(Default)]
pub struct FilterEngine {
    pattern: FilterPattern,
    matches: MatchSet,
    /// Generation of the last issued ticket.
    generation: u64,
    /// Pattern of the last issued ticket, or empty after a clear.
    /// It becomes the stored pattern once its scan is applied.
    requested: FilterPattern,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> &FilterPattern {
        &self.pattern
    }

    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    /// The most recently requested pattern, which may still be scanning.
    pub fn requested_pattern(&self) -> &FilterPattern {
        &self.requested
    }

    /// Compile `pattern`, enumerate the files and keep those matching.
    /// An empty pattern clears the filter without enumerating anything.
    ///
    /// # Errors
    ///
    /// - [`FilterError::InvalidPattern`] if the pattern can't be compiled. Nothing changed.
    /// - [`FilterError::Enumeration`] if the files couldn't be listed. The matches are emptied.
    pub fn set_pattern(
        &mut self,
        pattern: &str,
        enumerator: &dyn FileEnumerator,
    ) -> FilterResult<&MatchSet> {
        if pattern.is_empty() {
            return Ok(self.clear());
        }
        let ticket = self.prepare_scan(pattern)?;
        self.apply_scan(ticket, enumerator.enumerate_files())?;
        Ok(&self.matches)
    }

    /// Empty the pattern and the matches. Any scan in flight is discarded.
    pub fn clear(&mut self) -> &MatchSet {
        self.generation += 1;
        self.requested = FilterPattern::default();
        self.pattern = FilterPattern::default();
        self.matches = MatchSet::default();
        log_info!("filter cleared");
        self.notify();
        &self.matches
    }

    /// Enumerate the files again and apply the most recently requested pattern.
    /// Nothing is done if no filter is active or requested.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::Enumeration`] if the files couldn't be listed.
    pub fn refresh(&mut self, enumerator: &dyn FileEnumerator) -> FilterResult<&MatchSet> {
        if self.requested.is_empty() {
            return Ok(&self.matches);
        }
        let ticket = self.reissue();
        self.apply_scan(ticket, enumerator.enumerate_files())?;
        Ok(&self.matches)
    }

    /// Compile the pattern and issue a ticket for it.
    /// Every ticket issued before is now stale.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::InvalidPattern`] if the pattern can't be compiled.
    /// No ticket is issued and previous tickets stay valid.
    pub fn prepare_scan(&mut self, pattern: &str) -> FilterResult<ScanTicket> {
        let pattern = FilterPattern::parse(pattern)?;
        Ok(self.issue(pattern))
    }

    /// Issue a new ticket for the most recently requested pattern.
    /// A pattern whose scan is still in flight is requested again, it isn't
    /// replaced by the older stored one.
    pub fn reissue(&mut self) -> ScanTicket {
        self.issue(self.requested.clone())
    }

    fn issue(&mut self, pattern: FilterPattern) -> ScanTicket {
        self.generation += 1;
        self.requested = pattern.clone();
        ScanTicket {
            pattern,
            generation: self.generation,
        }
    }

    /// True if no other ticket was issued after this one.
    pub fn is_current(&self, ticket: &ScanTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Replace the pattern and the matches with the result of a scan.
    /// Tickets which aren't current are discarded without any change.
    ///
    /// # Errors
    ///
    /// Fails with [`FilterError::Enumeration`] if `universe` is an error.
    /// The pattern is stored anyway and the matches are emptied.
    pub fn apply_scan(
        &mut self,
        ticket: ScanTicket,
        universe: Result<Vec<FileRecord>>,
    ) -> FilterResult<ScanOutcome> {
        if !self.is_current(&ticket) {
            log_info!(
                "discarded stale scan #{stale} for {pattern}",
                stale = ticket.generation,
                pattern = ticket.pattern
            );
            return Ok(ScanOutcome::Stale);
        }
        match universe {
            Ok(universe) => {
                self.matches = MatchSet::from_universe(&ticket.pattern, universe);
                self.pattern = ticket.pattern;
                log_info!(
                    "filter {pattern} matched {len} files",
                    pattern = self.pattern,
                    len = self.matches.len()
                );
                self.notify();
                Ok(ScanOutcome::Applied(self.matches.len()))
            }
            Err(error) => {
                self.matches = MatchSet::default();
                self.pattern = ticket.pattern;
                self.notify();
                Err(FilterError::Enumeration(format!("{error:#}")))
            }
        }
    }

    /// Register a listener called after every change of the matches.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it wasn't registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener()
        }
    }
}
