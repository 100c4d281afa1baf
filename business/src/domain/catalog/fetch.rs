/// Identifies one fetch issued for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket<K> {
    key: K,
    generation: u64,
}

impl<K> FetchTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// Tracks the most recent fetch so results of superseded fetches can be dropped.
///
/// Every `begin` supersedes all earlier tickets, even for the same key: only
/// the result of the latest request may be applied.
#[derive(Debug)]
pub struct LatestFetch<K> {
    current: Option<FetchTicket<K>>,
    next_generation: u64,
}

impl<K> Default for LatestFetch<K> {
    fn default() -> Self {
        Self {
            current: None,
            next_generation: 0,
        }
    }
}

impl<K: Clone + PartialEq> LatestFetch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, key: K) -> FetchTicket<K> {
        self.next_generation += 1;
        let ticket = FetchTicket {
            key,
            generation: self.next_generation,
        };
        self.current = Some(ticket.clone());
        ticket
    }

    pub fn is_current(&self, ticket: &FetchTicket<K>) -> bool {
        self.current.as_ref() == Some(ticket)
    }

    /// Key of the latest fetch, if any was issued.
    pub fn current_key(&self) -> Option<&K> {
        self.current.as_ref().map(|t| &t.key)
    }
}
