//! The Roster Controller — owner of the authoritative roster.
//!
//! All membership mutations go through [`Roster::add`], which assigns the
//! next id and re-runs the matcher over the **entire** resulting roster
//! before returning. There is no incremental matching and no observer
//! machinery: the rematch is an explicit, synchronous step inside the
//! mutating call, so every read after a mutation sees fresh derived fields.

use mentormatch_matchcore::{filter_by_tab, match_roster, sort_by_key};
use mentormatch_types::{Participant, ParticipantId, SortKey, Tab};

/// Owns the authoritative roster.
///
/// Display requests ([`Roster::view`]) never touch the stored roster;
/// sorting ([`Roster::set_sort`]) reorders it in place and the order
/// persists until the next explicit sort — a later [`Roster::add`] appends
/// at the end without re-sorting.
#[derive(Debug, Clone)]
pub struct Roster {
    /// The matched, authoritative participant list.
    participants: Vec<Participant>,
}

impl Roster {
    /// Build the roster from a seed list, passing it once through the
    /// matcher. Seed ids are taken as-is.
    #[must_use]
    pub fn new(seed: Vec<Participant>) -> Self {
        let roster = Self {
            participants: match_roster(&seed),
        };
        tracing::info!(participants = roster.len(), "Roster initialized");
        roster
    }

    /// Insert a participant and rematch the whole roster.
    ///
    /// The new record's id is assigned here as `max(existing ids) + 1`; any
    /// id on the incoming record is overwritten. The record is appended, so
    /// it lands at the end regardless of any sort order currently applied.
    pub fn add(&mut self, participant: Participant) -> ParticipantId {
        let id = self.next_id();
        let mut participant = participant;
        participant.id = id;
        let name = participant.name.clone();

        self.participants.push(participant);
        self.participants = match_roster(&self.participants);

        tracing::info!(%id, name = %name, roster = self.len(), "Participant added, roster rematched");
        id
    }

    /// Reorder the authoritative roster by a whitelisted key.
    ///
    /// Explicit and user-driven, not a standing policy: the new order
    /// persists across later views and adds until `set_sort` runs again.
    pub fn set_sort(&mut self, key: SortKey, ascending: bool) {
        self.participants = sort_by_key(&self.participants, key, ascending);
        tracing::debug!(%key, ascending, "Roster sorted");
    }

    /// Header-click entry point: sort by a raw column token.
    ///
    /// Non-whitelisted tokens are a silent no-op, matching the forgiving
    /// display collaborator. Returns whether a sort was applied, so callers
    /// that care can observe the no-op; callers that want a hard error use
    /// `SortKey::from_str` + [`Roster::set_sort`] instead.
    pub fn set_sort_token(&mut self, token: &str, ascending: bool) -> bool {
        match token.parse::<SortKey>() {
            Ok(key) => {
                self.set_sort(key, ascending);
                true
            }
            Err(_) => {
                tracing::debug!(token, "Ignoring non-whitelisted sort key");
                false
            }
        }
    }

    /// The subset of the roster the given tab displays. No side effects on
    /// the authoritative roster.
    #[must_use]
    pub fn view(&self, tab: Tab) -> Vec<Participant> {
        filter_by_tab(&self.participants, tab)
    }

    /// The authoritative roster, in its current order.
    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// `max(existing ids) + 1`. The roster is seeded non-empty, so the
    /// maximum is normally always defined; an empty roster starts at 1.
    fn next_id(&self) -> ParticipantId {
        self.participants
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ParticipantId(1), ParticipantId::next)
    }
}
