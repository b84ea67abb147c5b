//! Loop grammar model definitions.
//!
//! A grammar is authored, not computed: per transaction set, an ordered list
//! of loop definitions naming their trigger segment, parents, occurrence
//! bound, and member segments. The tree builder consults only this data when
//! deciding where an incoming segment attaches.

/// Occurrence bound for a loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// At most one instance per parent
    Once,
    /// Unbounded repetition
    Many,
}

/// Whether a loop must appear under its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Required,
    Optional,
}

/// The segment that opens a loop instance.
///
/// Some loops share a trigger id and are told apart by a qualifier element
/// (e.g. `N1*PR` opens the payer loop, `N1*PE` the payee loop); `qualifier`
/// names the 1-based element position and the accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    /// Segment id that opens the loop
    pub segment: &'static str,
    /// Qualifier element position (1-based) and accepted values, if any
    pub qualifier: Option<(usize, &'static [&'static str])>,
}

impl Trigger {
    /// Trigger on a bare segment id
    #[must_use]
    pub const fn on(segment: &'static str) -> Self {
        Self {
            segment,
            qualifier: None,
        }
    }

    /// Trigger on a segment id plus qualifier values at an element position
    #[must_use]
    pub const fn qualified(
        segment: &'static str,
        element: usize,
        values: &'static [&'static str],
    ) -> Self {
        Self {
            segment,
            qualifier: Some((element, values)),
        }
    }

    /// Whether a segment with this id and element accessor opens the loop
    pub fn matches(&self, segment_id: &str, element_at: impl Fn(usize) -> Option<String>) -> bool {
        if segment_id != self.segment {
            return false;
        }
        match self.qualifier {
            None => true,
            Some((pos, values)) => element_at(pos)
                .is_some_and(|v| values.iter().any(|allowed| allowed.eq_ignore_ascii_case(&v))),
        }
    }
}

/// One loop definition inside a transaction grammar
#[derive(Debug, Clone, Copy)]
pub struct LoopDef {
    /// Implementation-guide loop id (e.g. "2100")
    pub id: &'static str,

    /// Stable snake_case name used in tree and structured output
    pub name: &'static str,

    /// Loop ids this loop may nest under; empty means direct child of the
    /// transaction
    pub parents: &'static [&'static str],

    /// Segment that opens an instance
    pub trigger: Trigger,

    /// Occurrence bound
    pub repeat: Repeat,

    /// Required or optional under its parent
    pub usage: Usage,

    /// HL03 level code for hierarchical-level-triggered loops
    pub hl_level: Option<&'static str>,

    /// Non-trigger member segment ids
    pub segments: &'static [&'static str],
}

impl LoopDef {
    /// Whether a segment id belongs to this loop's members
    #[must_use]
    pub fn is_member(&self, segment_id: &str) -> bool {
        self.segments.contains(&segment_id)
    }

    /// Whether this loop nests directly under the given parent loop id
    /// (`None` = the transaction itself)
    #[must_use]
    pub fn nests_under(&self, parent: Option<&str>) -> bool {
        match parent {
            None => self.parents.is_empty(),
            Some(id) => self.parents.contains(&id),
        }
    }
}

/// A complete loop grammar for one transaction set
#[derive(Debug, Clone, Copy)]
pub struct TransactionGrammar {
    /// Transaction set id (ST01), e.g. "835"
    pub transaction_set: &'static str,

    /// Base implementation version this grammar was authored against
    /// (first six characters of GS08), e.g. "005010"
    pub version: &'static str,

    /// Human-readable transaction name
    pub name: &'static str,

    /// Segment ids that attach directly to the transaction
    pub segments: &'static [&'static str],

    /// Ordered loop definitions
    pub loops: &'static [LoopDef],

    /// Default priority order of HL level codes, used when an HL segment
    /// carries no recognized level code
    pub hl_priority: &'static [&'static str],
}

impl TransactionGrammar {
    /// Find a loop definition by id
    #[must_use]
    pub fn loop_def(&self, id: &str) -> Option<&LoopDef> {
        self.loops.iter().find(|l| l.id == id)
    }

    /// Loop definitions that nest directly under the given parent
    pub fn children_of(&self, parent: Option<&str>) -> impl Iterator<Item = &LoopDef> {
        let parent = parent.map(str::to_string);
        self.loops
            .iter()
            .filter(move |l| l.nests_under(parent.as_deref()))
    }

    /// Loop definition triggered by the given HL level code
    #[must_use]
    pub fn hl_loop(&self, level_code: &str) -> Option<&LoopDef> {
        self.loops.iter().find(|l| l.hl_level == Some(level_code))
    }

    /// Whether a segment id attaches directly to the transaction
    #[must_use]
    pub fn is_transaction_member(&self, segment_id: &str) -> bool {
        self.segments.contains(&segment_id)
    }
}
