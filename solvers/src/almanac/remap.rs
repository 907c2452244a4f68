//! Interval arithmetic for the almanac pipeline.
//!
//! A pipeline is an ordered chain of stages. Each stage remaps the parts of
//! its input covered by an interval and passes everything else through
//! unchanged. Mapping is purely functional: nothing here mutates the pipeline.

use std::collections::VecDeque;

/// Half-open source range `[begin, end)` remapped to start at `dest`.
///
/// Invariant: intervals within one stage are pairwise disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub begin: u64,
    pub end: u64,
    pub dest: u64,
}

impl Interval {
    pub fn contains(&self, value: u64) -> bool {
        self.begin <= value && value < self.end
    }

    /// Remap a value known to lie inside `[begin, end)`.
    pub fn map(&self, value: u64) -> u64 {
        self.dest + (value - self.begin)
    }

    /// Intersection of this interval's source range with `range`, if non-empty.
    pub fn intersect(&self, range: SeedRange) -> Option<SeedRange> {
        let begin = range.begin.max(self.begin);
        let end = range.end.min(self.end);
        if begin < end {
            Some(SeedRange { begin, end })
        } else {
            None
        }
    }

    /// Remap a range known to lie entirely inside `[begin, end)`.
    fn map_range(&self, range: SeedRange) -> SeedRange {
        let begin = self.map(range.begin);
        SeedRange {
            begin,
            end: begin + range.len(),
        }
    }
}

/// Half-open working range of seed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SeedRange {
    pub begin: u64,
    pub end: u64,
}

impl SeedRange {
    pub fn new(begin: u64, end: u64) -> Self {
        Self { begin, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.begin
    }

    pub fn is_empty(&self) -> bool {
        self.begin >= self.end
    }
}

/// One lookup table mapping a source domain to a destination domain.
///
/// The domain names are informational only; mapping behavior depends solely
/// on the intervals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub source: String,
    pub dest: String,
    pub intervals: Vec<Interval>,
}

impl Stage {
    /// Map a single value: the containing interval remaps it, otherwise identity.
    fn map_value(&self, value: u64) -> u64 {
        match self.intervals.iter().find(|iv| iv.contains(value)) {
            Some(interval) => interval.map(value),
            None => value,
        }
    }

    /// Map a set of ranges, splitting fragments at interval boundaries.
    ///
    /// Fragments form a FIFO worklist. A fragment that intersects an interval
    /// emits the remapped intersection into the next-stage set and re-queues
    /// its uncovered leading/trailing remainders onto the same-stage worklist;
    /// intervals are disjoint, so the first match fully settles the covered
    /// part. A fragment matching no interval passes through unchanged.
    fn map_ranges(&self, ranges: Vec<SeedRange>) -> Vec<SeedRange> {
        let mut pending: VecDeque<SeedRange> = ranges.into();
        let mut next = Vec::new();
        'fragments: while let Some(range) = pending.pop_front() {
            for interval in &self.intervals {
                if let Some(hit) = interval.intersect(range) {
                    next.push(interval.map_range(hit));
                    if range.begin < hit.begin {
                        pending.push_back(SeedRange::new(range.begin, hit.begin));
                    }
                    if hit.end < range.end {
                        pending.push_back(SeedRange::new(hit.end, range.end));
                    }
                    continue 'fragments;
                }
            }
            next.push(range);
        }
        next
    }
}

/// Ordered composition of stages; immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    pub stages: Vec<Stage>,
}

impl Pipeline {
    /// Push a single value through every stage in order.
    pub fn map_value(&self, value: u64) -> u64 {
        self.stages
            .iter()
            .fold(value, |v, stage| stage.map_value(v))
    }

    /// Push a set of disjoint ranges through every stage in order.
    ///
    /// An empty input set or a stage with zero intervals is a valid no-op
    /// pass-through.
    pub fn map_ranges(&self, ranges: Vec<SeedRange>) -> Vec<SeedRange> {
        self.stages
            .iter()
            .fold(ranges, |rs, stage| stage.map_ranges(rs))
    }

    /// Minimum final value across individually mapped seeds.
    ///
    /// Returns `None` for an empty seed list.
    pub fn min_value(&self, seeds: &[u64]) -> Option<u64> {
        seeds.iter().map(|&seed| self.map_value(seed)).min()
    }

    /// Minimum final value across mapped seed ranges.
    pub fn min_value_of_ranges(&self, ranges: Vec<SeedRange>) -> Option<u64> {
        self.map_ranges(ranges)
            .iter()
            .map(|range| range.begin)
            .min()
    }
}
