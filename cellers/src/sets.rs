//! Disjoint-set bookkeeping for the current row.
//!
//! Every cell of the row belongs to exactly one region, except for cells that were walled off
//! from the row below and wait for a fresh region. Those are kept in a singly-linked list,
//! threaded through the cell slots themselves.

pub type CellId = usize;
pub type RegionId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Region(RegionId),
    /// Cell waiting for a fresh region, links to the previously detached cell.
    Pending { next: Option<CellId> },
}

#[derive(Debug, Clone)]
pub struct RowSets {
    cells: Vec<Slot>,
    regions: Vec<Vec<CellId>>,
    pending: Option<CellId>,
    free: Vec<RegionId>,
}

impl RowSets {
    /// Creates the state for the first row, each cell in its own region with the same index.
    pub fn new(width: usize) -> Self {
        let cells = (0..width).map(Slot::Region).collect();
        let regions = (0..width)
            .map(|cell| {
                let mut members = Vec::with_capacity((width / 5).max(1));
                members.push(cell);
                members
            })
            .collect();

        Self {
            cells,
            regions,
            pending: None,
            free: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Returns the region of the cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of range or if it's waiting for a fresh region.
    pub fn region_of(&self, cell: CellId) -> RegionId {
        match self.cells[cell] {
            Slot::Region(region) => region,
            Slot::Pending { .. } => panic!("cell {} is waiting for a fresh region", cell),
        }
    }

    pub fn is_pending(&self, cell: CellId) -> bool {
        matches!(self.cells[cell], Slot::Pending { .. })
    }

    /// Members of the region, in insertion order, modulo swap removals done by [`Self::detach`].
    pub fn members(&self, region: RegionId) -> &[CellId] {
        &self.regions[region]
    }

    /// Number of region slots, empty ones included. Always equal to the width.
    pub fn slot_count(&self) -> usize {
        self.regions.len()
    }

    /// Non-empty regions with their members.
    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &[CellId])> + '_ {
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .map(|(region, members)| (region, members.as_slice()))
    }

    pub fn region_count(&self) -> usize {
        self.regions().count()
    }

    /// Cells waiting for a fresh region, most recently detached first.
    pub fn pending(&self) -> impl Iterator<Item = CellId> + '_ {
        let mut next = self.pending;
        std::iter::from_fn(move || {
            let cell = next?;
            next = match self.cells[cell] {
                Slot::Pending { next } => next,
                Slot::Region(_) => None,
            };
            Some(cell)
        })
    }

    /// Moves all members of region `b` to the end of region `a`, leaving `b` empty.
    pub fn merge(&mut self, a: RegionId, b: RegionId) {
        debug_assert_ne!(a, b, "merging region {} into itself", a);

        let mut moved = std::mem::take(&mut self.regions[b]);
        for &cell in &moved {
            self.cells[cell] = Slot::Region(a);
        }
        self.regions[a].extend(moved.drain(..));
        // hand the allocation back, so the slot can be reused without reallocating
        self.regions[b] = moved;
    }

    /// Removes the cell from its region and puts it at the head of the pending list.
    ///
    /// Order of the remaining members is not preserved.
    pub fn detach(&mut self, cell: CellId) {
        let region = self.region_of(cell);
        let Some(pos) = self.regions[region].iter().position(|&c| c == cell) else {
            panic!("cell {} is missing from its region {}", cell, region);
        };
        self.detach_at(region, pos);
    }

    /// Same as [`Self::detach`] for the member at `pos` of the region, without searching for it.
    ///
    /// The last member takes its place, like in [`Vec::swap_remove`]. Returns the detached cell.
    pub fn detach_at(&mut self, region: RegionId, pos: usize) -> CellId {
        let cell = self.regions[region].swap_remove(pos);

        self.cells[cell] = Slot::Pending { next: self.pending };
        self.pending = Some(cell);
        cell
    }

    /// Places a pending cell into an empty region slot, making it a new singleton region.
    pub fn assign_to_fresh_region(&mut self, cell: CellId) {
        let Slot::Pending { next } = self.cells[cell] else {
            panic!("cell {} is not waiting for a fresh region", cell);
        };
        self.unlink_pending(cell, next);

        let Some(region) = self.take_free_region() else {
            // can't happen, a pending cell leaves at least one slot empty
            panic!("no empty region left for cell {}", cell);
        };
        self.regions[region].push(cell);
        self.cells[cell] = Slot::Region(region);
    }

    /// Gives every pending cell its own fresh region, walking the list from its head.
    pub fn reassign_pending(&mut self) {
        while let Some(cell) = self.pending {
            self.assign_to_fresh_region(cell);
        }
    }

    /// Checks that the cell slots and the region member lists agree with each other.
    pub fn is_consistent(&self) -> bool {
        let width = self.width();
        if self.regions.len() != width {
            return false;
        }

        let mut seen = vec![false; width];
        for (region, members) in self.regions.iter().enumerate() {
            for &cell in members {
                if cell >= width || seen[cell] || self.cells[cell] != Slot::Region(region) {
                    return false;
                }
                seen[cell] = true;
            }
        }

        let mut walked = 0;
        for cell in self.pending() {
            walked += 1;
            if walked > width || seen[cell] || !self.is_pending(cell) {
                return false;
            }
            seen[cell] = true;
        }

        seen.into_iter().all(|s| s)
    }

    fn unlink_pending(&mut self, cell: CellId, next: Option<CellId>) {
        if self.pending == Some(cell) {
            self.pending = next;
            return;
        }

        let mut current = self.pending;
        while let Some(prev) = current {
            let slot = self.cells[prev];
            match slot {
                Slot::Pending { next: Some(c) } if c == cell => {
                    self.cells[prev] = Slot::Pending { next };
                    return;
                }
                Slot::Pending { next } => current = next,
                Slot::Region(_) => break,
            }
        }
    }

    fn take_free_region(&mut self) -> Option<RegionId> {
        loop {
            if self.free.is_empty() {
                self.refresh_free();
            }
            let region = self.free.pop()?;
            if self.regions[region].is_empty() {
                return Some(region);
            }
        }
    }

    fn refresh_free(&mut self) {
        let empty = self
            .regions
            .iter()
            .enumerate()
            .filter(|(_, members)| members.is_empty())
            .map(|(region, _)| region);
        self.free.extend(empty);
        log::trace!("cached {} empty region slots", self.free.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_singletons() {
        let sets = RowSets::new(5);
        assert_eq!(sets.width(), 5);
        assert_eq!(sets.region_count(), 5);
        for cell in 0..5 {
            assert_eq!(sets.region_of(cell), cell);
            assert_eq!(sets.members(cell), &[cell]);
        }
        assert!(sets.is_consistent());
    }

    #[test]
    fn merge_moves_members() {
        let mut sets = RowSets::new(4);
        sets.merge(1, 2);
        sets.merge(1, 3);
        assert_eq!(sets.members(1), &[1, 2, 3]);
        assert!(sets.members(2).is_empty());
        assert!(sets.members(3).is_empty());
        assert_eq!(sets.region_of(3), 1);
        assert_eq!(sets.region_count(), 2);
        assert!(sets.is_consistent());
    }

    #[test]
    fn detach_and_reassign() {
        let mut sets = RowSets::new(4);
        sets.merge(0, 1);
        sets.merge(0, 2);
        sets.merge(0, 3);

        sets.detach(1);
        sets.detach(3);
        assert!(sets.is_pending(1));
        assert!(sets.is_pending(3));
        assert_eq!(sets.pending().collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(sets.members(0), &[0, 2]);
        assert!(sets.is_consistent());

        sets.reassign_pending();
        assert_eq!(sets.pending().count(), 0);
        assert_eq!(sets.region_count(), 3);
        assert_eq!(sets.members(sets.region_of(1)), &[1]);
        assert_eq!(sets.members(sets.region_of(3)), &[3]);
        assert_ne!(sets.region_of(1), sets.region_of(3));
        assert!(sets.is_consistent());
    }

    #[test]
    fn assign_from_middle_of_pending_list() {
        let mut sets = RowSets::new(4);
        sets.merge(0, 1);
        sets.merge(0, 2);
        sets.merge(0, 3);
        sets.detach(1);
        sets.detach(2);
        sets.detach(3);

        sets.assign_to_fresh_region(2);
        assert_eq!(sets.pending().collect::<Vec<_>>(), vec![3, 1]);
        assert!(sets.is_consistent());

        sets.reassign_pending();
        assert_eq!(sets.region_count(), 4);
        assert!(sets.is_consistent());
    }

    #[test]
    fn detach_at_moves_last_member_in() {
        let mut sets = RowSets::new(4);
        sets.merge(0, 1);
        sets.merge(0, 2);
        sets.merge(0, 3);

        assert_eq!(sets.detach_at(0, 1), 1);
        assert_eq!(sets.members(0), &[0, 3, 2]);
        assert!(sets.is_pending(1));
        assert!(sets.is_consistent());

        assert_eq!(sets.detach_at(0, 2), 2);
        assert_eq!(sets.members(0), &[0, 3]);
        assert_eq!(sets.pending().collect::<Vec<_>>(), vec![2, 1]);
        assert!(sets.is_consistent());
    }

    #[test]
    #[should_panic]
    fn region_of_pending_cell_panics() {
        let mut sets = RowSets::new(2);
        sets.merge(0, 1);
        sets.detach(1);
        sets.region_of(1);
    }

    #[test]
    fn detects_inconsistency() {
        let mut sets = RowSets::new(3);
        sets.regions[0].push(1);
        assert!(!sets.is_consistent());
    }
}
