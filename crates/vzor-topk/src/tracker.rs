use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Cell {
    name: String,
    count: u64,
    /// insertion order, breaks ties between equal counts and lengths
    seq: u64,
    left: Option<usize>,
    right: Option<usize>,
}

/// Capacity-bounded list of `(name, count)` sorted by count, descending.
///
/// Equal counts put the longer name first, then the one added earlier. Cells
/// live in an arena and freed slots are reused.
#[derive(Debug, Clone, Default)]
pub struct TopK {
    cells: Vec<Cell>,
    free: Vec<usize>,
    index: HashMap<String, usize>,
    first: Option<usize>,
    last: Option<usize>,
    len: usize,
    capacity: usize,
    next_seq: u64,
}

impl TopK {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn count(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&i| self.cells[i].count)
    }

    /// Insert `name`, evicting the last entry when full. A name already in
    /// the list has its count raised by `count` instead.
    pub fn add(&mut self, name: &str, count: u64) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&i) = self.index.get(name) {
            self.cells[i].count += count;
            self.relocate(i);
            return;
        }
        if self.len == self.capacity {
            self.pop();
        }

        let cell = Cell {
            name: name.to_string(),
            count,
            seq: self.next_seq,
            left: None,
            right: None,
        };
        self.next_seq += 1;

        let i = match self.free.pop() {
            Some(slot) => {
                self.cells[slot] = cell;
                slot
            }
            None => {
                self.cells.push(cell);
                self.cells.len() - 1
            }
        };
        self.index.insert(name.to_string(), i);
        self.len += 1;

        let left = self.scan_left(i, self.last);
        self.link_after(i, left);
    }

    /// Add one to the count of `name`, `false` when it is not tracked
    pub fn increase(&mut self, name: &str) -> bool {
        let Some(&i) = self.index.get(name) else {
            return false;
        };
        self.cells[i].count += 1;
        self.relocate(i);
        true
    }

    /// Remove and return the last entry
    pub fn pop(&mut self) -> Option<(String, u64)> {
        let i = self.last?;
        self.unlink(i);
        self.len -= 1;
        self.free.push(i);

        let cell = &mut self.cells[i];
        self.index.remove(&cell.name);
        Some((std::mem::take(&mut cell.name), cell.count))
    }

    /// Up to `n` leading entries
    pub fn first_n(&self, n: usize) -> Vec<(&str, u64)> {
        self.iter().take(n).collect()
    }

    /// Entries from the highest count down
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        std::iter::successors(self.first, |&i| self.cells[i].right).map(|i| {
            let cell = &self.cells[i];
            (cell.name.as_str(), cell.count)
        })
    }

    /// Whether `a` belongs in front of `b`
    fn ranks_before(&self, a: usize, b: usize) -> bool {
        let (a, b) = (&self.cells[a], &self.cells[b]);
        (a.count, a.name.chars().count(), std::cmp::Reverse(a.seq))
            > (b.count, b.name.chars().count(), std::cmp::Reverse(b.seq))
    }

    /// Move a cell whose count grew toward the head
    fn relocate(&mut self, i: usize) {
        let old_left = self.cells[i].left;
        if old_left.is_none_or(|left| self.ranks_before(left, i)) {
            return;
        }
        self.unlink(i);
        let left = self.scan_left(i, old_left);
        self.link_after(i, left);
    }

    /// Nearest cell at or left of `start` that ranks before `i`
    fn scan_left(&self, i: usize, start: Option<usize>) -> Option<usize> {
        let mut candidate = start;
        while let Some(c) = candidate {
            if self.ranks_before(c, i) {
                break;
            }
            candidate = self.cells[c].left;
        }
        candidate
    }

    fn unlink(&mut self, i: usize) {
        let (left, right) = (self.cells[i].left, self.cells[i].right);
        match left {
            Some(l) => self.cells[l].right = right,
            None => self.first = right,
        }
        match right {
            Some(r) => self.cells[r].left = left,
            None => self.last = left,
        }
        self.cells[i].left = None;
        self.cells[i].right = None;
    }

    /// Insert `i` right after `left`, or at the head when `left` is `None`
    fn link_after(&mut self, i: usize, left: Option<usize>) {
        let right = match left {
            Some(l) => self.cells[l].right,
            None => self.first,
        };
        self.cells[i].left = left;
        self.cells[i].right = right;
        match left {
            Some(l) => self.cells[l].right = Some(i),
            None => self.first = Some(i),
        }
        match right {
            Some(r) => self.cells[r].left = Some(i),
            None => self.last = Some(i),
        }
    }
}
