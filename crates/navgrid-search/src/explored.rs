//! The explored set (closed set): cells whose cost is final.

/// Dense membership set keyed by cell index. Once a cell is added it never
/// leaves for the lifetime of one search.
#[derive(Debug)]
pub(crate) struct Explored {
    cells: Vec<bool>,
}

impl Explored {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            cells: vec![false; len],
        }
    }

    pub(crate) fn add(&mut self, idx: usize) {
        self.cells[idx] = true;
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_contains() {
        let mut ex = Explored::new(4);
        assert!(!ex.contains(2));
        ex.add(2);
        assert!(ex.contains(2));
        assert!(!ex.contains(0));
        // Re-adding changes nothing.
        ex.add(2);
        assert!(ex.contains(2));
    }
}
