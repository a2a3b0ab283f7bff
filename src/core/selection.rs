/// Insertion-ordered set of record ids marked for side-by-side comparison.
/// Membership is keyed on id alone; an id appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<u32>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from an id sequence, dropping duplicates but keeping
    /// first-seen order.
    pub fn from_ids<I: IntoIterator<Item = u32>>(ids: I) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.is_selected(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Adds the id if absent, removes it if present. Applying twice with
    /// the same id restores the original membership.
    pub fn toggle(&mut self, id: u32) {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn is_selected(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut set = SelectionSet::from_ids([3, 1]);
        let original = set.clone();

        set.toggle(2);
        assert!(set.is_selected(2));
        set.toggle(2);
        assert_eq!(set, original);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut set = SelectionSet::new();
        set.toggle(5);
        set.toggle(1);
        set.toggle(3);
        assert_eq!(set.ids(), &[5, 1, 3]);

        set.toggle(1);
        assert_eq!(set.ids(), &[5, 3]);
    }

    #[test]
    fn test_from_ids_drops_duplicates() {
        let set = SelectionSet::from_ids([4, 4, 2, 4]);
        assert_eq!(set.ids(), &[4, 2]);
    }
}
