//! Whole-list scans, comparison and formatting.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::list::List;

impl<T> List<T> {
    /// Returns `true` if the list contains an element equal to `value`.
    ///
    /// A plain head-to-tail scan; the cached cursor is neither used nor
    /// moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let list = List::from_iter(vec![1, 2, 3]);
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Short-circuits at the first failing element; vacuously `true` on an
    /// empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let list = List::from_iter(vec![2, 4, 6]);
    /// assert!(list.all(|element| element % 2 == 0));
    /// assert!(!list.all(|element| *element > 2));
    ///
    /// assert!(List::<i32>::new().all(|_| false));
    /// ```
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|element| predicate(element))
    }

    /// Calls `visitor` on a mutable reference to every element, head to tail.
    ///
    /// The list is exclusively borrowed for the whole visit, so the visitor
    /// cannot restructure it mid-walk.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2, 3]);
    /// list.for_each_mut(|element| *element *= 10);
    /// assert_eq!(list, List::from_iter(vec![10, 20, 30]));
    /// ```
    pub fn for_each_mut<F>(&mut self, visitor: F)
    where
        F: FnMut(&mut T),
    {
        self.iter_mut().for_each(visitor);
    }

    /// Removes the first element equal to `value`, returning whether one was
    /// found. Absence is not an error.
    ///
    /// The removal goes through [`remove_at`](List::remove_at), so the cursor
    /// ends up on the removed element's successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let mut list = List::from_iter(vec![1, 2, 3, 2]);
    /// assert!(list.remove_first(&2));
    /// assert_eq!(list, List::from_iter(vec![1, 3, 2]));
    /// assert!(!list.remove_first(&4));
    /// ```
    pub fn remove_first(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.iter().position(|element| element == value) {
            Some(position) => self.remove_at(position).is_ok(),
            None => false,
        }
    }

    /// Concatenates the display form of every element, each followed by
    /// `separator` (the trailing separator included). An empty list renders
    /// as `"-"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use seek_list::List;
    ///
    /// let list = List::from_iter(vec![1, 2, 3]);
    /// assert_eq!(list.join(", "), "1, 2, 3, ");
    /// assert_eq!(List::<i32>::new().join(", "), "-");
    /// ```
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut out = String::new();
        for element in self.iter() {
            out.push_str(&element.to_string());
            out.push_str(separator);
        }
        out
    }
}

/// Formats the list as every element followed by `"->"`, or `"-"` when
/// empty.
///
/// # Examples
///
/// ```
/// use seek_list::List;
///
/// let list = List::from_iter(vec![1, 2, 3]);
/// assert_eq!(list.to_string(), "1->2->3->");
/// assert_eq!(List::<i32>::new().to_string(), "-");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for element in self.iter() {
            write!(f, "{}->", element)?;
        }
        Ok(())
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    /// Compares lengths first, then elements head to tail.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for element in self.iter() {
            element.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;

    #[test]
    fn display_round_trip() {
        let list = List::from_iter(vec![1, 2, 3]);
        assert_eq!(list.to_string(), "1->2->3->");
        assert_eq!(List::from_iter(vec![7]).to_string(), "7->");
        assert_eq!(List::<i32>::new().to_string(), "-");
    }

    #[test]
    fn join_keeps_trailing_separator() {
        let list = List::from_iter(vec!["a", "b", "c"]);
        assert_eq!(list.join("->"), "a->b->c->");
        assert_eq!(list.join(""), "abc");
        assert_eq!(List::<&str>::new().join("->"), "-");
    }

    #[test]
    fn eq_compares_length_then_elements() {
        let list = List::from_iter(vec![1, 2, 3]);
        assert_eq!(list, List::from_iter(vec![1, 2, 3]));
        assert_ne!(list, List::from_iter(vec![1, 2]));
        assert_ne!(list, List::from_iter(vec![1, 2, 4]));
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn eq_ignores_cursor_position() {
        let left = List::from_iter(vec![1, 2, 3]);
        let right = List::from_iter(vec![1, 2, 3]);
        assert_eq!(left.element_at(2), Ok(&3));
        assert_eq!(right.element_at(0), Ok(&1));
        assert_eq!(left, right);
    }

    #[test]
    fn contains_before_and_after_cursor_moves() {
        let list = List::from_iter(vec![10, 20, 30]);
        assert!(list.contains(&30));
        assert_eq!(list.element_at(1), Ok(&20));
        assert!(list.contains(&10));
        assert!(!list.contains(&40));
        list.assert_well_formed();
    }

    #[test]
    fn all_short_circuits() {
        let list = List::from_iter(vec![1, 2, 3]);
        let mut visited = 0;
        assert!(!list.all(|element| {
            visited += 1;
            *element < 2
        }));
        assert_eq!(visited, 2);
    }

    #[test]
    fn for_each_mut_visits_in_order() {
        let mut list = List::from_iter(vec![1, 2, 3]);
        let mut seen = Vec::new();
        list.for_each_mut(|element| {
            seen.push(*element);
            *element += 1;
        });
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(list, List::from_iter(vec![2, 3, 4]));
    }

    #[test]
    fn remove_first_takes_only_the_first_match() {
        let mut list = List::from_iter(vec![1, 2, 3, 2, 1]);
        assert!(list.remove_first(&2));
        assert_eq!(list, List::from_iter(vec![1, 3, 2, 1]));
        assert!(list.remove_first(&1));
        assert_eq!(list, List::from_iter(vec![3, 2, 1]));
        assert!(!list.remove_first(&9));
        list.assert_well_formed();
    }

    #[test]
    fn clone_is_deep_and_ordered() {
        let list = List::from_iter(vec![1, 2, 3]);
        let copy = list.clone();
        assert_eq!(copy, list);
        drop(list);
        assert_eq!(copy, List::from_iter(vec![1, 2, 3]));
        copy.assert_well_formed();
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(List::from_iter(vec![1, 2]) < List::from_iter(vec![1, 3]));
        assert!(List::from_iter(vec![1, 2]) < List::from_iter(vec![1, 2, 0]));
        assert!(List::<i32>::new() < List::from_iter(vec![0]));
    }

    #[test]
    fn hash_matches_equality() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        let left = List::from_iter(vec![1, 2, 3]);
        let right = List::from_iter(vec![1, 2, 3]);
        assert_eq!(hash_of(&left), hash_of(&right));
    }
}
