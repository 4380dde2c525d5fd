use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other.iter().cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

/// Print the elements separated by single spaces, with no trailing
/// separator.
///
/// # Examples
///
/// ```
/// use chainlist::List;
///
/// let list = List::from([3, 9, 9]);
/// assert_eq!(list.to_string(), "3 9 9");
/// ```
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for item in iter {
                write!(f, " {}", item)?;
            }
        }
        Ok(())
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Node stability
    ///
    /// Sorting detaches every node into a temporary buffer and relinks the
    /// elements in sorted order. Node addresses are therefore **not** stable
    /// across a call: any raw position recorded before sorting (a cursor
    /// index, a pointer obtained through unsafe code) is meaningless
    /// afterwards. This is part of the contract, not an implementation
    /// detail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(*n*)
    /// memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// let mut list = List::from([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// For example, while [`f64`] doesn't implement [`Ord`] because
    /// `NaN != NaN`, we can use `partial_cmp` as our sort function
    /// when we know the list doesn't contain a `NaN`.
    /// ```
    /// use chainlist::List;
    /// let mut floats = List::from([5f64, 4.0, 1.0, 3.0, 2.0]);
    /// floats.sort_by(|a, b| a.partial_cmp(b).unwrap());
    /// assert_eq!(Vec::from_iter(floats), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    ///
    /// # Node stability
    ///
    /// See [`sort`](List::sort): node addresses are not stable across a call.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(Vec::from_iter(v.iter().copied()), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(Vec::from_iter(v), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        let mut buf = Vec::from_iter(std::mem::take(self));
        buf.sort_by(compare);
        self.extend(buf);
    }

    /// Remove consecutive repeated elements, keeping the first of each run.
    ///
    /// Returns the number of elements removed. Only adjacent elements are
    /// compared, so the list should be sorted first if a global dedup is
    /// wanted.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::from([3, 9, 9, 1, 22, 89, 89, 99]);
    /// assert_eq!(list.unique(), 2);
    /// assert_eq!(Vec::from_iter(list), vec![3, 9, 1, 22, 89, 99]);
    /// ```
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq<T>,
    {
        self.unique_by(T::eq)
    }

    /// Remove consecutive elements for which `same_bucket` returns `true`,
    /// keeping the first element of each run.
    ///
    /// `same_bucket` receives the retained element first and the candidate
    /// for removal second. Returns the number of elements removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::from(["foo", "FOO", "bar", "baz"]);
    /// list.unique_by(|a, b| a.eq_ignore_ascii_case(b));
    /// assert_eq!(Vec::from_iter(list), vec!["foo", "bar", "baz"]);
    /// ```
    pub fn unique_by<F>(&mut self, mut same_bucket: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        let mut removed = 0;
        while current != ghost {
            // SAFETY: `current` is a valid non-ghost node of the list, and
            // `current.next` is always valid since the list is cyclic.
            let next = unsafe { current.as_ref().next };
            if next == ghost {
                break;
            }
            let is_same =
                unsafe { same_bucket(&current.as_ref().element, &next.as_ref().element) };
            if is_same {
                // SAFETY: `next` is a valid non-ghost node of the list.
                drop(unsafe { self.detach_node(next) });
                removed += 1;
            } else {
                current = next;
            }
        }
        removed
    }

    /// Move all elements of `other` into `self`, keeping both orders.
    ///
    /// Both lists should be sorted; the result is then sorted too. Nodes are
    /// relinked, not copied, and `other` is left empty. An element of `other`
    /// is placed before an equal element of `self`, never instead of it, so
    /// equal elements keep `self`'s first.
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut a = List::from([1, 3, 9, 22, 99]);
    /// let mut b = List::from([2, 9, 89, 355]);
    ///
    /// a.merge(&mut b);
    ///
    /// assert_eq!(Vec::from_iter(a), vec![1, 2, 3, 9, 9, 22, 89, 99, 355]);
    /// assert!(b.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        self.merge_by(other, T::lt)
    }

    /// Move all elements of `other` into `self`, merging by a `less`
    /// predicate.
    ///
    /// Both lists should be sorted with respect to `less`. An `other` node is
    /// moved before the current `self` node only when strictly less, so ties
    /// keep `self`'s elements first. Runs of consecutive `other` nodes are
    /// relinked in one splice. `other` is left empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut a = List::from([(1, 'a'), (2, 'a')]);
    /// let mut b = List::from([(1, 'b'), (3, 'b')]);
    ///
    /// a.merge_by(&mut b, |x, y| x.0 < y.0);
    ///
    /// assert_eq!(
    ///     Vec::from_iter(a),
    ///     vec![(1, 'a'), (1, 'b'), (2, 'a'), (3, 'b')],
    /// );
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut Self, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut current = self.front_node();
        while current != ghost && !other.is_empty() {
            let front = other.front_node();
            // SAFETY: `current` and `front` are valid non-ghost nodes of
            // their lists.
            let moves = unsafe { less(&front.as_ref().element, &current.as_ref().element) };
            if !moves {
                // SAFETY: `current.next` is always valid since the list is
                // cyclic.
                current = unsafe { current.as_ref().next };
                continue;
            }
            // Extend the run of `other` nodes that go before `current`.
            let other_ghost = other.ghost_node();
            let mut back = front;
            let mut run = 1;
            loop {
                // SAFETY: `back` is a valid non-ghost node of `other`.
                let next = unsafe { back.as_ref().next };
                if next == other_ghost {
                    break;
                }
                let in_run = unsafe { less(&next.as_ref().element, &current.as_ref().element) };
                if !in_run {
                    break;
                }
                back = next;
                run += 1;
            }
            // SAFETY: `front..=back` is a valid range of `run` nodes in
            // `other`, and `current.prev`/`current` are adjacent nodes of
            // `self`.
            unsafe {
                let detached = other.detach_nodes(front, back, run);
                self.attach_nodes(current.as_ref().prev, current, detached);
            }
        }
        // The rest of `other` is not less than anything left in `self`.
        if let Some(detached) = other.detach_all_nodes() {
            // SAFETY: `ghost.prev` and `ghost` are adjacent nodes of `self`.
            unsafe { self.attach_nodes(self.back_node(), ghost, detached) };
        }
    }

    /// Reverse the order of the elements, in place.
    ///
    /// Every node's `next` and `prev` links are swapped, including the ghost
    /// node's; no element is moved or copied.
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(Vec::from_iter(list), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            // SAFETY: every node reached from the ghost by `next` links is a
            // valid node of the cyclic list.
            node = unsafe {
                let links = node.as_mut();
                std::mem::swap(&mut links.next, &mut links.prev);
                // The old `next` is now behind `prev`.
                links.prev
            };
            if node == ghost {
                break;
            }
        }
    }

    /// Write the elements to standard output, space-separated, followed by a
    /// newline.
    ///
    /// Equivalent to `println!("{}", self)`.
    pub fn print(&self)
    where
        T: fmt::Display,
    {
        println!("{}", self);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::List;

    #[test]
    fn list_equality_short_circuits_on_length() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 3]);
        let c = List::from([1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c < a);
    }

    #[test]
    fn clone_is_independent_of_the_original() {
        let mut a = List::from([1, 2, 3]);
        let mut b = a.clone();
        b.push_back(4);
        a.pop_front().unwrap();
        assert_eq!(Vec::from_iter(a), vec![2, 3]);
        assert_eq!(Vec::from_iter(b), vec![1, 2, 3, 4]);
    }

    #[test]
    fn clone_from_replaces_previous_contents() {
        let mut a = List::from([7, 8]);
        let b = List::from([1, 2, 3]);
        a.clone_from(&b);
        assert_eq!(a, b);
    }

    #[test]
    fn sort_orders_and_is_idempotent() {
        let mut list = List::from([3, 9, 9, 1, 22, 89, 99, 355, 999, 9999]);
        list.sort();
        let sorted = vec![1, 3, 9, 9, 22, 89, 99, 355, 999, 9999];
        assert_eq!(Vec::from_iter(&list), sorted.iter().collect::<Vec<_>>());
        list.sort();
        assert_eq!(Vec::from_iter(list), sorted);
    }

    #[test]
    fn sort_is_stable() {
        let mut list = List::from([(2, 'a'), (1, 'a'), (2, 'b'), (1, 'b'), (2, 'c')]);
        list.sort_by(|x, y| x.0.cmp(&y.0));
        assert_eq!(
            Vec::from_iter(list),
            vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b'), (2, 'c')],
        );
    }

    #[test]
    fn sort_handles_trivial_lists() {
        let mut empty: List<i32> = List::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = List::from([7]);
        single.sort();
        assert_eq!(Vec::from_iter(single), vec![7]);
    }

    #[test]
    fn unique_removes_adjacent_duplicates_only() {
        let mut list = List::from([3, 9, 9, 1, 22, 89, 89, 99, 9, 9, 9]);
        assert_eq!(list.unique(), 4);
        assert_eq!(Vec::from_iter(&list), vec![&3, &9, &1, &22, &89, &99, &9]);
        // A second pass finds nothing.
        assert_eq!(list.unique(), 0);
    }

    #[test]
    fn unique_on_trivial_lists() {
        let mut empty: List<i32> = List::new();
        assert_eq!(empty.unique(), 0);

        let mut single = List::from([1]);
        assert_eq!(single.unique(), 0);
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn merge_steals_all_nodes() {
        let mut a = List::from([1, 3, 9, 22, 99]);
        let mut b = List::from([2, 9, 89, 355, 999]);
        a.merge(&mut b);
        assert_eq!(a.len(), 10);
        assert!(b.is_empty());
        assert_eq!(
            Vec::from_iter(a),
            vec![1, 2, 3, 9, 9, 22, 89, 99, 355, 999],
        );
    }

    #[test]
    fn merge_with_empty_lists() {
        let mut a = List::from([1, 2, 3]);
        let mut b = List::new();
        a.merge(&mut b);
        assert_eq!(Vec::from_iter(&a), vec![&1, &2, &3]);

        let mut c = List::new();
        c.merge(&mut a);
        assert_eq!(Vec::from_iter(c), vec![1, 2, 3]);
        assert!(a.is_empty());
    }

    #[test]
    fn merge_ties_keep_receiver_elements_first() {
        let mut a = List::from([(1, "a"), (2, "a")]);
        let mut b = List::from([(1, "b"), (2, "b")]);
        a.merge_by(&mut b, |x, y| x.0 < y.0);
        assert_eq!(
            Vec::from_iter(a),
            vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")],
        );
    }

    #[test]
    fn reverse_is_an_involution() {
        let mut list = List::from_iter(0..10);
        list.reverse();
        assert_eq!(Vec::from_iter(list.iter().copied()), Vec::from_iter((0..10).rev()));
        list.reverse();
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..10));
    }

    #[test]
    fn reverse_on_trivial_lists() {
        let mut empty: List<i32> = List::new();
        empty.reverse();
        assert!(empty.is_empty());

        let mut single = List::from([1]);
        single.reverse();
        assert_eq!(Vec::from_iter(single), vec![1]);
    }

    #[test]
    fn display_separates_elements_with_spaces() {
        let list = List::from([3, 9, 9, 1]);
        assert_eq!(list.to_string(), "3 9 9 1");
        assert_eq!(List::<i32>::new().to_string(), "");
        assert_eq!(List::from([7]).to_string(), "7");
    }

    // The classic workout: build, push at both ends, insert mid-list,
    // sort, dedup and merge.
    #[test]
    fn end_to_end_scenario() {
        let mut list = List::from([3, 9, 9, 1, 22, 89, 99]);
        list.push_back(999);
        list.push_front(355);

        let mut cursor = list.cursor_start_mut();
        cursor.seek_forward(4).unwrap();
        cursor.insert(9999);
        assert_eq!(
            Vec::from_iter(&list),
            vec![&355, &3, &9, &9, &9999, &1, &22, &89, &99, &999],
        );

        list.sort();
        assert_eq!(
            Vec::from_iter(&list),
            vec![&1, &3, &9, &9, &22, &89, &99, &355, &999, &9999],
        );

        assert_eq!(list.unique(), 1);
        let mut other = List::from([2, 9, 50, 2000]);
        list.merge(&mut other);
        assert_eq!(
            Vec::from_iter(&list),
            vec![&1, &2, &3, &9, &9, &22, &50, &89, &99, &355, &999, &2000, &9999],
        );

        list.reverse();
        assert_eq!(list.front(), Ok(&9999));
        assert_eq!(list.back(), Ok(&1));
    }

    #[test]
    fn empty_list_errors() {
        let mut list: List<i32> = List::new();
        assert_eq!(list.front(), Err(ListError::Empty));
        assert_eq!(list.back(), Err(ListError::Empty));
        assert_eq!(list.pop_front(), Err(ListError::Empty));
        assert_eq!(list.pop_back(), Err(ListError::Empty));
    }
}
