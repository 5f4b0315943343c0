use core::{borrow::Borrow, ops::ControlFlow};
use std::collections::{BTreeMap, HashMap};

use crate::{
    empty::Empty,
    key::{Key, ToKey},
    value::{FromValue, OwnedValue, ToValue, Value},
};

/**
A collection of enumerable key/value properties.
*/
pub trait Props {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()>;

    fn get<'v, K: ToKey>(&'v self, key: K) -> Option<Value<'v>> {
        let key = key.to_key();
        let mut value = None;

        let _ = self.for_each(|k, v| {
            if k == key {
                value = Some(v);

                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        value
    }

    fn pull<'kv, V: FromValue<'kv>, K: ToKey>(&'kv self, key: K) -> Option<V> {
        self.get(key).and_then(|v| V::from_value(v))
    }

    fn count(&self) -> usize {
        let mut count = 0;

        let _ = self.for_each(|_, _| {
            count += 1;

            ControlFlow::Continue(())
        });

        count
    }

    fn is_unique(&self) -> bool {
        false
    }
}

impl<'a, P: Props + ?Sized> Props for &'a P {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()> {
        (**self).for_each(for_each)
    }

    fn get<'v, K: ToKey>(&'v self, key: K) -> Option<Value<'v>> {
        (**self).get(key)
    }

    fn pull<'kv, V: FromValue<'kv>, K: ToKey>(&'kv self, key: K) -> Option<V> {
        (**self).pull(key)
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn is_unique(&self) -> bool {
        (**self).is_unique()
    }
}

impl<P: Props> Props for Option<P> {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()> {
        match self {
            Some(props) => props.for_each(for_each),
            None => ControlFlow::Continue(()),
        }
    }
}

impl<K: ToKey, V: ToValue> Props for (K, V) {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for_each(self.0.to_key(), self.1.to_value())
    }

    fn count(&self) -> usize {
        1
    }

    fn is_unique(&self) -> bool {
        true
    }
}

impl<P: Props> Props for [P] {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for props in self {
            props.for_each(&mut for_each)?;
        }

        ControlFlow::Continue(())
    }

    fn count(&self) -> usize {
        self.iter().map(|props| props.count()).sum()
    }
}

impl<P, const N: usize> Props for [P; N]
where
    [P]: Props,
{
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()> {
        (self as &[_]).for_each(for_each)
    }

    fn count(&self) -> usize {
        (self as &[_]).count()
    }
}

impl<P> Props for Vec<P>
where
    [P]: Props,
{
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        for_each: F,
    ) -> ControlFlow<()> {
        (**self).for_each(for_each)
    }

    fn count(&self) -> usize {
        (**self).count()
    }
}

impl<K, V> Props for BTreeMap<K, V>
where
    K: Ord + ToKey + Borrow<str>,
    V: ToValue,
{
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            for_each(k.to_key(), v.to_value())?;
        }

        ControlFlow::Continue(())
    }

    fn get<'v, Q: ToKey>(&'v self, key: Q) -> Option<Value<'v>> {
        self.get(key.to_key().as_str()).map(|v| v.to_value())
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn is_unique(&self) -> bool {
        true
    }
}

impl<K, V> Props for HashMap<K, V>
where
    K: Eq + std::hash::Hash + ToKey + Borrow<str>,
    V: ToValue,
{
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for (k, v) in self {
            for_each(k.to_key(), v.to_value())?;
        }

        ControlFlow::Continue(())
    }

    fn get<'v, Q: ToKey>(&'v self, key: Q) -> Option<Value<'v>> {
        self.get(key.to_key().as_str()).map(|v| v.to_value())
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn is_unique(&self) -> bool {
        true
    }
}

impl Props for Empty {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        _: F,
    ) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    fn count(&self) -> usize {
        0
    }

    fn is_unique(&self) -> bool {
        true
    }
}

/**
An insertion-ordered store of owned properties.

Keys are case-sensitive and unique: writing a key that's already present
overwrites its value in place, keeping the position of the first write.
Enumeration through [`Bag::iter`] or [`Props::for_each`] visits entries in
insertion order and can be restarted any number of times.
*/
#[derive(Default, Clone)]
pub struct Bag {
    entries: Vec<(Key<'static>, OwnedValue)>,
}

impl Bag {
    pub fn new() -> Self {
        Bag {
            entries: Vec::new(),
        }
    }

    /**
    Build a bag from any set of properties, keeping their enumeration
    order. Duplicate keys collapse to the last value seen.
    */
    pub fn collect(props: impl Props) -> Self {
        let mut bag = Bag::new();

        let _ = props.for_each(|k, v| {
            bag.insert(k.to_owned(), v);

            ControlFlow::Continue(())
        });

        bag
    }

    pub fn insert(&mut self, key: impl Into<Key<'static>>, value: impl Into<OwnedValue>) {
        let key = key.into();
        let value = value.into();

        match self.entries.iter().position(|(k, _)| *k == key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<OwnedValue> {
        let index = self.entries.iter().position(|(k, _)| *k == key)?;

        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            entries: self.entries.iter(),
        }
    }
}

impl Props for Bag {
    fn for_each<'kv, F: FnMut(Key<'kv>, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for (k, v) in &self.entries {
            for_each(k.by_ref(), v.by_ref())?;
        }

        ControlFlow::Continue(())
    }

    fn count(&self) -> usize {
        self.len()
    }

    fn is_unique(&self) -> bool {
        true
    }
}

impl core::fmt::Debug for Bag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a> {
    entries: core::slice::Iter<'a, (Key<'static>, OwnedValue)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (Key<'a>, Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next().map(|(k, v)| (k.by_ref(), v.by_ref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bag_preserves_insertion_order() {
        let mut bag = Bag::new();

        bag.insert("b", 1);
        bag.insert("a", 2);
        bag.insert("c", 3);

        let keys = bag.iter().map(|(k, _)| k.to_owned()).collect::<Vec<_>>();

        assert_eq!(vec!["b", "a", "c"], keys);
    }

    #[test]
    fn bag_later_write_wins_in_place() {
        let mut bag = Bag::new();

        bag.insert("a", 1);
        bag.insert("b", 2);
        bag.insert("a", 3);

        assert_eq!(2, bag.len());
        assert_eq!(Some(3), bag.get("a").and_then(|v| v.to_i64()));

        // The overwritten key keeps its original position
        let first = bag.iter().next().map(|(k, _)| k.to_owned()).unwrap();
        assert_eq!("a", first.as_str());
    }

    #[test]
    fn bag_collect_from_pairs() {
        let bag = Bag::collect([("user", "alice"), ("session", "4411")]);

        assert_eq!(2, bag.count());
        assert_eq!(Some("alice"), bag.pull::<&str, _>("user"));
    }

    #[test]
    fn bag_remove_keeps_remaining_order() {
        let mut bag = Bag::collect([("a", 1), ("b", 2), ("c", 3)]);

        assert!(bag.remove("b").is_some());
        assert!(bag.remove("b").is_none());

        let keys = bag.iter().map(|(k, _)| k.to_owned()).collect::<Vec<_>>();
        assert_eq!(vec!["a", "c"], keys);
    }

    #[test]
    fn bag_iter_restarts() {
        let bag = Bag::collect([("a", 1), ("b", 2)]);

        let first = bag.iter().map(|(k, _)| k.to_owned()).collect::<Vec<_>>();
        let second = bag.iter().map(|(k, _)| k.to_owned()).collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn props_get_missing_key() {
        let bag = Bag::collect([("present", 1)]);

        assert!(bag.get("absent").is_none());
    }
}
