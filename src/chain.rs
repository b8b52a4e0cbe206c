//! newest-first singly-linked chain of entries

use std::collections::HashSet;
use std::rc::Rc;

type Link<V> = Option<Rc<Node<V>>>;

struct Node<V> {
    key: String,
    value: V,
    next: Link<V>,
}

/// Chain of `(key, value)` entries, most recent write at the head
///
/// Nodes are never modified once linked. A rewrite of a key shadows the
/// older node instead of replacing it, so the chain grows with every write.
pub(crate) struct Chain<V> {
    head: Link<V>,
    len: usize,
}

impl<V> Chain<V> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// link a new entry in front of the current head
    pub fn push_front(&mut self, key: String, value: V) {
        let next = self.head.take();
        self.head = Some(Rc::new(Node { key, value, next }));
        self.len += 1;
    }

    /// value of the entry closest to the head whose key matches
    pub fn find(&self, key: &str) -> Option<&V> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// number of entries, shadowed ones included
    pub fn len(&self) -> usize {
        self.len
    }

    /// distinct keys reachable from the head
    pub fn keys(&self) -> HashSet<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// address of the head node, `0` for an empty chain
    pub fn head_addr(&self) -> usize {
        self.head
            .as_ref()
            .map_or(0, |node| Rc::as_ptr(node) as usize)
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<V> Clone for Chain<V> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<V> Drop for Chain<V> {
    fn drop(&mut self) {
        // unlink node by node, the default drop recurses once per node
        let mut link = self.head.take();
        while let Some(node) = link {
            match Rc::try_unwrap(node) {
                Ok(mut node) => link = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

pub(crate) struct Iter<'a, V> {
    next: Option<&'a Node<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            (node.key.as_str(), &node.value)
        })
    }
}
