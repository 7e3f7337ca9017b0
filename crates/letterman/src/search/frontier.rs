//! Pending-exploration indices with a fixed pop discipline.

use std::collections::VecDeque;

use crate::config::FrontierOrder;

/// Vocabulary indices awaiting exploration.
///
/// Pushes always go to the back; the order chosen at construction decides
/// whether pops take the back (stack) or the front (queue).
#[derive(Clone, Debug)]
pub struct Frontier {
    order: FrontierOrder,
    items: VecDeque<usize>,
}

impl Frontier {
    pub fn new(order: FrontierOrder) -> Self {
        Self {
            order,
            items: VecDeque::new(),
        }
    }

    #[inline]
    pub fn push(&mut self, idx: usize) {
        self.items.push_back(idx);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        match self.order {
            FrontierOrder::Lifo => self.items.pop_back(),
            FrontierOrder::Fifo => self.items.pop_front(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
