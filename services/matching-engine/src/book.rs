//! Arrival-ordered order ledger
//!
//! The ledger is append-only: orders are recorded in arrival order and never
//! removed, only deactivated once fully filled. Arrival position doubles as
//! matching priority, so the ledger is also the match scan sequence.

use types::ids::{InstrumentId, OrderIndex};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// Append-only ledger of every order the engine has accepted.
///
/// An order's `OrderIndex` is its position in this ledger. Capacity is fixed
/// at construction; `try_append` refuses growth past it. The matching pass
/// reads and mutates orders only through this interface, which keeps the
/// storage layout swappable for an indexed structure later.
#[derive(Debug)]
pub struct ArrivalBook {
    orders: Vec<Order>,
    capacity: usize,
}

impl ArrivalBook {
    /// Create an empty ledger holding at most `capacity` orders
    pub fn new(capacity: usize) -> Self {
        Self {
            orders: Vec::new(),
            capacity,
        }
    }

    /// Record a new order at the next arrival index.
    ///
    /// Returns `None` when the ledger is already at capacity.
    pub fn try_append(
        &mut self,
        instrument: InstrumentId,
        side: Side,
        quantity: Quantity,
        limit_price: Price,
    ) -> Option<OrderIndex> {
        if self.orders.len() >= self.capacity {
            return None;
        }

        let index = OrderIndex::new(self.orders.len());
        self.orders
            .push(Order::new(index, instrument, side, quantity, limit_price));
        Some(index)
    }

    /// Look up an order by its arrival index
    pub fn order(&self, index: OrderIndex) -> Option<&Order> {
        self.orders.get(index.as_usize())
    }

    /// Mutable lookup by arrival index
    pub fn order_mut(&mut self, index: OrderIndex) -> Option<&mut Order> {
        self.orders.get_mut(index.as_usize())
    }

    /// Borrow two distinct orders mutably at once (taker and maker of a fill).
    ///
    /// # Panics
    /// Panics if `a == b` or either index is out of bounds.
    pub fn pair_mut(&mut self, a: OrderIndex, b: OrderIndex) -> (&mut Order, &mut Order) {
        let (a, b) = (a.as_usize(), b.as_usize());
        assert_ne!(a, b, "pair_mut requires two distinct orders");

        if a < b {
            let (left, right) = self.orders.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.orders.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }

    /// Iterate over orders in arrival order
    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Number of orders recorded so far
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// The ledger refuses further appends once full
    pub fn is_full(&self) -> bool {
        self.orders.len() >= self.capacity
    }

    /// Maximum number of orders this ledger will record
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of orders still able to match
    pub fn active_len(&self) -> usize {
        self.orders.iter().filter(|order| order.is_active()).count()
    }
}
