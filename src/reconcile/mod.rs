//! Request/response reconciliation for create calls
//!
//! Create endpoints echo back only part of what was submitted. After a create
//! the caller gets the server's object with every field the server left absent
//! filled in from the request it sent.
//!
//! ```rust,ignore
//! #[derive(Clone, Default)]
//! struct Thing { id: Option<u64>, name: String }
//!
//! impl_reconcile!(Thing { id, name });
//!
//! let merged = response.reconcile(&request);
//! ```

#[cfg(test)]
mod tests;

/// Whether a field holds a value the server actually set
pub trait Presence {
    /// `true` when the field is unset
    fn is_absent(&self) -> bool;
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl Presence for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// Field-by-field merge of a response with the request that produced it.
///
/// Response values win; request values only fill the gaps.
pub trait Reconcile: Sized {
    /// Copy every absent field of `self` from `request`
    fn fill_absent_from(&mut self, request: &Self);

    /// Consume the response and return it reconciled against `request`
    fn reconcile(mut self, request: &Self) -> Self {
        self.fill_absent_from(request);
        self
    }
}

/// Fill `target` from `source` when `target` is absent
pub fn fill_absent<T: Presence + Clone>(target: &mut T, source: &T) {
    if target.is_absent() && !source.is_absent() {
        *target = source.clone();
    }
}

/// Implement [`Reconcile`] for a struct by listing the fields to merge.
///
/// Every listed field must implement [`Presence`] and `Clone`.
#[macro_export]
macro_rules! impl_reconcile {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::reconcile::Reconcile for $ty {
            fn fill_absent_from(&mut self, request: &Self) {
                $( $crate::reconcile::fill_absent(&mut self.$field, &request.$field); )+
            }
        }
    };
}
