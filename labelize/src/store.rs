//! Record stores that label getters look records up in.
//!
//! A [`RecordStore`] is the bridge between labels and the ORM that actually
//! holds the records. Implement it for your database handle, once for each
//! model that can be labelled.
//!
//! For tests and prototyping, [`memory::MemoryStore`] keeps records in a
//! process-local map.

pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{Identifier, LabelTarget, Result};

/// Looks up records of type `T` by their identifier.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use labelize::{Identifier, LabelTarget, RecordStore};
///
/// #[derive(Clone)]
/// struct Employee {
///     id: i64,
/// }
///
/// impl LabelTarget for Employee {
///     fn primary_key(&self) -> Identifier {
///         Identifier::from(self.id)
///     }
/// }
///
/// struct Employees(Vec<Employee>);
///
/// #[async_trait]
/// impl RecordStore<Employee> for Employees {
///     async fn find(&self, id: &Identifier) -> labelize::Result<Option<Employee>> {
///         Ok(self
///             .0
///             .iter()
///             .find(|employee| employee.primary_key() == *id)
///             .cloned())
///     }
/// }
/// ```
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordStore<T: LabelTarget>: Send + Sync {
    /// Finds the record with the given identifier.
    ///
    /// A missing record is reported as `Ok(None)`, or alternatively as
    /// [`LabelError::RecordNotFound`](crate::LabelError::RecordNotFound).
    ///
    /// # Errors
    ///
    /// Returns an error if the store could not be queried.
    async fn find(&self, id: &Identifier) -> Result<Option<T>>;
}

#[async_trait]
impl<T, S> RecordStore<T> for &S
where
    T: LabelTarget,
    S: RecordStore<T> + ?Sized,
{
    async fn find(&self, id: &Identifier) -> Result<Option<T>> {
        (**self).find(id).await
    }
}

#[async_trait]
impl<T, S> RecordStore<T> for Arc<S>
where
    T: LabelTarget,
    S: RecordStore<T> + ?Sized,
{
    async fn find(&self, id: &Identifier) -> Result<Option<T>> {
        (**self).find(id).await
    }
}
