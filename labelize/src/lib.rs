//! Labelize lets a model point at single records of another model under
//! named labels, with the foreign keys stored on the model's own table.
//!
//! A `Company` can label one of its employees as its `president`, another as
//! its `manager`, and a third as its `janitor`, each stored in a
//! `president_id`, `manager_id`, or `janitor_id` field of the company itself.
//! There is no join table: each label is a plain foreign key.
//!
//! Labels are declared with the [`label_one_of_many!`] macro, which generates
//! a getter and a setter for each label. Getters are lazy and forgiving: a
//! foreign key is only dereferenced when the getter is called, and a foreign
//! key that no longer refers to an existing record is cleared rather than
//! reported as an error.
//!
//! ## Example
//!
//! ```
//! use labelize::store::memory::MemoryStore;
//! use labelize::{Identifier, LabelTarget, label_one_of_many};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Employee {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl LabelTarget for Employee {
//!     fn primary_key(&self) -> Identifier {
//!         Identifier::from(self.id)
//!     }
//! }
//!
//! #[derive(Debug, Default)]
//! struct Company {
//!     president_id: Option<Identifier>,
//!     manager_id: Option<Identifier>,
//!     janitor_id: Option<Identifier>,
//! }
//!
//! impl Company {
//!     label_one_of_many!(employees, as = [president, manager, janitor]);
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> labelize::Result<()> {
//! let employees = MemoryStore::new();
//! let alice = Employee {
//!     id: 1,
//!     name: "Alice".to_owned(),
//! };
//! employees.insert(alice.clone()).await;
//!
//! let mut company = Company::default();
//! company.set_president(&alice);
//! assert_eq!(company.president(&employees).await?, Some(alice));
//!
//! // A foreign key to a record that doesn't exist is cleared.
//! company.manager_id = Some(Identifier::from(42));
//! assert_eq!(company.manager(&employees).await?, None);
//! assert_eq!(company.manager_id, None);
//! # Ok(())
//! # }
//! ```
//!
//! ## Record stores
//!
//! Getters look records up through a [`RecordStore`], which is implemented
//! by whatever holds the records: typically a database handle of the host
//! ORM. The [`store::memory::MemoryStore`] is provided for tests and
//! prototyping.

#![warn(missing_docs, rustdoc::missing_crate_level_docs)]

extern crate self as labelize;

mod error;
mod identifier;
mod label;
pub mod store;

pub use error::{LabelError, Result};
pub use identifier::Identifier;
pub use label::{LabelDefinition, LabelTarget, LabelValue, assign_label, resolve_label};
pub use labelize_macros::label_one_of_many;
pub use store::RecordStore;
