use std::any::type_name;

use tracing::{debug, trace};

use crate::{Identifier, LabelError, RecordStore, Result};

/// A model that can be labelled by another model.
///
/// The only requirement is that its records expose an identifier; this is
/// what the label's foreign key field stores.
///
/// # Examples
///
/// ```
/// use labelize::{Identifier, LabelTarget};
///
/// struct Employee {
///     id: i64,
///     name: String,
/// }
///
/// impl LabelTarget for Employee {
///     fn primary_key(&self) -> Identifier {
///         Identifier::from(self.id)
///     }
/// }
/// ```
pub trait LabelTarget: Sized + Send + Sync + 'static {
    /// Returns the identifier of this record.
    fn primary_key(&self) -> Identifier;
}

/// A value assigned to a label: either a raw identifier or a record.
///
/// Label setters accept anything that converts into a [`LabelValue`], so
/// `company.set_president(5)`, `company.set_president("5")`, and
/// `company.set_president(&employee)` all work. String identifiers are
/// stored as given.
#[derive(Debug)]
pub enum LabelValue<'a, T> {
    /// An identifier, stored as is.
    Id(Identifier),
    /// A record, whose identifier is stored.
    Record(&'a T),
}

impl<T: LabelTarget> LabelValue<'_, T> {
    /// Returns the identifier to store in the foreign key field.
    #[must_use]
    pub fn identifier(&self) -> Identifier {
        match self {
            Self::Id(id) => id.clone(),
            Self::Record(record) => record.primary_key(),
        }
    }
}

impl<'a, T: LabelTarget> From<&'a T> for LabelValue<'a, T> {
    fn from(record: &'a T) -> Self {
        Self::Record(record)
    }
}

impl<T> From<Identifier> for LabelValue<'_, T> {
    fn from(id: Identifier) -> Self {
        Self::Id(id)
    }
}

impl<T> From<i64> for LabelValue<'_, T> {
    fn from(id: i64) -> Self {
        Self::Id(Identifier::from(id))
    }
}

impl<T> From<i32> for LabelValue<'_, T> {
    fn from(id: i32) -> Self {
        Self::Id(Identifier::from(id))
    }
}

impl<T> From<u32> for LabelValue<'_, T> {
    fn from(id: u32) -> Self {
        Self::Id(Identifier::from(id))
    }
}

impl<T> From<String> for LabelValue<'_, T> {
    fn from(id: String) -> Self {
        Self::Id(Identifier::from(id))
    }
}

impl<T> From<&str> for LabelValue<'_, T> {
    fn from(id: &str) -> Self {
        Self::Id(Identifier::from(id))
    }
}

/// Describes a label declared with
/// [`label_one_of_many!`](crate::label_one_of_many).
///
/// A constant of this type is generated for each declared label, named
/// after the label in upper case with a `_LABEL` suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LabelDefinition {
    label: &'static str,
    column: &'static str,
    association: &'static str,
    target: &'static str,
}

impl LabelDefinition {
    /// Creates a new label definition.
    #[must_use]
    pub const fn new(
        label: &'static str,
        column: &'static str,
        association: &'static str,
        target: &'static str,
    ) -> Self {
        Self {
            label,
            column,
            association,
            target,
        }
    }

    /// The name of the label, which is also the name of its getter.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// The name of the foreign key field, `<label>_id`.
    #[must_use]
    pub const fn column(&self) -> &'static str {
        self.column
    }

    /// The association name the label was declared with.
    #[must_use]
    pub const fn association(&self) -> &'static str {
        self.association
    }

    /// The name of the target type.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

/// Looks up the record a label's foreign key refers to.
///
/// This is the body of every generated label getter. If the foreign key is
/// unset or blank, returns `Ok(None)` without querying the store. If the
/// store has no record with that identifier, the foreign key is set to
/// [`None`] and `Ok(None)` is returned; the change is only persisted if the
/// declaring record is saved afterwards.
///
/// # Errors
///
/// Returns any error from the store other than
/// [`LabelError::RecordNotFound`].
pub async fn resolve_label<T, S>(
    foreign_key: &mut Option<Identifier>,
    store: &S,
    label: &str,
) -> Result<Option<T>>
where
    T: LabelTarget,
    S: RecordStore<T> + ?Sized,
{
    let Some(id) = foreign_key.as_ref().filter(|id| !id.is_blank()) else {
        return Ok(None);
    };

    trace!(label, %id, target = type_name::<T>(), "Resolving label");
    match store.find(id).await {
        Ok(Some(record)) => Ok(Some(record)),
        Ok(None) | Err(LabelError::RecordNotFound { .. }) => {
            debug!(
                label,
                %id,
                target = type_name::<T>(),
                "Labelled record not found; clearing the foreign key"
            );
            *foreign_key = None;
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Stores the identifier of `value` in a label's foreign key.
///
/// This is the body of every generated label setter.
pub fn assign_label<'a, T: LabelTarget>(
    foreign_key: &mut Option<Identifier>,
    value: impl Into<LabelValue<'a, T>>,
) {
    *foreign_key = Some(value.into().identifier());
}
