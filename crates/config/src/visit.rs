//! Field discovery over nested config records.
//!
//! Responsibilities:
//! - Expose config structs as walkable records via the [`Visitable`] trait,
//!   with per-type field descriptors generated by the [`visitable!`] macro.
//! - Traverse a record breadth-first, producing an environment variable name
//!   and a settable reference for every scalar leaf field.
//!
//! Does NOT handle:
//! - Environment lookup or precedence (see `env.rs`).
//! - Document deserialization (callers derive `serde::Deserialize`
//!   separately).
//!
//! Invariants:
//! - Traversal uses an explicit work queue, never recursion: a recursive walk
//!   would have to hold mutable borrows of every ancestor record at once.
//! - Fields not listed in a `visitable!` invocation are never visited.
//! - An `Option` field that is `None` is skipped entirely, it is neither an
//!   error nor a lookup target.
//! - A walker is one-shot; a fresh walk starts from scratch with no shared
//!   state.

use std::collections::VecDeque;

use crate::coerce::{self, CoerceError, FieldKind};
use crate::constants::ENV_SEPARATOR;

/// A record whose fields can be enumerated for the environment overlay.
///
/// Implement with the [`visitable!`] macro rather than by hand; the macro
/// lists each overridable field exactly once.
pub trait Visitable {
    /// Named references to this record's fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// A mutable scalar leaf that can take a coerced string value.
pub trait ScalarField {
    /// The scalar kind this field stores.
    fn kind(&self) -> FieldKind;

    /// Coerce `literal` to this field's kind and assign it in place.
    fn set_from_literal(&mut self, literal: &str) -> Result<(), CoerceError>;
}

/// One field of a record: its declared name and what it refers to.
pub struct Field<'a> {
    pub name: &'static str,
    pub reference: FieldRef<'a>,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, reference: FieldRef<'a>) -> Self {
        Self { name, reference }
    }
}

/// What a field dereferences to, after unwrapping any indirection.
pub enum FieldRef<'a> {
    /// A nested record to descend into.
    Record(&'a mut dyn Visitable),
    /// A settable scalar leaf.
    Scalar(&'a mut dyn ScalarField),
    /// An indirection with no target (`None`); skipped by the walker.
    Absent,
}

/// Classification of a field's storage as record, scalar, or absent.
///
/// Implemented for the supported scalar types, for records via
/// [`visitable!`], and transparently through `Box` and `Option` indirection.
/// A field type without an implementation cannot be listed in `visitable!`,
/// which is what makes unsupported field kinds a compile-time error.
pub trait IntoFieldRef {
    fn field_ref(&mut self) -> FieldRef<'_>;
}

impl<T: IntoFieldRef> IntoFieldRef for Option<T> {
    fn field_ref(&mut self) -> FieldRef<'_> {
        match self {
            Some(inner) => inner.field_ref(),
            None => FieldRef::Absent,
        }
    }
}

impl<T: IntoFieldRef + ?Sized> IntoFieldRef for Box<T> {
    fn field_ref(&mut self) -> FieldRef<'_> {
        (**self).field_ref()
    }
}

macro_rules! integer_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl ScalarField for $ty {
            fn kind(&self) -> FieldKind {
                FieldKind::Integer
            }

            fn set_from_literal(&mut self, literal: &str) -> Result<(), CoerceError> {
                *self = coerce::parse_integer(literal)? as $ty;
                Ok(())
            }
        }

        impl IntoFieldRef for $ty {
            fn field_ref(&mut self) -> FieldRef<'_> {
                FieldRef::Scalar(self)
            }
        }
    )*};
}

integer_scalar!(i8, i16, i32, i64, isize);

macro_rules! float_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl ScalarField for $ty {
            fn kind(&self) -> FieldKind {
                FieldKind::Float
            }

            fn set_from_literal(&mut self, literal: &str) -> Result<(), CoerceError> {
                *self = coerce::parse_float(literal)? as $ty;
                Ok(())
            }
        }

        impl IntoFieldRef for $ty {
            fn field_ref(&mut self) -> FieldRef<'_> {
                FieldRef::Scalar(self)
            }
        }
    )*};
}

float_scalar!(f32, f64);

impl ScalarField for String {
    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    fn set_from_literal(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = literal.to_string();
        Ok(())
    }
}

impl IntoFieldRef for String {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Scalar(self)
    }
}

impl ScalarField for bool {
    fn kind(&self) -> FieldKind {
        FieldKind::Boolean
    }

    fn set_from_literal(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = coerce::parse_boolean(literal)?;
        Ok(())
    }
}

impl IntoFieldRef for bool {
    fn field_ref(&mut self) -> FieldRef<'_> {
        FieldRef::Scalar(self)
    }
}

/// Implement [`Visitable`] (and [`IntoFieldRef`]) for a config struct.
///
/// Lists the fields the environment overlay may set; omitted fields are
/// invisible to the walker. Nested record fields must themselves be declared
/// with `visitable!`.
///
/// ```
/// use tote_config::visitable;
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: i64,
/// }
/// visitable!(Server { host, port });
///
/// #[derive(Default)]
/// struct AppConfig {
///     server: Server,
///     debug: bool,
/// }
/// visitable!(AppConfig { server, debug });
/// ```
#[macro_export]
macro_rules! visitable {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::visit::Visitable for $ty {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::visit::Field<'_>> {
                ::std::vec![
                    $($crate::visit::Field::new(
                        stringify!($field),
                        $crate::visit::IntoFieldRef::field_ref(&mut self.$field),
                    )),*
                ]
            }
        }

        impl $crate::visit::IntoFieldRef for $ty {
            fn field_ref(&mut self) -> $crate::visit::FieldRef<'_> {
                $crate::visit::FieldRef::Record(self)
            }
        }
    };
}

/// A scalar leaf yielded by the walker.
pub struct LeafField<'a> {
    /// Computed environment variable name: prefix segments and uppercased
    /// field names joined with underscores.
    pub path: String,
    /// The field's declared name, for error messages.
    pub name: &'static str,
    /// Settable reference to the field.
    pub scalar: &'a mut dyn ScalarField,
}

/// Breadth-first, one-shot iterator over the scalar leaves of a record.
pub struct FieldWalker<'a> {
    queue: VecDeque<(String, &'a mut dyn Visitable)>,
    ready: VecDeque<LeafField<'a>>,
}

impl<'a> FieldWalker<'a> {
    /// Start a walk rooted at `root` with the given name prefix.
    pub fn new(root: &'a mut dyn Visitable, prefix: impl Into<String>) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((prefix.into(), root));
        Self {
            queue,
            ready: VecDeque::new(),
        }
    }
}

impl<'a> Iterator for FieldWalker<'a> {
    type Item = LeafField<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(leaf) = self.ready.pop_front() {
                return Some(leaf);
            }
            let (prefix, node) = self.queue.pop_front()?;
            for field in node.fields() {
                let path = format!(
                    "{}{}{}",
                    prefix,
                    ENV_SEPARATOR,
                    field.name.to_uppercase()
                );
                match field.reference {
                    FieldRef::Record(record) => self.queue.push_back((path, record)),
                    FieldRef::Scalar(scalar) => self.ready.push_back(LeafField {
                        path,
                        name: field.name,
                        scalar,
                    }),
                    FieldRef::Absent => {}
                }
            }
        }
    }
}
