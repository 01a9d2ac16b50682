//! Declarative macros that implement [`Reflect`](crate::Reflect).

/// Implements [`Reflect`](crate::Reflect) and [`Typed`](crate::Typed) for
/// `Clone` value types that never need recursive copying.
///
/// # Example
///
/// ```
/// use toolsmith_clone::{reflect_leaf, Reflect, TypeKind};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Color {
///     Red,
///     Green,
/// }
///
/// reflect_leaf!(Enum => Color);
///
/// assert_eq!(Color::Green.type_descriptor().kind, TypeKind::Enum);
/// ```
#[macro_export]
macro_rules! reflect_leaf {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Typed for $ty {
                const KIND: $crate::TypeKind = $crate::TypeKind::$kind;
            }

            impl $crate::Reflect for $ty {
                fn type_descriptor(&self) -> $crate::TypeDescriptor {
                    $crate::TypeDescriptor::leaf(
                        ::std::any::type_name::<$ty>(),
                        $crate::TypeKind::$kind,
                    )
                }

                fn shallow_duplicate(
                    &self,
                ) -> $crate::Result<::std::boxed::Box<dyn $crate::Reflect>> {
                    Ok(::std::boxed::Box::new(<$ty as ::std::clone::Clone>::clone(self)))
                }

                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn into_any(
                    self: ::std::boxed::Box<Self>,
                ) -> ::std::boxed::Box<dyn ::std::any::Any> {
                    self
                }
            }
        )+
    };
}

/// Implements [`Reflect`](crate::Reflect) and [`Typed`](crate::Typed) for a
/// struct with named fields.
///
/// Every instance field must be listed and must itself implement `Reflect`.
/// The struct does not need to be `Clone`; its shallow duplicate is built
/// field by field, and the cloner offers every field to its fill callback as
/// a [`Slot::Field`](crate::Slot::Field). Fields are described in the order they are listed. The
/// optional `statics` block records type-level state (associated statics) in
/// the descriptor; such entries are marked static and never copied.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use toolsmith_clone::{deep_clone, reflect_struct};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Leaf {
///     weight: u32,
/// }
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Branch {
///     name: String,
///     leaf: Rc<Leaf>,
/// }
///
/// reflect_struct!(Leaf { weight: u32 });
/// reflect_struct!(Branch { name: String, leaf: Rc<Leaf> });
///
/// let original = Branch { name: "oak".into(), leaf: Rc::new(Leaf { weight: 3 }) };
/// let copy = deep_clone(&original).unwrap();
///
/// assert_eq!(copy, original);
/// assert!(!Rc::ptr_eq(&copy.leaf, &original.leaf));
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (
        $ty:ident { $($field:ident : $fty:ty),* $(,)? }
        $(statics { $($sname:ident : $sty:ty),* $(,)? })?
    ) => {
        impl $crate::Typed for $ty {
            const KIND: $crate::TypeKind = $crate::TypeKind::Struct;
        }

        impl $crate::Reflect for $ty {
            fn type_descriptor(&self) -> $crate::TypeDescriptor {
                const FIELDS: &[$crate::FieldDescriptor] = &[
                    $(
                        $crate::FieldDescriptor::instance(
                            stringify!($field),
                            stringify!($fty),
                            <$fty as $crate::Typed>::KIND,
                        ),
                    )*
                    $($(
                        $crate::FieldDescriptor::type_level(
                            stringify!($sname),
                            stringify!($sty),
                            <$sty as $crate::Typed>::KIND,
                        ),
                    )*)?
                ];
                $crate::TypeDescriptor::structure(::std::any::type_name::<$ty>(), FIELDS)
            }

            fn shallow_duplicate(
                &self,
            ) -> $crate::Result<::std::boxed::Box<dyn $crate::Reflect>> {
                Ok(::std::boxed::Box::new($ty {
                    $($field: $crate::duplicate(&self.$field)?,)*
                }))
            }

            #[allow(unused_variables)]
            fn duplicate_with(
                &self,
                fill: &mut $crate::FillFn<'_>,
            ) -> $crate::Result<::std::boxed::Box<dyn $crate::Reflect>> {
                Ok(::std::boxed::Box::new($ty {
                    $(
                        $field: $crate::fill_slot::<$fty>(
                            fill,
                            $crate::Slot::Field(stringify!($field)),
                            &self.$field,
                        )?,
                    )*
                }))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(
                self: ::std::boxed::Box<Self>,
            ) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}
