//! `record!` declarative macro

/// Declare a struct together with its [`Record`](crate::record::Record) and
/// [`FieldValue`](crate::record::FieldValue) implementations
///
/// Field annotations are written as `#[tag(key = "value", ...)]`. Doc
/// comments and other attributes may sit next to them and are kept on the
/// generated field. Records must implement `Default` (nested records are
/// rebuilt field by field).
///
/// ```ignore
/// bindery_domain::record! {
///     #[derive(Debug, Default)]
///     pub struct Service {
///         /// Verbose request logging
///         #[tag(bind = "kind=setting,in=debug")]
///         pub debug: bool,
///         #[tag(bind = "in=config.server_port")]
///         pub server_port: i64,
///         pub logger: Interface<dyn Logger>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    // Struct definition: drop `tag` attributes, keep the rest on the field
    (@struct [$($head:tt)*] [$($done:tt)*]) => {
        $($head)* {
            $($done)*
        }
    };
    (@struct $head:tt [$($done:tt)*]
        { [] [$($keep:tt)*] $fvis:vis $field:ident : $ty:ty }
        $($rest:tt)*
    ) => {
        $crate::record!(@struct $head [$($done)* $($keep)* $fvis $field: $ty,] $($rest)*);
    };
    (@struct $head:tt $done:tt
        { [[tag $($_tag:tt)*] $($pending:tt)*] [$($keep:tt)*] $($field:tt)* }
        $($rest:tt)*
    ) => {
        $crate::record!(@struct $head $done { [$($pending)*] [$($keep)*] $($field)* } $($rest)*);
    };
    (@struct $head:tt $done:tt
        { [[$($attr:tt)*] $($pending:tt)*] [$($keep:tt)*] $($field:tt)* }
        $($rest:tt)*
    ) => {
        $crate::record!(@struct $head $done { [$($pending)*] [$($keep)* #[$($attr)*]] $($field)* } $($rest)*);
    };

    // Field descriptor: collect `tag` attributes, skip the rest
    (@tags $desc:expr ;) => {
        $desc
    };
    (@tags $desc:expr ; [tag($($key:ident = $tag:literal),* $(,)?)] $($rest:tt)*) => {
        $crate::record!(@tags $desc $(.with_tag(::std::stringify!($key), $tag))* ; $($rest)*)
    };
    (@tags $desc:expr ; [$($_attr:tt)*] $($rest:tt)*) => {
        $crate::record!(@tags $desc ; $($rest)*)
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$($fattr:tt)*])*
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $crate::record!(@struct [$(#[$meta])* $vis struct $name] []
            $({ [$([$($fattr)*])*] [] $fvis $field : $ty })*
        );

        impl $crate::record::Record for $name {
            fn record_type() -> $crate::record::RecordType {
                $crate::record::RecordType::new(
                    ::std::stringify!($name),
                    ::std::vec![
                        $(
                            $crate::record!(@tags
                                $crate::record::FieldDescriptor::new(
                                    ::std::stringify!($field),
                                    <$ty as $crate::record::FieldValue>::type_desc(),
                                ) ;
                                $([$($fattr)*])*
                            )
                        ),*
                    ],
                )
            }

            fn get_field(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                match name {
                    $(::std::stringify!($field) => ::std::option::Option::Some(
                        $crate::record::FieldValue::to_value(&self.$field),
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }

            #[allow(unused_variables)]
            fn field_value_at(
                &self,
                name: &str,
                path: &[&str],
            ) -> ::std::option::Option<::std::option::Option<$crate::Value>> {
                match name {
                    $(::std::stringify!($field) => ::std::option::Option::Some(
                        $crate::record::FieldValue::value_at(&self.$field, path),
                    ),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn set_field(&mut self, name: &str, value: $crate::Value) -> $crate::error::Result<()> {
                match name {
                    $(::std::stringify!($field) => {
                        self.$field = <$ty as $crate::record::FieldValue>::from_value(value)
                            .map_err(|e| $crate::error::Error::access(name, e.to_string()))?;
                        ::std::result::Result::Ok(())
                    })*
                    _ => ::std::result::Result::Err($crate::error::Error::access(
                        name,
                        ::std::format!("unknown field of {}", ::std::stringify!($name)),
                    )),
                }
            }

            #[allow(unused_mut)]
            fn to_value(&self) -> $crate::Value {
                let mut entries = ::std::collections::BTreeMap::new();
                $(entries.insert(
                    ::std::string::String::from(::std::stringify!($field)),
                    $crate::record::FieldValue::to_value(&self.$field),
                );)*
                $crate::Value::Map(entries)
            }
        }

        impl $crate::record::FieldValue for $name {
            fn type_desc() -> $crate::types::TypeDesc {
                $crate::types::TypeDesc::Record(::std::stringify!($name))
            }

            fn to_value(&self) -> $crate::Value {
                $crate::record::Record::to_value(self)
            }

            fn from_value(value: $crate::Value) -> $crate::error::Result<Self> {
                match value {
                    $crate::Value::Map(entries) => {
                        let mut out = <$name as ::std::default::Default>::default();
                        for (key, item) in entries {
                            $crate::record::Record::set_field(&mut out, &key, item)?;
                        }
                        ::std::result::Result::Ok(out)
                    }
                    other => ::std::result::Result::Err($crate::error::Error::incompatible(
                        ::std::stringify!($name),
                        other.kind_name(),
                    )),
                }
            }

            fn value_at(&self, path: &[&str]) -> ::std::option::Option<$crate::Value> {
                match path {
                    [] => ::std::option::Option::Some($crate::record::Record::to_value(self)),
                    [head, rest @ ..] => {
                        $crate::record::Record::field_value_at(self, head, rest).flatten()
                    }
                }
            }
        }
    };
}
