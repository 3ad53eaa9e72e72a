//! Process-wide registry of schema-definition types.
//!
//! Types register themselves with [`schema_type!`](crate::schema_type), which
//! submits a [`TypeRegistration`] through `inventory`. The registry is the
//! compiled-in stand-in for a class path: a type is only discoverable when
//! the crate that declares it is linked into the running binary.

use serde::Serialize;
use serde_json::Value;

/// Boxed error returned by fallible constructors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// No-argument constructor of a registered type.
pub type Constructor = fn() -> Result<Box<dyn SchemaInstance>, BoxError>;

/// A type that can be named by its fully-qualified path.
///
/// Implemented by [`schema_type!`](crate::schema_type); the path is
/// `module_path!()` followed by the type name.
pub trait SchemaDefinition {
    const TYPE_PATH: &'static str;
}

/// Object-safe view of a constructed schema value.
pub trait SchemaInstance {
    /// Convert the instance into a JSON value tree.
    fn to_value(&self) -> Result<Value, serde_json::Error>;
}

impl<T: Serialize> SchemaInstance for T {
    fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Registry entry for one schema-definition type.
#[derive(Debug)]
pub struct TypeRegistration {
    /// Fully-qualified path, `crate::module::Type`.
    pub type_path: &'static str,
    /// Type path of the declared supertype, if any.
    pub parent: Option<&'static str>,
    /// `None` for abstract declarations.
    pub constructor: Option<Constructor>,
}

impl TypeRegistration {
    /// Name of the crate that declared the type.
    pub fn crate_name(&self) -> &'static str {
        self.type_path
            .split_once("::")
            .map(|(krate, _)| krate)
            .unwrap_or(self.type_path)
    }

    pub fn is_abstract(&self) -> bool {
        self.constructor.is_none()
    }
}

inventory::collect!(TypeRegistration);

/// Iterate over every registration linked into this binary.
///
/// Iteration order is unspecified.
pub fn registrations() -> impl Iterator<Item = &'static TypeRegistration> {
    inventory::iter::<TypeRegistration>.into_iter()
}

/// Register a schema-definition type.
///
/// ```
/// use asyncapi_gen::model::{AsyncApi, Info};
/// use serde::Serialize;
///
/// #[derive(Default, Serialize)]
/// pub struct OrdersApi {
///     #[serde(flatten)]
///     document: AsyncApi,
/// }
///
/// // Default-constructed, extends the AsyncAPI base type
/// asyncapi_gen::schema_type!(OrdersApi);
///
/// #[derive(Serialize)]
/// pub struct BillingApi(AsyncApi);
///
/// fn billing() -> Result<BillingApi, std::io::Error> {
///     Ok(BillingApi(AsyncApi::new(Info::new("Billing", "1.0.0"))))
/// }
///
/// // Explicit constructor, extends OrdersApi
/// asyncapi_gen::schema_type!(BillingApi: OrdersApi = billing);
///
/// pub struct Base;
///
/// // Abstract declarations are never constructed
/// asyncapi_gen::schema_type!(abstract Base);
/// ```
#[macro_export]
macro_rules! schema_type {
    (abstract $ty:ident : $parent:ty) => {
        $crate::__register_schema_type!(
            $ty,
            ::std::option::Option::Some(<$parent as $crate::SchemaDefinition>::TYPE_PATH),
            ::std::option::Option::None
        );
    };
    (abstract $ty:ident) => {
        $crate::schema_type!(abstract $ty : $crate::model::AsyncApi);
    };
    ($ty:ident : $parent:ty = $ctor:expr) => {
        $crate::__register_schema_type!(
            $ty,
            ::std::option::Option::Some(<$parent as $crate::SchemaDefinition>::TYPE_PATH),
            ::std::option::Option::Some($crate::__schema_constructor!($ty, $ctor))
        );
    };
    ($ty:ident : $parent:ty) => {
        $crate::schema_type!($ty : $parent = || -> ::std::result::Result<$ty, ::std::convert::Infallible> {
            ::std::result::Result::Ok(<$ty as ::std::default::Default>::default())
        });
    };
    ($ty:ident = $ctor:expr) => {
        $crate::schema_type!($ty : $crate::model::AsyncApi = $ctor);
    };
    ($ty:ident) => {
        $crate::schema_type!($ty : $crate::model::AsyncApi);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_constructor {
    ($ty:ident, $ctor:expr) => {{
        fn construct() -> ::std::result::Result<
            ::std::boxed::Box<dyn $crate::SchemaInstance>,
            $crate::BoxError,
        > {
            let value: $ty = ($ctor)().map_err(|e| -> $crate::BoxError { e.into() })?;
            ::std::result::Result::Ok(::std::boxed::Box::new(value))
        }
        construct as $crate::Constructor
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __register_schema_type {
    ($ty:ident, $parent:expr, $ctor:expr) => {
        impl $crate::SchemaDefinition for $ty {
            const TYPE_PATH: &'static str = concat!(module_path!(), "::", stringify!($ty));
        }

        $crate::inventory::submit! {
            $crate::TypeRegistration {
                type_path: <$ty as $crate::SchemaDefinition>::TYPE_PATH,
                parent: $parent,
                constructor: $ctor,
            }
        }
    };
}
