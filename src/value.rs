use core::{fmt, str::FromStr};

/**
A dynamically-typed property value.

A [`Value`] borrows the data it points to. Values that need to outlive
their source are converted into [`OwnedValue`]s with [`Value::to_owned`].
*/
#[derive(Clone)]
pub struct Value<'v>(value_bag::ValueBag<'v>);

impl<'v> Value<'v> {
    pub fn capture_display(value: &'v (impl fmt::Display + 'static)) -> Self {
        Value(value_bag::ValueBag::capture_display(value))
    }

    pub fn from_display(value: &'v impl fmt::Display) -> Self {
        Value(value_bag::ValueBag::from_display(value))
    }

    pub fn by_ref<'b>(&'b self) -> Value<'b> {
        Value(self.0.by_ref())
    }

    pub fn to_owned(&self) -> OwnedValue {
        OwnedValue(self.0.to_owned())
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    pub fn parse<T: FromStr>(&self) -> Option<T> {
        struct Extract<'a, T>(&'a mut Option<T>);

        impl<'a, 'v, T: FromStr> value_bag::visit::Visit<'v> for Extract<'a, T> {
            fn visit_any(&mut self, _: value_bag::ValueBag) -> Result<(), value_bag::Error> {
                Ok(())
            }

            fn visit_str(&mut self, value: &str) -> Result<(), value_bag::Error> {
                *self.0 = value.parse().ok();

                Ok(())
            }
        }

        let mut extracted = None;
        let _ = self.0.visit(Extract(&mut extracted));
        extracted
    }

    pub fn to_borrowed_str(&self) -> Option<&'v str> {
        self.0.to_borrowed_str()
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    pub fn to_bool(&self) -> Option<bool> {
        self.0.to_bool()
    }
}

impl<'v> fmt::Debug for Value<'v> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<'v> fmt::Display for Value<'v> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(feature = "sval")]
impl<'v> sval::Value for Value<'v> {
    fn stream<'sval, S: sval::Stream<'sval> + ?Sized>(&'sval self, stream: &mut S) -> sval::Result {
        self.0.stream(stream)
    }
}

#[cfg(feature = "sval")]
impl<'v> sval_ref::ValueRef<'v> for Value<'v> {
    fn stream_ref<S: sval::Stream<'v> + ?Sized>(&self, stream: &mut S) -> sval::Result {
        self.0.stream_ref(stream)
    }
}

#[cfg(feature = "serde")]
impl<'v> serde::Serialize for Value<'v> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/**
A [`Value`] that owns its data.

Used as the storage representation inside [`crate::props::Bag`]; reading
goes back through [`OwnedValue::by_ref`].
*/
#[derive(Clone)]
pub struct OwnedValue(value_bag::OwnedValueBag);

impl OwnedValue {
    pub fn by_ref(&self) -> Value<'_> {
        Value(self.0.by_ref())
    }
}

impl fmt::Debug for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.by_ref(), f)
    }
}

impl fmt::Display for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.by_ref(), f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for OwnedValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.by_ref().serialize(serializer)
    }
}

impl<'v> From<Value<'v>> for OwnedValue {
    fn from(value: Value<'v>) -> Self {
        value.to_owned()
    }
}

pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl<'a, T: ToValue + ?Sized> ToValue for &'a T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<'v> ToValue for Value<'v> {
    fn to_value(&self) -> Value {
        self.by_ref()
    }
}

impl ToValue for OwnedValue {
    fn to_value(&self) -> Value {
        self.by_ref()
    }
}

pub trait FromValue<'v>: Sized {
    fn from_value(value: Value<'v>) -> Option<Self>;
}

impl<'v> FromValue<'v> for &'v str {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value.to_borrowed_str()
    }
}

impl<'v> FromValue<'v> for u64 {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value.to_u64()
    }
}

impl<'v> FromValue<'v> for i64 {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value.to_i64()
    }
}

impl<'v> FromValue<'v> for f64 {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value.to_f64()
    }
}

impl<'v> FromValue<'v> for bool {
    fn from_value(value: Value<'v>) -> Option<Self> {
        value.to_bool()
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty,)*) => {
        $(
            impl<'v> From<$ty> for Value<'v> {
                fn from(value: $ty) -> Self {
                    Value(value.into())
                }
            }

            impl From<$ty> for OwnedValue {
                fn from(value: $ty) -> Self {
                    Value::from(value).to_owned()
                }
            }

            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, u32, u64, usize, f64, bool,);

impl<'v> From<&'v str> for Value<'v> {
    fn from(value: &'v str) -> Self {
        Value(value.into())
    }
}

impl<'a> From<&'a str> for OwnedValue {
    fn from(value: &'a str) -> Self {
        Value::from(value).to_owned()
    }
}

impl From<String> for OwnedValue {
    fn from(value: String) -> Self {
        Value::from(&*value).to_owned()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::from(&**self)
    }
}
