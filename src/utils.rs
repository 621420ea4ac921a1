// Copyright 2023 Dmitry Tantsur <dtantsur@protonmail.com>
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Various utilities.

use serde::{Deserialize, Deserializer};

/// Generate an accessor for a field of the wrapped protocol structure.
macro_rules! transparent_property {
    ($(#[$attr:meta])* $name:ident: ref $type:ty) => (
        $(#[$attr])*
        #[inline]
        pub fn $name(&self) -> &$type {
            &self.inner.$name
        }
    );

    ($(#[$attr:meta])* $name:ident: $type:ty) => (
        $(#[$attr])*
        #[inline]
        pub fn $name(&self) -> $type {
            self.inner.$name
        }
    );
}

/// Generate a setter and a builder-style modifier for a mutable field.
///
/// Only the in-memory record changes, call `update` to send the change.
macro_rules! update_field {
    ($(#[$attr:meta])* $set_func:ident, $with_func:ident -> $name:ident: optional $type:ty) => (
        $(#[$attr])*
        pub fn $set_func<S: Into<$type>>(&mut self, value: S) {
            self.inner.$name = Some(value.into());
        }

        $(#[$attr])*
        #[inline]
        pub fn $with_func<S: Into<$type>>(mut self, value: S) -> Self {
            self.$set_func(value);
            self
        }
    );

    ($(#[$attr:meta])* $set_func:ident, $with_func:ident -> $name:ident: $type:ty) => (
        $(#[$attr])*
        pub fn $set_func<S: Into<$type>>(&mut self, value: S) {
            self.inner.$name = value.into();
        }

        $(#[$attr])*
        #[inline]
        pub fn $with_func<S: Into<$type>>(mut self, value: S) -> Self {
            self.$set_func(value);
            self
        }
    );
}

/// Define an enumeration serialized as a string.
///
/// With `= Variant` unknown values decode into that variant instead of failing.
macro_rules! protocol_enum {
    (@define $(#[$attr:meta])* $name:ident {
        $($(#[$iattr:meta])* $item:ident = $val:literal),+
    }) => (
        $(#[$attr])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $($(#[$iattr])* $item),+
        }

        impl $name {
            /// String representation used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$item => $val),+
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                String::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::ser::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }
    );

    ($(#[$attr:meta])* enum $name:ident = $def:ident {
        $($(#[$iattr:meta])* $item:ident = $val:literal),+ $(,)?
    }) => (
        protocol_enum! { @define $(#[$attr])* $name { $($(#[$iattr])* $item = $val),+ } }

        impl Default for $name {
            fn default() -> $name {
                $name::$def
            }
        }

        impl<'de> ::serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<$name, D::Error>
            where
                D: ::serde::de::Deserializer<'de>,
            {
                let value = <String as ::serde::de::Deserialize>::deserialize(deserializer)?;
                Ok(match value.as_str() {
                    $($val => $name::$item,)+
                    _ => $name::$def,
                })
            }
        }
    );

    ($(#[$attr:meta])* enum $name:ident {
        $($(#[$iattr:meta])* $item:ident = $val:literal),+ $(,)?
    }) => (
        protocol_enum! { @define $(#[$attr])* $name { $($(#[$iattr])* $item = $val),+ } }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(value: &str) -> $crate::Result<$name> {
                match value {
                    $($val => Ok($name::$item),)+
                    other => Err($crate::Error::new(
                        $crate::ErrorKind::InvalidInput,
                        format!("unexpected {} value {}", stringify!($name), other),
                    )),
                }
            }
        }

        impl<'de> ::serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<$name, D::Error>
            where
                D: ::serde::de::Deserializer<'de>,
            {
                let value = <String as ::serde::de::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }
    );
}

/// Define a record type wrapping a protocol structure.
///
/// The protocol structure must have an `entity: Entity` field.
macro_rules! redfish_resource {
    (@define $(#[$attr:meta])* $name:ident = $inner:ty) => (
        $(#[$attr])*
        #[derive(Debug, Clone)]
        pub struct $name {
            inner: $inner,
            state: $crate::common::ResourceState,
        }

        impl $name {
            /// Fetch a single resource.
            pub async fn load<S: AsRef<str>>(client: &$crate::Client, uri: S) -> $crate::Result<$name> {
                $crate::common::api::get_object(client, uri.as_ref()).await
            }

            /// Fetch all members of a collection of these resources.
            pub async fn list<S: AsRef<str>>(
                client: &$crate::Client,
                uri: S,
            ) -> $crate::Result<$crate::common::Collected<$name>> {
                $crate::common::api::get_collection(client, uri.as_ref()).await
            }

            /// Identifier of the resource within its collection.
            #[inline]
            pub fn id(&self) -> &str {
                &self.inner.entity.id
            }

            /// Human-readable name.
            #[inline]
            pub fn name(&self) -> &str {
                &self.inner.entity.name
            }

            /// Human-readable description (if provided).
            #[inline]
            pub fn description(&self) -> Option<&str> {
                self.inner.entity.description.as_deref()
            }

            /// Canonical URI of the resource.
            #[inline]
            pub fn odata_id(&self) -> &str {
                &self.inner.entity.odata_id
            }

            /// Schema type and version.
            #[inline]
            pub fn odata_type(&self) -> &str {
                &self.inner.entity.odata_type
            }

            /// Concurrency token used for conditional writes (if known).
            #[inline]
            pub fn etag(&self) -> Option<&str> {
                self.state.etag()
            }

            /// Whether the record holds a snapshot usable for `update`.
            #[inline]
            pub fn is_refreshed(&self) -> bool {
                self.state.raw().is_some()
            }
        }

        #[::async_trait::async_trait]
        impl $crate::common::Refresh for $name {
            async fn refresh(&mut self) -> $crate::Result<()> {
                $crate::common::api::refresh(self).await
            }
        }
    );

    ($(#[$attr:meta])* $name:ident = $inner:ty, settings = $field:ident) => (
        redfish_resource! { @define $(#[$attr])* $name = $inner }

        impl $crate::common::Resource for $name {
            type Inner = $inner;

            const NAME: &'static str = stringify!($name);

            fn from_parts(inner: $inner, state: $crate::common::ResourceState) -> $name {
                $name { inner, state }
            }

            fn inner(&self) -> &$inner {
                &self.inner
            }

            fn state(&self) -> &$crate::common::ResourceState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut $crate::common::ResourceState {
                &mut self.state
            }

            fn entity(&self) -> &$crate::common::Entity {
                &self.inner.entity
            }

            fn settings(&self) -> Option<&$crate::common::Settings> {
                self.inner.$field.as_ref()
            }
        }
    );

    ($(#[$attr:meta])* $name:ident = $inner:ty) => (
        redfish_resource! { @define $(#[$attr])* $name = $inner }

        impl $crate::common::Resource for $name {
            type Inner = $inner;

            const NAME: &'static str = stringify!($name);

            fn from_parts(inner: $inner, state: $crate::common::ResourceState) -> $name {
                $name { inner, state }
            }

            fn inner(&self) -> &$inner {
                &self.inner
            }

            fn state(&self) -> &$crate::common::ResourceState {
                &self.state
            }

            fn state_mut(&mut self) -> &mut $crate::common::ResourceState {
                &mut self.state
            }

            fn entity(&self) -> &$crate::common::Entity {
                &self.inner.entity
            }
        }
    );
}

/// Deserialize `null` as the default value.
pub fn null_as_default<'de, D, T>(des: D) -> ::std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Deserialize::deserialize(des)?;
    Ok(value.unwrap_or_default())
}

#[cfg(test)]
mod test {
    use serde_json::json;

    protocol_enum! {
        enum Color = Unknown {
            Red = "red",
            Green = "green",
            Unknown = ""
        }
    }

    protocol_enum! {
        enum Strict {
            One = "one",
            Two = "two"
        }
    }

    #[derive(Debug, serde::Deserialize)]
    struct WithDefault {
        #[serde(default, deserialize_with = "super::null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn test_protocol_enum_fallback() {
        let color: Color = serde_json::from_value(json!("green")).unwrap();
        assert_eq!(color, Color::Green);
        let color: Color = serde_json::from_value(json!("purple")).unwrap();
        assert_eq!(color, Color::Unknown);
        assert_eq!(Color::default(), Color::Unknown);
        assert_eq!(serde_json::to_value(Color::Red).unwrap(), json!("red"));
        assert_eq!(Color::Red.to_string(), "red");
    }

    #[test]
    fn test_protocol_enum_strict() {
        let value: Strict = serde_json::from_value(json!("two")).unwrap();
        assert_eq!(value, Strict::Two);
        assert!(serde_json::from_value::<Strict>(json!("three")).is_err());
        assert_eq!("one".parse::<Strict>().unwrap(), Strict::One);
        let s: String = Strict::One.into();
        assert_eq!(s, "one");
    }

    #[test]
    fn test_null_as_default() {
        let value: WithDefault = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(value.items.is_empty());
        let value: WithDefault = serde_json::from_value(json!({})).unwrap();
        assert!(value.items.is_empty());
        let value: WithDefault = serde_json::from_value(json!({"items": ["a"]})).unwrap();
        assert_eq!(value.items, vec!["a".to_string()]);
    }
}
