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

//! Registry types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::null_as_default;

protocol_enum! {
    /// Type of an attribute.
    enum AttributeType = Unknown {
        /// One of a list of values.
        Enumeration = "Enumeration",
        /// A string.
        String = "String",
        /// An integer.
        Integer = "Integer",
        /// A boolean.
        Boolean = "Boolean",
        /// A password, never readable.
        Password = "Password",
        /// Type not known to this crate.
        Unknown = ""
    }
}

protocol_enum! {
    /// Condition comparing an attribute in a dependency.
    enum MapFromCondition = Unknown {
        /// Equal.
        Equal = "EQU",
        /// Not equal.
        NotEqual = "NEQ",
        /// Greater than.
        Greater = "GTR",
        /// Greater than or equal.
        GreaterOrEqual = "GEQ",
        /// Less than.
        Less = "LSS",
        /// Less than or equal.
        LessOrEqual = "LEQ",
        /// Condition not known to this crate.
        Unknown = ""
    }
}

protocol_enum! {
    /// How a condition combines with the previous one.
    enum MapTerms = Unknown {
        /// Both must hold.
        And = "AND",
        /// Either must hold.
        Or = "OR",
        /// Term not known to this crate.
        Unknown = ""
    }
}

protocol_enum! {
    /// Data type of an action parameter.
    enum ParameterType = Unknown {
        /// A boolean.
        Boolean = "Boolean",
        /// A number.
        Number = "Number",
        /// An array of numbers.
        NumberArray = "NumberArray",
        /// A string.
        String = "String",
        /// An array of strings.
        StringArray = "StringArray",
        /// An object.
        Object = "Object",
        /// An array of objects.
        ObjectArray = "ObjectArray",
        /// Type not known to this crate.
        Unknown = ""
    }
}

/// A possible value of an enumeration attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValue {
    /// Human-readable name.
    #[serde(default)]
    pub value_display_name: Option<String>,
    /// Value as used in the `Attributes` map.
    #[serde(default)]
    pub value_name: String,
}

/// Definition of an attribute.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    /// Name used as a key in the `Attributes` map.
    #[serde(default)]
    pub attribute_name: String,
    #[serde(default)]
    pub current_value: Option<Value>,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
    #[serde(default)]
    pub gray_out: bool,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub immutable: bool,
    #[serde(default)]
    pub lower_bound: Option<i64>,
    #[serde(default)]
    pub max_length: Option<i64>,
    #[serde(default)]
    pub menu_path: Option<String>,
    #[serde(default)]
    pub min_length: Option<i64>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub reset_required: bool,
    #[serde(default)]
    pub scalar_increment: Option<i64>,
    #[serde(default, rename = "Type")]
    pub attribute_type: Option<AttributeType>,
    #[serde(default)]
    pub upper_bound: Option<i64>,
    /// Possible values of an enumeration.
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: Vec<AttributeValue>,
    #[serde(default)]
    pub value_expression: Option<String>,
    #[serde(default)]
    pub warning_text: Option<String>,
    #[serde(default)]
    pub write_only: bool,
}

/// A condition of a dependency.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MapFrom {
    #[serde(default)]
    pub map_from_attribute: String,
    #[serde(default)]
    pub map_from_condition: Option<MapFromCondition>,
    #[serde(default)]
    pub map_from_property: Option<String>,
    #[serde(default)]
    pub map_from_value: Option<Value>,
    #[serde(default)]
    pub map_terms: Option<MapTerms>,
}

/// Conditions and the change they cause.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dependency {
    #[serde(default, deserialize_with = "null_as_default")]
    pub map_from: Vec<MapFrom>,
    #[serde(default)]
    pub map_to_attribute: String,
    #[serde(default)]
    pub map_to_property: Option<String>,
    #[serde(default)]
    pub map_to_value: Option<Value>,
}

/// A dependency between attributes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDependency {
    #[serde(default)]
    pub dependency: Dependency,
    /// Attribute the dependency is for.
    #[serde(default)]
    pub dependency_for: String,
    /// Only `Map` is defined.
    #[serde(default, rename = "Type")]
    pub dependency_type: Option<String>,
}

/// A menu grouping attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Menu {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub display_order: Option<i64>,
    #[serde(default)]
    pub gray_out: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub menu_name: String,
    #[serde(default)]
    pub menu_path: Option<String>,
    #[serde(default)]
    pub read_only: bool,
}

/// Entries of an attribute registry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistryEntries {
    #[serde(default, deserialize_with = "null_as_default")]
    pub attributes: Vec<Attribute>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<AttributeDependency>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub menus: Vec<Menu>,
}

/// A system the registry applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SupportedSystem {
    #[serde(default, rename = "FirmwareVersion")]
    pub firmware_version: Option<String>,
    #[serde(default, rename = "ProductName")]
    pub product_name: Option<String>,
    #[serde(default, rename = "SystemId")]
    pub system_id: Option<String>,
}

/// A parameter of an action.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActionParameter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub data_type: Option<ParameterType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowable_values: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowable_numbers: Vec<String>,
    #[serde(default)]
    pub allowable_pattern: Option<String>,
    #[serde(default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub maximum_value: Option<f64>,
    #[serde(default)]
    pub minimum_value: Option<f64>,
    #[serde(default)]
    pub object_data_type: Option<String>,
}
