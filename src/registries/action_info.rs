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

//! Action parameter descriptions.

use std::collections::HashMap;

use super::protocol;
use super::types::{ActionParameter, ParameterType};

redfish_resource! {
    #[doc = "Description of the parameters of an action."]
    ActionInfo = protocol::ActionInfo
}

impl ActionInfo {
    transparent_property! {
        #[doc = "Parameters of the action."]
        parameters: ref Vec<ActionParameter>
    }

    /// Allowable values of a string parameter (if the service restricts it).
    pub fn parameter_values(&self, name: &str) -> Option<&[String]> {
        self.inner
            .parameters
            .iter()
            .find(|param| param.name == name && is_string(param))
            .map(|param| param.allowable_values.as_slice())
            .filter(|values| !values.is_empty())
    }

    /// Allowable values of all restricted string parameters.
    pub(crate) fn allowable_values(&self) -> HashMap<String, Vec<String>> {
        self.inner
            .parameters
            .iter()
            .filter(|param| is_string(param) && !param.allowable_values.is_empty())
            .map(|param| (param.name.clone(), param.allowable_values.clone()))
            .collect()
    }
}

fn is_string(param: &ActionParameter) -> bool {
    matches!(param.data_type, None | Some(ParameterType::String))
}
