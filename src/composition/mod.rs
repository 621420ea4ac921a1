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


//! Composability: resource blocks and the composition service.

mod composition_service;
mod protocol;
mod resource_block;

pub use self::composition_service::CompositionService;
pub use self::protocol::{CompositionState, CompositionStatus, PoolType, ResourceBlockType};
pub use self::resource_block::ResourceBlock;
