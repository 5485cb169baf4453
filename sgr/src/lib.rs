//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! ANSI Select Graphic Rendition (SGR) styling.
//!
//! Turns sets of [`Attribute`]s into escape sequences, wraps text with them
//! through [`StyledValue`], and memoizes one value per attribute set per
//! output target in a [`ValueCache`].

mod attribute;
mod cache;
pub mod consts;
mod config;
mod result;
mod sequence;
mod target;
mod value;

pub use self::attribute::{Attribute, Band};
pub use self::cache::ValueCache;
pub use self::config::{EmptyAttributes, StyleConfig};
pub use self::consts::{LINE_FEED, RESET_SEQUENCE};
pub use self::result::{StyleError, StyleResult};
pub use self::sequence::{AttributeKey, encode_codes, start_sequence, write_codes};
pub use self::target::{OutputTarget, WriterTarget};
pub use self::value::StyledValue;
