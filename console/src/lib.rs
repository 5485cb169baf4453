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


//! Terminal consoles for SGR styled output.
//!
//! A [`Console`] serializes writes to a stream and can strip escape sequences
//! when colors are unwanted. A [`Context`] pairs consoles for stdout and
//! stderr with value caches, and the color helpers print through the process
//! context.

mod config;
mod console;
mod context;
mod helpers;
mod result;
mod strip;
#[cfg(test)]
mod test_support;

pub use self::config::{ColorChoice, ConsoleConfig, FORCE_COLOR, NO_COLOR};
pub use self::console::Console;
pub use self::context::{Context, Stream};
pub use self::helpers::*;
pub use self::result::{ConsoleError, ConsoleResult};
pub use self::strip::{StripWriter, strip_ansi_codes};
