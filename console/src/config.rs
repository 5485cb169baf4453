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


use std::ffi::OsString;

/// Environment variable that disables colored output when set to a non-empty value.
pub const NO_COLOR: &str = "NO_COLOR";

/// Environment variable that forces colored output when set to a non-empty value.
pub const FORCE_COLOR: &str = "HUETERM_FORCE_COLOR";

/// Console output settings
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConsoleConfig {
    /// Whether escape sequences reach the underlying stream
    pub color_choice: ColorChoice,
}

impl ConsoleConfig {
    /// Pass escape sequences through
    pub fn colored() -> ConsoleConfig {
        ConsoleConfig {
            color_choice: ColorChoice::Always,
        }
    }
    /// Strip escape sequences
    pub fn plain() -> ConsoleConfig {
        ConsoleConfig {
            color_choice: ColorChoice::Never,
        }
    }

    /// Reads the color choice from the process environment.
    ///
    /// See [`ConsoleConfig::from_lookup`].
    pub fn from_env() -> ConsoleConfig {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Resolves the color choice through `lookup`.
    ///
    /// A non-empty [`FORCE_COLOR`] wins, then a non-empty [`NO_COLOR`] turns
    /// colors off; otherwise colors stay on.
    pub fn from_lookup<F>(lookup: F) -> ConsoleConfig
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let is_set = |name: &str| lookup(name).is_some_and(|value| !value.is_empty());
        let color_choice = if is_set(FORCE_COLOR) {
            ColorChoice::Always
        } else if is_set(NO_COLOR) {
            ColorChoice::Never
        } else {
            ColorChoice::Always
        };
        ConsoleConfig { color_choice }
    }
}

/// Whether a console passes escape sequences through or strips them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorChoice {
    /// Write escape sequences as-is.
    #[default]
    Always,
    /// Remove escape sequences before they reach the stream.
    Never,
}

impl ColorChoice {
    /// Returns `true` if escape sequences should be stripped.
    pub fn strips(&self) -> bool {
        matches!(self, ColorChoice::Never)
    }
}
