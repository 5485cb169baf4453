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

/// Control Sequence Introducer that opens every SGR sequence.
pub const ESCAPE: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const END_CODE: &str = "m";

/// Separator between SGR parameters.
pub const DELIMITER: &str = ";";

/// Resets every SGR attribute to the terminal default.
pub const RESET_SEQUENCE: &str = "\x1b[0m";

/// Line terminator appended by the line oriented operations.
pub const LINE_FEED: &str = "\n";

/// Upper bound on the decimal width of one SGR code plus its delimiter.
///
/// Codes never exceed 255 so three digits and a `;` always fit.
pub(crate) const MAX_CODE_WIDTH: usize = 4;
