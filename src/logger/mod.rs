// Copyright 2024 FastLabs Developers
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

//! The logger facade and its per-call emit path.

mod fatal;
mod logger;
mod message;

pub use self::fatal::FatalHook;
pub use self::logger::DEFAULT_FORMAT;
pub use self::logger::Logger;
pub use self::message::Json;
pub(crate) use self::message::Message;
