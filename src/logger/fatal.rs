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

use std::process;

/// The action taken after a fatal record has been emitted.
///
/// The default hook exits the process with status 1. Tests replace it with
/// [`Logger::set_fatal_hook`](crate::Logger::set_fatal_hook) to intercept
/// termination, typically with a hook that panics so `catch_unwind` can
/// observe the call.
pub type FatalHook = fn() -> !;

pub(crate) fn exit_process() -> ! {
    process::exit(1);
}
