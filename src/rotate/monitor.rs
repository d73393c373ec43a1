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

use std::panic;
use std::sync::Weak;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossbeam_channel::bounded;
use crossbeam_channel::select;
use crossbeam_channel::tick;

use crate::rotate::rotating::Shared;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_millis(100);

/// Stops the background rotation check when dropped.
///
/// The monitor thread holds only a weak reference to the sink state, so it
/// also exits on its own once the sink is gone.
#[derive(Debug)]
pub(crate) struct MonitorGuard {
    shutdown: Sender<()>,
}

impl MonitorGuard {
    pub(crate) fn spawn(shared: Weak<Shared>, interval: Duration) -> MonitorGuard {
        let (shutdown, stop) = bounded::<()>(0);
        let ticker = tick(interval);

        std::thread::Builder::new()
            .name("longo-rotation".to_string())
            .spawn(move || {
                loop {
                    select! {
                        recv(ticker) -> _ => {
                            let Some(shared) = shared.upgrade() else { break };
                            check(&shared);
                        }
                        recv(stop) -> _ => break,
                    }
                }
            })
            .expect("failed to spawn the rotation monitor thread");

        MonitorGuard { shutdown }
    }
}

impl Drop for MonitorGuard {
    fn drop(&mut self) {
        let _ = self.shutdown.send_timeout((), SHUTDOWN_TIMEOUT);
    }
}

/// One periodic check. A panicking check is reported and swallowed; a single
/// failed rotation attempt must not take the monitor down with it.
fn check(shared: &Shared) {
    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        shared.maybe_rotate();
    }));

    if let Err(err) = result {
        let message = err
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| err.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("opaque panic payload");
        eprintln!("rotation check panicked: {message}");
    }
}
