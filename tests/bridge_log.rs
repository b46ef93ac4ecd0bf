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

use tintlog::console::Buffer;

#[test]
fn test_log_macros_are_forwarded() {
    let buffer = Buffer::default();
    tintlog::builder()
        .name("bridge")
        .no_color()
        .debug_mode(false)
        .console(buffer.clone())
        .build()
        .apply()
        .unwrap();

    log::info!("hello {}", 1);
    log::warn!("careful");
    log::debug!("hidden");
    log::trace!("hidden too");
    log::error!("boom");

    let lines = buffer.take();
    assert_eq!(lines.len(), 3, "{lines:?}");
    assert!(lines[0].ends_with(" | bridge | INFO: hello 1"), "{}", lines[0]);
    assert!(lines[1].ends_with(" | bridge | WARN: careful"), "{}", lines[1]);
    assert!(lines[2].ends_with(" | bridge | ERROR: boom"), "{}", lines[2]);

    assert!(!log::log_enabled!(log::Level::Debug));
    assert!(log::log_enabled!(log::Level::Info));
}
