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

use serde_json::json;
use tintlog::layout::CustomLayout;

#[tokio::main]
async fn main() {
    let logger = tintlog::builder()
        .name("custom")
        .debug_mode(false)
        .debug_level("trace")
        .custom_level("audit", "#8E44AD")
        .custom_level("trace", "bright black")
        .custom_level("success", "green")
        .custom_level("info", "#00FFFF")
        .transport_fn(|level, entry| {
            eprintln!("[transport] {level}: {}", json!(entry));
            Ok(())
        })
        .build_dyn();

    logger.info("info is now cyan").await;
    logger.call("audit", ("user signed in", json!({"id": 7}))).await;
    logger.call("success", "deployed").await;
    logger.call("trace", "suppressed while debug mode is off").await;

    if let Some(audit) = logger.level("audit") {
        audit.log("user signed out").await;
    }

    let alert = tintlog::builder()
        .layout(CustomLayout::new(|ctx| {
            format!("[system alert] {}: {}", ctx.level, ctx.message.unwrap_or(""))
        }))
        .build();
    alert.crit("Hello crit!").await;
}
