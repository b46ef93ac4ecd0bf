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

#[tokio::main]
async fn main() {
    let logger = tintlog::builder().name("simple").build();

    logger.info("Hello info!").await;
    logger.notice("Hello notice!").await;
    logger.http(("GET /health", json!({"status": 200, "ms": 3}))).await;
    logger.warn("Hello warn!").await;
    logger.error("Hello error!").await;
    logger.crit("Hello crit!").await;
    logger.danger("Hello danger!").await;
    logger.debug("Hello debug!").await;
    logger.ignore("Never printed").await;
}
