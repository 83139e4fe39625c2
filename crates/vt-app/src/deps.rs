//! # Application Dependencies / 应用依赖
//!
//! Parameter grouping for [`App`](crate::App) construction. Not a builder:
//! every port is required and nothing is defaulted.
//! 仅用于参数打包，无默认值。

use std::sync::Arc;

use vt_core::ports::{NavigatorPort, NutritionApiPort, RequestAuthPort, SecureStoragePort};

/// Ports the application needs, all required.
pub struct AppDeps {
    // Session persistence / 会话持久化
    pub credential_store: Arc<dyn SecureStoragePort>,

    // Remote service / 远程服务
    pub api: Arc<dyn NutritionApiPort>,
    pub request_auth: Arc<dyn RequestAuthPort>,

    // Navigation / 导航
    pub navigator: Arc<dyn NavigatorPort>,
}
