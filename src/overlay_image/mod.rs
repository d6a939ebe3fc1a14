//! # overlay 图片解析模块（overlay_image）
//!
//! ## 设计思路
//!
//! 该模块将“来源描述解码 → 模式分派 → 加载校验 → 解码重编码 → SDK 句柄”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `spec`：来源描述与流水线中间数据模型
//! - `message`：跨边界键值消息编解码（契约边界）
//! - `resolver`：编排整条解析流水线与回退诊断
//! - `loader`：负责文件加载与签名/体积安全校验
//! - `pipeline`：负责解码、资源限制、PNG 重编码
//! - `handle`：地图 SDK 消费的图片句柄与透明占位
//! - `assets`：`asset` 模式的键查找能力（注入式）
//! - `config/error`：配置与错误模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 资源查找与设备密度均为注入项，模块本身不依赖任何宿主运行时。
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! 宿主消息通道
//!    ↓
//! message.rs（契约断言 + Spec 构造）
//!    ↓
//! resolver.rs（模式分派 + 阶段耗时日志 + 失败回退）
//!    ├─ assets.rs（asset 键 → 文件路径）
//!    ├─ loader.rs（读盘 + 签名/体积校验）
//!    └─ pipeline.rs（解码 + 像素限制 + PNG 重编码）
//!    ↓
//! handle.rs（OverlayImage 交给地图 SDK）
//! ```
//!
//! ## 失败语义
//!
//! | 情况 | 处理 |
//! |------|------|
//! | 空路径 / 文件缺失 / 无法解码 / 资源键未命中 / 超限 | 降级：透明 1×1 占位 + 诊断日志 |
//! | 入站消息格式错误 | 致命：契约违规 panic，不重试 |

mod assets;
mod config;
mod error;
mod handle;
mod loader;
mod message;
mod pipeline;
mod resolver;
mod spec;

pub use assets::{AssetLookup, DirAssetBundle};
pub use config::ResolverConfig;
pub use error::ResolveError;
pub use handle::OverlayImage;
pub use resolver::{OverlayImageResolver, ResolveDiagnostics};
pub use spec::{OverlayImageMode, OverlayImageSpec};
