//! # 地图 overlay 图片解析 — 库入口
//!
//! ## 架构总览
//!
//! 本库是地图插件中“图片解析”这一个单元：给定一个带模式标签的来源描述
//! （文件路径 / 临时渲染 / Widget 截图 / 打包资源键），加载对应位图、
//! 按设备像素密度归一化，产出原生地图 SDK 可消费的图片句柄；
//! 以及反向的键值消息（反）序列化。
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  宿主插件运行时（外部协作方）               │
//! │                                                          │
//! │  消息通道 ── 插件注册（资源键转换）── 显示工具（像素密度）  │
//! └───────┬──────────────┬────────────────┬──────────────────┘
//!         ↕ serde_json 消息  ↓ AssetLookup 注入  ↓ display_scale 注入
//! ┌───────┼──────────────┼────────────────┼──────────────────┐
//! │       ↕              ↓                ↓   本库 (Rust)     │
//! │                                                          │
//! │  overlay_image                                           │
//! │    ├─ message   消息契约（良构 → Spec；畸形 → panic）      │
//! │    ├─ resolver  模式分派 + 失败回退 + 诊断日志             │
//! │    ├─ loader    读盘 + 签名/体积校验                      │
//! │    ├─ pipeline  解码 + 像素限制 + PNG 重编码              │
//! │    └─ handle    OverlayImage（透明 1×1 占位兜底）         │
//! └──────────────────────────┬───────────────────────────────┘
//!                            ↓ OverlayImage 句柄
//!                    原生地图 SDK（外部协作方）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`overlay_image`] | 来源描述模型、消息编解码、图片解析流水线与回退 |
//!
//! ## 失败语义
//!
//! 坏图永远不会让地图崩溃：加载/解码类失败一律降级为完全透明的
//! 1×1 占位句柄并记录结构化诊断日志；只有跨边界消息格式错误
//! （插件两侧协议不同步）按契约违规 panic。

pub mod overlay_image;

pub use overlay_image::{
    AssetLookup, DirAssetBundle, OverlayImage, OverlayImageMode, OverlayImageResolver,
    OverlayImageSpec, ResolveDiagnostics, ResolveError, ResolverConfig,
};
