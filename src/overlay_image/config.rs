//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `ResolverConfig`，保证运行时行为可观测、可调整、可测试。
//! 设备像素密度由宿主的显示工具在构造时注入，而非从全局状态读取，
//! 使解析器在没有真实显示设备的环境下也可测试。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用的保守配置（1.0 倍密度 + 资源上限）。
//! - `with_display_scale` 是宿主注入密度时的推荐入口。
//! - 资源上限用于在解码前快速拒绝恶意或异常输入，违限走统一回退路径。

/// overlay 图片解析配置。
///
/// 字段覆盖了密度标记与读取、解码两个阶段的资源上限。
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// 设备像素密度（物理像素 / 逻辑点），重编码产物以此标记，
    /// 保证地图 SDK 按正确物理尺寸渲染。
    pub display_scale: f64,
    /// 读取原始字节时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
    /// 解码阶段允许的预计内存上限（按 RGBA 估算，字节）。
    pub max_decoded_bytes: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            display_scale: 1.0,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
            max_decoded_bytes: 160 * 1024 * 1024,
        }
    }
}

impl ResolverConfig {
    /// 以宿主提供的设备像素密度构造配置，其余参数取默认值。
    pub fn with_display_scale(display_scale: f64) -> Self {
        Self {
            display_scale,
            ..Self::default()
        }
    }
}
