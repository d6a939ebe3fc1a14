//! # 地图 SDK 图片句柄
//!
//! ## 设计思路
//!
//! `OverlayImage` 是解析流程的最终产物，也是地图 SDK 消费的值：
//! 重编码后的 PNG 字节、尺寸、设备像素密度标记，以及 `asset` 模式特有的
//! 复用标识。SDK 对空句柄没有定义行为，所以这里额外提供一个
//! “完全透明 1×1 像素”的占位构造，保证失败路径也能产出合法句柄。
//!
//! ## 实现思路
//!
//! 占位像素以内嵌 PNG 常量实现，构造过程无任何失败分支。
//! 密度仅作为元数据附着在句柄上，PNG 字节本身不变，
//! 与“以指定 scale 重新打标的位图”语义一致。

use super::spec::ScaledOverlayBitmap;

/// 内嵌的 1×1 完全透明 PNG，失败回退的占位内容。
pub(crate) const TRANSPARENT_PIXEL_PNG: &[u8] =
    include_bytes!("../../icons/transparent-1x1.png");

/// 地图 SDK 的 overlay 图片句柄。
///
/// 本组件只负责构造句柄，SDK 的渲染管线如何消费它不在此范围内。
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayImage {
    /// 图像宽度（像素）。
    pub width: u32,
    /// 图像高度（像素）。
    pub height: u32,
    /// 重编码后的 PNG 字节，像素内容与方向与原图一致。
    pub png_data: Vec<u8>,
    /// 设备像素密度标记（物理像素 / 逻辑点）。
    pub scale: f64,
    /// SDK 用于去重相同位图上传的复用标识；
    /// 仅 `asset` 模式成功解析时为解析后的文件路径，其余为 `None`。
    pub reuse_identifier: Option<String>,
}

impl OverlayImage {
    /// 由流水线产物构造句柄。
    pub(crate) fn from_bitmap(
        bitmap: ScaledOverlayBitmap,
        scale: f64,
        reuse_identifier: Option<String>,
    ) -> Self {
        Self {
            width: bitmap.width,
            height: bitmap.height,
            png_data: bitmap.png_data,
            scale,
            reuse_identifier,
        }
    }

    /// 构造失败回退句柄：完全透明的 1×1 像素。
    ///
    /// 视觉上不可见，但对 SDK 而言是合法图片，地图不会因坏图崩溃。
    pub fn transparent_pixel(scale: f64) -> Self {
        Self {
            width: 1,
            height: 1,
            png_data: TRANSPARENT_PIXEL_PNG.to_vec(),
            scale,
            reuse_identifier: None,
        }
    }

    /// 判断句柄是否为失败回退产物。
    pub fn is_transparent_fallback(&self) -> bool {
        self.png_data == TRANSPARENT_PIXEL_PNG
    }
}
