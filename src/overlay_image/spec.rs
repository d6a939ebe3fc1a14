//! # 数据模型与中间产物
//!
//! ## 设计思路
//!
//! 将“外部输入描述”和“流水线中间结果”解耦：
//! - `OverlayImageSpec` 表示跨边界传入的图片来源描述（路径 + 模式标签）
//! - `RawImageData` 表示已加载但未解码的字节
//! - `ScaledOverlayBitmap` 表示已按设备像素密度重编码的 PNG 数据
//!
//! ## 实现思路
//!
//! 模式标签是封闭集合，`file` / `temp` / `widget` 三种语义标签共享同一条
//! 直接读盘分支，`asset` 额外经过资源键转换。标签与字符串的互转保持稳定，
//! 供消息编解码与日志使用。

/// overlay 图片来源模式。
///
/// `File` / `Temp` / `Widget` 仅是调用方语义上的来源区分，
/// 解析行为完全一致；`Asset` 需要先经注入的资源查找器转换为文件路径。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayImageMode {
    /// 原始文件路径。
    File,
    /// 临时渲染产物路径。
    Temp,
    /// Widget 截图产物路径。
    Widget,
    /// 打包资源的逻辑键。
    Asset,
}

impl OverlayImageMode {
    /// 从外部字符串解析模式标签。
    ///
    /// 未知标签返回 `None`，由调用方决定失败语义
    /// （消息边界将其视为契约违规，见 `message.rs`）。
    pub fn from_str(mode: &str) -> Option<Self> {
        match mode {
            "file" => Some(Self::File),
            "temp" => Some(Self::Temp),
            "widget" => Some(Self::Widget),
            "asset" => Some(Self::Asset),
            _ => None,
        }
    }

    /// 将模式输出为稳定字符串，供消息序列化与诊断日志使用。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Temp => "temp",
            Self::Widget => "widget",
            Self::Asset => "asset",
        }
    }
}

/// overlay 图片来源描述。
///
/// 不可变值对象：每次解析请求从入站消息新建一份，消费一次后即丢弃，
/// 不携带字段之外的任何身份。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayImageSpec {
    /// 文件系统路径；`Asset` 模式下为逻辑资源键。
    pub path: String,
    /// 路径的解释方式。
    pub mode: OverlayImageMode,
}

impl OverlayImageSpec {
    pub fn new(path: impl Into<String>, mode: OverlayImageMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    /// “未提供图片”的约定值（空路径 + `Temp` 模式）。
    pub fn none() -> Self {
        Self {
            path: String::new(),
            mode: OverlayImageMode::Temp,
        }
    }

    /// 判断是否为“未提供图片”。
    pub fn is_none(&self) -> bool {
        self.path.is_empty() && self.mode == OverlayImageMode::Temp
    }
}

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}

/// 解码阶段输出：已重编码为 PNG 的位图数据。
pub(crate) struct ScaledOverlayBitmap {
    /// 图像宽度（像素）。
    pub(crate) width: u32,
    /// 图像高度（像素）。
    pub(crate) height: u32,
    /// PNG 字节，像素内容与方向与原图完全一致。
    pub(crate) png_data: Vec<u8>,
}
