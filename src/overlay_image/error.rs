//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载解析链路中的所有失败原因，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让回退构造处可按分支匹配。
//!
//! 所有变体都是“可恢复”的：解析入口统一将其降级为透明占位图并记录诊断日志，
//! 永远不会向调用方抛出。契约违规（消息格式错误）不在此枚举内，见 `message.rs`。

/// overlay 图片解析统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// 路径为空（含 `OverlayImageSpec::none()`）。
    #[error("图片路径为空")]
    EmptyPath,

    /// 路径上不存在可读文件。
    #[error("图片文件不存在或不可读：{0}")]
    NotFound(String),

    /// 资源键未命中任何打包资源。
    #[error("资源键未命中任何打包资源：{0}")]
    AssetNotFound(String),

    /// 字节无法识别或解码为位图。
    #[error("图片解码失败：{0}")]
    Undecodable(String),

    /// 超出体积/像素/内存等资源上限。
    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

impl ResolveError {
    /// 稳定失败码，供诊断日志按字段过滤。
    pub fn reason(&self) -> &'static str {
        match self {
            Self::EmptyPath => "empty-path",
            Self::NotFound(_) => "not-found",
            Self::AssetNotFound(_) => "asset-not-found",
            Self::Undecodable(_) => "undecodable",
            Self::ResourceLimit(_) => "resource-limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(ResolveError::EmptyPath.reason(), "empty-path");
        assert_eq!(ResolveError::NotFound("x".into()).reason(), "not-found");
        assert_eq!(
            ResolveError::AssetNotFound("x".into()).reason(),
            "asset-not-found"
        );
        assert_eq!(ResolveError::Undecodable("x".into()).reason(), "undecodable");
        assert_eq!(
            ResolveError::ResourceLimit("x".into()).reason(),
            "resource-limit"
        );
    }
}
