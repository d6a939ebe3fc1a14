//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理直接路径与资源路径两种来源的原始字节加载，并在“尽可能早”的阶段
//! 执行输入校验。目标是尽快失败，减少不必要内存与 CPU 消耗。
//!
//! ## 实现思路
//!
//! 固定校验顺序：空路径 → 存在性 → metadata 体积上限 → 读取 → 文件签名。
//! 所有失败都映射到 `ResolveError`，由解析入口统一降级处理。

use std::path::Path;

use super::config::ResolverConfig;
use super::error::ResolveError;
use super::resolver::OverlayImageResolver;
use super::spec::RawImageData;

impl OverlayImageResolver {
    /// 从文件系统路径加载图片原始字节。
    ///
    /// `source_hint` 为来源模式标签，仅用于日志与诊断。
    pub(super) fn load_from_path(
        &self,
        path: &str,
        source_hint: &'static str,
        config: &ResolverConfig,
    ) -> Result<RawImageData, ResolveError> {
        if path.is_empty() {
            return Err(ResolveError::EmptyPath);
        }

        log::debug!("📁 开始读取 overlay 图片 - 来源: {} 路径: {}", source_hint, path);

        let file_path = Path::new(path);
        if !file_path.is_file() {
            return Err(ResolveError::NotFound(path.to_string()));
        }

        let metadata = std::fs::metadata(file_path)
            .map_err(|e| ResolveError::NotFound(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(ResolveError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(file_path)
            .map_err(|e| ResolveError::NotFound(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData { bytes, source_hint })
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), ResolveError> {
        if bytes.is_empty() {
            return Err(ResolveError::Undecodable("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| ResolveError::Undecodable("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(ResolveError::Undecodable(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay_image::test_support::{create_png_bytes, temp_file_path, test_resolver};
    use std::fs;

    #[test]
    fn empty_path_is_rejected_before_touching_filesystem() {
        let resolver = test_resolver();
        let config = ResolverConfig::default();

        let result = resolver.load_from_path("", "temp", &config);

        assert!(matches!(result, Err(ResolveError::EmptyPath)));
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let resolver = test_resolver();
        let config = ResolverConfig::default();
        let path = temp_file_path("loader-missing.png");

        let result = resolver.load_from_path(path.to_str().expect("utf8 path"), "file", &config);

        assert!(matches!(result, Err(ResolveError::NotFound(_))));
    }

    #[test]
    fn oversized_file_maps_to_resource_limit() {
        let resolver = test_resolver();
        let mut config = ResolverConfig::default();
        config.max_file_size = 16;

        let path = temp_file_path("loader-oversized.png");
        fs::write(&path, create_png_bytes(8, 8)).expect("write test image failed");

        let result = resolver.load_from_path(path.to_str().expect("utf8 path"), "file", &config);

        assert!(matches!(result, Err(ResolveError::ResourceLimit(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn non_image_payload_maps_to_undecodable() {
        let resolver = test_resolver();
        let config = ResolverConfig::default();

        let path = temp_file_path("loader-not-an-image.png");
        fs::write(&path, b"<html>definitely not pixels</html>").expect("write test file failed");

        let result = resolver.load_from_path(path.to_str().expect("utf8 path"), "file", &config);

        assert!(matches!(result, Err(ResolveError::Undecodable(_))));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn readable_png_loads_with_source_hint() {
        let resolver = test_resolver();
        let config = ResolverConfig::default();

        let path = temp_file_path("loader-valid.png");
        let png = create_png_bytes(6, 4);
        fs::write(&path, &png).expect("write test image failed");

        let raw = resolver
            .load_from_path(path.to_str().expect("utf8 path"), "widget", &config)
            .expect("load should succeed");

        assert_eq!(raw.bytes, png);
        assert_eq!(raw.source_hint, "widget");

        let _ = fs::remove_file(&path);
    }
}
