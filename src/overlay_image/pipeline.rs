//! # 解码与重编码流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 位图 → 按密度打标的 PNG”的过程集中管理，并在关键节点增加
//! 资源上限控制。优先做尺寸检查，再进行完整解码，降低恶意输入触发
//! 高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 猜测格式并读取 header 尺寸
//! 2. 按像素/内存上限快速拒绝
//! 3. 完整解码
//! 4. 转换 RGBA，并校验字节长度一致性
//! 5. 原样重编码为 PNG（不缩放、不旋转，像素与方向完全保留）

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;

use super::config::ResolverConfig;
use super::error::ResolveError;
use super::resolver::OverlayImageResolver;
use super::spec::{RawImageData, ScaledOverlayBitmap};

impl OverlayImageResolver {
    /// 将原始字节解码并重编码为按设备密度打标的 PNG 位图。
    pub(super) fn decode_and_reencode(
        &self,
        raw: RawImageData,
        config: &ResolverConfig,
    ) -> Result<ScaledOverlayBitmap, ResolveError> {
        let _format: ImageFormat = image::guess_format(&raw.bytes)
            .map_err(|e| ResolveError::Undecodable(format!("不支持的图片格式：{}", e)))?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&raw.bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;
        Self::validate_decoded_memory_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&raw.bytes)
            .map_err(|e| ResolveError::Undecodable(format!("图片解码失败：{}", e)))?;

        let (width, height) = decoded.dimensions();
        Self::validate_pixel_limits(config, width, height)?;
        Self::validate_decoded_memory_limits(config, width, height)?;

        let rgba = decoded.to_rgba8();
        let bytes_len = rgba.as_raw().len();

        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ResolveError::ResourceLimit("图片尺寸导致内存溢出风险".to_string()))?;

        if bytes_len != expected_len {
            return Err(ResolveError::Undecodable("解码后像素数据长度异常".to_string()));
        }

        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(rgba)
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| ResolveError::Undecodable(format!("PNG 重编码失败：{}", e)))?;
        let png_data = cursor.into_inner();

        log::debug!(
            "🧩 overlay 图片解码成功 - 来源: {} 尺寸: {}x{} 输出: {}KB",
            raw.source_hint,
            width,
            height,
            png_data.len() / 1024
        );

        Ok(ScaledOverlayBitmap {
            width,
            height,
            png_data,
        })
    }

    /// 仅通过内存中的图片头信息读取宽高。
    ///
    /// 用于在完整解码前做像素限制检查。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), ResolveError> {
        let cursor = Cursor::new(bytes);
        let reader = ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| ResolveError::Undecodable(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| ResolveError::Undecodable(format!("无法读取图片尺寸：{}", e)))
    }

    /// 校验像素数量是否超过配置上限。
    fn validate_pixel_limits(
        config: &ResolverConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ResolveError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| ResolveError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(ResolveError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }

    fn validate_decoded_memory_limits(
        config: &ResolverConfig,
        width: u32,
        height: u32,
    ) -> Result<(), ResolveError> {
        let estimated = (width as u64)
            .checked_mul(height as u64)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| ResolveError::ResourceLimit("图片解码内存估算溢出".to_string()))?;

        if estimated > config.max_decoded_bytes {
            return Err(ResolveError::ResourceLimit(format!(
                "图片解码预计内存过大：{:.2} MB（限制：{:.2} MB）",
                estimated as f64 / 1024.0 / 1024.0,
                config.max_decoded_bytes as f64 / 1024.0 / 1024.0
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay_image::test_support::{create_png_bytes, test_resolver};

    #[test]
    fn decode_preserves_dimensions_and_pixel_content() {
        let resolver = test_resolver();
        let config = ResolverConfig::default();
        let png = create_png_bytes(31, 17);

        let source_pixels = image::load_from_memory(&png)
            .expect("decode source failed")
            .to_rgba8();

        let bitmap = resolver
            .decode_and_reencode(
                RawImageData {
                    bytes: png,
                    source_hint: "test",
                },
                &config,
            )
            .expect("pipeline should succeed");

        assert_eq!(bitmap.width, 31);
        assert_eq!(bitmap.height, 17);

        let reencoded_pixels = image::load_from_memory(&bitmap.png_data)
            .expect("decode reencoded failed")
            .to_rgba8();
        assert_eq!(reencoded_pixels.as_raw(), source_pixels.as_raw());
    }

    #[test]
    fn rejects_too_many_pixels_before_full_decode() {
        let resolver = test_resolver();
        let mut config = ResolverConfig::default();
        config.max_decoded_pixels = 100;

        let result = resolver.decode_and_reencode(
            RawImageData {
                bytes: create_png_bytes(64, 64),
                source_hint: "test",
            },
            &config,
        );

        assert!(matches!(result, Err(ResolveError::ResourceLimit(_))));
    }

    #[test]
    fn rejects_estimated_memory_over_limit() {
        let resolver = test_resolver();
        let mut config = ResolverConfig::default();
        config.max_decoded_bytes = 1024;

        let result = resolver.decode_and_reencode(
            RawImageData {
                bytes: create_png_bytes(64, 64),
                source_hint: "test",
            },
            &config,
        );

        assert!(matches!(result, Err(ResolveError::ResourceLimit(_))));
    }

    #[test]
    fn corrupted_bytes_map_to_undecodable() {
        let resolver = test_resolver();
        let config = ResolverConfig::default();

        let mut png = create_png_bytes(8, 8);
        png.truncate(20);

        let result = resolver.decode_and_reencode(
            RawImageData {
                bytes: png,
                source_hint: "test",
            },
            &config,
        );

        assert!(matches!(result, Err(ResolveError::Undecodable(_))));
    }
}
