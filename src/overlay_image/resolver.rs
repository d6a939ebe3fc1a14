//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `OverlayImageResolver` 只负责流程编排与配置管理，不绑定任何宿主运行时。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 按模式标签分派（`file` / `temp` / `widget` 共享直接读盘分支，
//!    `asset` 先经注入的资源查找器转换）
//! 3. 加载原始字节并校验
//! 4. 解码并按设备密度重编码
//!
//! 解析入口永不失败：任何失败都降级为透明 1×1 占位句柄，
//! 并输出一条带完整上下文的诊断日志。坏图只会让 marker 不可见，
//! 不会让地图崩溃。
//!
//! ## 实现思路
//!
//! - 配置通过 `Arc<RwLock<ResolverConfig>>` 支持运行时动态调整。
//! - 单次请求内使用“同一配置快照”，避免处理中途配置漂移。
//! - 记录 `load/decode/total` 阶段耗时，便于性能诊断。
//! - 诊断上下文（失败码、模式、路径、存在性、体积）以结构化 JSON 落日志。

use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use super::assets::AssetLookup;
use super::config::ResolverConfig;
use super::error::ResolveError;
use super::handle::OverlayImage;
use super::spec::{OverlayImageMode, OverlayImageSpec};

/// overlay 图片解析器。
///
/// 封装了配置状态与注入的资源查找能力，并编排各子模块实现完整流程。
pub struct OverlayImageResolver {
    config: Arc<RwLock<ResolverConfig>>,
    assets: Box<dyn AssetLookup>,
}

/// 解析失败时采集的诊断上下文。
///
/// `file_size` 在无法读取时为哨兵值 `-1`。
#[derive(Debug, Clone, serde::Serialize)]
pub struct ResolveDiagnostics {
    /// 稳定失败码（`empty-path` / `not-found` / ...）。
    pub reason: &'static str,
    /// 失败详情（人类可读）。
    pub detail: String,
    /// 来源模式标签。
    pub mode: &'static str,
    /// 调用方提供的原始路径（`asset` 模式下为逻辑键）。
    pub path: String,
    /// 原始路径上是否存在文件。
    pub file_exists: bool,
    /// 原始路径上文件的字节数，不可确定时为 -1。
    pub file_size: i64,
}

impl ResolveDiagnostics {
    /// 采集一次失败的诊断上下文。
    pub(super) fn collect(spec: &OverlayImageSpec, error: &ResolveError) -> Self {
        let file_exists = !spec.path.is_empty() && Path::new(&spec.path).is_file();
        let file_size = std::fs::metadata(&spec.path)
            .map(|metadata| metadata.len() as i64)
            .unwrap_or(-1);

        Self {
            reason: error.reason(),
            detail: error.to_string(),
            mode: spec.mode.as_str(),
            path: spec.path.clone(),
            file_exists,
            file_size,
        }
    }
}

impl OverlayImageResolver {
    /// 根据配置与资源查找能力创建解析器。
    ///
    /// 设备像素密度来自 `config.display_scale`，由宿主的显示工具注入；
    /// `assets` 是 `asset` 模式的键转换能力，由宿主的插件注册组件注入。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use map_overlay_image::overlay_image::{OverlayImageResolver, ResolverConfig, DirAssetBundle};
    ///
    /// let resolver = OverlayImageResolver::new(
    ///     ResolverConfig::with_display_scale(3.0),
    ///     DirAssetBundle::new("/app/flutter_assets"),
    /// );
    /// ```
    pub fn new(config: ResolverConfig, assets: impl AssetLookup + 'static) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            assets: Box::new(assets),
        }
    }

    /// 获取配置快照。
    ///
    /// 作用：保证单次请求链路使用一致参数。
    pub(super) fn config_snapshot(&self) -> Result<ResolverConfig, ResolveError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|_| ResolveError::ResourceLimit("配置读取锁已中毒".to_string()))
    }

    /// 运行时更新设备像素密度。
    pub fn set_display_scale(&self, display_scale: f64) -> Result<(), ResolveError> {
        if !display_scale.is_finite() || display_scale <= 0.0 {
            return Err(ResolveError::ResourceLimit(format!(
                "display_scale 必须为正数：{}",
                display_scale
            )));
        }

        let mut config = self
            .config
            .write()
            .map_err(|_| ResolveError::ResourceLimit("配置写入锁已中毒".to_string()))?;
        config.display_scale = display_scale;

        log::info!("⚙️ 已更新设备像素密度：{}", display_scale);
        Ok(())
    }

    /// 当前生效的设备像素密度。
    pub fn display_scale(&self) -> f64 {
        self.config_snapshot()
            .map(|config| config.display_scale)
            .unwrap_or(ResolverConfig::default().display_scale)
    }

    /// 解析主入口：将来源描述解析为地图 SDK 可消费的图片句柄。
    ///
    /// 永不失败。失败路径返回透明 1×1 占位句柄并记录诊断日志，
    /// 保证 SDK 不会收到空句柄（SDK 对空句柄没有定义行为）。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use map_overlay_image::overlay_image::{OverlayImageMode, OverlayImageSpec};
    ///
    /// let spec = OverlayImageSpec::new("/tmp/marker.png", OverlayImageMode::File);
    /// let handle = resolver.resolve(&spec);
    /// assert!(handle.width >= 1);
    /// ```
    pub fn resolve(&self, spec: &OverlayImageSpec) -> OverlayImage {
        let config = match self.config_snapshot() {
            Ok(config) => config,
            Err(err) => {
                self.log_fallback(spec, &err);
                return OverlayImage::transparent_pixel(ResolverConfig::default().display_scale);
            }
        };

        match self.try_resolve(spec, &config) {
            Ok(handle) => handle,
            Err(err) => {
                self.log_fallback(spec, &err);
                OverlayImage::transparent_pixel(config.display_scale)
            }
        }
    }

    /// 按模式标签执行完整解析链路。
    fn try_resolve(
        &self,
        spec: &OverlayImageSpec,
        config: &ResolverConfig,
    ) -> Result<OverlayImage, ResolveError> {
        let total_start = Instant::now();

        let (resolved_path, reuse_identifier) = match spec.mode {
            OverlayImageMode::File | OverlayImageMode::Temp | OverlayImageMode::Widget => {
                (spec.path.clone(), None)
            }
            OverlayImageMode::Asset => {
                let resolved = self
                    .assets
                    .lookup(&spec.path)
                    .ok_or_else(|| ResolveError::AssetNotFound(spec.path.clone()))?;
                let resolved = resolved.to_string_lossy().into_owned();
                (resolved.clone(), Some(resolved))
            }
        };

        let load_start = Instant::now();
        let raw = self.load_from_path(&resolved_path, spec.mode.as_str(), config)?;
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let bitmap = self.decode_and_reencode(raw, config)?;
        let decode_elapsed = decode_start.elapsed();

        log::info!(
            "✅ overlay 图片解析完成 - mode={} scale={} load={}ms decode={}ms total={}ms",
            spec.mode.as_str(),
            config.display_scale,
            load_elapsed.as_millis(),
            decode_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(OverlayImage::from_bitmap(
            bitmap,
            config.display_scale,
            reuse_identifier,
        ))
    }

    /// 输出回退诊断日志（结构化 JSON）。
    fn log_fallback(&self, spec: &OverlayImageSpec, error: &ResolveError) {
        let diagnostics = ResolveDiagnostics::collect(spec, error);
        let payload = serde_json::to_string(&diagnostics)
            .unwrap_or_else(|_| format!("{:?}", diagnostics));

        log::warn!("⚠️ overlay 图片解析失败，已回退为透明占位图 - {}", payload);
    }
}
