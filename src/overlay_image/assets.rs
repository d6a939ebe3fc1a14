//! # 资源查找（可注入能力）
//!
//! ## 设计思路
//!
//! `asset` 模式的路径不是文件系统路径，而是一个逻辑资源键，
//! 键到路径的转换由宿主的插件注册组件持有。这里不绑定任何具体宿主，
//! 而是以 `AssetLookup` 能力注入，替代全局单例：
//! 1. 生命周期清晰（由宿主在构造解析器时统一提供）
//! 2. 测试可用闭包直接伪造查找结果，无需真实资源包
//! 3. 后续可扩展多级键转换（逻辑键 → 注册键 → 包内路径）
//!
//! ## 实现思路
//!
//! - trait 仅一个方法：逻辑键 → 解析后的路径，未命中返回 `None`。
//! - 为闭包提供覆盖实现，让“函数即能力”的注入方式开箱可用。
//! - `DirAssetBundle` 是最常见的目录式资源包实现，带存在性检查。

use std::path::{Path, PathBuf};

/// 逻辑资源键到文件系统路径的查找能力。
///
/// 未命中（键不存在、文件缺失）一律返回 `None`，
/// 由解析器统一降级为透明占位图。
pub trait AssetLookup: Send + Sync {
    fn lookup(&self, logical_key: &str) -> Option<PathBuf>;
}

impl<F> AssetLookup for F
where
    F: Fn(&str) -> Option<PathBuf> + Send + Sync,
{
    fn lookup(&self, logical_key: &str) -> Option<PathBuf> {
        self(logical_key)
    }
}

/// 目录式资源包：将逻辑键按相对路径拼接到资源根目录下。
///
/// 仅当拼接结果指向一个真实存在的文件时才算命中。
#[derive(Debug, Clone)]
pub struct DirAssetBundle {
    root: PathBuf,
}

impl DirAssetBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 资源根目录。
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLookup for DirAssetBundle {
    fn lookup(&self, logical_key: &str) -> Option<PathBuf> {
        if logical_key.is_empty() {
            return None;
        }

        let candidate = self.root.join(logical_key);
        if candidate.is_file() {
            Some(candidate)
        } else {
            None
        }
    }
}
