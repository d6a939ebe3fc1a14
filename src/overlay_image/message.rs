//! # 跨边界消息编解码
//!
//! ## 设计思路
//!
//! 来源描述通过插件消息通道以键值对形式传输：
//! `{"path": <string>, "mode": "file"|"temp"|"widget"|"asset"}`。
//! 序列化是全函数，无失败分支；反序列化是部分函数：
//! 消息格式错误意味着插件两侧的协议已不同步，属于开发期缺陷，
//! 按契约违规直接 panic，不做降级（与图片加载失败的优雅回退相反）。
//!
//! ## 实现思路
//!
//! 载荷类型使用 `serde_json::Value` / `Map`，与宿主边界的其余消息保持一致，
//! 上游的消息解码层保证良构性，这里只做契约断言。

use serde_json::{Map, Value};

use super::spec::{OverlayImageMode, OverlayImageSpec};

impl OverlayImageSpec {
    /// 序列化为跨边界键值消息。纯函数，无失败分支。
    pub fn to_message(&self) -> Map<String, Value> {
        let mut message = Map::new();
        message.insert("path".to_string(), Value::String(self.path.clone()));
        message.insert(
            "mode".to_string(),
            Value::String(self.mode.as_str().to_string()),
        );
        message
    }

    /// 从跨边界消息构造来源描述。
    ///
    /// # Panics
    ///
    /// 消息不是对象、缺少字符串字段 `path` / `mode`、
    /// 或 `mode` 不是四个已知标签之一时 panic（契约违规）。
    pub fn from_message(raw: &Value) -> Self {
        let map = raw
            .as_object()
            .unwrap_or_else(|| panic!("overlay 图片消息必须是对象：{}", raw));

        let path = map
            .get("path")
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("overlay 图片消息缺少字符串字段 path：{}", raw));

        let mode_tag = map
            .get("mode")
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("overlay 图片消息缺少字符串字段 mode：{}", raw));

        let mode = OverlayImageMode::from_str(mode_tag).unwrap_or_else(|| {
            panic!(
                "未知的 overlay 图片模式标签：{}（可选：file / temp / widget / asset）",
                mode_tag
            )
        });

        Self {
            path: path.to_string(),
            mode,
        }
    }
}
