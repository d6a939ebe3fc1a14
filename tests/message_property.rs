//! 消息编解码的性质测试：任意路径 × 全部模式标签的往返恒等。

use map_overlay_image::{OverlayImageMode, OverlayImageSpec};
use proptest::prelude::*;
use serde_json::Value;

fn any_mode() -> impl Strategy<Value = OverlayImageMode> {
    prop_oneof![
        Just(OverlayImageMode::File),
        Just(OverlayImageMode::Temp),
        Just(OverlayImageMode::Widget),
        Just(OverlayImageMode::Asset),
    ]
}

proptest! {
    #[test]
    fn message_roundtrip_identity(path in ".*", mode in any_mode()) {
        let spec = OverlayImageSpec::new(path, mode);

        let message = Value::Object(spec.to_message());
        let restored = OverlayImageSpec::from_message(&message);

        prop_assert_eq!(restored, spec);
    }

    #[test]
    fn mode_tag_roundtrip_identity(mode in any_mode()) {
        prop_assert_eq!(OverlayImageMode::from_str(mode.as_str()), Some(mode));
    }
}
