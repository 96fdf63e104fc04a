//! JSON serialization through serde
//!
//! Colors are arrays of component values in slot order.

use oxtint_core::{Ab, LAf, RGBAb, RGBAf, RGBb};
use serde::{Deserialize, Serialize};

#[test]
fn test_serialize_as_component_arrays() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&RGBAb::mauve())?, "[224,176,255,255]");
    assert_eq!(serde_json::to_string(&Ab::transparent())?, "[0]");
    assert_eq!(serde_json::to_string(&LAf::new(0.25, 1.0)?)?, "[0.25,1.0]");
    Ok(())
}

#[test]
fn test_round_trip() -> anyhow::Result<()> {
    for c in tint_tests::patterns::named_colors() {
        let json = serde_json::to_string(&c)?;
        assert_eq!(serde_json::from_str::<RGBAb>(&json)?, c);

        let f = RGBAf::convert_from(c);
        assert_eq!(serde_json::from_str::<RGBAf>(&serde_json::to_string(&f)?)?, f);
    }
    Ok(())
}

#[test]
fn test_rejects_out_of_range_components() {
    tint_tests::init_tracing();

    let err = serde_json::from_str::<LAf>("[0.5, 1.5]").unwrap_err();
    assert!(err.to_string().contains("alpha"), "{err}");
    assert!(err.to_string().contains("serialize.rs"), "{err}");

    // 256 does not fit u8 at all
    assert!(serde_json::from_str::<RGBb>("[256, 0, 0]").is_err());
}

#[test]
fn test_rejects_wrong_component_count() {
    let err = serde_json::from_str::<RGBb>("[1, 2]").unwrap_err();
    assert!(err.to_string().contains("expected 3"), "{err}");
    assert!(serde_json::from_str::<Ab>("[1, 2]").is_err());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Swatch {
    name: String,
    fill: RGBAb,
    stroke: LAf,
}

#[test]
fn test_nested_in_structs() -> anyhow::Result<()> {
    let swatch = Swatch {
        name: "mauve".into(),
        fill: RGBAb::mauve(),
        stroke: LAf::white(),
    };
    let json = serde_json::to_string(&swatch)?;
    assert_eq!(
        json,
        r#"{"name":"mauve","fill":[224,176,255,255],"stroke":[1.0,1.0]}"#
    );
    assert_eq!(serde_json::from_str::<Swatch>(&json)?, swatch);
    Ok(())
}
