use popup_placement::{Placement, PlacementError};

const ALL: [Placement; 12] = [
    Placement::Top,
    Placement::TopStart,
    Placement::TopEnd,
    Placement::Bottom,
    Placement::BottomStart,
    Placement::BottomEnd,
    Placement::Left,
    Placement::LeftStart,
    Placement::LeftEnd,
    Placement::Right,
    Placement::RightStart,
    Placement::RightEnd,
];

#[test]
fn test_x_transform() {
    assert_eq!(Placement::Top.x_transform(false), -0.5);
    assert_eq!(Placement::Bottom.x_transform(false), -0.5);
    assert_eq!(Placement::TopStart.x_transform(false), 0.0);
    assert_eq!(Placement::TopEnd.x_transform(false), -1.0);
    assert_eq!(Placement::BottomStart.x_transform(false), 0.0);
    assert_eq!(Placement::BottomEnd.x_transform(false), -1.0);
    assert_eq!(Placement::Left.x_transform(false), -1.0);
    assert_eq!(Placement::LeftStart.x_transform(false), -1.0);
    assert_eq!(Placement::LeftEnd.x_transform(false), -1.0);
    assert_eq!(Placement::Right.x_transform(false), 0.0);
    assert_eq!(Placement::RightStart.x_transform(false), 0.0);
    assert_eq!(Placement::RightEnd.x_transform(false), 0.0);
}

#[test]
fn test_x_transform_rtl() {
    // left/right mirror as a whole, start/end mirror for top/bottom.
    assert_eq!(Placement::Left.x_transform(true), 0.0);
    assert_eq!(Placement::LeftStart.x_transform(true), 0.0);
    assert_eq!(Placement::LeftEnd.x_transform(true), 0.0);
    assert_eq!(Placement::Right.x_transform(true), -1.0);
    assert_eq!(Placement::RightStart.x_transform(true), -1.0);
    assert_eq!(Placement::RightEnd.x_transform(true), -1.0);
    assert_eq!(Placement::TopStart.x_transform(true), -1.0);
    assert_eq!(Placement::BottomStart.x_transform(true), -1.0);
    assert_eq!(Placement::TopEnd.x_transform(true), 0.0);
    assert_eq!(Placement::BottomEnd.x_transform(true), 0.0);
    assert_eq!(Placement::Top.x_transform(true), -0.5);
    assert_eq!(Placement::Bottom.x_transform(true), -0.5);
}

#[test]
fn test_y_transform() {
    assert_eq!(Placement::Top.y_transform(), Some(-1.0));
    assert_eq!(Placement::TopStart.y_transform(), Some(-1.0));
    assert_eq!(Placement::TopEnd.y_transform(), Some(-1.0));
    assert_eq!(Placement::LeftEnd.y_transform(), Some(-1.0));
    assert_eq!(Placement::RightEnd.y_transform(), Some(-1.0));
    assert_eq!(Placement::Left.y_transform(), Some(-0.5));
    assert_eq!(Placement::Right.y_transform(), Some(-0.5));
    assert_eq!(Placement::Bottom.y_transform(), None);
    assert_eq!(Placement::BottomStart.y_transform(), None);
    assert_eq!(Placement::BottomEnd.y_transform(), None);
    assert_eq!(Placement::LeftStart.y_transform(), None);
    assert_eq!(Placement::RightStart.y_transform(), None);
}

#[test]
fn test_transform_domain() {
    for p in ALL {
        for rtl in [false, true] {
            let x = p.x_transform(rtl);
            assert!(x == -1.0 || x == -0.5 || x == 0.0);
            let y = p.y_transform();
            assert!(y == Some(-1.0) || y == Some(-0.5) || y == None);
        }
    }
}

#[test]
fn test_transform_string() {
    assert_eq!(Placement::Top.transform(false), "translate(-50%, -100%)");
    assert_eq!(Placement::TopStart.transform(false), "translate(0%, -100%)");
    assert_eq!(Placement::Bottom.transform(false), "translate(-50%, 0%)");
    assert_eq!(
        Placement::BottomEnd.transform(false),
        "translate(-100%, 0%)"
    );
    assert_eq!(Placement::Left.transform(false), "translate(-100%, -50%)");
    assert_eq!(
        Placement::LeftStart.transform(false),
        "translate(-100%, 0%)"
    );
    assert_eq!(Placement::Right.transform(false), "translate(0%, -50%)");
    assert_eq!(Placement::RightEnd.transform(false), "translate(0%, -100%)");
}

#[test]
fn test_transform_noop() {
    // nothing to shift, no transform emitted.
    assert_eq!(Placement::BottomStart.transform(false), "");
    assert_eq!(Placement::RightStart.transform(false), "");
    assert_eq!(Placement::BottomEnd.transform(true), "");
    assert_eq!(Placement::RightStart.transform(true), "translate(-100%, 0%)");

    for p in ALL {
        for rtl in [false, true] {
            let empty = p.x_transform(rtl) == 0.0 && p.y_transform().is_none();
            assert_eq!(p.transform(rtl).is_empty(), empty, "{} rtl={}", p, rtl);
        }
    }
}

#[test]
fn test_names() {
    assert_eq!(Placement::BottomStart.to_string(), "bottom-start");
    assert_eq!(Placement::Left.to_string(), "left");
    assert_eq!("right-end".parse::<Placement>(), Ok(Placement::RightEnd));

    for p in ALL {
        assert_eq!(p.to_string().parse::<Placement>(), Ok(p));
    }
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        "bottom-left".parse::<Placement>(),
        Err(PlacementError::InvalidPlacement("bottom-left".into()))
    );
    assert!("Top".parse::<Placement>().is_err());
    assert!("".parse::<Placement>().is_err());
    assert!("bottom-start ".parse::<Placement>().is_err());
}

#[test]
fn test_default() {
    assert_eq!(Placement::default(), Placement::Bottom);
}
