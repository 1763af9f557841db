//! Integration tests for the Folio desktop
//!
//! These tests drive the public API the way a host UI would:
//! - Window lifecycle through the dock and discrete input events
//! - Drag gestures and bounds clamping on a phone-sized container
//! - Stacking order and the menu bar
//! - Pointer routing over window chrome
//! - Change notifications for the presentation layer

use folio_desktop::{
    catalog, Desktop, DesktopConfig, DesktopError, DockAction, DockIndicator, InputEvent, Size, SizeRule, Vec2,
    WindowDescriptor, WindowEvent, WindowId, WindowManager, WindowRegion,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn phone() -> Size {
    Size::new(390.0, 844.0)
}

fn square_windows() -> Vec<WindowDescriptor> {
    ["a", "b", "c"]
        .into_iter()
        .map(|id| WindowDescriptor::new(id, id, "square", SizeRule::Fixed(Size::new(280.0, 270.0))))
        .collect()
}

fn manager() -> WindowManager {
    init_tracing();
    let mut wm = WindowManager::new(DesktopConfig::default(), square_windows()).unwrap();
    wm.initialize(phone());
    wm
}

fn desktop() -> Desktop {
    init_tracing();
    let mut desktop = Desktop::portfolio().unwrap();
    desktop.init(phone());
    desktop
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_dock_driven_lifecycle() {
    let mut desktop = desktop();

    assert_eq!(desktop.tap_dock("skills"), DockAction::Opened);
    let skills = desktop.windows.get("skills").unwrap();
    assert!(skills.is_normal());

    desktop.windows.toggle_fullscreen("skills");
    assert!(desktop.windows.get("skills").unwrap().is_fullscreen());
    assert_eq!(desktop.windows.frame("skills").unwrap().size(), phone());

    assert_eq!(desktop.tap_dock("skills"), DockAction::Minimized);
    let skills = desktop.windows.get("skills").unwrap();
    assert!(skills.is_minimized());
    assert!(!skills.is_fullscreen());

    assert_eq!(desktop.tap_dock("skills"), DockAction::Restored);
    assert!(desktop.windows.get("skills").unwrap().is_normal());

    desktop.windows.close("skills");
    let item = desktop.dock().into_iter().find(|i| i.id == "skills").unwrap();
    assert_eq!(item.indicator, DockIndicator::Closed);
}

#[test]
fn test_close_then_reopen_recenters() {
    let mut wm = manager();
    wm.open("b");
    let centered = wm.get("b").unwrap().position;

    wm.begin_drag("b");
    wm.end_drag("b", Vec2::new(-500.0, -500.0), phone());
    assert_eq!(wm.get("b").unwrap().position, Vec2::new(0.0, 36.0));

    wm.close("b");
    wm.open("b");
    assert_eq!(wm.get("b").unwrap().position, centered);
}

#[test]
fn test_registry_validation() {
    let mut list = square_windows();
    list.push(WindowDescriptor::new("", "Empty", "square", SizeRule::Fixed(Size::new(10.0, 10.0))));
    let err = WindowManager::new(DesktopConfig::default(), list).err().unwrap();
    assert!(matches!(err, DesktopError::EmptyWindowId));

    let bad = WindowDescriptor::new(
        "zero",
        "Zero",
        "square",
        SizeRule::Relative {
            width: 0.0,
            height: 0.5,
            max: None,
        },
    );
    let err = WindowManager::new(DesktopConfig::default(), vec![bad]).err().unwrap();
    assert!(matches!(err, DesktopError::InvalidSizeRule { .. }));
}

// =============================================================================
// Drag Tests
// =============================================================================

#[test]
fn test_drag_to_bottom_right_corner() {
    let mut wm = manager();
    wm.open("a");
    wm.begin_drag("a");
    wm.update_drag("a", Vec2::new(1000.0, 1000.0));
    wm.end_drag("a", Vec2::new(1000.0, 1000.0), phone());

    let a = wm.get("a").unwrap();
    assert!((a.position.x - 110.0).abs() < 0.001);
    assert!((a.position.y - 504.0).abs() < 0.001);
    assert_eq!(a.drag_delta(), Vec2::ZERO);
}

#[test]
fn test_drag_through_input_events() {
    let mut wm = manager();
    let id = WindowId::new("c");
    wm.handle(&InputEvent::Activate { id: id.clone() });
    let start = wm.get("c").unwrap().position;

    wm.handle(&InputEvent::DragBegan { id: id.clone() });
    for step in 1..=5 {
        wm.handle(&InputEvent::DragChanged {
            id: id.clone(),
            translation: Vec2::new(-4.0 * step as f32, 10.0 * step as f32),
        });
    }
    assert_eq!(wm.get("c").unwrap().position, start);

    wm.handle(&InputEvent::DragEnded {
        id: id.clone(),
        translation: Vec2::new(-20.0, 50.0),
    });
    let c = wm.get("c").unwrap();
    assert!((c.position.x - (start.x - 20.0)).abs() < 0.001);
    assert!((c.position.y - (start.y + 50.0)).abs() < 0.001);
}

#[test]
fn test_resize_pulls_windows_back_in() {
    let mut wm = manager();
    wm.open("a");
    wm.open("b");
    wm.end_drag("a", Vec2::new(1000.0, 1000.0), phone());
    wm.end_drag("b", Vec2::new(1000.0, 1000.0), phone());

    wm.handle(&InputEvent::ContainerResized {
        size: Size::new(320.0, 600.0),
    });
    for id in ["a", "b"] {
        let w = wm.get(id).unwrap();
        assert!((w.position.x - 40.0).abs() < 0.001);
        assert!((w.position.y - 260.0).abs() < 0.001);
    }
}

// =============================================================================
// Stacking Tests
// =============================================================================

#[test]
fn test_open_order_sets_stacking() {
    let mut wm = manager();
    wm.open("a");
    wm.open("b");
    wm.open("c");
    wm.bring_to_front("a");

    let zs: Vec<u64> = ["a", "b", "c"].iter().map(|id| wm.get(id).unwrap().z_order).collect();
    assert!(zs[0] > zs[1] && zs[0] > zs[2]);
    assert_eq!(wm.front().unwrap().id, "a");

    let order: Vec<&str> = wm.drawable_windows().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(order, ["b", "c", "a"]);
}

#[test]
fn test_first_activation_after_init_gets_z_three() {
    let mut wm = manager();
    assert_eq!(wm.front().map(|w| w.id.as_str()), None);
    wm.handle(&InputEvent::Activate { id: WindowId::new("a") });
    assert_eq!(wm.get("a").unwrap().z_order, 3);
    assert_eq!(wm.front().unwrap().id, "a");
}

#[test]
fn test_views_mark_single_focused_window() {
    let mut wm = manager();
    wm.open("a");
    wm.open("b");
    wm.minimize("b");

    let views = wm.views();
    assert_eq!(views.len(), 3);
    let focused: Vec<&str> = views.iter().filter(|v| v.focused).map(|v| v.id.as_str()).collect();
    assert_eq!(focused, ["a"]);
}

#[test]
fn test_menu_bar_follows_front_window() {
    let mut desktop = desktop();
    assert_eq!(desktop.menu_bar(), "Folio");
    desktop.tap_dock("about");
    desktop.tap_dock("projects");
    assert_eq!(desktop.menu_bar(), "Projects");
    desktop.windows.bring_to_front("about");
    assert_eq!(desktop.menu_bar(), "About Me");
}

// =============================================================================
// Pointer Tests
// =============================================================================

#[test]
fn test_pointer_drag_and_buttons() {
    let mut desktop = desktop();
    desktop.tap_dock("about");
    let frame = desktop.windows.frame("about").unwrap();

    // Drag by the title bar
    let grab = Vec2::new(frame.x + 150.0, frame.y + 14.0);
    assert_eq!(desktop.region_at(grab).map(|(_, r)| r), Some(WindowRegion::TitleBar));
    desktop.pointer_down(grab);
    desktop.pointer_move(grab + Vec2::new(0.0, 60.0));
    desktop.pointer_up(grab + Vec2::new(0.0, 60.0));
    let moved = desktop.windows.frame("about").unwrap();
    assert!((moved.y - (frame.y + 60.0)).abs() < 0.001);

    // Minimize via the traffic light
    let button = WindowRegion::MinimizeButton.button_rect(moved);
    let press = Vec2::new(button.x + 6.0, button.y + 6.0);
    desktop.pointer_down(press);
    desktop.pointer_up(press);
    assert!(desktop.windows.get("about").unwrap().is_minimized());
    assert!(desktop.region_at(press).is_none());
}

// =============================================================================
// Notification Tests
// =============================================================================

#[test]
fn test_event_stream() {
    let mut wm = manager();
    assert!(matches!(wm.drain_events().as_slice(), [WindowEvent::ContainerResized { .. }]));

    wm.open("a");
    wm.minimize("a");
    wm.restore("a");
    wm.close("a");

    let kinds: Vec<&str> = wm
        .drain_events()
        .iter()
        .map(|e| match e {
            WindowEvent::Opened { .. } => "opened",
            WindowEvent::Raised { .. } => "raised",
            WindowEvent::Minimized { .. } => "minimized",
            WindowEvent::Restored { .. } => "restored",
            WindowEvent::Closed { .. } => "closed",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, ["opened", "raised", "minimized", "restored", "raised", "closed"]);
}

#[test]
fn test_views_serialize_for_host() {
    let mut desktop = desktop();
    desktop.tap_dock("terminal");
    let json = serde_json::to_value(desktop.windows.views()).unwrap();
    let terminal = json
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["id"] == "terminal")
        .unwrap();
    assert_eq!(terminal["visible"], true);
    assert_eq!(terminal["label"], "Terminal");
    assert_eq!(catalog::portfolio().len(), json.as_array().unwrap().len());
}

#[test]
fn test_config_from_json() {
    let config = DesktopConfig::from_json(r#"{ "topInset": 0, "desktopName": "Home" }"#).unwrap();
    assert_eq!(config.desktop_name, "Home");
    assert!((config.bottom_inset - 70.0).abs() < 0.001);

    let mut wm = WindowManager::new(config, square_windows()).unwrap();
    wm.initialize(phone());
    wm.open("a");
    wm.end_drag("a", Vec2::new(-1000.0, -1000.0), phone());
    assert_eq!(wm.get("a").unwrap().position, Vec2::new(0.0, 0.0));
}
