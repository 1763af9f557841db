//! Built-in portfolio windows

use crate::math::Size;
use crate::window::{AccentPair, Rgb, SizeRule, WindowDescriptor};

const CYAN: Rgb = Rgb::new(50, 173, 230);
const BLUE: Rgb = Rgb::new(0, 122, 255);
const PURPLE: Rgb = Rgb::new(175, 82, 222);
const PINK: Rgb = Rgb::new(255, 45, 85);
const GREEN: Rgb = Rgb::new(52, 199, 89);
const MINT: Rgb = Rgb::new(0, 199, 190);
const ORANGE: Rgb = Rgb::new(255, 149, 0);
const YELLOW: Rgb = Rgb::new(255, 204, 0);

/// Windows cover most of a phone-sized screen and stop growing on desktops
fn panel() -> SizeRule {
    SizeRule::Relative {
        width: 0.9,
        height: 0.55,
        max: Some(Size::new(420.0, 560.0)),
    }
}

/// Default portfolio registry, in dock order
pub fn portfolio() -> Vec<WindowDescriptor> {
    vec![
        WindowDescriptor::new("about", "About Me", "person.fill", panel())
            .with_accent(AccentPair::new(CYAN, BLUE)),
        WindowDescriptor::new("skills", "Skills", "chart.bar.fill", panel())
            .with_accent(AccentPair::new(ORANGE, YELLOW)),
        WindowDescriptor::new("projects", "Projects", "folder.fill", panel())
            .with_accent(AccentPair::new(PURPLE, PINK)),
        WindowDescriptor::new("socials", "Connect", "link", SizeRule::Fixed(Size::new(300.0, 220.0)))
            .with_accent(AccentPair::new(BLUE, CYAN)),
        WindowDescriptor::new(
            "terminal",
            "Terminal",
            "terminal.fill",
            SizeRule::Relative {
                width: 0.9,
                height: 0.4,
                max: Some(Size::new(520.0, 360.0)),
            },
        )
        .with_accent(AccentPair::new(GREEN, MINT)),
    ]
}
