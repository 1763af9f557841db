//! Window chrome constants

/// Chrome geometry shared by hit testing and the renderer
pub struct ChromeStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Traffic-light buttons sit on the left of the title bar
pub const CHROME_STYLE: ChromeStyle = ChromeStyle {
    title_bar_height: 28.0,
    button_size: 12.0,
    button_spacing: 8.0,
    button_margin: 12.0,
};
