//! Frame style constants

/// Window chrome metrics used for hit testing
pub struct FrameStyle {
    pub title_bar_height: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Chrome of a Kali-style window header with three controls on the right
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 36.0,
    button_size: 20.0,
    button_spacing: 8.0,
    button_margin: 12.0,
};
