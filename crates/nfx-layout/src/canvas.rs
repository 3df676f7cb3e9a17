use crate::style::StyleKey;

/// Text measurement and drawing capability the walker paints through.
///
/// Backends resolve [`StyleKey`] to their own font handles; an unknown key
/// should fall back to the body font rather than fail.
pub trait Canvas {
    /// Rendered `(width, height)` of `text` in device pixels.
    fn measure(&self, text: &str, style: StyleKey) -> (f32, f32);

    fn draw(&mut self, text: &str, style: StyleKey, x: f32, y: f32);
}
