use raylib::core::texture::RaylibTexture2D; // trait para .update_texture()
use raylib::prelude::*;

/// Buffer de píxeles en CPU; las vistas pintan acá y main lo sube a una
/// textura persistente una vez por frame.
pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub current_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
            current_color: Color::WHITE,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = self.current_color;
        }
    }

    #[inline]
    pub fn set_current_color(&mut self, c: Color) {
        self.current_color = c;
    }

    #[inline]
    pub fn set_background_color(&mut self, c: Color) {
        self.background_color = c;
    }

    /// Sube los píxeles a la textura persistente.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // &[Color] → &[u8] (RGBA8) sin copiar
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        let _ = tex.update_texture(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_outside_the_buffer_are_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_current_color(Color::RED);
        fb.set_pixel(7, 1);
        fb.set_pixel(1, 7);
        assert!(fb.color_buffer.iter().all(|&c| c == Color::BLACK));
        fb.set_pixel(1, 1);
        assert_eq!(fb.color_buffer[5], Color::RED);
    }

    #[test]
    fn clear_repaints_the_background() {
        let mut fb = Framebuffer::new(2, 2);
        fb.set_current_color(Color::GREEN);
        fb.set_pixel(0, 0);
        fb.set_background_color(Color::BLUE);
        fb.clear();
        assert!(fb.color_buffer.iter().all(|&c| c == Color::BLUE));
    }
}
