use macroquad::prelude::*;
use crate::domain::Grid;

/// Color of a living cell (0xffffff in the classic palette)
pub const LIVING_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
/// Color of a dead cell (0x3498db)
pub const DEAD_COLOR: Color = Color::new(0.204, 0.596, 0.859, 1.0);

/// Side length of the square output area, in pixels
pub fn output_size() -> f32 {
    screen_width().min(screen_height())
}

/// Renderer owns the CPU-side pixel buffer and the presentation texture.
///
/// Every render pass projects the grid into the buffer, one pixel per cell.
/// The texture is created lazily on the first pass; cells are drawn as
/// uniform blocks by scaling the N×N texture up with nearest-neighbor
/// filtering.
pub struct Renderer {
    pixels: Image,
    surface: Option<Texture2D>,
}

impl Renderer {
    pub fn new(grid_size: usize) -> Self {
        Self {
            pixels: Image::gen_image_color(grid_size as u16, grid_size as u16, DEAD_COLOR),
            surface: None,
        }
    }

    /// Project the grid into the pixel buffer and present it.
    ///
    /// The first call only creates the texture and returns; the frame is
    /// retried on the next loop iteration.
    pub fn render(&mut self, grid: &Grid) {
        let living: [u8; 4] = LIVING_COLOR.into();
        let dead: [u8; 4] = DEAD_COLOR.into();

        let data = self.pixels.get_image_data_mut();
        for (pixel, cell) in data.iter_mut().zip(grid.cells()) {
            *pixel = if cell.is_alive() { living } else { dead };
        }

        let surface = match &self.surface {
            Some(texture) => texture,
            None => {
                let texture = Texture2D::from_image(&self.pixels);
                texture.set_filter(FilterMode::Nearest);
                self.surface = Some(texture);
                return;
            }
        };

        surface.update(&self.pixels);
        let output = output_size();
        draw_texture_ex(
            surface,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(output, output)),
                ..Default::default()
            },
        );
    }
}
