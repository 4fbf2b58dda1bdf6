use super::draw::{Color, DrawCommand};
use super::error::BackendError;
use super::glutils::*;
use super::math::*;
use super::shaders::*;
use super::tessellate;
use gl::types::GLenum;
use gl::*;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::PixelFormatEnum;
use sdl2::surface::Surface;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Cell size of the SDL2_gfx built-in font.
const GLYPH_SIZE: u32 = 8;
/// Smallest text size drawn; smaller requests are bumped up to it.
const MIN_TEXT_SIZE: i32 = 10;

struct TextTexture {
    id: u32,
    width: u32,
    height: u32,
}

/// Size of the box a label covers on screen, in pixels.
///
/// Glyph cells are stretched to `size` pixels square, so a label is exactly
/// `size` pixels tall.
pub fn text_extent(text: &str, size: i32) -> (f32, f32) {
    let glyph = size.max(MIN_TEXT_SIZE) as f32;
    (glyph * text.chars().count() as f32, glyph)
}

pub struct Renderer {
    flat: Shaders,
    textured: Shaders,
    vao: u32,
    vbo: u32,
    texts: HashMap<(&'static str, Color), TextTexture>,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Renderer, BackendError> {
        let flat = Shaders::from_str(FLAT_VERTEX, FLAT_FRAGMENT)?;
        let textured = Shaders::from_str(TEXTURED_VERTEX, TEXTURED_FRAGMENT)?;

        let projection = Mat4x4::ortho(0.0, width as f32, height as f32, 0.0, -1.0, 1.0);
        flat.use_program();
        flat.set_mat4fv("projection", &projection);
        textured.use_program();
        textured.set_mat4fv("projection", &projection);
        textured.set_i32("glyphs", 0);

        let (mut vao, mut vbo) = (0, 0);
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
            gl::Enable(BLEND);
            gl::BlendFunc(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
        }
        check_gl_err();

        Ok(Renderer {
            flat,
            textured,
            vao,
            vbo,
            texts: HashMap::new(),
        })
    }

    pub fn clear(&mut self, color: Color) {
        let [r, g, b, a] = color.to_f32_rgba();
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn draw(&mut self, command: &DrawCommand) -> Result<(), BackendError> {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::BindBuffer(ARRAY_BUFFER, self.vbo);
        }
        match *command {
            DrawCommand::Text {
                text,
                x,
                y,
                size,
                color,
            } => self.draw_text(text, x, y, size, color)?,
            DrawCommand::FilledCircle {
                center,
                radius,
                color,
            } => {
                let vertices = tessellate::filled_circle(center, radius);
                self.draw_flat(&vertices, TRIANGLE_FAN, color);
            }
            DrawCommand::CircleOutline {
                center,
                radius,
                color,
            } => {
                let vertices = tessellate::circle_outline(center, radius);
                self.draw_flat(&vertices, LINE_LOOP, color);
            }
        }
        Ok(())
    }

    fn draw_flat(&self, vertices: &[f32], mode: GLenum, color: Color) {
        self.flat.use_program();
        self.flat.set_vec4("color", color.to_f32_rgba());
        gl_buffer_data_arr_stream(vertices);
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        gl_vertex_attrib_disable(1);
        unsafe { gl::DrawArrays(mode, 0, (vertices.len() / 2) as i32) };
        check_gl_err();
    }

    fn draw_text(
        &mut self,
        text: &'static str,
        x: i32,
        y: i32,
        size: i32,
        color: Color,
    ) -> Result<(), BackendError> {
        if text.is_empty() {
            return Ok(());
        }
        let texture = match self.texts.entry((text, color)) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let texture = rasterize_text(text, color)?;
                log::debug!(
                    "rasterized label {:?} into texture {} ({}x{})",
                    text,
                    texture.id,
                    texture.width,
                    texture.height
                );
                entry.insert(texture)
            }
        };

        let (w, h) = text_extent(text, size);
        let quad = tessellate::textured_quad(x as f32, y as f32, w, h);

        self.textured.use_program();
        unsafe {
            gl::ActiveTexture(TEXTURE0);
            gl::BindTexture(TEXTURE_2D, texture.id);
        }
        gl_buffer_data_arr_stream(&quad);
        gl_vertex_attrib_ptr_enab(0, 2, 4, 0);
        gl_vertex_attrib_ptr_enab(1, 2, 4, 2);
        unsafe { gl::DrawArrays(TRIANGLES, 0, 6) };
        check_gl_err();
        Ok(())
    }
}

/// Renders `text` with the SDL2_gfx bitmap font into a transparent RGBA
/// surface and uploads it. No font asset is needed.
fn rasterize_text(text: &str, color: Color) -> Result<TextTexture, BackendError> {
    let width = GLYPH_SIZE * text.chars().count() as u32;
    let height = GLYPH_SIZE;

    let surface =
        Surface::new(width, height, PixelFormatEnum::RGBA32).map_err(BackendError::Text)?;
    let canvas = surface.into_canvas().map_err(BackendError::Text)?;
    canvas
        .string(
            0,
            0,
            text,
            sdl2::pixels::Color::RGBA(color.r, color.g, color.b, color.a),
        )
        .map_err(BackendError::Text)?;
    let surface = canvas.into_surface();

    let pitch = surface.pitch() as usize;
    let row = width as usize * 4;
    let pixels: Vec<u8> = match surface.without_lock() {
        Some(raw) => raw
            .chunks(pitch)
            .take(height as usize)
            .flat_map(|line| &line[..row])
            .copied()
            .collect(),
        None => return Err(BackendError::Text("surface pixels not accessible".to_string())),
    };

    let id = upload_rgba_texture(width, height, &pixels);
    Ok(TextTexture { id, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_height_matches_requested_size() {
        assert_eq!(text_extent("Hello!", 20), (120.0, 20.0));
        assert_eq!(text_extent("Prepare", 20), (140.0, 20.0));
        assert_eq!(text_extent("Prepare", 13), (91.0, 13.0));
    }

    #[test]
    fn small_sizes_are_bumped_to_the_minimum() {
        assert_eq!(text_extent("a", 4), (10.0, 10.0));
        assert_eq!(text_extent("", 20), (0.0, 20.0));
    }
}
