use gl::{types::*, *};
use std::ffi::CStr;

pub fn check_gl_err() {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    panic!("error: {:?}", err);
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    log::debug!("GL_VENDOR = {}", gl_string(VENDOR));
    log::debug!("GL_RENDERER = {}", gl_string(RENDERER));
    log::debug!("GL_VERSION = {}", gl_string(VERSION));

    let mut mts: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_SIZE, &mut mts) };
    log::debug!("MAX_TEXTURE_SIZE = {}", mts);
}

/// Geometry changes every frame, so it is re-uploaded each draw.
pub fn gl_buffer_data_arr_stream<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STREAM_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE as u8,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

pub fn gl_vertex_attrib_disable(index: u32) {
    unsafe { gl::DisableVertexAttribArray(index) };
}

/// Uploads tightly packed RGBA8 rows, first row at v = 0.
pub fn upload_rgba_texture(width: u32, height: u32, pixels: &[u8]) -> u32 {
    debug_assert_eq!(pixels.len(), (width * height * 4) as usize);

    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
    ];

    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(t, n, p as i32) };
    }

    unsafe {
        gl::PixelStorei(UNPACK_ALIGNMENT, 1);
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RGBA as i32,
            width as i32,
            height as i32,
            0,
            RGBA,
            UNSIGNED_BYTE,
            pixels.as_ptr().cast(),
        )
    };
    check_gl_err();

    texture
}
