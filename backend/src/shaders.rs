use super::error::BackendError;
use super::glutils::*;
use super::math::*;
use gl::*;
use std::ffi::CString;

pub const FLAT_VERTEX: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;

uniform mat4 projection;

void main()
{
    gl_Position = projection * vec4(aPos, 0.0, 1.0);
}
"#;

pub const FLAT_FRAGMENT: &str = r#"#version 330 core
out vec4 FragColor;

uniform vec4 color;

void main()
{
    FragColor = color;
}
"#;

pub const TEXTURED_VERTEX: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aTexCoord;

uniform mat4 projection;

out vec2 TexCoord;

void main()
{
    gl_Position = projection * vec4(aPos, 0.0, 1.0);
    TexCoord = aTexCoord;
}
"#;

pub const TEXTURED_FRAGMENT: &str = r#"#version 330 core
in vec2 TexCoord;
out vec4 FragColor;

uniform sampler2D glyphs;

void main()
{
    FragColor = texture(glyphs, TexCoord);
}
"#;

#[derive(Default, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders, BackendError> {
        // create vertex shader
        let vertex_shader = unsafe { gl::CreateShader(VERTEX_SHADER) };
        if vertex_shader == 0 {
            return Err(BackendError::Shader(
                "gl::createShader(VERTEX_SHADER) failed".to_string(),
            ));
        }

        if let Err(e) = Self::compile(vertex_shader, vertex_code) {
            return Err(BackendError::Shader(format!(
                "vertex shader compilation error: {}",
                e
            )));
        }

        // create fragment shader
        let fragment_shader = unsafe { gl::CreateShader(FRAGMENT_SHADER) };
        if fragment_shader == 0 {
            return Err(BackendError::Shader(
                "gl::createShader(FRAGMENT_SHADER) failed".to_string(),
            ));
        }

        if let Err(e) = Self::compile(fragment_shader, fragment_code) {
            return Err(BackendError::Shader(format!(
                "fragment shader compilation error: {}",
                e
            )));
        }

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
            }
            return Err(BackendError::Shader(format!(
                "program link error: {}",
                String::from_utf8_lossy(&v)
            )));
        }

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        log::debug!("linked shader program {}", shader_program);

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn compile(shader_id: u32, shader_code: &str) -> Result<(), String> {
        let len = i32::try_from(shader_code.len()).map_err(|e| e.to_string())?;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
            }

            return Err(String::from_utf8_lossy(&v).to_string());
        }
        Ok(())
    }

    fn get_uniform_location(&self, name: &str) -> i32 {
        let c_name = CString::new(name).unwrap_or_else(|_| {
            panic!("get_uniform_location: CString::new failed for '{}'", name);
        });

        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err();
        if location == -1 {
            panic!(
                "program({}): location '{}' does not correspond to an active uniform variable in program",
                self.program_id,
                name
            );
        }
        location
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err();
    }

    pub fn set_i32(&self, name: &str, value: i32) {
        unsafe { gl::Uniform1i(self.get_uniform_location(name), value) };
    }

    pub fn set_vec4(&self, name: &str, v: [f32; 4]) {
        unsafe { gl::Uniform4f(self.get_uniform_location(name), v[0], v[1], v[2], v[3]) };
    }

    pub fn set_mat4fv(&self, name: &str, mat: &Mat4x4) {
        let location = self.get_uniform_location(name);
        let arr = mat.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, FALSE as u8, arr.as_ptr()) };
    }
}
