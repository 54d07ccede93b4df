// MIT/Apache2 License

//! Scalar types and constants of the GL and WGL surfaces.

#![allow(non_camel_case_types)]

use std::{
    ffi::c_void,
    os::raw::{c_char, c_double, c_float, c_int, c_schar, c_short, c_uchar, c_uint, c_ushort},
};

/* GL Types */
pub type GLenum = c_uint;
pub type GLboolean = c_uchar;
pub type GLbitfield = c_uint;
pub type GLbyte = c_schar;
pub type GLshort = c_short;
pub type GLint = c_int;
pub type GLsizei = c_int;
pub type GLubyte = c_uchar;
pub type GLushort = c_ushort;
pub type GLuint = c_uint;
pub type GLfloat = c_float;
pub type GLclampf = c_float;
pub type GLdouble = c_double;
pub type GLclampd = c_double;
pub type GLvoid = c_void;
pub type GLchar = c_char;
pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLsync = *mut c_void;

/* WGL Types */
pub type BOOL = c_int;
pub type INT = c_int;
pub type UINT = c_uint;
pub type HDC = *mut c_void;
pub type HGLRC = *mut c_void;
pub type HPBUFFERARB = *mut c_void;
pub type LPCSTR = *const c_char;
pub type PROC = *const c_void;
pub type LPPIXELFORMATDESCRIPTOR = *mut c_void;

pub const GL_FALSE: GLboolean = 0;
pub const GL_TRUE: GLboolean = 1;
pub const FALSE: BOOL = 0;
pub const TRUE: BOOL = 1;

pub const GL_NO_ERROR: GLenum = 0;
pub const GL_INVALID_ENUM: GLenum = 0x0500;
pub const GL_INVALID_VALUE: GLenum = 0x0501;
pub const GL_INVALID_OPERATION: GLenum = 0x0502;
pub const GL_OUT_OF_MEMORY: GLenum = 0x0505;

pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;

pub const GL_COLOR_BUFFER_BIT: GLbitfield = 0x0000_4000;
pub const GL_DEPTH_BUFFER_BIT: GLbitfield = 0x0000_0100;
pub const GL_STENCIL_BUFFER_BIT: GLbitfield = 0x0000_0400;

pub const GL_FRAMEBUFFER_COMPLETE: GLenum = 0x8CD5;
pub const GL_WAIT_FAILED: GLenum = 0x911D;
pub const GL_INVALID_INDEX: GLuint = 0xFFFF_FFFF;
