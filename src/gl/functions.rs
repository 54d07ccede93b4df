// MIT/Apache2 License

//! The catalogue of every fixed entry point.
//!
//! One list drives everything: the [`Slot`] enumeration, the [`ENTRY_POINTS`] descriptors, the
//! [`GlFuncs`] trait whose default bodies form the null backend, the forwarding thunks in [`api`],
//! and the builtin extension catalogue the registry starts from.

#![allow(non_snake_case)]

use super::types::*;
use crate::{EntryPoint, ExtensionEntry, Proc};

/// Produce the null value for an entry point's return type.
macro_rules! null_return {
    () => {
        ()
    };
    ($ret: ty = $null: expr) => {
        $null
    };
    ($ret: ty) => {
        <$ret as NullValue>::null_value()
    };
}

macro_rules! define_entry_points {
    (
        wgl {
            $(fn $wname: ident ($($warg: ident : $wty: ty),*) $(-> $wret: ty $(= $wnull: expr)?)?;)*
        }
        gl {
            $(fn $gname: ident ($($garg: ident : $gty: ty),*) $(-> $gret: ty $(= $gnull: expr)?)?;)*
        }
        ext {
            $([$ereq: literal] fn $ename: ident ($($earg: ident : $ety: ty),*) $(-> $eret: ty $(= $enull: expr)?)?;)*
        }
    ) => {
        /// The position of a fixed entry point in a [`DispatchTable`](crate::DispatchTable).
        ///
        /// Slots are laid out in three contiguous regions: context management (`wgl*`), core
        /// drawing (`gl*`) and extensions.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum Slot {
            $($wname,)*
            $($gname,)*
            $($ename,)*
        }

        impl Slot {
            /// The number of slots in every dispatch table.
            pub const COUNT: usize = [$(Slot::$wname,)* $(Slot::$gname,)* $(Slot::$ename,)*].len();
            pub(crate) const CONTEXT_COUNT: usize = [$(Slot::$wname),*].len();
            pub(crate) const CORE_COUNT: usize = [$(Slot::$gname),*].len();

            /// Every slot, in table order.
            pub const ALL: [Slot; Slot::COUNT] = [
                $(Slot::$wname,)*
                $(Slot::$gname,)*
                $(Slot::$ename,)*
            ];
        }

        /// Descriptors of every fixed entry point, indexed by slot.
        pub static ENTRY_POINTS: [EntryPoint; Slot::COUNT] = [
            $(EntryPoint::new(
                stringify!($wname),
                Slot::$wname,
                None,
                stringify!(fn($($wty),*) $(-> $wret)?),
            ),)*
            $(EntryPoint::new(
                stringify!($gname),
                Slot::$gname,
                None,
                stringify!(fn($($gty),*) $(-> $gret)?),
            ),)*
            $(EntryPoint::new(
                stringify!($ename),
                Slot::$ename,
                Some($ereq),
                stringify!(fn($($ety),*) $(-> $eret)?),
            ),)*
        ];

        /// The full entry point surface.
        ///
        /// Every method has a default body that performs no action and returns the null value for
        /// its return type, so an implementor only overrides the entry points it actually
        /// supports. [`NullBackend`](crate::NullBackend) overrides nothing.
        #[allow(unused_variables, clippy::too_many_arguments)]
        pub trait GlFuncs: Send + Sync {
            $(
                #[inline]
                fn $wname(&self, $($warg: $wty),*) $(-> $wret)? {
                    null_return!($($wret $(= $wnull)?)?)
                }
            )*
            $(
                #[inline]
                fn $gname(&self, $($garg: $gty),*) $(-> $gret)? {
                    null_return!($($gret $(= $gnull)?)?)
                }
            )*
            $(
                #[inline]
                fn $ename(&self, $($earg: $ety),*) $(-> $eret)? {
                    null_return!($($eret $(= $enull)?)?)
                }
            )*
        }

        /// Forwarding thunks.
        ///
        /// Each one looks up the calling thread's active table, invokes its own slot with the
        /// arguments unchanged and returns the result unchanged.
        #[allow(clippy::too_many_arguments)]
        pub mod api {
            use super::*;

            $(
                #[inline]
                pub fn $wname($($warg: $wty),*) $(-> $wret)? {
                    crate::binding::with_current(|table| table.get(Slot::$wname).$wname($($warg),*))
                }
            )*
            $(
                #[inline]
                pub fn $gname($($garg: $gty),*) $(-> $gret)? {
                    crate::binding::with_current(|table| table.get(Slot::$gname).$gname($($garg),*))
                }
            )*
            $(
                #[inline]
                pub fn $ename($($earg: $ety),*) $(-> $eret)? {
                    crate::binding::with_current(|table| table.get(Slot::$ename).$ename($($earg),*))
                }
            )*
        }

        /// The extensions every registry starts out with; each resolves to its forwarding thunk.
        pub(crate) fn builtin_extensions() -> Vec<ExtensionEntry> {
            vec![
                $({
                    let thunk: fn($($ety),*) $(-> $eret)? = api::$ename;
                    ExtensionEntry::new(stringify!($ename), Proc::new(thunk), Some(Slot::$ename))
                        .requires($ereq)
                },)*
            ]
        }

    }
}

define_entry_points! {
    wgl {
        fn wglCopyContext(src: HGLRC, dst: HGLRC, mask: UINT) -> BOOL;
        fn wglCreateContext(hdc: HDC) -> HGLRC;
        fn wglDeleteContext(context: HGLRC) -> BOOL;
        fn wglDescribePixelFormat(hdc: HDC, format: INT, size: UINT, descriptor: LPPIXELFORMATDESCRIPTOR) -> INT;
        fn wglGetPixelFormat(hdc: HDC) -> INT;
        fn wglGetProcAddress(name: LPCSTR) -> PROC;
        fn wglMakeCurrent(hdc: HDC, context: HGLRC) -> BOOL;
        fn wglSetPixelFormat(hdc: HDC, format: INT, descriptor: *const GLvoid) -> BOOL;
        fn wglShareLists(src: HGLRC, dst: HGLRC) -> BOOL;
        fn wglSwapBuffers(hdc: HDC) -> BOOL;
    }
    gl {
        fn glAccum(op: GLenum, value: GLfloat);
        fn glAlphaFunc(func: GLenum, reference: GLfloat);
        fn glAreTexturesResident(n: GLsizei, textures: *const GLuint, residences: *mut GLboolean) -> GLboolean;
        fn glArrayElement(i: GLint);
        fn glBegin(mode: GLenum);
        fn glBindTexture(target: GLenum, texture: GLuint);
        fn glBitmap(width: GLsizei, height: GLsizei, xorig: GLfloat, yorig: GLfloat, xmove: GLfloat, ymove: GLfloat, bitmap: *const GLubyte);
        fn glBlendFunc(sfactor: GLenum, dfactor: GLenum);
        fn glCallList(list: GLuint);
        fn glCallLists(n: GLsizei, ty: GLenum, lists: *const GLvoid);
        fn glClear(mask: GLbitfield);
        fn glClearAccum(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn glClearDepth(depth: GLdouble);
        fn glClearIndex(c: GLfloat);
        fn glClearStencil(s: GLint);
        fn glClipPlane(plane: GLenum, equation: *const GLdouble);
        fn glColor3b(red: GLbyte, green: GLbyte, blue: GLbyte);
        fn glColor3bv(v: *const GLbyte);
        fn glColor3d(red: GLdouble, green: GLdouble, blue: GLdouble);
        fn glColor3dv(v: *const GLdouble);
        fn glColor3f(red: GLfloat, green: GLfloat, blue: GLfloat);
        fn glColor3fv(v: *const GLfloat);
        fn glColor3i(red: GLint, green: GLint, blue: GLint);
        fn glColor3iv(v: *const GLint);
        fn glColor3s(red: GLshort, green: GLshort, blue: GLshort);
        fn glColor3sv(v: *const GLshort);
        fn glColor3ub(red: GLubyte, green: GLubyte, blue: GLubyte);
        fn glColor3ubv(v: *const GLubyte);
        fn glColor3ui(red: GLuint, green: GLuint, blue: GLuint);
        fn glColor3uiv(v: *const GLuint);
        fn glColor3us(red: GLushort, green: GLushort, blue: GLushort);
        fn glColor3usv(v: *const GLushort);
        fn glColor4b(red: GLbyte, green: GLbyte, blue: GLbyte, alpha: GLbyte);
        fn glColor4bv(v: *const GLbyte);
        fn glColor4d(red: GLdouble, green: GLdouble, blue: GLdouble, alpha: GLdouble);
        fn glColor4dv(v: *const GLdouble);
        fn glColor4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        fn glColor4fv(v: *const GLfloat);
        fn glColor4i(red: GLint, green: GLint, blue: GLint, alpha: GLint);
        fn glColor4iv(v: *const GLint);
        fn glColor4s(red: GLshort, green: GLshort, blue: GLshort, alpha: GLshort);
        fn glColor4sv(v: *const GLshort);
        fn glColor4ub(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte);
        fn glColor4ubv(v: *const GLubyte);
        fn glColor4ui(red: GLuint, green: GLuint, blue: GLuint, alpha: GLuint);
        fn glColor4uiv(v: *const GLuint);
        fn glColor4us(red: GLushort, green: GLushort, blue: GLushort, alpha: GLushort);
        fn glColor4usv(v: *const GLushort);
        fn glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean);
        fn glColorMaterial(face: GLenum, mode: GLenum);
        fn glColorPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const GLvoid);
        fn glCopyPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, ty: GLenum);
        fn glCopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint);
        fn glCopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint);
        fn glCopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei);
        fn glCopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn glCullFace(mode: GLenum);
        fn glDeleteLists(list: GLuint, range: GLsizei);
        fn glDeleteTextures(n: GLsizei, textures: *const GLuint);
        fn glDepthFunc(func: GLenum);
        fn glDepthMask(flag: GLboolean);
        fn glDepthRange(n: GLdouble, f: GLdouble);
        fn glDisable(cap: GLenum);
        fn glDisableClientState(array: GLenum);
        fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei);
        fn glDrawBuffer(buf: GLenum);
        fn glDrawElements(mode: GLenum, count: GLsizei, ty: GLenum, indices: *const GLvoid);
        fn glDrawPixels(width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum, pixels: *const GLvoid);
        fn glEdgeFlag(flag: GLboolean);
        fn glEdgeFlagPointer(stride: GLsizei, pointer: *const GLvoid);
        fn glEdgeFlagv(flag: *const GLboolean);
        fn glEnable(cap: GLenum);
        fn glEnableClientState(array: GLenum);
        fn glEnd();
        fn glEndList();
        fn glEvalCoord1d(u: GLdouble);
        fn glEvalCoord1dv(u: *const GLdouble);
        fn glEvalCoord1f(u: GLfloat);
        fn glEvalCoord1fv(u: *const GLfloat);
        fn glEvalCoord2d(u: GLdouble, v: GLdouble);
        fn glEvalCoord2dv(u: *const GLdouble);
        fn glEvalCoord2f(u: GLfloat, v: GLfloat);
        fn glEvalCoord2fv(u: *const GLfloat);
        fn glEvalMesh1(mode: GLenum, i1: GLint, i2: GLint);
        fn glEvalMesh2(mode: GLenum, i1: GLint, i2: GLint, j1: GLint, j2: GLint);
        fn glEvalPoint1(i: GLint);
        fn glEvalPoint2(i: GLint, j: GLint);
        fn glFeedbackBuffer(size: GLsizei, ty: GLenum, buffer: *mut GLfloat);
        fn glFinish();
        fn glFlush();
        fn glFogf(pname: GLenum, param: GLfloat);
        fn glFogfv(pname: GLenum, params: *const GLfloat);
        fn glFogi(pname: GLenum, param: GLint);
        fn glFogiv(pname: GLenum, params: *const GLint);
        fn glFrontFace(mode: GLenum);
        fn glFrustum(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, zNear: GLdouble, zFar: GLdouble);
        fn glGenLists(range: GLsizei) -> GLuint;
        fn glGenTextures(n: GLsizei, textures: *mut GLuint);
        fn glGetBooleanv(pname: GLenum, data: *mut GLboolean);
        fn glGetClipPlane(plane: GLenum, equation: *mut GLdouble);
        fn glGetDoublev(pname: GLenum, data: *mut GLdouble);
        fn glGetError() -> GLenum = GL_INVALID_OPERATION;
        fn glGetFloatv(pname: GLenum, data: *mut GLfloat);
        fn glGetIntegerv(pname: GLenum, data: *mut GLint);
        fn glGetLightfv(light: GLenum, pname: GLenum, params: *mut GLfloat);
        fn glGetLightiv(light: GLenum, pname: GLenum, params: *mut GLint);
        fn glGetMapdv(target: GLenum, query: GLenum, v: *mut GLdouble);
        fn glGetMapfv(target: GLenum, query: GLenum, v: *mut GLfloat);
        fn glGetMapiv(target: GLenum, query: GLenum, v: *mut GLint);
        fn glGetMaterialfv(face: GLenum, pname: GLenum, params: *mut GLfloat);
        fn glGetMaterialiv(face: GLenum, pname: GLenum, params: *mut GLint);
        fn glGetPixelMapfv(map: GLenum, values: *mut GLfloat);
        fn glGetPixelMapuiv(map: GLenum, values: *mut GLuint);
        fn glGetPixelMapusv(map: GLenum, values: *mut GLushort);
        fn glGetPointerv(pname: GLenum, params: *mut *mut GLvoid);
        fn glGetPolygonStipple(mask: *mut GLubyte);
        fn glGetString(name: GLenum) -> *const GLubyte;
        fn glGetTexEnvfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
        fn glGetTexEnviv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn glGetTexGendv(coord: GLenum, pname: GLenum, params: *mut GLdouble);
        fn glGetTexGenfv(coord: GLenum, pname: GLenum, params: *mut GLfloat);
        fn glGetTexGeniv(coord: GLenum, pname: GLenum, params: *mut GLint);
        fn glGetTexImage(target: GLenum, level: GLint, format: GLenum, ty: GLenum, pixels: *mut GLvoid);
        fn glGetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat);
        fn glGetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint);
        fn glGetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat);
        fn glGetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        fn glHint(target: GLenum, mode: GLenum);
        fn glIndexMask(mask: GLuint);
        fn glIndexPointer(ty: GLenum, stride: GLsizei, pointer: *const GLvoid);
        fn glIndexd(c: GLdouble);
        fn glIndexdv(c: *const GLdouble);
        fn glIndexf(c: GLfloat);
        fn glIndexfv(c: *const GLfloat);
        fn glIndexi(c: GLint);
        fn glIndexiv(c: *const GLint);
        fn glIndexs(c: GLshort);
        fn glIndexsv(c: *const GLshort);
        fn glIndexub(c: GLubyte);
        fn glIndexubv(c: *const GLubyte);
        fn glInitNames();
        fn glInterleavedArrays(format: GLenum, stride: GLsizei, pointer: *const GLvoid);
        fn glIsEnabled(cap: GLenum) -> GLboolean;
        fn glIsList(list: GLuint) -> GLboolean;
        fn glIsTexture(texture: GLuint) -> GLboolean;
        fn glLightModelf(pname: GLenum, param: GLfloat);
        fn glLightModelfv(pname: GLenum, params: *const GLfloat);
        fn glLightModeli(pname: GLenum, param: GLint);
        fn glLightModeliv(pname: GLenum, params: *const GLint);
        fn glLightf(light: GLenum, pname: GLenum, param: GLfloat);
        fn glLightfv(light: GLenum, pname: GLenum, params: *const GLfloat);
        fn glLighti(light: GLenum, pname: GLenum, param: GLint);
        fn glLightiv(light: GLenum, pname: GLenum, params: *const GLint);
        fn glLineStipple(factor: GLint, pattern: GLushort);
        fn glLineWidth(width: GLfloat);
        fn glListBase(base: GLuint);
        fn glLoadIdentity();
        fn glLoadMatrixd(m: *const GLdouble);
        fn glLoadMatrixf(m: *const GLfloat);
        fn glLoadName(name: GLuint);
        fn glLogicOp(opcode: GLenum);
        fn glMap1d(target: GLenum, u1: GLdouble, u2: GLdouble, stride: GLint, order: GLint, points: *const GLdouble);
        fn glMap1f(target: GLenum, u1: GLfloat, u2: GLfloat, stride: GLint, order: GLint, points: *const GLfloat);
        fn glMap2d(target: GLenum, u1: GLdouble, u2: GLdouble, ustride: GLint, uorder: GLint, v1: GLdouble, v2: GLdouble, vstride: GLint, vorder: GLint, points: *const GLdouble);
        fn glMap2f(target: GLenum, u1: GLfloat, u2: GLfloat, ustride: GLint, uorder: GLint, v1: GLfloat, v2: GLfloat, vstride: GLint, vorder: GLint, points: *const GLfloat);
        fn glMapGrid1d(un: GLint, u1: GLdouble, u2: GLdouble);
        fn glMapGrid1f(un: GLint, u1: GLfloat, u2: GLfloat);
        fn glMapGrid2d(un: GLint, u1: GLdouble, u2: GLdouble, vn: GLint, v1: GLdouble, v2: GLdouble);
        fn glMapGrid2f(un: GLint, u1: GLfloat, u2: GLfloat, vn: GLint, v1: GLfloat, v2: GLfloat);
        fn glMaterialf(face: GLenum, pname: GLenum, param: GLfloat);
        fn glMaterialfv(face: GLenum, pname: GLenum, params: *const GLfloat);
        fn glMateriali(face: GLenum, pname: GLenum, param: GLint);
        fn glMaterialiv(face: GLenum, pname: GLenum, params: *const GLint);
        fn glMatrixMode(mode: GLenum);
        fn glMultMatrixd(m: *const GLdouble);
        fn glMultMatrixf(m: *const GLfloat);
        fn glNewList(list: GLuint, mode: GLenum);
        fn glNormal3b(nx: GLbyte, ny: GLbyte, nz: GLbyte);
        fn glNormal3bv(v: *const GLbyte);
        fn glNormal3d(nx: GLdouble, ny: GLdouble, nz: GLdouble);
        fn glNormal3dv(v: *const GLdouble);
        fn glNormal3f(nx: GLfloat, ny: GLfloat, nz: GLfloat);
        fn glNormal3fv(v: *const GLfloat);
        fn glNormal3i(nx: GLint, ny: GLint, nz: GLint);
        fn glNormal3iv(v: *const GLint);
        fn glNormal3s(nx: GLshort, ny: GLshort, nz: GLshort);
        fn glNormal3sv(v: *const GLshort);
        fn glNormalPointer(ty: GLenum, stride: GLsizei, pointer: *const GLvoid);
        fn glOrtho(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, zNear: GLdouble, zFar: GLdouble);
        fn glPassThrough(token: GLfloat);
        fn glPixelMapfv(map: GLenum, mapsize: GLsizei, values: *const GLfloat);
        fn glPixelMapuiv(map: GLenum, mapsize: GLsizei, values: *const GLuint);
        fn glPixelMapusv(map: GLenum, mapsize: GLsizei, values: *const GLushort);
        fn glPixelStoref(pname: GLenum, param: GLfloat);
        fn glPixelStorei(pname: GLenum, param: GLint);
        fn glPixelTransferf(pname: GLenum, param: GLfloat);
        fn glPixelTransferi(pname: GLenum, param: GLint);
        fn glPixelZoom(xfactor: GLfloat, yfactor: GLfloat);
        fn glPointSize(size: GLfloat);
        fn glPolygonMode(face: GLenum, mode: GLenum);
        fn glPolygonOffset(factor: GLfloat, units: GLfloat);
        fn glPolygonStipple(mask: *const GLubyte);
        fn glPopAttrib();
        fn glPopClientAttrib();
        fn glPopMatrix();
        fn glPopName();
        fn glPrioritizeTextures(n: GLsizei, textures: *const GLuint, priorities: *const GLfloat);
        fn glPushAttrib(mask: GLbitfield);
        fn glPushClientAttrib(mask: GLbitfield);
        fn glPushMatrix();
        fn glPushName(name: GLuint);
        fn glRasterPos2d(x: GLdouble, y: GLdouble);
        fn glRasterPos2dv(v: *const GLdouble);
        fn glRasterPos2f(x: GLfloat, y: GLfloat);
        fn glRasterPos2fv(v: *const GLfloat);
        fn glRasterPos2i(x: GLint, y: GLint);
        fn glRasterPos2iv(v: *const GLint);
        fn glRasterPos2s(x: GLshort, y: GLshort);
        fn glRasterPos2sv(v: *const GLshort);
        fn glRasterPos3d(x: GLdouble, y: GLdouble, z: GLdouble);
        fn glRasterPos3dv(v: *const GLdouble);
        fn glRasterPos3f(x: GLfloat, y: GLfloat, z: GLfloat);
        fn glRasterPos3fv(v: *const GLfloat);
        fn glRasterPos3i(x: GLint, y: GLint, z: GLint);
        fn glRasterPos3iv(v: *const GLint);
        fn glRasterPos3s(x: GLshort, y: GLshort, z: GLshort);
        fn glRasterPos3sv(v: *const GLshort);
        fn glRasterPos4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn glRasterPos4dv(v: *const GLdouble);
        fn glRasterPos4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        fn glRasterPos4fv(v: *const GLfloat);
        fn glRasterPos4i(x: GLint, y: GLint, z: GLint, w: GLint);
        fn glRasterPos4iv(v: *const GLint);
        fn glRasterPos4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
        fn glRasterPos4sv(v: *const GLshort);
        fn glReadBuffer(src: GLenum);
        fn glReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum, pixels: *mut GLvoid);
        fn glRectd(x1: GLdouble, y1: GLdouble, x2: GLdouble, y2: GLdouble);
        fn glRectdv(v1: *const GLdouble, v2: *const GLdouble);
        fn glRectf(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat);
        fn glRectfv(v1: *const GLfloat, v2: *const GLfloat);
        fn glRecti(x1: GLint, y1: GLint, x2: GLint, y2: GLint);
        fn glRectiv(v1: *const GLint, v2: *const GLint);
        fn glRects(x1: GLshort, y1: GLshort, x2: GLshort, y2: GLshort);
        fn glRectsv(v1: *const GLshort, v2: *const GLshort);
        fn glRenderMode(mode: GLenum) -> GLint;
        fn glRotated(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble);
        fn glRotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat);
        fn glScaled(x: GLdouble, y: GLdouble, z: GLdouble);
        fn glScalef(x: GLfloat, y: GLfloat, z: GLfloat);
        fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        fn glSelectBuffer(size: GLsizei, buffer: *mut GLuint);
        fn glShadeModel(mode: GLenum);
        fn glStencilFunc(func: GLenum, reference: GLint, mask: GLuint);
        fn glStencilMask(mask: GLuint);
        fn glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum);
        fn glTexCoord1d(s: GLdouble);
        fn glTexCoord1dv(v: *const GLdouble);
        fn glTexCoord1f(s: GLfloat);
        fn glTexCoord1fv(v: *const GLfloat);
        fn glTexCoord1i(s: GLint);
        fn glTexCoord1iv(v: *const GLint);
        fn glTexCoord1s(s: GLshort);
        fn glTexCoord1sv(v: *const GLshort);
        fn glTexCoord2d(s: GLdouble, t: GLdouble);
        fn glTexCoord2dv(v: *const GLdouble);
        fn glTexCoord2f(s: GLfloat, t: GLfloat);
        fn glTexCoord2fv(v: *const GLfloat);
        fn glTexCoord2i(s: GLint, t: GLint);
        fn glTexCoord2iv(v: *const GLint);
        fn glTexCoord2s(s: GLshort, t: GLshort);
        fn glTexCoord2sv(v: *const GLshort);
        fn glTexCoord3d(s: GLdouble, t: GLdouble, r: GLdouble);
        fn glTexCoord3dv(v: *const GLdouble);
        fn glTexCoord3f(s: GLfloat, t: GLfloat, r: GLfloat);
        fn glTexCoord3fv(v: *const GLfloat);
        fn glTexCoord3i(s: GLint, t: GLint, r: GLint);
        fn glTexCoord3iv(v: *const GLint);
        fn glTexCoord3s(s: GLshort, t: GLshort, r: GLshort);
        fn glTexCoord3sv(v: *const GLshort);
        fn glTexCoord4d(s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble);
        fn glTexCoord4dv(v: *const GLdouble);
        fn glTexCoord4f(s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat);
        fn glTexCoord4fv(v: *const GLfloat);
        fn glTexCoord4i(s: GLint, t: GLint, r: GLint, q: GLint);
        fn glTexCoord4iv(v: *const GLint);
        fn glTexCoord4s(s: GLshort, t: GLshort, r: GLshort, q: GLshort);
        fn glTexCoord4sv(v: *const GLshort);
        fn glTexCoordPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const GLvoid);
        fn glTexEnvf(target: GLenum, pname: GLenum, param: GLfloat);
        fn glTexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat);
        fn glTexEnvi(target: GLenum, pname: GLenum, param: GLint);
        fn glTexEnviv(target: GLenum, pname: GLenum, params: *const GLint);
        fn glTexGend(coord: GLenum, pname: GLenum, param: GLdouble);
        fn glTexGendv(coord: GLenum, pname: GLenum, params: *const GLdouble);
        fn glTexGenf(coord: GLenum, pname: GLenum, param: GLfloat);
        fn glTexGenfv(coord: GLenum, pname: GLenum, params: *const GLfloat);
        fn glTexGeni(coord: GLenum, pname: GLenum, param: GLint);
        fn glTexGeniv(coord: GLenum, pname: GLenum, params: *const GLint);
        fn glTexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, ty: GLenum, pixels: *const GLvoid);
        fn glTexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, ty: GLenum, pixels: *const GLvoid);
        fn glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat);
        fn glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat);
        fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint);
        fn glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint);
        fn glTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, ty: GLenum, pixels: *const GLvoid);
        fn glTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, ty: GLenum, pixels: *const GLvoid);
        fn glTranslated(x: GLdouble, y: GLdouble, z: GLdouble);
        fn glTranslatef(x: GLfloat, y: GLfloat, z: GLfloat);
        fn glVertex2d(x: GLdouble, y: GLdouble);
        fn glVertex2dv(v: *const GLdouble);
        fn glVertex2f(x: GLfloat, y: GLfloat);
        fn glVertex2fv(v: *const GLfloat);
        fn glVertex2i(x: GLint, y: GLint);
        fn glVertex2iv(v: *const GLint);
        fn glVertex2s(x: GLshort, y: GLshort);
        fn glVertex2sv(v: *const GLshort);
        fn glVertex3d(x: GLdouble, y: GLdouble, z: GLdouble);
        fn glVertex3dv(v: *const GLdouble);
        fn glVertex3f(x: GLfloat, y: GLfloat, z: GLfloat);
        fn glVertex3fv(v: *const GLfloat);
        fn glVertex3i(x: GLint, y: GLint, z: GLint);
        fn glVertex3iv(v: *const GLint);
        fn glVertex3s(x: GLshort, y: GLshort, z: GLshort);
        fn glVertex3sv(v: *const GLshort);
        fn glVertex4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble);
        fn glVertex4dv(v: *const GLdouble);
        fn glVertex4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat);
        fn glVertex4fv(v: *const GLfloat);
        fn glVertex4i(x: GLint, y: GLint, z: GLint, w: GLint);
        fn glVertex4iv(v: *const GLint);
        fn glVertex4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort);
        fn glVertex4sv(v: *const GLshort);
        fn glVertexPointer(size: GLint, ty: GLenum, stride: GLsizei, pointer: *const GLvoid);
        fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei);
    }
    ext {
        ["GL_VERSION_1_3"] fn glActiveTexture(texture: GLenum);
        ["GL_ARB_multitexture"] fn glActiveTextureARB(texture: GLenum);
        ["GL_VERSION_2_0"] fn glAttachShader(program: GLuint, shader: GLuint);
        ["GL_VERSION_1_5"] fn glBeginQuery(target: GLenum, id: GLuint);
        ["GL_VERSION_2_0"] fn glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar);
        ["GL_VERSION_1_5"] fn glBindBuffer(target: GLenum, buffer: GLuint);
        ["GL_ARB_vertex_buffer_object"] fn glBindBufferARB(target: GLenum, buffer: GLuint);
        ["GL_VERSION_3_0 GL_ARB_uniform_buffer_object"] fn glBindBufferBase(target: GLenum, index: GLuint, buffer: GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glBindFramebuffer(target: GLenum, framebuffer: GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glBindRenderbuffer(target: GLenum, renderbuffer: GLuint);
        ["GL_VERSION_3_0 GL_ARB_vertex_array_object"] fn glBindVertexArray(array: GLuint);
        ["GL_VERSION_1_4 GL_ARB_imaging"] fn glBlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat);
        ["GL_VERSION_1_4 GL_ARB_imaging"] fn glBlendEquation(mode: GLenum);
        ["GL_VERSION_1_4"] fn glBlendFuncSeparate(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum, dfactorAlpha: GLenum);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glBlitFramebuffer(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum);
        ["GL_VERSION_1_5"] fn glBufferData(target: GLenum, size: GLsizeiptr, data: *const GLvoid, usage: GLenum);
        ["GL_ARB_vertex_buffer_object"] fn glBufferDataARB(target: GLenum, size: GLsizeiptr, data: *const GLvoid, usage: GLenum);
        ["GL_VERSION_1_5"] fn glBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const GLvoid);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glCheckFramebufferStatus(target: GLenum) -> GLenum = 0;
        ["GL_EXT_framebuffer_object"] fn glCheckFramebufferStatusEXT(target: GLenum) -> GLenum = 0;
        ["GL_VERSION_3_2 GL_ARB_sync"] fn glClientWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum = GL_WAIT_FAILED;
        ["GL_VERSION_2_0"] fn glCompileShader(shader: GLuint);
        ["GL_VERSION_1_3"] fn glCompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, imageSize: GLsizei, data: *const GLvoid);
        ["GL_VERSION_1_2"] fn glCopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        ["GL_EXT_copy_texture"] fn glCopyTexSubImage3DEXT(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei);
        ["GL_VERSION_2_0"] fn glCreateProgram() -> GLuint;
        ["GL_VERSION_2_0"] fn glCreateShader(ty: GLenum) -> GLuint;
        ["GL_VERSION_1_5"] fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint);
        ["GL_VERSION_2_0"] fn glDeleteProgram(program: GLuint);
        ["GL_VERSION_1_5"] fn glDeleteQueries(n: GLsizei, ids: *const GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glDeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint);
        ["GL_VERSION_2_0"] fn glDeleteShader(shader: GLuint);
        ["GL_VERSION_3_2 GL_ARB_sync"] fn glDeleteSync(sync: GLsync);
        ["GL_VERSION_3_0 GL_ARB_vertex_array_object"] fn glDeleteVertexArrays(n: GLsizei, arrays: *const GLuint);
        ["GL_VERSION_2_0"] fn glDetachShader(program: GLuint, shader: GLuint);
        ["GL_VERSION_2_0"] fn glDisableVertexAttribArray(index: GLuint);
        ["GL_VERSION_3_1"] fn glDrawArraysInstanced(mode: GLenum, first: GLint, count: GLsizei, instancecount: GLsizei);
        ["GL_VERSION_2_0"] fn glDrawBuffers(n: GLsizei, bufs: *const GLenum);
        ["GL_VERSION_3_1"] fn glDrawElementsInstanced(mode: GLenum, count: GLsizei, ty: GLenum, indices: *const GLvoid, instancecount: GLsizei);
        ["GL_VERSION_1_2"] fn glDrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, ty: GLenum, indices: *const GLvoid);
        ["GL_VERSION_2_0"] fn glEnableVertexAttribArray(index: GLuint);
        ["GL_VERSION_1_5"] fn glEndQuery(target: GLenum);
        ["GL_VERSION_3_2 GL_ARB_sync"] fn glFenceSync(condition: GLenum, flags: GLbitfield) -> GLsync;
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glFramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glFramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint);
        ["GL_VERSION_1_5"] fn glGenBuffers(n: GLsizei, buffers: *mut GLuint);
        ["GL_ARB_vertex_buffer_object"] fn glGenBuffersARB(n: GLsizei, buffers: *mut GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint);
        ["GL_VERSION_1_5"] fn glGenQueries(n: GLsizei, ids: *mut GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint);
        ["GL_VERSION_3_0 GL_ARB_vertex_array_object"] fn glGenVertexArrays(n: GLsizei, arrays: *mut GLuint);
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glGenerateMipmap(target: GLenum);
        ["GL_VERSION_2_0"] fn glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint = -1;
        ["GL_VERSION_1_5"] fn glGetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint);
        ["GL_VERSION_2_0"] fn glGetProgramInfoLog(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
        ["GL_VERSION_2_0"] fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint);
        ["GL_VERSION_1_5"] fn glGetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint);
        ["GL_VERSION_2_0"] fn glGetShaderInfoLog(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar);
        ["GL_VERSION_2_0"] fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint);
        ["GL_VERSION_3_0"] fn glGetStringi(name: GLenum, index: GLuint) -> *const GLubyte;
        ["GL_VERSION_3_1 GL_ARB_uniform_buffer_object"] fn glGetUniformBlockIndex(program: GLuint, uniformBlockName: *const GLchar) -> GLuint = GL_INVALID_INDEX;
        ["GL_VERSION_2_0"] fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint = -1;
        ["GL_VERSION_1_5"] fn glIsBuffer(buffer: GLuint) -> GLboolean;
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glIsFramebuffer(framebuffer: GLuint) -> GLboolean;
        ["GL_VERSION_2_0"] fn glIsProgram(program: GLuint) -> GLboolean;
        ["GL_VERSION_2_0"] fn glIsShader(shader: GLuint) -> GLboolean;
        ["GL_VERSION_3_2 GL_ARB_sync"] fn glIsSync(sync: GLsync) -> GLboolean;
        ["GL_VERSION_3_0 GL_ARB_vertex_array_object"] fn glIsVertexArray(array: GLuint) -> GLboolean;
        ["GL_VERSION_2_0"] fn glLinkProgram(program: GLuint);
        ["GL_VERSION_1_5"] fn glMapBuffer(target: GLenum, access: GLenum) -> *mut GLvoid;
        ["GL_ARB_vertex_buffer_object"] fn glMapBufferARB(target: GLenum, access: GLenum) -> *mut GLvoid;
        ["GL_VERSION_3_0 GL_ARB_map_buffer_range"] fn glMapBufferRange(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut GLvoid;
        ["GL_VERSION_3_0 GL_ARB_framebuffer_object"] fn glRenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei);
        ["GL_VERSION_2_0"] fn glShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint);
        ["GL_VERSION_1_2"] fn glTexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, ty: GLenum, pixels: *const GLvoid);
        ["GL_VERSION_2_0"] fn glUniform1f(location: GLint, v0: GLfloat);
        ["GL_VERSION_2_0"] fn glUniform1i(location: GLint, v0: GLint);
        ["GL_VERSION_2_0"] fn glUniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat);
        ["GL_VERSION_2_0"] fn glUniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat);
        ["GL_VERSION_1_5"] fn glUnmapBuffer(target: GLenum) -> GLboolean;
        ["GL_ARB_vertex_buffer_object"] fn glUnmapBufferARB(target: GLenum) -> GLboolean;
        ["GL_VERSION_2_0"] fn glUseProgram(program: GLuint);
        ["GL_VERSION_3_3"] fn glVertexAttribDivisor(index: GLuint, divisor: GLuint);
        ["GL_ARB_instanced_arrays"] fn glVertexAttribDivisorARB(index: GLuint, divisor: GLuint);
        ["GL_VERSION_2_0"] fn glVertexAttribPointer(index: GLuint, size: GLint, ty: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const GLvoid);
        ["GL_VERSION_3_2 GL_ARB_sync"] fn glWaitSync(sync: GLsync, flags: GLbitfield, timeout: GLuint64);
        ["WGL_ARB_pixel_format"] fn wglChoosePixelFormatARB(hdc: HDC, iattribs: *const INT, fattribs: *const GLfloat, max: UINT, formats: *mut INT, count: *mut UINT) -> BOOL;
        ["WGL_ARB_create_context"] fn wglCreateContextAttribsARB(hdc: HDC, share: HGLRC, attribs: *const INT) -> HGLRC;
        ["WGL_ARB_pbuffer"] fn wglCreatePbufferARB(hdc: HDC, format: INT, width: INT, height: INT, attribs: *const INT) -> HPBUFFERARB;
        ["WGL_ARB_pbuffer"] fn wglDestroyPbufferARB(pbuffer: HPBUFFERARB) -> BOOL;
        ["WGL_ARB_extensions_string"] fn wglGetExtensionsStringARB(hdc: HDC) -> LPCSTR;
        ["WGL_EXT_extensions_string"] fn wglGetExtensionsStringEXT() -> LPCSTR;
        ["WGL_ARB_pbuffer"] fn wglGetPbufferDCARB(pbuffer: HPBUFFERARB) -> HDC;
        ["WGL_EXT_swap_control"] fn wglGetSwapIntervalEXT() -> INT;
        ["WGL_ARB_make_current_read"] fn wglMakeContextCurrentARB(draw: HDC, read: HDC, context: HGLRC) -> BOOL;
        ["WGL_ARB_pbuffer"] fn wglReleasePbufferDCARB(pbuffer: HPBUFFERARB, hdc: HDC) -> INT;
        ["WGL_EXT_swap_control"] fn wglSwapIntervalEXT(interval: INT) -> BOOL;
    }
}
