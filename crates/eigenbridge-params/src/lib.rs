// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Eigenbridge Params
//!
//! **The configuration record of an iterative eigensolver, addressable by integer tag.**
//!
//! Foreign callers cannot name the fields of a Rust struct. Instead every field
//! carries a stable integer label ([`field::FieldTag`]) and is read and written
//! through a generic value slot ([`value::FieldValue`]).
//!
//! ## Architecture
//!
//! * **`params`**: The record itself (`EigenParams`) and its nested sub-records.
//! * **`field`**: The published label table and the value kind of each label.
//! * **`value`**: The generic value slot.
//! * **`access`**: `set_member` / `get_member` with range and length checks.
//! * **`handle`**: An owning handle; callbacks see a borrowed reference instead.
//! * **`preset`**: Named solver presets that fill in dependent parameters.
//! * **`report`**: A printable table of every field.
//! * **`error`**: The error type and its numeric status codes.
//!
//! ## Design Philosophy
//!
//! 1.  **Explicit Failure**: A wrong label, an out-of-range value, or a value of
//!     the wrong kind is reported as an error. Nothing is reinterpreted.
//! 2.  **Single Field Writes**: A successful `set_member` changes exactly the
//!     addressed field.
//! 3.  **Stable Labels**: Label numbers never change between releases.

pub mod access;
pub mod callback;
pub mod error;
pub mod field;
pub mod handle;
pub mod index;
pub mod method;
pub mod params;
pub mod preset;
pub mod report;
pub mod value;
