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

//! # Abacus FFI
//!
//! **C-Compatible Bindings for the Abacus Calculator Core.**
//!
//! This crate serves as the bridge between the Rust core of Abacus and
//! external environments such as C, C++, Swift, Python, C#, and Java. It
//! exposes a stable, ABI-compliant interface designed around **Opaque
//! Pointers** (Handles) and strict **resource management**.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: The `Calculator` is hidden behind a raw pointer.
//!     The host application never accesses its representation directly; it
//!     uses the exported operation functions.
//! 2.  **Explicit Lifecycle**: Memory is manually managed. Every
//!     `createCalculator` call must have a corresponding `destroyCalculator`
//!     call. Failing to do so will result in a memory leak.
//! 3.  **Fail-Fast Safety**: To protect the integrity of the host
//!     application, passing `NULL` to an operation results in an immediate
//!     process abort (panic) rather than undefined behavior or stack
//!     unwinding. `destroyCalculator(NULL)` is the one tolerated exception
//!     and is a no-op, matching `free(NULL)`.
//!
//! The crate builds as both `cdylib` and `staticlib`, so per-target export
//! decoration (e.g. `__declspec(dllexport)` on Windows) is handled by the
//! Rust toolchain rather than by hand-written macros.

pub mod calculator;
