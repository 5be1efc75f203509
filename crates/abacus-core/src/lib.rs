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

//! # Abacus Core
//!
//! The stateless integer calculator at the heart of the Abacus library,
//! together with the numeric trait plumbing it is generic over. Higher-level
//! crates (most notably the C-ABI adapter in `abacus-ffi`) build on the
//! primitives defined here.
//!
//! ## Modules
//!
//! - `calculator`: The `Calculator<T>` value type providing the four integer
//!   operations (add, subtract, multiply, divide) with deterministic
//!   wraparound semantics and a silent zero sentinel for division by zero.
//! - `num`: By-value arithmetic traits (`WrappingAddVal`, `WrappingSubVal`,
//!   `WrappingMulVal`, `CheckedDivVal`) implemented uniformly for all core
//!   integer types, mirroring the intrinsic methods without reference-taking
//!   APIs.
//!
//! ## Purpose
//!
//! Keeping the arithmetic behind small, uniform traits lets the calculator
//! stay generic over integer width while every operation compiles down to a
//! single machine instruction (plus one branch for division).
//!
//! Refer to each module for detailed APIs and examples.

pub mod calculator;
pub mod num;
