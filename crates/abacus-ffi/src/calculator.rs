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

//! # Foreign Function Interface (FFI) for the Abacus Calculator
//!
//! This module provides the C-compatible API over `Calculator<c_int>`. It is
//! the only place where the integer width of the exported surface is fixed:
//! `c_int`, a 32-bit signed integer on every supported target.
//!
//! ## Usage Lifecycle
//!
//! 1.  **Instantiation**: Create a calculator using `createCalculator`.
//! 2.  **Operation**: Call `add`, `subtract`, `multiply`, or `divide` with
//!     the handle and two operands. Each call returns synchronously.
//! 3.  **Cleanup**: Explicitly free the calculator using `destroyCalculator`
//!     when it is no longer needed. The handle is invalid afterwards.
//!
//! ## Safety
//!
//! This module uses `unsafe` code to interact with raw pointers. Callers
//! **must** ensure:
//!
//! * **Pointer Validity**: Handles must be allocated by `createCalculator`.
//! * **Ownership**: `destroyCalculator` invalidates the handle immediately;
//!   using it afterwards is undefined behavior the caller must prevent.
//! * **Null Pointers**: Passing `NULL` to an operation results in a panic.
//!
//! ## Exported API
//!
//! ### Lifecycle
//! * `createCalculator`
//! * `destroyCalculator`
//!
//! ### Operations
//! * `add`
//! * `subtract`
//! * `multiply`
//! * `divide` (returns `0` when the divisor is `0` — a preserved
//!   compatibility quirk, not a signaled failure)

use abacus_core::calculator::Calculator;
use libc::c_int;

/// Creates a new calculator instance and transfers sole ownership of the
/// returned handle to the caller.
#[export_name = "createCalculator"]
pub extern "C" fn create_calculator() -> *mut Calculator<c_int> {
    let calculator = Calculator::<c_int>::new();
    Box::into_raw(Box::new(calculator))
}

/// Frees the memory allocated for the calculator. Passing `NULL` is a no-op.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `createCalculator`, and that it is not used again
/// after this call.
#[export_name = "destroyCalculator"]
pub unsafe extern "C" fn destroy_calculator(ptr: *mut Calculator<c_int>) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Macro for generating the exported binary operation functions. Each export
/// forwards to the corresponding `Calculator` method.
macro_rules! generate_binary_op {
    ($fn_name:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        ///
        /// # Panics
        ///
        /// This function will panic if called with a null pointer.
        ///
        /// # Safety
        ///
        /// This function is unsafe because it dereferences a raw pointer.
        /// The caller must ensure that the pointer is valid and was
        /// allocated by `createCalculator`.
        #[no_mangle]
        pub unsafe extern "C" fn $fn_name(
            ptr: *const Calculator<c_int>,
            a: c_int,
            b: c_int,
        ) -> c_int {
            assert!(
                !ptr.is_null(),
                "called `{}` with null pointer",
                stringify!($fn_name)
            );

            let calculator = &*ptr;
            calculator.$method(a, b)
        }
    };
}

generate_binary_op!(add, add, "Returns the sum of `a` and `b`.");
generate_binary_op!(subtract, subtract, "Returns the difference of `a` and `b`.");
generate_binary_op!(multiply, multiply, "Returns the product of `a` and `b`.");
generate_binary_op!(
    divide,
    divide,
    "Returns the truncating quotient of `a` and `b`, or `0` when `b` is `0`."
);
