// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling System
//!
//! Re-exports the error types defined in `pierre-core`. Every fallible
//! operation in the service returns [`AppResult`], and [`AppError`] converts
//! into an HTTP response with a `{"error": {"code", "message"}}` body.
//!
//! | Code | HTTP status |
//! |---|---|
//! | `RESOURCE_NOT_FOUND` | 404 |
//! | everything else | 500 |

pub use pierre_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse, ErrorResponseDetails};
