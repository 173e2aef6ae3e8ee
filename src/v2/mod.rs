/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

mod macros;
mod parsers;
pub mod api;
pub mod client;
pub mod errors;
pub mod external_authorization;
pub mod generator;
pub mod group;
pub mod learner_report;
pub mod learning_module;
pub mod permission;
pub mod properties;
pub mod tag;
pub mod timezone;
pub mod user;

pub use api::*;
pub use client::*;
pub use errors::*;
pub use external_authorization::*;
pub use generator::*;
pub use group::*;
pub use learner_report::*;
pub use learning_module::*;
pub use permission::*;
pub use properties::*;
pub use tag::*;
pub use timezone::*;
pub use user::*;
