// SPDX-License-Identifier: MPL-2.0
//! User interface building blocks: design tokens, theming and the toast
//! notification system.

pub mod design_tokens;
pub mod notifications;
pub mod theming;
