// SPDX-License-Identifier: MPL-2.0
//! Localized strings.
//!
//! Translations are Fluent `.ftl` files embedded at build time. The active
//! locale comes from the `--lang` flag, then the config file, then the OS,
//! then `en-US`. Unknown keys render as `MISSING: <key>`.

pub mod fluent;

pub use fluent::I18n;
