//! Dark mode initialization and toggle.
//!
//! Reads the persisted flag from local storage and toggles the `dark` class
//! on the `<html>` element, swapping the toggle button's glyph to match.
//! Toggle writes the flipped flag back before applying it.
//!
//! TRADE-OFFS
//! ==========
//! The flag is a bare `"true"`/`"false"` string with no versioning. Anything
//! else, including an absent key, reads as light mode.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::context::AppContext;
use crate::error::AppError;
use crate::host::Host;

pub const DARK_ICON: &str = "\u{2600}\u{fe0f}";
pub const LIGHT_ICON: &str = "\u{1f319}";

/// Glyph shown on the toggle button: a sun while dark, a moon while light.
pub fn icon(dark: bool) -> &'static str {
    if dark { DARK_ICON } else { LIGHT_ICON }
}

/// Read the persisted preference.
///
/// # Errors
///
/// Propagates storage errors.
pub fn read_preference<H: Host>(ctx: &AppContext<H>) -> Result<bool, AppError> {
    let stored = ctx.host().storage_get(&ctx.config().theme_storage_key)?;
    Ok(stored.as_deref() == Some("true"))
}

/// Apply the theme class and icon. A missing icon element is skipped.
///
/// # Errors
///
/// Fails when the root class cannot be changed.
pub fn apply<H: Host>(ctx: &AppContext<H>, dark: bool) -> Result<(), AppError> {
    let config = ctx.config();
    ctx.host().set_root_class(&config.dark_class, dark)?;
    match ctx.host().set_text(&config.theme_icon_id, icon(dark)) {
        Ok(()) | Err(AppError::MissingElement(_)) => Ok(()),
        Err(err) => Err(err),
    }
}

/// Flip the persisted flag, store it, and apply it. Returns the new value.
///
/// # Errors
///
/// Propagates storage and DOM errors.
pub fn toggle<H: Host>(ctx: &AppContext<H>) -> Result<bool, AppError> {
    let next = !read_preference(ctx)?;
    ctx.host()
        .storage_set(&ctx.config().theme_storage_key, if next { "true" } else { "false" })?;
    apply(ctx, next)?;
    Ok(next)
}

/// Apply the persisted preference once at startup.
///
/// # Errors
///
/// Propagates storage and DOM errors.
pub fn init_from_storage<H: Host>(ctx: &AppContext<H>) -> Result<bool, AppError> {
    let dark = read_preference(ctx)?;
    apply(ctx, dark)?;
    Ok(dark)
}
