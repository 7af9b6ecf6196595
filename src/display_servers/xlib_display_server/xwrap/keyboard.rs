//! Xlib calls related to the keyboard.
use super::XWrap;
use crate::config::Config;
use crate::utils::xkeysym_lookup::{self, XKeysym};
use std::os::raw::c_ulong;
use x11_dl::keysym;
use x11_dl::xlib;

impl XWrap {
    /// Grabs a keysym with and without caps lock, so that the lock never
    /// swallows a command.
    // `XGrabKey`: https://tronche.com/gui/x/xlib/input/XGrabKey.html
    pub fn grab_keys(&self, keysym: XKeysym, modifiers: u32) {
        let code = unsafe { (self.xlib.XKeysymToKeycode)(self.display, c_ulong::from(keysym)) };
        if code == 0 {
            return;
        }
        for m in [modifiers, modifiers | xlib::LockMask] {
            unsafe {
                (self.xlib.XGrabKey)(
                    self.display,
                    i32::from(code),
                    m,
                    self.root,
                    1,
                    xlib::GrabModeAsync,
                    xlib::GrabModeAsync,
                );
            }
        }
    }

    pub fn ungrab_all_keys(&self) {
        unsafe {
            (self.xlib.XUngrabKey)(
                self.display,
                xlib::AnyKey,
                xlib::AnyModifier,
                self.root,
            );
        }
    }

    /// Releases every grab and grabs each configured binding plus the
    /// count digits.
    pub fn reset_grabs(&self, config: &Config) {
        log::debug!("grabbing keys");
        self.ungrab_all_keys();
        for bind in &config.keybinds {
            if let Some(sym) = xkeysym_lookup::into_keysym(&bind.key) {
                self.grab_keys(sym, xkeysym_lookup::into_modmask(&bind.modifier));
            }
        }
        for bind in &config.operators {
            if let Some(sym) = xkeysym_lookup::into_keysym(&bind.key) {
                self.grab_keys(sym, xkeysym_lookup::into_modmask(&bind.modifier));
            }
        }
        for bind in &config.motions {
            if let Some(sym) = xkeysym_lookup::into_keysym(&bind.key) {
                self.grab_keys(sym, xkeysym_lookup::into_modmask(&bind.modifier));
            }
        }
        let count_mask = xkeysym_lookup::into_modmask(&config.count_modifier);
        for digit in keysym::XK_1..=keysym::XK_9 {
            self.grab_keys(digit, count_mask);
        }
    }

    /// Converts a keycode to a keysym.
    // `XkbKeycodeToKeysym`: https://linux.die.net/man/3/xkbkeycodetokeysym
    #[must_use]
    pub fn keycode_to_keysym(&self, keycode: u32) -> XKeysym {
        let sym = unsafe { (self.xlib.XkbKeycodeToKeysym)(self.display, keycode as u8, 0, 0) };
        sym as XKeysym
    }
}
