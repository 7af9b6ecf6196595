//! Maps key and modifier names from the config file onto X types.
use x11_dl::keysym;
use x11_dl::xlib;

pub type XKeysym = u32;
pub type ModMask = u32;

/// Strips the lock modifiers so that caps lock and num lock never stop
/// a binding from matching.
#[must_use]
pub fn clean_mask(mask: ModMask) -> ModMask {
    mask & !(xlib::Mod2Mask | xlib::LockMask)
        & (xlib::ShiftMask
            | xlib::ControlMask
            | xlib::Mod1Mask
            | xlib::Mod3Mask
            | xlib::Mod4Mask
            | xlib::Mod5Mask)
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = 0;
    for key in keys {
        mask |= into_mod(key);
    }
    clean_mask(mask)
}

#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key {
        "Shift" => xlib::ShiftMask,
        "Control" => xlib::ControlMask,
        "Mod1" | "Alt" => xlib::Mod1Mask,
        // Mod2 is num lock; it is deliberately ignored.
        "Mod3" => xlib::Mod3Mask,
        "Mod4" | "Super" => xlib::Mod4Mask,
        "Mod5" => xlib::Mod5Mask,
        _ => 0,
    }
}

/// Resolves a key name to its keysym. Key names follow the X keysym
/// names, e.g. "Return", "bracketleft", "a", "1".
#[must_use]
pub fn into_keysym(key: &str) -> Option<XKeysym> {
    let sym = match key {
        "a" => keysym::XK_a,
        "b" => keysym::XK_b,
        "c" => keysym::XK_c,
        "d" => keysym::XK_d,
        "e" => keysym::XK_e,
        "f" => keysym::XK_f,
        "g" => keysym::XK_g,
        "h" => keysym::XK_h,
        "i" => keysym::XK_i,
        "j" => keysym::XK_j,
        "k" => keysym::XK_k,
        "l" => keysym::XK_l,
        "m" => keysym::XK_m,
        "n" => keysym::XK_n,
        "o" => keysym::XK_o,
        "p" => keysym::XK_p,
        "q" => keysym::XK_q,
        "r" => keysym::XK_r,
        "s" => keysym::XK_s,
        "t" => keysym::XK_t,
        "u" => keysym::XK_u,
        "v" => keysym::XK_v,
        "w" => keysym::XK_w,
        "x" => keysym::XK_x,
        "y" => keysym::XK_y,
        "z" => keysym::XK_z,
        "0" => keysym::XK_0,
        "1" => keysym::XK_1,
        "2" => keysym::XK_2,
        "3" => keysym::XK_3,
        "4" => keysym::XK_4,
        "5" => keysym::XK_5,
        "6" => keysym::XK_6,
        "7" => keysym::XK_7,
        "8" => keysym::XK_8,
        "9" => keysym::XK_9,
        "Return" => keysym::XK_Return,
        "space" => keysym::XK_space,
        "Escape" => keysym::XK_Escape,
        "Tab" => keysym::XK_Tab,
        "BackSpace" => keysym::XK_BackSpace,
        "Delete" => keysym::XK_Delete,
        "Home" => keysym::XK_Home,
        "End" => keysym::XK_End,
        "Up" => keysym::XK_Up,
        "Down" => keysym::XK_Down,
        "Left" => keysym::XK_Left,
        "Right" => keysym::XK_Right,
        "grave" => keysym::XK_grave,
        "minus" => keysym::XK_minus,
        "equal" => keysym::XK_equal,
        "period" => keysym::XK_period,
        "comma" => keysym::XK_comma,
        "slash" => keysym::XK_slash,
        "semicolon" => keysym::XK_semicolon,
        "apostrophe" => keysym::XK_apostrophe,
        "backslash" => keysym::XK_backslash,
        "bracketleft" => keysym::XK_bracketleft,
        "bracketright" => keysym::XK_bracketright,
        "F1" => keysym::XK_F1,
        "F2" => keysym::XK_F2,
        "F3" => keysym::XK_F3,
        "F4" => keysym::XK_F4,
        "F5" => keysym::XK_F5,
        "F6" => keysym::XK_F6,
        "F7" => keysym::XK_F7,
        "F8" => keysym::XK_F8,
        "F9" => keysym::XK_F9,
        "F10" => keysym::XK_F10,
        "F11" => keysym::XK_F11,
        "F12" => keysym::XK_F12,
        _ => {
            log::warn!("unknown key name: {}", key);
            return None;
        }
    };
    Some(sym)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_modifiers_never_survive_cleaning() {
        let mask = xlib::Mod4Mask | xlib::Mod2Mask | xlib::LockMask;
        assert_eq!(clean_mask(mask), xlib::Mod4Mask);
    }

    #[test]
    fn modifier_names_compose() {
        let mask = into_modmask(&["Mod4".to_owned(), "Shift".to_owned()]);
        assert_eq!(mask, xlib::Mod4Mask | xlib::ShiftMask);
    }

    #[test]
    fn unknown_key_names_resolve_to_none() {
        assert_eq!(into_keysym("NotAKey"), None);
        assert_eq!(into_keysym("q"), Some(keysym::XK_q));
    }
}
