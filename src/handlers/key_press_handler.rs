//! The key input automaton.
//!
//! Composed commands are typed as operator, count, motion; a missing
//! count means once, the way vim treats it. Direct keybinds are checked
//! on every press, whatever state the automaton is in.
use crate::command::Command;
use crate::config::Config;
use crate::display_servers::DisplayServer;
use crate::manager::Manager;
use crate::models::{Mode, Motion, Operator, PressState, Replay};
use crate::utils::xkeysym_lookup::{self, clean_mask, ModMask, XKeysym};
use x11_dl::keysym;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Feeds one key press through the automaton.
    /// Returns true if the changes need to be rendered.
    pub fn key_press_handler(&mut self, mask: ModMask, sym: XKeysym) -> bool {
        let clean = clean_mask(mask);
        let mut needs_update = false;

        match self.state.press_state {
            PressState::Operator => {
                if let Some(op) = match_operator(&self.config, sym, clean, self.state.mode) {
                    self.state.pending_op = Some(op);
                    self.state.press_state = PressState::Count;
                }
            }
            PressState::Count => {
                let count_mask = xkeysym_lookup::into_modmask(&self.config.count_modifier);
                if clean == count_mask && (keysym::XK_1..=keysym::XK_9).contains(&sym) {
                    self.state.count = (sym - keysym::XK_0) as i32;
                    self.state.press_state = PressState::Motion;
                } else {
                    // No count was given; treat the key as a motion.
                    needs_update |= self.try_motion(sym, clean);
                }
            }
            PressState::Motion => {
                needs_update |= self.try_motion(sym, clean);
            }
        }

        if let Some(command) = match_keybind(&self.config, sym, clean, self.state.mode) {
            needs_update |= self.command_handler(&command);
            if command != Command::Replay {
                self.state.replay = Some(Replay::Command(command));
            }
        }
        needs_update
    }

    fn try_motion(&mut self, sym: XKeysym, clean: ModMask) -> bool {
        let Some(motion) = match_motion(&self.config, sym, clean) else {
            return false;
        };
        let Some(op) = self.state.pending_op else {
            return false;
        };
        let count = self.state.count;
        let needs_update = self.run_operator(op, motion, count);
        self.state.replay = Some(Replay::Triple { op, motion, count });
        self.state.press_state = PressState::Operator;
        // Reset so that a plain operator-motion pair means once.
        self.state.count = 1;
        needs_update
    }
}

fn match_operator(config: &Config, sym: XKeysym, clean: ModMask, mode: Mode) -> Option<Operator> {
    config
        .operators
        .iter()
        .find(|row| {
            row.mode == mode
                && xkeysym_lookup::into_keysym(&row.key) == Some(sym)
                && xkeysym_lookup::into_modmask(&row.modifier) == clean
        })
        .map(|row| row.op)
}

fn match_motion(config: &Config, sym: XKeysym, clean: ModMask) -> Option<Motion> {
    config
        .motions
        .iter()
        .find(|row| {
            xkeysym_lookup::into_keysym(&row.key) == Some(sym)
                && xkeysym_lookup::into_modmask(&row.modifier) == clean
        })
        .map(|row| row.motion)
}

fn match_keybind(config: &Config, sym: XKeysym, clean: ModMask, mode: Mode) -> Option<Command> {
    config
        .keybinds
        .iter()
        .find(|row| {
            row.mode == mode
                && xkeysym_lookup::into_keysym(&row.key) == Some(sym)
                && xkeysym_lookup::into_modmask(&row.modifier) == clean
        })
        .map(|row| row.command.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use x11_dl::xlib;

    const SUPER: ModMask = xlib::Mod4Mask;
    const ALT: ModMask = xlib::Mod1Mask;

    fn manager_with_clients(n: u32) -> Manager<crate::display_servers::MockDisplayServer> {
        let mut manager = Manager::new_test();
        for i in 1..=n {
            manager.add_client(1, i);
        }
        manager
    }

    #[test]
    fn operator_count_motion_triple_runs_once() {
        let mut manager = manager_with_clients(3);
        // q 3 c: kill three clients.
        manager.key_press_handler(SUPER, keysym::XK_q);
        assert_eq!(manager.state.press_state, PressState::Count);
        manager.key_press_handler(ALT, keysym::XK_3);
        assert_eq!(manager.state.press_state, PressState::Motion);
        manager.key_press_handler(SUPER, keysym::XK_c);
        assert_eq!(manager.state.press_state, PressState::Operator);
        assert_eq!(manager.state.current_ws().len(), 0);
        assert!(manager.state.current_ws().head().is_none());
    }

    #[test]
    fn a_prefix_alone_invokes_nothing() {
        let mut manager = manager_with_clients(2);
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(ALT, keysym::XK_3);
        assert_eq!(manager.state.current_ws().len(), 2);
        assert_eq!(manager.state.press_state, PressState::Motion);
    }

    #[test]
    fn a_missing_count_defaults_to_one() {
        let mut manager = manager_with_clients(3);
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(SUPER, keysym::XK_c);
        assert_eq!(manager.state.current_ws().len(), 2);
    }

    #[test]
    fn the_count_resets_after_each_triple() {
        let mut manager = manager_with_clients(4);
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(ALT, keysym::XK_2);
        manager.key_press_handler(SUPER, keysym::XK_c);
        assert_eq!(manager.state.current_ws().len(), 2);
        // The next pair must kill one, not two.
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(SUPER, keysym::XK_c);
        assert_eq!(manager.state.current_ws().len(), 1);
        assert_eq!(manager.state.count, 1);
    }

    #[test]
    fn lock_modifiers_do_not_suppress_bindings() {
        let mut manager = manager_with_clients(2);
        manager.key_press_handler(SUPER | xlib::LockMask | xlib::Mod2Mask, keysym::XK_q);
        assert_eq!(manager.state.press_state, PressState::Count);
    }

    #[test]
    fn direct_bindings_fire_in_any_automaton_state() {
        let mut manager = manager_with_clients(1);
        manager.add_client(2, 9);
        manager.key_press_handler(SUPER, keysym::XK_q);
        // Still works while the automaton waits for a count.
        manager.key_press_handler(SUPER, keysym::XK_2);
        assert_eq!(manager.state.cw, 2);
    }

    #[test]
    fn bindings_are_gated_by_the_mode() {
        let mut manager = manager_with_clients(2);
        manager.state.current_ws_mut().current = Some(crate::models::WindowHandle::MockHandle(1));
        // Bare j only means focus-next in Focus mode.
        manager.key_press_handler(0, keysym::XK_j);
        assert_eq!(
            manager.state.current_ws().current,
            Some(crate::models::WindowHandle::MockHandle(1))
        );
        manager.state.mode = Mode::Focus;
        manager.key_press_handler(0, keysym::XK_j);
        assert_eq!(
            manager.state.current_ws().current,
            Some(crate::models::WindowHandle::MockHandle(2))
        );
    }

    #[test]
    fn replay_repeats_the_last_triple() {
        let mut manager = manager_with_clients(4);
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(ALT, keysym::XK_2);
        manager.key_press_handler(SUPER, keysym::XK_c);
        assert_eq!(manager.state.current_ws().len(), 2);
        manager.key_press_handler(SUPER, keysym::XK_period);
        assert_eq!(manager.state.current_ws().len(), 0);
    }

    #[test]
    fn replay_repeats_the_last_direct_command() {
        let mut manager = manager_with_clients(1);
        manager.add_client(2, 8);
        manager.add_client(3, 9);
        manager.key_press_handler(SUPER, keysym::XK_bracketright);
        assert_eq!(manager.state.cw, 2);
        manager.key_press_handler(SUPER, keysym::XK_period);
        assert_eq!(manager.state.cw, 3);
    }

    #[test]
    fn replay_never_records_itself() {
        let mut manager = manager_with_clients(3);
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(SUPER, keysym::XK_c);
        manager.key_press_handler(SUPER, keysym::XK_period);
        // Replaying replay must still mean "kill one".
        manager.key_press_handler(SUPER, keysym::XK_period);
        assert_eq!(manager.state.current_ws().len(), 0);
        assert!(matches!(
            manager.state.replay,
            Some(Replay::Triple { .. })
        ));
    }

    #[test]
    fn an_unknown_key_in_count_state_with_no_motion_changes_nothing() {
        let mut manager = manager_with_clients(2);
        manager.key_press_handler(SUPER, keysym::XK_q);
        manager.key_press_handler(SUPER, keysym::XK_z);
        assert_eq!(manager.state.current_ws().len(), 2);
        assert_eq!(manager.state.press_state, PressState::Count);
    }
}
