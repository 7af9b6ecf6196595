pub mod child_process;
pub mod command_socket;
pub mod xkeysym_lookup;
